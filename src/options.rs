use cgolpaint::{Cell, Error, Result};

const USAGE: &str = "usage: cgolpaint [options]";

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("t", "threads", "compute generations on the rayon thread pool");
        opts.optopt("i", "input", "seed the grid from a .rle or .cells file", "FILE");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("f", "fill", "set fill type (empty, random, alternating, all)", "TYPE");
        opts.optopt("", "fps", "generations per second while running", "COUNT");
        opts.optopt(
            "g",
            "gens",
            "run headless for this many generations and print the grid",
            "COUNT",
        );
        opts
    }

    /// Parses the arguments, `Ok(None)` meaning help was printed
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .map_err(|e| Error::Usage(format!("{e}\n{}", opts.usage(USAGE))))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage(USAGE));
            return Ok(None);
        }

        let args = Self { matches };
        // surface malformed values before anything starts
        args.width()?;
        args.height()?;
        args.fps()?;
        args.generations()?;
        args.fill_mode()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn number<N: std::str::FromStr>(&self, name: &str) -> Result<Option<N>>
    where
        N::Err: std::fmt::Display,
    {
        self.matches
            .opt_get(name)
            .map_err(|e| Error::Usage(format!("invalid --{name}: {e}")))
    }

    fn width(&self) -> Result<Option<i32>> {
        self.number("width")
    }
    fn height(&self) -> Result<Option<i32>> {
        self.number("height")
    }

    pub fn threads(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn fps(&self) -> Result<u32> {
        Ok(self.number("fps")?.unwrap_or(120))
    }
    /// Number of generations to run without the terminal UI
    pub fn generations(&self) -> Result<Option<usize>> {
        self.number("gens")
    }

    /// Grid bounds given on the command line, per axis
    pub fn requested_bounds(&self) -> Result<(Option<i32>, Option<i32>)> {
        Ok((self.width()?, self.height()?))
    }
    /// Grid bounds from the command line, falling back to `default`
    pub fn grid_size(&self, default: (i32, i32)) -> Result<(i32, i32)> {
        let (w, h) = self.requested_bounds()?;
        Ok((w.unwrap_or(default.0), h.unwrap_or(default.1)))
    }
    pub fn fill_mode(&self) -> Result<FillMode> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("empty");
        FillMode::new(mode_str).ok_or_else(|| Error::Usage(format!("unknown fill mode {mode_str:?}")))
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
}

pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Cell, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.row + cell.col) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }
    /// Alive cells covering a `w` by `h` area from the origin
    pub fn create_alive(self, w: i32, h: i32) -> Vec<Cell> {
        if let Self::Empty = self {
            return Vec::new();
        }

        let mut rng = rand::rng();
        let mut alive = Vec::new();
        for row in 0..h {
            for col in 0..w {
                let cell = Cell { row, col };
                if self.fill_cell(cell, &mut rng) {
                    alive.push(cell);
                }
            }
        }
        alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::new(args).expect("valid args").expect("not help")
    }

    fn cell(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    #[test]
    fn fill_mode_parses() {
        let args = parse(&["--fill", "alternating"]);

        assert!(matches!(args.fill_mode(), Ok(FillMode::Alternating)));
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);

        assert!(matches!(args.fill_mode(), Ok(FillMode::Empty)));
        assert_eq!(args.fps().unwrap(), 120);
        assert_eq!(args.generations().unwrap(), None);
        assert_eq!(args.grid_size((20, 20)).unwrap(), (20, 20));
        assert!(!args.threads());
    }

    #[test]
    fn grid_size_overrides_default() {
        let args = parse(&["-w", "40", "--height", "10", "--gens", "5"]);

        assert_eq!(args.grid_size((20, 20)).unwrap(), (40, 10));
        assert_eq!(args.generations().unwrap(), Some(5));
    }

    #[test]
    fn requested_bounds_keep_missing_axes_open() {
        assert_eq!(parse(&[]).requested_bounds().unwrap(), (None, None));
        assert_eq!(parse(&["-w", "30"]).requested_bounds().unwrap(), (Some(30), None));
        assert_eq!(
            parse(&["--width", "30", "-h", "12"]).requested_bounds().unwrap(),
            (Some(30), Some(12))
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(Args::new(&["--fps", "fast"]), Err(Error::Usage(_))));
        assert!(matches!(Args::new(&["--fill", "checkered"]), Err(Error::Usage(_))));
        assert!(matches!(Args::new(&["--bogus"]), Err(Error::Usage(_))));
    }

    #[test]
    fn help_yields_none() {
        assert!(matches!(Args::new(&["--help"]), Ok(None)));
    }

    #[test]
    fn create_alive_all_fills_grid() {
        let alive = FillMode::All.create_alive(3, 2);

        let expected = vec![
            cell(0, 0),
            cell(0, 1),
            cell(0, 2),
            cell(1, 0),
            cell(1, 1),
            cell(1, 2),
        ];
        assert_eq!(alive, expected);
    }

    #[test]
    fn create_alive_empty_is_empty() {
        let alive = FillMode::Empty.create_alive(5, 4);

        assert!(alive.is_empty());
    }

    #[test]
    fn create_alive_alternating_uses_parity() {
        let alive = FillMode::Alternating.create_alive(3, 3);

        let expected = vec![cell(0, 0), cell(0, 2), cell(1, 1), cell(2, 0), cell(2, 2)];
        assert_eq!(alive, expected);
    }

    #[test]
    fn create_alive_random_is_within_bounds() {
        let w = 4;
        let h = 3;
        let alive = FillMode::Random.create_alive(w, h);

        assert!(alive
            .iter()
            .all(|c| c.row >= 0 && c.col >= 0 && c.row < h && c.col < w));
    }
}
