use std::sync::OnceLock;

/// Neighbor counts run from 0 to 8 inclusive
const COUNTS: usize = 9;
/// One row of counts for dead cells, one for alive cells
const ENTRIES: usize = COUNTS * 2;
type RuleIndex = [bool; ENTRIES];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_index`] once and storing the result
fn get_rule_index() -> &'static RuleIndex {
    static CELL: OnceLock<RuleIndex> = OnceLock::new();
    CELL.get_or_init(generate_rule_index)
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed by `alive * 9 + neighbors` and holds whether the cell
/// is alive in the next generation.
fn generate_rule_index() -> RuleIndex {
    let mut indices = [false; ENTRIES];
    for (i, entry) in indices.iter_mut().enumerate() {
        let alive = i >= COUNTS;
        let neighbors = i % COUNTS;
        *entry = matches!((alive, neighbors), (true, 2) | (_, 3));
    }
    indices
}

#[inline]
fn lookup(alive: bool, neighbors: usize) -> bool {
    debug_assert!(neighbors < COUNTS, "more than 8 neighbors");
    get_rule_index()[usize::from(alive) * COUNTS + neighbors]
}

/// Whether an alive cell with `neighbors` alive neighbors stays alive
#[inline]
pub(super) fn survives(neighbors: usize) -> bool {
    lookup(true, neighbors)
}

/// Whether a dead cell with `neighbors` alive neighbors is born
#[inline]
pub(super) fn reproduces(neighbors: usize) -> bool {
    lookup(false, neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(survives(2));
        assert!(survives(3));
        assert!(reproduces(3));

        assert!(!survives(0));
        assert!(!survives(1));
        assert!(!reproduces(2));
        for n in 4..=8 {
            assert!(!survives(n));
            assert!(!reproduces(n));
        }
    }

    #[test]
    fn table_has_three_live_entries() {
        let index = generate_rule_index();

        assert_eq!(index.iter().filter(|&&e| e).count(), 3);
    }
}
