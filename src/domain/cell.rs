use std::fmt;

use super::Coordinate;

/// Highest vitality a cell can reach
pub const MAX_VITALITY: u8 = 5;

/// Food at or below this (and at or above `LOW_FOOD`) is the dead zone
const DEAD_ZONE_MAX: u32 = 4;
/// Food below this counts as isolation, which favours growth
const LOW_FOOD: u32 = 2;
/// Food at or above this is overcrowding
const CROWDED_FOOD: u32 = 30;

/// Pure growth rule:
/// 1. A saturated cell never grows
/// 2. Isolation (food < 2) favours growth
/// 3. Moderate crowding (4 < food < 30) favours growth
/// 4. The dead zone [2, 4] and overcrowding (>= 30) cause decay
pub const fn growth_favoured(committed: u8, food: u32) -> bool {
    if committed >= MAX_VITALITY {
        return false;
    }
    food < LOW_FOOD || (food > DEAD_ZONE_MAX && food < CROWDED_FOOD)
}

/// Cell is a single lattice site with double-buffered vitality.
/// `staged` is only meaningful while `pending` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    location: Coordinate,
    committed: u8,
    staged: u8,
    pending: bool,
}

impl Cell {
    /// Create a settled cell; vitality is clamped to `MAX_VITALITY`
    pub fn new(location: Coordinate, vitality: u8) -> Self {
        let vitality = vitality.min(MAX_VITALITY);
        Self {
            location,
            committed: vitality,
            staged: vitality,
            pending: false,
        }
    }

    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Committed vitality, the value everyone else sees
    pub const fn vitality(&self) -> u8 {
        self.committed
    }

    /// Next-tick vitality, if one has been staged
    pub const fn staged(&self) -> Option<u8> {
        if self.pending { Some(self.staged) } else { None }
    }

    pub const fn is_alive(&self) -> bool {
        self.committed > 0
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub const fn can_grow(&self, food: u32) -> bool {
        growth_favoured(self.committed, food)
    }

    /// Stage next vitality one step up or down; committed is left untouched
    pub fn stage(&mut self, grow: bool) {
        self.staged = if grow {
            (self.committed + 1).min(MAX_VITALITY)
        } else {
            self.committed.saturating_sub(1)
        };
        self.pending = true;
    }

    /// Publish the staged value. No-op if nothing was staged.
    pub fn commit(&mut self) {
        if self.pending {
            self.committed = self.staged;
            self.pending = false;
        }
    }

    /// Overwrite committed vitality between ticks (painting)
    pub(crate) fn set_vitality(&mut self, vitality: u8) {
        let vitality = vitality.min(MAX_VITALITY);
        self.committed = vitality;
        self.staged = vitality;
        self.pending = false;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(vitality: u8) -> Cell {
        Cell::new(Coordinate::new(0, 0), vitality)
    }

    #[test]
    fn test_saturated_never_grows() {
        for food in 0..40 {
            assert!(!cell(5).can_grow(food));
        }
    }

    #[test]
    fn test_isolation_grows() {
        assert!(cell(0).can_grow(0));
        assert!(cell(3).can_grow(1));
    }

    #[test]
    fn test_dead_zone_decays() {
        for food in 2..=4 {
            assert!(!cell(1).can_grow(food), "food {food} should not grow");
        }
    }

    #[test]
    fn test_crowding_band() {
        assert!(cell(2).can_grow(5));
        assert!(cell(2).can_grow(29));
        assert!(!cell(2).can_grow(30));
        assert!(!cell(2).can_grow(40));
    }

    #[test]
    fn test_rule_matches_closed_form() {
        for committed in 0..=MAX_VITALITY {
            for food in 0..50u32 {
                let expected = committed < 5 && (food < 2 || (4 < food && food < 30));
                assert_eq!(growth_favoured(committed, food), expected);
            }
        }
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(cell(9).vitality(), MAX_VITALITY);
        assert!(!cell(9).is_pending());
    }

    #[test]
    fn test_stage_does_not_touch_committed() {
        let mut c = cell(2);
        c.stage(true);
        assert_eq!(c.vitality(), 2);
        assert_eq!(c.staged(), Some(3));
        assert!(c.is_pending());
        c.commit();
        assert_eq!(c.vitality(), 3);
        assert_eq!(c.staged(), None);
        assert!(!c.is_pending());
    }

    #[test]
    fn test_stage_clamps_at_bounds() {
        let mut dead = cell(0);
        dead.stage(false);
        dead.commit();
        assert_eq!(dead.vitality(), 0);

        let mut full = cell(5);
        full.stage(true);
        full.commit();
        assert_eq!(full.vitality(), 5);
    }

    #[test]
    fn test_commit_without_stage_keeps_value() {
        let mut c = cell(4);
        c.commit();
        assert_eq!(c.vitality(), 4);
    }

    #[test]
    fn test_display_is_digit() {
        assert_eq!(cell(3).to_string(), "3");
    }
}
