use crate::domain::locale::Locale;
use std::fmt;

/// A container with a fixed capacity and a current fill level, both in millilitres.
///
/// Fields are private: callers see what a bottle can do, never how it keeps its level in range.
/// After every `fill` or `empty` the level sits inside `[0, capacity]`. Out-of-range results are
/// clamped, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bottle {
    capacity: f64,
    current_level: f64,
}

impl Bottle {
    /// An empty bottle of the given capacity. Negative capacities are stored as given.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            current_level: 0.0,
        }
    }

    /// A bottle holding `current_level` ml. The level is not clamped until the next mutation.
    pub fn with_level(capacity: f64, current_level: f64) -> Self {
        Self {
            capacity,
            current_level,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn current_level(&self) -> f64 {
        self.current_level
    }

    /// Pours `amount` ml in. A negative amount drains the bottle instead.
    pub fn fill(&mut self, amount: f64) {
        self.current_level += amount;

        self.check_level();
    }

    /// Pours `amount` ml out.
    pub fn empty(&mut self, amount: f64) {
        self.current_level -= amount;

        self.check_level();
    }

    pub fn describe(&self) -> String {
        self.describe_in(Locale::English)
    }

    pub fn describe_in(&self, locale: Locale) -> String {
        locale.render(self.current_level, self.capacity)
    }

    // Lower bound is checked first: with a negative capacity, results below 0 become 0 and
    // everything else is pinned to the capacity.
    // Not f64::clamp: that panics when min > max.
    fn check_level(&mut self) {
        if self.current_level < 0.0 {
            self.current_level = 0.0;
        } else if self.current_level > self.capacity {
            self.current_level = self.capacity;
        }
    }
}

impl fmt::Display for Bottle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_only_starts_empty() {
        let bottle = Bottle::new(1000.0);
        assert_eq!(bottle.capacity(), 1000.0);
        assert_eq!(bottle.current_level(), 0.0);
    }

    #[test]
    fn test_with_level_is_not_clamped_at_construction() {
        let bottle = Bottle::with_level(100.0, 250.0);
        assert_eq!(bottle.capacity(), 100.0);
        assert_eq!(bottle.current_level(), 250.0);

        let bottle = Bottle::with_level(100.0, -5.0);
        assert_eq!(bottle.current_level(), -5.0);
    }

    #[test]
    fn test_default_is_zero_zero() {
        let bottle = Bottle::default();
        assert_eq!(bottle.capacity(), 0.0);
        assert_eq!(bottle.current_level(), 0.0);
    }

    #[test]
    fn test_fill_clamps_to_capacity() {
        let mut bottle = Bottle::new(1000.0);
        bottle.fill(500.0);
        assert_eq!(bottle.current_level(), 500.0);

        bottle.fill(700.0);
        assert_eq!(bottle.current_level(), 1000.0);
    }

    #[test]
    fn test_empty_clamps_to_zero() {
        let mut bottle = Bottle::with_level(1000.0, 300.0);
        bottle.empty(500.0);
        assert_eq!(bottle.current_level(), 0.0);
    }

    #[test]
    fn test_negative_amounts_reverse_direction() {
        let mut bottle = Bottle::with_level(1000.0, 300.0);
        bottle.fill(-100.0);
        assert_eq!(bottle.current_level(), 200.0);

        bottle.empty(-50.0);
        assert_eq!(bottle.current_level(), 250.0);
    }

    #[test]
    fn test_next_mutation_repairs_overfull_construction() {
        let mut bottle = Bottle::with_level(100.0, 250.0);
        bottle.fill(0.0);
        assert_eq!(bottle.current_level(), 100.0);
    }

    #[test]
    fn test_negative_capacity_splits_on_sign_of_result() {
        let mut bottle = Bottle::new(-5.0);
        bottle.fill(10.0);
        assert_eq!(bottle.current_level(), -5.0);

        bottle.empty(3.0);
        assert_eq!(bottle.current_level(), 0.0);

        bottle.fill(0.0);
        assert_eq!(bottle.current_level(), -5.0);

        bottle.fill(-1.0);
        assert_eq!(bottle.current_level(), 0.0);
    }

    #[test]
    fn test_describe_default_bottle() {
        let bottle = Bottle::default();
        assert_eq!(
            bottle.describe(),
            "The bottle is filled with 0.0 ml of 0.0 ml."
        );
        assert_eq!(bottle.to_string(), bottle.describe());
    }

    #[test]
    fn test_describe_has_no_side_effect() {
        let bottle = Bottle::with_level(750.0, 12.5);
        let before = bottle;
        assert_eq!(
            bottle.describe(),
            "The bottle is filled with 12.5 ml of 750.0 ml."
        );
        assert_eq!(bottle, before);
    }
}
