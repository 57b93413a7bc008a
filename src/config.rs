//! Planner configuration.
//!
//! Scoring weights and the slot cutoff are pure, injectable constants.
//! The defaults bias the optimizer toward full category coverage: a new
//! category is worth ten performances, so discovery always dominates volume.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Default points awarded per attended performance.
pub const POINTS_PER_PERFORMANCE: i64 = 1;

/// Default bonus awarded per newly covered category.
pub const NEW_CATEGORY_BONUS: i64 = 10;

/// Default early/late cutoff hour (24h clock).
pub const SLOT_CUTOFF_HOUR: u32 = 20;

/// Tunable constants for scoring and slot classification.
///
/// # Example
/// ```
/// use festival_planner::config::PlannerConfig;
/// use chrono::NaiveTime;
///
/// let config = PlannerConfig::new()
///     .with_new_category_bonus(25)
///     .with_slot_cutoff(NaiveTime::from_hms_opt(19, 30, 0).unwrap());
/// assert_eq!(config.points_per_performance, 1);
/// assert_eq!(config.new_category_bonus, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Points per attended performance.
    pub points_per_performance: i64,
    /// Bonus per category not seen before.
    pub new_category_bonus: i64,
    /// Times strictly before this are "early"; the cutoff itself is "late".
    pub slot_cutoff: NaiveTime,
}

impl PlannerConfig {
    /// Creates a configuration with the default weights and cutoff.
    pub fn new() -> Self {
        Self {
            points_per_performance: POINTS_PER_PERFORMANCE,
            new_category_bonus: NEW_CATEGORY_BONUS,
            slot_cutoff: default_cutoff(),
        }
    }

    /// Sets the per-performance score.
    pub fn with_points_per_performance(mut self, points: i64) -> Self {
        self.points_per_performance = points;
        self
    }

    /// Sets the new-category bonus.
    pub fn with_new_category_bonus(mut self, bonus: i64) -> Self {
        self.new_category_bonus = bonus;
        self
    }

    /// Sets the early/late slot cutoff.
    pub fn with_slot_cutoff(mut self, cutoff: NaiveTime) -> Self {
        self.slot_cutoff = cutoff;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_cutoff() -> NaiveTime {
    // 20:00 is always representable.
    NaiveTime::from_hms_opt(SLOT_CUTOFF_HOUR, 0, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.points_per_performance, 1);
        assert_eq!(config.new_category_bonus, 10);
        assert_eq!(config.slot_cutoff, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }

    #[test]
    fn test_builder() {
        let cutoff = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        let config = PlannerConfig::new()
            .with_points_per_performance(2)
            .with_new_category_bonus(50)
            .with_slot_cutoff(cutoff);

        assert_eq!(config.points_per_performance, 2);
        assert_eq!(config.new_category_bonus, 50);
        assert_eq!(config.slot_cutoff, cutoff);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = PlannerConfig::new().with_new_category_bonus(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
