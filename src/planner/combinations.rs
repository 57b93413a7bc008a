//! Daily attendance combinations.
//!
//! A combination is everything you could do on one festival day: skip it,
//! attend one performance in one slot, or attend one in each slot when both
//! are at the same main venue. Attending two performances in the same slot,
//! or an early/late pair across venues, is not an option.

use crate::models::{DaySchedule, Performance};

/// An ordered selection of 0, 1, or 2 performances from one day.
///
/// Invariants: at most one performance per slot; a pair shares its main
/// venue. Constructed only by [`combinations_for_day`].
#[derive(Debug, Clone, Default)]
pub struct Combination<'a> {
    performances: Vec<&'a Performance>,
}

impl<'a> Combination<'a> {
    fn empty() -> Self {
        Self::default()
    }

    fn single(performance: &'a Performance) -> Self {
        Self {
            performances: vec![performance],
        }
    }

    fn pair(early: &'a Performance, late: &'a Performance) -> Self {
        Self {
            performances: vec![early, late],
        }
    }

    /// The selected performances, early slot first.
    pub fn performances(&self) -> &[&'a Performance] {
        &self.performances
    }

    /// Number of performances in the combination.
    pub fn len(&self) -> usize {
        self.performances.len()
    }

    /// Whether this is the skip-the-day option.
    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }
}

/// Enumerates every legal attendance option for one day.
///
/// Order: the empty combination first, then early singletons, late
/// singletons, and finally venue-matching (early, late) pairs. Yields at
/// most `1 + E + L + M` combinations where `M <= E * L` is the count of
/// venue-matching pairs.
pub fn combinations_for_day(day: &DaySchedule) -> Vec<Combination<'_>> {
    let mut combinations =
        Vec::with_capacity(1 + day.early.len() + day.late.len() + day.early.len() * day.late.len());

    // Skip the day.
    combinations.push(Combination::empty());

    for performance in &day.early {
        combinations.push(Combination::single(performance));
    }

    for performance in &day.late {
        combinations.push(Combination::single(performance));
    }

    // Both slots, venue-locked.
    for early in &day.early {
        for late in &day.late {
            if early.main_venue == late.main_venue {
                combinations.push(Combination::pair(early, late));
            }
        }
    }

    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FestivalSchedule, Slot};
    use chrono::{NaiveDate, NaiveTime};

    fn perf(id: &str, hour: u32, slot: Slot, venue: &str) -> Performance {
        Performance::new(
            id,
            NaiveDate::from_ymd_opt(2025, 11, 14).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            slot,
        )
        .with_venue(venue)
    }

    fn day_of(performances: Vec<Performance>) -> DaySchedule {
        let mut schedule = FestivalSchedule::new();
        for p in performances {
            schedule.add(p);
        }
        schedule
            .day(&NaiveDate::from_ymd_opt(2025, 11, 14).unwrap())
            .cloned()
            .unwrap_or_default()
    }

    fn ids<'a>(combo: &'a Combination<'a>) -> Vec<&'a str> {
        combo.performances().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_day() {
        let empty_day = DaySchedule::new();
        let combos = combinations_for_day(&empty_day);
        assert_eq!(combos.len(), 1);
        assert!(combos[0].is_empty());
    }

    #[test]
    fn test_empty_combination_first() {
        let day = day_of(vec![perf("E1", 18, Slot::Early, "X")]);
        let combos = combinations_for_day(&day);
        assert!(combos[0].is_empty());
    }

    #[test]
    fn test_singletons_per_slot() {
        let day = day_of(vec![
            perf("E1", 18, Slot::Early, "X"),
            perf("E2", 19, Slot::Early, "Y"),
            perf("L1", 21, Slot::Late, "Z"),
        ]);
        let combos = combinations_for_day(&day);

        // 1 empty + 2 early + 1 late, no venue-matching pairs
        assert_eq!(combos.len(), 4);
        let singles: Vec<Vec<&str>> = combos[1..].iter().map(ids).collect();
        assert_eq!(singles, vec![vec!["E1"], vec!["E2"], vec!["L1"]]);
    }

    #[test]
    fn test_pair_requires_same_main_venue() {
        let day = day_of(vec![
            perf("E1", 18, Slot::Early, "ATIRA, Amphitheatre"),
            perf("L1", 21, Slot::Late, "ATIRA, Main Hall"),
            perf("L2", 21, Slot::Late, "Shreyas Foundation"),
        ]);
        let combos = combinations_for_day(&day);

        let pairs: Vec<Vec<&str>> = combos
            .iter()
            .filter(|c| c.len() == 2)
            .map(ids)
            .collect();
        // E1+L1 share main venue "ATIRA"; E1+L2 does not pair
        assert_eq!(pairs, vec![vec!["E1", "L1"]]);
    }

    #[test]
    fn test_no_same_slot_pairs() {
        let day = day_of(vec![
            perf("E1", 18, Slot::Early, "X"),
            perf("E2", 19, Slot::Early, "X"),
        ]);
        let combos = combinations_for_day(&day);
        assert!(combos.iter().all(|c| c.len() <= 1));
    }

    #[test]
    fn test_full_enumeration_count() {
        // E=2, L=2, all at one venue: 1 + 2 + 2 + 4
        let day = day_of(vec![
            perf("E1", 18, Slot::Early, "X"),
            perf("E2", 19, Slot::Early, "X"),
            perf("L1", 20, Slot::Late, "X"),
            perf("L2", 21, Slot::Late, "X"),
        ]);
        let combos = combinations_for_day(&day);
        assert_eq!(combos.len(), 9);
    }

    #[test]
    fn test_pair_order_early_first() {
        let day = day_of(vec![
            perf("L1", 21, Slot::Late, "X"),
            perf("E1", 18, Slot::Early, "X"),
        ]);
        let combos = combinations_for_day(&day);
        let pair = combos.iter().find(|c| c.len() == 2).unwrap();
        assert_eq!(ids(pair), vec!["E1", "L1"]);
    }
}
