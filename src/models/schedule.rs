//! Slot-grouped festival program.
//!
//! A `FestivalSchedule` maps each festival date to its two slot buckets.
//! Invariants:
//! - every record appears in exactly one (date, slot) bucket;
//! - within a bucket, records keep their chronological order;
//! - dates iterate in ascending order (the optimizer indexes days by
//!   increasing position).
//!
//! Built once by [`crate::ingest::build_schedule`], read-only afterward.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Performance, Slot};

/// The two slot buckets of a single festival day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Performances before the cutoff, chronological.
    pub early: Vec<Performance>,
    /// Performances at or after the cutoff, chronological.
    pub late: Vec<Performance>,
}

impl DaySchedule {
    /// Creates an empty day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for a slot.
    pub fn slot(&self, slot: Slot) -> &[Performance] {
        match slot {
            Slot::Early => &self.early,
            Slot::Late => &self.late,
        }
    }

    /// Total performances on this day.
    pub fn performance_count(&self) -> usize {
        self.early.len() + self.late.len()
    }

    /// Whether the day has no performances.
    pub fn is_empty(&self) -> bool {
        self.early.is_empty() && self.late.is_empty()
    }

    /// Iterates over both buckets, early first.
    pub fn iter(&self) -> impl Iterator<Item = &Performance> {
        self.early.iter().chain(self.late.iter())
    }
}

/// A date-ordered, slot-bucketed festival program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalSchedule {
    days: BTreeMap<NaiveDate, DaySchedule>,
}

impl FestivalSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its (date, slot) bucket.
    ///
    /// Callers must add records in chronological order to preserve the
    /// within-bucket ordering invariant; ingestion sorts before adding.
    pub fn add(&mut self, performance: Performance) {
        let day = self.days.entry(performance.date).or_default();
        match performance.slot {
            Slot::Early => day.early.push(performance),
            Slot::Late => day.late.push(performance),
        }
    }

    /// Iterates days in ascending date order.
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &DaySchedule)> {
        self.days.iter()
    }

    /// All festival dates, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    /// Returns the day for a date, if any performances exist on it.
    pub fn day(&self, date: &NaiveDate) -> Option<&DaySchedule> {
        self.days.get(date)
    }

    /// Number of festival days with at least one performance.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total performances across all days.
    pub fn performance_count(&self) -> usize {
        self.days.values().map(DaySchedule::performance_count).sum()
    }

    /// Whether the program has no performances at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
