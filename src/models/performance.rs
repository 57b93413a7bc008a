//! Performance record models.
//!
//! `RawPerformance` is the boundary input: an all-string record exactly as a
//! tabular source supplies it. `Performance` is the parsed, immutable record
//! the planner works with — typed date and time, a derived time slot, and a
//! derived main venue. Records are created once during ingestion and never
//! mutated afterward.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Time-of-day bucket for a performance.
///
/// Each festival day has exactly two slots, split at a configurable cutoff
/// (default 20:00): strictly before the cutoff is `Early`, the cutoff and
/// everything after it is `Late`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Before the cutoff.
    Early,
    /// At or after the cutoff.
    Late,
}

impl Slot {
    /// Classifies a time against the cutoff.
    pub fn classify(time: NaiveTime, cutoff: NaiveTime) -> Self {
        if time < cutoff {
            Slot::Early
        } else {
            Slot::Late
        }
    }

    /// Slot name as used in schedule views.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Early => "early",
            Slot::Late => "late",
        }
    }
}

/// An unparsed performance record from a tabular source.
///
/// Field formats follow the festival program export: dates are `DD-MM-YYYY`,
/// times are `HH:MM` (24h). Parsing and derivation happen at ingestion; see
/// [`crate::ingest::build_schedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPerformance {
    /// Unique identifier, used for deduplication.
    pub id: String,
    /// Calendar date, `DD-MM-YYYY`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Main category (e.g., "Music", "Dance", "Theater").
    pub category: String,
    /// Finer-grained category.
    pub sub_category: String,
    /// Performance name.
    pub name: String,
    /// Raw venue string, possibly multi-part ("Main Hall, North Campus").
    pub venue: String,
    /// Free-text description.
    pub description: String,
}

impl RawPerformance {
    /// Creates a record with the given identifier, date, and time.
    pub fn new(id: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    /// Sets the main category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    /// Sets the performance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the raw venue string.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A parsed, immutable performance record.
///
/// The `slot` and `main_venue` fields are derived at ingestion: the slot from
/// the configured cutoff, the main venue as the leading comma-delimited token
/// of the raw venue string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Unique identifier, used for deduplication.
    pub id: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time.
    pub time: NaiveTime,
    /// Early/late classification of `time`.
    pub slot: Slot,
    /// Main category.
    pub category: String,
    /// Finer-grained category.
    pub sub_category: String,
    /// Performance name.
    pub name: String,
    /// Raw venue string.
    pub venue: String,
    /// Leading location token of `venue`.
    pub main_venue: String,
    /// Free-text description.
    pub description: String,
}

impl Performance {
    /// Creates a record with empty descriptive fields.
    pub fn new(id: impl Into<String>, date: NaiveDate, time: NaiveTime, slot: Slot) -> Self {
        Self {
            id: id.into(),
            date,
            time,
            slot,
            category: String::new(),
            sub_category: String::new(),
            name: String::new(),
            venue: String::new(),
            main_venue: String::new(),
            description: String::new(),
        }
    }

    /// Sets the main category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    /// Sets the performance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the venue string and re-derives the main venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self.main_venue = main_venue_of(&self.venue);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Derives the main venue: the substring before the first comma, trimmed.
pub fn main_venue_of(venue: &str) -> String {
    venue.split(',').next().unwrap_or("").trim().to_string()
}
