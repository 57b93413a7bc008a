//! Performance ingestion and schedule indexing.
//!
//! Parses raw tabular records into [`Performance`]s and groups them into a
//! date-ordered, slot-bucketed [`FestivalSchedule`]:
//!
//! 1. Parse date (`DD-MM-YYYY`) and time (`HH:MM`).
//! 2. Classify the time slot against the configured cutoff.
//! 3. Derive the main venue (leading comma-delimited token).
//! 4. Group by date, then slot, preserving chronological order.
//!
//! Malformed records fail fast with an [`IngestError`] naming the offending
//! record; the optimizer never sees malformed data.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{main_venue_of, FestivalSchedule, Performance, RawPerformance, Slot};

/// Date format of raw records.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Time format of raw records.
pub const TIME_FORMAT: &str = "%H:%M";

/// Ingestion failure, identifying the offending record.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The date field did not parse.
    #[error("record '{id}': invalid date '{value}': {source}")]
    InvalidDate {
        id: String,
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// The time field did not parse.
    #[error("record '{id}': invalid time '{value}': {source}")]
    InvalidTime {
        id: String,
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// A required field was blank.
    #[error("record '{id}': missing required field '{field}'")]
    MissingField { id: String, field: &'static str },
}

/// Parses one raw record into a [`Performance`].
///
/// The slot is classified against `cutoff`; the main venue is derived from
/// the raw venue string.
pub fn parse_record(raw: &RawPerformance, cutoff: NaiveTime) -> Result<Performance, IngestError> {
    if raw.id.trim().is_empty() {
        return Err(IngestError::MissingField {
            id: raw.name.clone(),
            field: "id",
        });
    }

    let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|source| {
        IngestError::InvalidDate {
            id: raw.id.clone(),
            value: raw.date.clone(),
            source,
        }
    })?;

    let time = NaiveTime::parse_from_str(&raw.time, TIME_FORMAT).map_err(|source| {
        IngestError::InvalidTime {
            id: raw.id.clone(),
            value: raw.time.clone(),
            source,
        }
    })?;

    Ok(Performance {
        id: raw.id.clone(),
        date,
        time,
        slot: Slot::classify(time, cutoff),
        category: raw.category.clone(),
        sub_category: raw.sub_category.clone(),
        name: raw.name.clone(),
        venue: raw.venue.clone(),
        main_venue: main_venue_of(&raw.venue),
        description: raw.description.clone(),
    })
}

/// Builds the slot-grouped schedule from raw records.
///
/// Fails fast on the first malformed record. Records are sorted by
/// (date, time) before grouping, so each bucket ends up chronological and
/// dates iterate ascending.
pub fn build_schedule(
    records: &[RawPerformance],
    config: &PlannerConfig,
) -> Result<FestivalSchedule, IngestError> {
    let mut parsed = Vec::with_capacity(records.len());
    for raw in records {
        parsed.push(parse_record(raw, config.slot_cutoff)?);
    }

    parsed.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));

    let mut schedule = FestivalSchedule::new();
    for performance in parsed {
        schedule.add(performance);
    }

    debug!(
        records = records.len(),
        days = schedule.day_count(),
        "indexed festival program"
    );

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, date: &str, time: &str) -> RawPerformance {
        RawPerformance::new(id, date, time)
            .with_category("Music")
            .with_name(format!("Show {id}"))
            .with_venue("ATIRA, Amphitheatre")
    }

    #[test]
    fn test_parse_record() {
        let cutoff = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let perf = parse_record(&raw("E1", "14-11-2025", "18:30"), cutoff).unwrap();

        assert_eq!(perf.id, "E1");
        assert_eq!(perf.date, NaiveDate::from_ymd_opt(2025, 11, 14).unwrap());
        assert_eq!(perf.time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
        assert_eq!(perf.slot, Slot::Early);
        assert_eq!(perf.main_venue, "ATIRA");
    }

    #[test]
    fn test_cutoff_boundary() {
        let cutoff = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let early = parse_record(&raw("E1", "14-11-2025", "19:59"), cutoff).unwrap();
        let late = parse_record(&raw("E2", "14-11-2025", "20:00"), cutoff).unwrap();

        assert_eq!(early.slot, Slot::Early);
        assert_eq!(late.slot, Slot::Late);
    }

    #[test]
    fn test_invalid_date_names_record() {
        let cutoff = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let err = parse_record(&raw("E7", "2025-11-14", "18:30"), cutoff).unwrap_err();

        assert!(matches!(err, IngestError::InvalidDate { ref id, .. } if id == "E7"));
        assert!(err.to_string().contains("E7"));
    }

    #[test]
    fn test_invalid_time_names_record() {
        let cutoff = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let err = parse_record(&raw("E8", "14-11-2025", "8pm"), cutoff).unwrap_err();

        assert!(matches!(err, IngestError::InvalidTime { ref id, .. } if id == "E8"));
    }

    #[test]
    fn test_missing_id() {
        let cutoff = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let err = parse_record(&raw("  ", "14-11-2025", "18:30"), cutoff).unwrap_err();
        assert!(matches!(err, IngestError::MissingField { field: "id", .. }));
    }

    #[test]
    fn test_build_schedule_groups_and_sorts() {
        // Deliberately out of order
        let records = vec![
            raw("E3", "15-11-2025", "21:00"),
            raw("E2", "14-11-2025", "20:30"),
            raw("E1", "14-11-2025", "18:00"),
            raw("E4", "14-11-2025", "19:00"),
        ];
        let schedule = build_schedule(&records, &PlannerConfig::default()).unwrap();

        assert_eq!(schedule.day_count(), 2);
        assert_eq!(schedule.performance_count(), 4);

        let day1 = schedule
            .day(&NaiveDate::from_ymd_opt(2025, 11, 14).unwrap())
            .unwrap();
        // Early bucket chronological: E1 (18:00) before E4 (19:00)
        let early_ids: Vec<&str> = day1.early.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(early_ids, vec!["E1", "E4"]);
        assert_eq!(day1.late[0].id, "E2");

        let dates = schedule.dates();
        assert!(dates[0] < dates[1]);
    }

    #[test]
    fn test_build_schedule_fails_fast() {
        let records = vec![raw("E1", "14-11-2025", "18:00"), raw("E2", "bad", "18:00")];
        assert!(build_schedule(&records, &PlannerConfig::default()).is_err());
    }

    #[test]
    fn test_empty_input() {
        let schedule = build_schedule(&[], &PlannerConfig::default()).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_custom_cutoff() {
        let config = PlannerConfig::default()
            .with_slot_cutoff(NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        let schedule = build_schedule(&[raw("E1", "14-11-2025", "19:30")], &config).unwrap();

        let day = schedule
            .day(&NaiveDate::from_ymd_opt(2025, 11, 14).unwrap())
            .unwrap();
        assert!(day.early.is_empty());
        assert_eq!(day.late[0].id, "E1");
    }
}
