//! Input validation for festival programs.
//!
//! Checks structural integrity of raw records before indexing. Detects:
//! - Duplicate identifiers (the optimizer's uniqueness guarantee presumes
//!   unique IDs; repeated instances of the same show are deduplicated by the
//!   search itself, but duplicated rows usually indicate a bad export)
//! - Blank required fields
//! - Malformed dates and times
//!
//! Unlike ingestion, which fails fast on the first malformed record,
//! validation collects every problem so a data source can be fixed in one
//! round trip.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use crate::ingest::{DATE_FORMAT, TIME_FORMAT};
use crate::models::RawPerformance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same identifier.
    DuplicateId,
    /// A required field is blank.
    MissingField,
    /// The date field does not parse.
    MalformedDate,
    /// The time field does not parse.
    MalformedTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw performance records.
///
/// Checks:
/// 1. No duplicate identifiers
/// 2. All required fields present (id, name, category, venue, date, time)
/// 3. Dates parse as `DD-MM-YYYY`
/// 4. Times parse as `HH:MM`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[RawPerformance]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let label = if record.id.trim().is_empty() {
            format!("record #{index}")
        } else {
            format!("record '{}'", record.id)
        };

        if !record.id.trim().is_empty() && !seen_ids.insert(record.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate performance ID: {}", record.id),
            ));
        }

        for (field, value) in [
            ("id", &record.id),
            ("name", &record.name),
            ("category", &record.category),
            ("venue", &record.venue),
            ("date", &record.date),
            ("time", &record.time),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!("{label} has blank field '{field}'"),
                ));
            }
        }

        if !record.date.trim().is_empty()
            && NaiveDate::parse_from_str(&record.date, DATE_FORMAT).is_err()
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedDate,
                format!("{label} has malformed date '{}'", record.date),
            ));
        }

        if !record.time.trim().is_empty()
            && NaiveTime::parse_from_str(&record.time, TIME_FORMAT).is_err()
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!("{label} has malformed time '{}'", record.time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> RawPerformance {
        RawPerformance::new(id, "14-11-2025", "18:30")
            .with_category("Music")
            .with_name("Evening Raga")
            .with_venue("ATIRA")
    }

    #[test]
    fn test_valid_records() {
        let records = vec![sample_record("E1"), sample_record("E2")];
        assert!(validate_records(&records).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let records = vec![sample_record("E1"), sample_record("E1")];
        let errors = validate_records(&records).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_blank_fields() {
        let mut record = sample_record("E1");
        record.category = String::new();
        record.venue = "  ".into();

        let errors = validate_records(&[record]).unwrap_err();
        let missing: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::MissingField)
            .collect();
        assert_eq!(missing.len(), 2);
        assert!(missing[0].message.contains("E1"));
    }

    #[test]
    fn test_malformed_date() {
        let mut record = sample_record("E1");
        record.date = "2025/11/14".into();

        let errors = validate_records(&[record]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedDate));
    }

    #[test]
    fn test_malformed_time() {
        let mut record = sample_record("E1");
        record.time = "6:30 PM".into();

        let errors = validate_records(&[record]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedTime));
    }

    #[test]
    fn test_blank_id_labeled_by_index() {
        let mut record = sample_record("");
        record.id = String::new();

        let errors = validate_records(&[record]).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("record #0")));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut bad = sample_record("E2");
        bad.date = "garbage".into();
        let records = vec![sample_record("E1"), sample_record("E1"), bad];

        let errors = validate_records(&records).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_records(&[]).is_ok());
    }
}
