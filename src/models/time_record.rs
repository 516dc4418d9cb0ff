//! Timesheet models and normalization log types.
//!
//! This module defines the raw [`TimeRecord`] rows consumed by the time
//! normalizer, the [`NormalizedShift`] rows it produces, the posted
//! [`ScheduleEntry`] used for reconciliation, and the change/alert log
//! entries emitted along the way.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw timesheet row as exported from the clock system.
///
/// Identity fields may be null on continuation rows and are forward-filled
/// from the last known identity in file order. Date/time fields are carried
/// as raw strings; rows whose fields cannot be parsed are dropped from the
/// working set without raising.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// Employee number, if present on this row.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Employee first name, if present on this row.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Employee last name, if present on this row.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Department the timesheet file belongs to.
    pub department: String,
    /// Raw start date (e.g. "2025-08-04" or "04/08/2025").
    #[serde(default)]
    pub start_date: Option<String>,
    /// Raw start time (e.g. "22:03").
    #[serde(default)]
    pub start_time: Option<String>,
    /// Raw end date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Raw end time.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Job code for the row (e.g. "Vacation - paid").
    #[serde(default)]
    pub job: Option<String>,
}

impl TimeRecord {
    /// Returns true if every date/time field is empty.
    ///
    /// Rows with all-empty date/time fields are discarded before
    /// normalization.
    pub fn is_blank(&self) -> bool {
        fn empty(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        empty(&self.start_date)
            && empty(&self.start_time)
            && empty(&self.end_date)
            && empty(&self.end_time)
    }
}

/// A timesheet row after normalization.
///
/// Start and end are rounded to the fixed grid, midnight-spanning pairs have
/// been merged, and working hours reflect any business-hour, schedule, and
/// lunch adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedShift {
    /// Employee number.
    pub employee_id: String,
    /// Employee first name.
    pub first_name: String,
    /// Employee last name.
    pub last_name: String,
    /// Department the shift belongs to.
    pub department: String,
    /// Adjusted start of the shift.
    pub start: NaiveDateTime,
    /// Adjusted end of the shift.
    pub end: NaiveDateTime,
    /// Working hours after all adjustments. Never negative.
    pub working_hours: Decimal,
}

impl NormalizedShift {
    /// The date the shift is attributed to (the adjusted start date).
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Full name in "First Last" form, used for schedule matching.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Hours spanned by the adjusted start/end pair.
    ///
    /// This is the raw span; [`NormalizedShift::working_hours`] may be lower
    /// once lunch time has been deducted.
    pub fn span_hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// A posted schedule entry, matched to shifts by (date, full name).
///
/// Used only to validate and adjust normalized shift start times within a
/// bounded tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Employee full name as posted ("First Last").
    pub full_name: String,
    /// The scheduled date.
    pub date: NaiveDate,
    /// Scheduled start.
    pub start: NaiveDateTime,
    /// Scheduled end, when posted.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    /// Availability status as posted (e.g. "Available", "Unavailable").
    #[serde(default)]
    pub availability_status: String,
}

impl ScheduleEntry {
    /// Entries marked unavailable are skipped during reconciliation.
    pub fn is_unavailable(&self) -> bool {
        self.availability_status.eq_ignore_ascii_case("unavailable")
    }
}

/// A logged change to a shift's times or hours.
///
/// Covers both business-hour overrides and lunch deductions; the reason
/// string distinguishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAdjustment {
    /// Employee number.
    pub employee_id: String,
    /// Employee full name.
    pub full_name: String,
    /// Start before the change, when the change touched times.
    #[serde(default)]
    pub original_start: Option<NaiveDateTime>,
    /// Start after the change.
    #[serde(default)]
    pub new_start: Option<NaiveDateTime>,
    /// End before the change.
    #[serde(default)]
    pub original_end: Option<NaiveDateTime>,
    /// End after the change.
    #[serde(default)]
    pub new_end: Option<NaiveDateTime>,
    /// Working hours before the change, when the change touched hours.
    #[serde(default)]
    pub original_hours: Option<Decimal>,
    /// Working hours after the change.
    #[serde(default)]
    pub new_hours: Option<Decimal>,
    /// Why the shift was adjusted.
    pub reason: String,
}

/// A logged start-time correction from the posted schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleChange {
    /// Employee number.
    pub employee_id: String,
    /// Employee full name.
    pub full_name: String,
    /// Adjusted start before the correction.
    pub original_start: NaiveDateTime,
    /// Scheduled start the shift was snapped to.
    pub new_start: NaiveDateTime,
    /// Signed difference in hours between schedule and timesheet.
    pub difference_hours: Decimal,
    /// Why the start was corrected.
    pub reason: String,
}

/// An alert for a schedule/timesheet discrepancy too large to auto-correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAlert {
    /// Employee number.
    pub employee_id: String,
    /// Employee full name.
    pub full_name: String,
    /// Start recorded on the timesheet.
    pub timesheet_start: NaiveDateTime,
    /// Start posted on the schedule.
    pub schedule_start: NaiveDateTime,
    /// Signed difference in hours between schedule and timesheet.
    pub difference_hours: Decimal,
    /// Why the discrepancy was flagged.
    pub reason: String,
}

/// A consolidated run of paid vacation days for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationEntry {
    /// Employee number.
    pub employee_id: String,
    /// Employee first name.
    pub first_name: String,
    /// Employee last name.
    pub last_name: String,
    /// Department the run was recorded in.
    pub department: String,
    /// Number of consecutive vacation days in the run.
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_shift() -> NormalizedShift {
        NormalizedShift {
            employee_id: "EE012".to_string(),
            first_name: "May".to_string(),
            last_name: "Chen".to_string(),
            department: "Production".to_string(),
            start: make_datetime("2025-08-04", "07:00:00"),
            end: make_datetime("2025-08-04", "15:30:00"),
            working_hours: dec("8.0"),
        }
    }

    #[test]
    fn test_blank_record_detected() {
        let record = TimeRecord {
            employee_id: Some("EE012".to_string()),
            first_name: Some("May".to_string()),
            last_name: Some("Chen".to_string()),
            department: "Production".to_string(),
            start_date: None,
            start_time: Some("   ".to_string()),
            end_date: None,
            end_time: None,
            job: None,
        };
        assert!(record.is_blank());
    }

    #[test]
    fn test_record_with_any_time_field_is_not_blank() {
        let record = TimeRecord {
            employee_id: None,
            first_name: None,
            last_name: None,
            department: "Production".to_string(),
            start_date: Some("2025-08-04".to_string()),
            start_time: None,
            end_date: None,
            end_time: None,
            job: None,
        };
        assert!(!record.is_blank());
    }

    #[test]
    fn test_shift_date_is_start_date() {
        let shift = sample_shift();
        assert_eq!(shift.date(), NaiveDate::from_ymd_opt(2025, 8, 4).unwrap());
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        assert_eq!(sample_shift().full_name(), "May Chen");
    }

    #[test]
    fn test_span_hours_from_adjusted_times() {
        assert_eq!(sample_shift().span_hours(), dec("8.5"));
    }

    #[test]
    fn test_span_hours_across_midnight() {
        let mut shift = sample_shift();
        shift.start = make_datetime("2025-08-04", "22:00:00");
        shift.end = make_datetime("2025-08-05", "06:00:00");
        assert_eq!(shift.span_hours(), dec("8"));
    }

    #[test]
    fn test_unavailable_schedule_entry() {
        let entry = ScheduleEntry {
            full_name: "May Chen".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            start: make_datetime("2025-08-04", "07:00:00"),
            end: None,
            availability_status: "Unavailable".to_string(),
        };
        assert!(entry.is_unavailable());

        let available = ScheduleEntry {
            availability_status: String::new(),
            ..entry
        };
        assert!(!available.is_unavailable());
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = sample_shift();
        let json = serde_json::to_string(&shift).unwrap();
        let back: NormalizedShift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, back);
    }

    #[test]
    fn test_time_record_deserializes_with_missing_fields() {
        let json = r#"{
            "department": "Sheeting",
            "start_date": "2025-08-04",
            "start_time": "06:58"
        }"#;
        let record: TimeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, None);
        assert_eq!(record.start_time.as_deref(), Some("06:58"));
        assert!(!record.is_blank());
    }
}
