//! The full time-normalization pass.
//!
//! Wires the individual normalization steps into one pipeline running in a
//! fixed order: identity forward-fill, blank-row removal, vacation
//! consolidation, parsing, grid rounding, midnight merging, business-hour
//! override, schedule reconciliation, and lunch deduction.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use crate::config::NormalizerConfig;
use crate::models::{
    NormalizedShift, ScheduleAlert, ScheduleChange, ScheduleEntry, ShiftAdjustment, TimeRecord,
    VacationEntry,
};
use crate::normalize::business_hours::apply_business_hours;
use crate::normalize::lunch::deduct_lunch;
use crate::normalize::merge::merge_midnight_pairs;
use crate::normalize::rounding::{round_end, round_start};
use crate::normalize::schedule::reconcile_schedule;
use crate::normalize::vacation::consolidate_vacations;

/// Everything produced by one normalization pass over a timesheet.
#[derive(Debug, Default)]
pub struct NormalizeOutput {
    /// Normalized shifts, ordered by employee then start time.
    pub shifts: Vec<NormalizedShift>,
    /// Consolidated vacation runs.
    pub vacations: Vec<VacationEntry>,
    /// Business-hour and lunch adjustments.
    pub adjustments: Vec<ShiftAdjustment>,
    /// Start times corrected from the posted schedule.
    pub schedule_changes: Vec<ScheduleChange>,
    /// Schedule discrepancies too large to auto-correct.
    pub schedule_alerts: Vec<ScheduleAlert>,
}

/// Identity fields carried forward across continuation rows.
#[derive(Debug, Default, Clone)]
struct IdentityContext {
    employee_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl IdentityContext {
    fn update(&mut self, record: &TimeRecord) {
        if record.employee_id.is_some() {
            self.employee_id = record.employee_id.clone();
        }
        if record.first_name.is_some() {
            self.first_name = record.first_name.clone();
        }
        if record.last_name.is_some() {
            self.last_name = record.last_name.clone();
        }
    }

    fn fill(&self, record: &mut TimeRecord) {
        if record.employee_id.is_none() {
            record.employee_id = self.employee_id.clone();
        }
        if record.first_name.is_none() {
            record.first_name = self.first_name.clone();
        }
        if record.last_name.is_none() {
            record.last_name = self.last_name.clone();
        }
    }
}

fn forward_fill_identity(records: &mut [TimeRecord]) {
    let mut context = IdentityContext::default();
    for record in records.iter_mut() {
        if record.employee_id.is_some() {
            context.update(record);
        }
        context.fill(record);
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn parse_stamp(date: &Option<String>, time: &Option<String>) -> Option<NaiveDateTime> {
    let date = parse_date(date.as_deref()?)?;
    let time = parse_time(time.as_deref()?)?;
    Some(date.and_time(time))
}

/// Parses one raw record into a shift with rounded times and span hours.
///
/// Returns `None` when either timestamp fails to parse or the parsed end
/// precedes the start. Such rows are dropped without raising.
fn parse_record(record: TimeRecord) -> Option<NormalizedShift> {
    let start = parse_stamp(&record.start_date, &record.start_time)?;
    let end = parse_stamp(&record.end_date, &record.end_time)?;
    if end < start {
        return None;
    }

    let mut shift = NormalizedShift {
        employee_id: record.employee_id.unwrap_or_default(),
        first_name: record.first_name.unwrap_or_default(),
        last_name: record.last_name.unwrap_or_default(),
        department: record.department,
        start: round_start(start),
        end: round_end(end),
        working_hours: Default::default(),
    };
    shift.working_hours = shift.span_hours();
    Some(shift)
}

/// Runs the full normalization pipeline over a raw timesheet.
///
/// # Arguments
///
/// * `records` - Raw timesheet rows in file order.
/// * `schedule` - Posted schedule entries for reconciliation.
/// * `config` - Normalizer settings.
///
/// # Returns
///
/// The normalized shifts together with all change, alert, and vacation logs
/// accumulated along the way.
pub fn normalize_timesheet(
    mut records: Vec<TimeRecord>,
    schedule: &[ScheduleEntry],
    config: &NormalizerConfig,
) -> NormalizeOutput {
    let raw_count = records.len();
    forward_fill_identity(&mut records);
    records.retain(|record| !record.is_blank());

    let vacation_outcome = consolidate_vacations(records, config);
    let vacations = vacation_outcome.vacations;

    let mut shifts: Vec<NormalizedShift> = vacation_outcome
        .records
        .into_iter()
        .filter_map(parse_record)
        .collect();
    info!(
        raw_rows = raw_count,
        parsed_shifts = shifts.len(),
        vacation_runs = vacations.len(),
        "parsed timesheet"
    );

    shifts.sort_by(|a, b| {
        (&a.employee_id, &a.first_name, &a.last_name, a.start).cmp(&(
            &b.employee_id,
            &b.first_name,
            &b.last_name,
            b.start,
        ))
    });
    let mut shifts = merge_midnight_pairs(shifts);

    let mut adjustments = apply_business_hours(&mut shifts, config);
    let schedule_outcome = reconcile_schedule(&mut shifts, schedule, config);
    adjustments.extend(deduct_lunch(&mut shifts, config));

    info!(
        shifts = shifts.len(),
        adjustments = adjustments.len(),
        schedule_changes = schedule_outcome.changes.len(),
        schedule_alerts = schedule_outcome.alerts.len(),
        "normalized timesheet"
    );

    NormalizeOutput {
        shifts,
        vacations,
        adjustments,
        schedule_changes: schedule_outcome.changes,
        schedule_alerts: schedule_outcome.alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn record(
        id: Option<&str>,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> TimeRecord {
        TimeRecord {
            employee_id: id.map(str::to_string),
            first_name: id.map(|_| "May".to_string()),
            last_name: id.map(|_| "Chen".to_string()),
            department: "Production".to_string(),
            start_date: Some(start_date.to_string()),
            start_time: Some(start_time.to_string()),
            end_date: Some(end_date.to_string()),
            end_time: Some(end_time.to_string()),
            job: None,
        }
    }

    #[test]
    fn test_identity_forward_fill() {
        let mut records = vec![
            record(Some("EE012"), "2025-08-04", "07:02", "2025-08-04", "15:02"),
            record(None, "2025-08-05", "07:02", "2025-08-05", "15:02"),
        ];
        forward_fill_identity(&mut records);
        assert_eq!(records[1].employee_id.as_deref(), Some("EE012"));
        assert_eq!(records[1].first_name.as_deref(), Some("May"));
    }

    #[test]
    fn test_unparseable_rows_dropped() {
        let config = EngineConfig::default().normalizer;
        let records = vec![
            record(Some("EE012"), "not-a-date", "07:02", "2025-08-04", "15:02"),
            record(Some("EE012"), "2025-08-04", "07:02", "2025-08-04", "soon"),
        ];
        let output = normalize_timesheet(records, &[], &config);
        assert!(output.shifts.is_empty());
    }

    #[test]
    fn test_end_before_start_dropped() {
        let config = EngineConfig::default().normalizer;
        let records = vec![record(
            Some("EE012"),
            "2025-08-04",
            "15:00",
            "2025-08-04",
            "07:00",
        )];
        let output = normalize_timesheet(records, &[], &config);
        assert!(output.shifts.is_empty());
    }

    #[test]
    fn test_day_month_year_dates_accepted() {
        let config = EngineConfig::default().normalizer;
        let records = vec![record(
            Some("EE012"),
            "04/08/2025",
            "07:02",
            "04/08/2025",
            "15:02",
        )];
        let output = normalize_timesheet(records, &[], &config);
        assert_eq!(output.shifts.len(), 1);
        assert_eq!(output.shifts[0].start, make_datetime("2025-08-04", "07:00:00"));
    }

    // EE012 clocks 22:03 into a second row ending next morning; the pair is
    // rounded, merged, and lunch-deducted down to 7.5 hours.
    #[test]
    fn test_overnight_pair_merges_to_seven_and_a_half_hours() {
        let config = EngineConfig::default().normalizer;
        let records = vec![
            record(Some("EE012"), "2025-08-04", "22:00", "2025-08-04", "23:58"),
            record(Some("EE012"), "2025-08-05", "00:03", "2025-08-05", "06:00"),
        ];

        let output = normalize_timesheet(records, &[], &config);

        assert_eq!(output.shifts.len(), 1);
        let shift = &output.shifts[0];
        assert_eq!(shift.start, make_datetime("2025-08-04", "22:00:00"));
        assert_eq!(shift.end, make_datetime("2025-08-05", "06:00:00"));
        assert_eq!(shift.working_hours, dec("7.5"));
        assert_eq!(output.adjustments.len(), 1);
        assert!(output.adjustments[0].reason.contains("lunch"));
    }

    #[test]
    fn test_short_shift_keeps_full_span() {
        let config = EngineConfig::default().normalizer;
        let records = vec![record(
            Some("EE012"),
            "2025-08-04",
            "07:02",
            "2025-08-04",
            "13:58",
        )];

        let output = normalize_timesheet(records, &[], &config);

        assert_eq!(output.shifts.len(), 1);
        assert_eq!(output.shifts[0].working_hours, dec("7"));
        assert!(output.adjustments.is_empty());
    }

    #[test]
    fn test_schedule_snap_flows_through_pipeline() {
        let config = EngineConfig::default().normalizer;
        let records = vec![record(
            Some("EE012"),
            "2025-08-04",
            "07:31",
            "2025-08-04",
            "14:02",
        )];
        let schedule = vec![ScheduleEntry {
            full_name: "May Chen".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            start: make_datetime("2025-08-04", "07:00:00"),
            end: None,
            availability_status: "Available".to_string(),
        }];

        let output = normalize_timesheet(records, &schedule, &config);

        assert_eq!(output.schedule_changes.len(), 1);
        assert_eq!(output.shifts[0].start, make_datetime("2025-08-04", "07:00:00"));
        assert_eq!(output.shifts[0].working_hours, dec("7"));
    }

    #[test]
    fn test_vacation_run_removed_from_shifts() {
        let config = EngineConfig::default().normalizer;
        let mut vacation = record(Some("EE012"), "2025-08-04", "07:00", "2025-08-04", "15:00");
        vacation.job = Some("Vacation - paid".to_string());
        let mut vacation_2 = record(Some("EE012"), "2025-08-05", "07:00", "2025-08-05", "15:00");
        vacation_2.job = Some("Vacation - paid".to_string());

        let output = normalize_timesheet(vec![vacation, vacation_2], &[], &config);

        assert!(output.shifts.is_empty());
        assert_eq!(output.vacations.len(), 1);
        assert_eq!(output.vacations[0].days, 2);
    }
}
