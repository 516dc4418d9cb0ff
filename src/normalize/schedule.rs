//! Schedule reconciliation.
//!
//! The posted schedule is the source of truth for when a shift should have
//! started. Small timesheet drift is snapped to the schedule; anything
//! beyond the tolerance is surfaced as an alert for a human to resolve.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::NormalizerConfig;
use crate::models::{NormalizedShift, ScheduleAlert, ScheduleChange, ScheduleEntry};

/// Reason string recorded for schedule start-time corrections.
pub const SCHEDULE_CHANGE_REASON: &str = "Schedule start time adjustment";

/// Reason string recorded for out-of-tolerance alerts.
pub const SCHEDULE_ALERT_REASON: &str = "Large time difference between timesheet and schedule";

/// The changes and alerts produced by one reconciliation pass.
#[derive(Debug, Default)]
pub struct ScheduleOutcome {
    /// Start times snapped to the schedule.
    pub changes: Vec<ScheduleChange>,
    /// Discrepancies beyond the tolerance, not auto-corrected.
    pub alerts: Vec<ScheduleAlert>,
}

/// Reconciles shift start times against the posted schedule.
///
/// Shifts are matched to schedule entries by (date, full name); entries
/// posted as unavailable are ignored. When the scheduled start differs from
/// the adjusted start by no more than the configured tolerance the shift is
/// snapped to the schedule (hours recomputed, change logged). A larger
/// difference is logged as an alert and left alone.
pub fn reconcile_schedule(
    shifts: &mut [NormalizedShift],
    schedule: &[ScheduleEntry],
    config: &NormalizerConfig,
) -> ScheduleOutcome {
    let mut by_date_name: HashMap<(NaiveDate, &str), &ScheduleEntry> = HashMap::new();
    for entry in schedule {
        if entry.is_unavailable() {
            continue;
        }
        by_date_name
            .entry((entry.date, entry.full_name.as_str()))
            .or_insert(entry);
    }

    let mut outcome = ScheduleOutcome::default();

    for shift in shifts.iter_mut() {
        let full_name = shift.full_name();
        let Some(entry) = by_date_name.get(&(shift.date(), full_name.as_str())) else {
            continue;
        };
        let entry_start = entry.start;

        let diff_minutes = (entry_start - shift.start).num_minutes();
        let diff_hours = Decimal::new(diff_minutes, 0) / Decimal::new(60, 0);

        if diff_hours.abs() <= config.schedule_tolerance_hours {
            if entry_start == shift.start {
                continue;
            }
            outcome.changes.push(ScheduleChange {
                employee_id: shift.employee_id.clone(),
                full_name,
                original_start: shift.start,
                new_start: entry_start,
                difference_hours: diff_hours,
                reason: SCHEDULE_CHANGE_REASON.to_string(),
            });
            shift.start = entry_start;
            shift.working_hours = shift.span_hours();
        } else {
            outcome.alerts.push(ScheduleAlert {
                employee_id: shift.employee_id.clone(),
                full_name,
                timesheet_start: shift.start,
                schedule_start: entry_start,
                difference_hours: diff_hours,
                reason: SCHEDULE_ALERT_REASON.to_string(),
            });
        }
    }

    outcome
}
