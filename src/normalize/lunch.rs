//! Lunch-time deduction.

use crate::config::NormalizerConfig;
use crate::models::{NormalizedShift, ShiftAdjustment};

/// Deducts unpaid lunch time from long shifts.
///
/// Any shift with working hours above the configured threshold loses the
/// configured deduction (0.5 h by policy). Each deduction is logged; the
/// reason names the amount so the log stays meaningful if policy changes.
pub fn deduct_lunch(
    shifts: &mut [NormalizedShift],
    config: &NormalizerConfig,
) -> Vec<ShiftAdjustment> {
    let mut changes = Vec::new();

    for shift in shifts.iter_mut() {
        if shift.working_hours <= config.lunch_threshold_hours {
            continue;
        }

        let original = shift.working_hours;
        shift.working_hours = original - config.lunch_deduction_hours;

        changes.push(ShiftAdjustment {
            employee_id: shift.employee_id.clone(),
            full_name: shift.full_name(),
            original_start: None,
            new_start: None,
            original_end: None,
            new_end: None,
            original_hours: Some(original),
            new_hours: Some(shift.working_hours),
            reason: format!(
                "Subtracted {} hours for lunch",
                config.lunch_deduction_hours
            ),
        });
    }

    changes
}
