//! Business-department fixed-hours override.

use crate::config::NormalizerConfig;
use crate::models::{NormalizedShift, ShiftAdjustment};

/// Reason string recorded for business-hours overrides.
pub const BUSINESS_HOURS_REASON: &str = "Adjusted business hours";

/// Forces business-department shifts onto the department's fixed hours.
///
/// Shifts in the configured business department — excluding the exempt
/// employee ids — have their start and end replaced with the configured
/// times on the shift's start date, and working hours recomputed from the
/// new span. Every changed shift is logged.
pub fn apply_business_hours(
    shifts: &mut [NormalizedShift],
    config: &NormalizerConfig,
) -> Vec<ShiftAdjustment> {
    let mut changes = Vec::new();

    for shift in shifts.iter_mut() {
        if shift.department != config.business_department
            || config.is_business_exempt(&shift.employee_id)
        {
            continue;
        }

        let new_start = shift.start.date().and_time(config.business_start);
        let new_end = shift.start.date().and_time(config.business_end);
        if shift.start == new_start && shift.end == new_end {
            continue;
        }

        changes.push(ShiftAdjustment {
            employee_id: shift.employee_id.clone(),
            full_name: shift.full_name(),
            original_start: Some(shift.start),
            new_start: Some(new_start),
            original_end: Some(shift.end),
            new_end: Some(new_end),
            original_hours: Some(shift.working_hours),
            new_hours: None,
            reason: BUSINESS_HOURS_REASON.to_string(),
        });

        shift.start = new_start;
        shift.end = new_end;
        shift.working_hours = shift.span_hours();

        if let Some(change) = changes.last_mut() {
            change.new_hours = Some(shift.working_hours);
        }
    }

    changes
}
