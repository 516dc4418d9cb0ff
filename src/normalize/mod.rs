//! Time normalization.
//!
//! Turns raw clock-system timesheet rows into [`crate::models::NormalizedShift`]
//! rows ready for aggregation and payroll, applying the fixed rounding grid,
//! midnight merging, business-hour overrides, schedule reconciliation, lunch
//! deduction, and paid-vacation consolidation.

pub mod business_hours;
pub mod lunch;
pub mod merge;
pub mod pipeline;
pub mod rounding;
pub mod schedule;
pub mod vacation;

pub use business_hours::{apply_business_hours, BUSINESS_HOURS_REASON};
pub use lunch::deduct_lunch;
pub use merge::merge_midnight_pairs;
pub use pipeline::{normalize_timesheet, NormalizeOutput};
pub use rounding::{round_end, round_start};
pub use schedule::{
    reconcile_schedule, ScheduleOutcome, SCHEDULE_ALERT_REASON, SCHEDULE_CHANGE_REASON,
};
pub use vacation::{consolidate_vacations, VacationOutcome};
