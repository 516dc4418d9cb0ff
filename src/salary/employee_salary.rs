//! Per-employee base-salary computation.
//!
//! Dispatches on the pay-rate row's pay type. Employees with no usable rate
//! row, a skip flag, or in the temp department always come out at zero —
//! they are kept in the results so the payroll run stays complete.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::aggregate::EmployeeHours;
use crate::config::PayrollConfig;
use crate::models::{PayPeriod, PayRateRecord, PayType, PublicHoliday};

/// Base salary split into its regular and overtime portions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BaseSalary {
    /// Regular pay plus overtime pay.
    pub salary: Decimal,
    /// Regular portion.
    pub regular_pay: Decimal,
    /// Overtime portion.
    pub overtime_pay: Decimal,
}

impl BaseSalary {
    fn flat(amount: Decimal) -> Self {
        Self {
            salary: amount,
            regular_pay: amount,
            overtime_pay: Decimal::ZERO,
        }
    }
}

/// The overtime trigger hours applying to a period, holiday-adjusted.
///
/// Missing trigger values fall back to the configured default.
pub fn trigger_hours(
    rate: &PayRateRecord,
    period_has_holiday: bool,
    config: &PayrollConfig,
) -> Decimal {
    let trigger = if period_has_holiday {
        rate.trigger_hours_with_holiday
    } else {
        rate.trigger_hours_without_holiday
    };
    trigger.unwrap_or(config.default_overtime_trigger_hours)
}

/// Computes one employee's base salary for a period.
///
/// Returns all zeros for temp-department employees, missing or unusable
/// rate rows, and rows flagged to skip calculation.
pub fn base_salary(
    totals: &EmployeeHours,
    rate: Option<&PayRateRecord>,
    period: &PayPeriod,
    holidays: &[PublicHoliday],
    config: &PayrollConfig,
) -> BaseSalary {
    if totals.department == config.temp_department {
        debug!(employee_id = %totals.employee_id, "temp department, salary zero");
        return BaseSalary::default();
    }

    let Some(rate) = rate else {
        warn!(
            employee_id = %totals.employee_id,
            total_hours = %totals.total_hours,
            "no pay rate matched, salary zero"
        );
        return BaseSalary::default();
    };
    let Some(regular_rate) = rate.regular_rate else {
        warn!(employee_id = %totals.employee_id, "pay rate row has no regular rate, salary zero");
        return BaseSalary::default();
    };
    if rate.skip_calculation {
        debug!(employee_id = %totals.employee_id, "skip flag set, salary zero");
        return BaseSalary::default();
    }
    let Some(pay_type) = rate.pay_type else {
        warn!(employee_id = %totals.employee_id, "missing or unrecognized pay type, salary zero");
        return BaseSalary::default();
    };

    match pay_type {
        PayType::Daily => BaseSalary::flat(Decimal::from(totals.working_days) * regular_rate),
        PayType::Annual => BaseSalary::flat(regular_rate),
        PayType::Hourly if rate.follow_clock_time => {
            BaseSalary::flat(totals.total_hours * regular_rate)
        }
        PayType::Hourly => {
            let trigger = trigger_hours(rate, period.has_holiday(holidays), config);
            let overtime_rate = rate.overtime_rate.unwrap_or(regular_rate);
            let overtime_hours = (totals.total_hours - trigger).max(Decimal::ZERO);
            let regular_pay = trigger * regular_rate;
            let overtime_pay = overtime_hours * overtime_rate;
            BaseSalary {
                salary: regular_pay + overtime_pay,
                regular_pay,
                overtime_pay,
            }
        }
    }
}
