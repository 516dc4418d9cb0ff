//! Public-holiday pay.
//!
//! Each recognized holiday inside a pay period pays two parts. Part 1
//! prices any hours actually worked on the holiday at the overtime rate.
//! Part 2 is a lookback top-up: a tenth of the rolling four-period hours,
//! capped at the combined holiday-adjusted trigger hours of the current and
//! immediately preceding bi-weekly window, priced at the regular rate.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::models::{
    HoursHistory, PayPeriod, PayRateRecord, PublicHoliday, PERIOD_DAYS,
};
use crate::salary::employee_salary::trigger_hours;

/// Divisor applied to the capped lookback hours for Part 2.
const LOOKBACK_DIVISOR: i64 = 10;

/// The Part 2 cap: trigger hours summed over the current and previous
/// bi-weekly windows, each holiday-adjusted.
fn cap_hours(
    rate: &PayRateRecord,
    period: &PayPeriod,
    holidays: &[PublicHoliday],
    config: &PayrollConfig,
) -> Decimal {
    let previous = PayPeriod::biweekly(period.start_date - Duration::days(PERIOD_DAYS));
    [period, &previous]
        .into_iter()
        .map(|window| trigger_hours(rate, window.has_holiday(holidays), config))
        .sum()
}

/// Computes the holiday pay for one employee for one holiday date.
///
/// # Arguments
///
/// * `employee_id` - The employee being paid.
/// * `rate` - The employee's matched pay-rate row.
/// * `holiday` - The holiday date, already known to fall in `period`.
/// * `period` - The pay period being calculated.
/// * `holidays` - The full recognized-holiday list, for cap adjustment.
/// * `daily_hours` - Hours per (employee, date) for the period.
/// * `current_hours` - The employee's total hours in the current period.
/// * `history` - Preceding-period hour totals.
pub fn holiday_pay(
    employee_id: &str,
    rate: &PayRateRecord,
    holiday: &PublicHoliday,
    period: &PayPeriod,
    holidays: &[PublicHoliday],
    daily_hours: &HashMap<(String, NaiveDate), Decimal>,
    current_hours: Decimal,
    history: &HoursHistory,
    config: &PayrollConfig,
) -> Decimal {
    let Some(regular_rate) = rate.regular_rate else {
        return Decimal::ZERO;
    };
    let overtime_rate = rate.overtime_rate.unwrap_or(regular_rate);

    let worked_on_holiday = daily_hours
        .get(&(employee_id.to_string(), holiday.date))
        .copied()
        .unwrap_or(Decimal::ZERO);
    let part1 = worked_on_holiday * overtime_rate;

    let lookback = history.four_period_total(employee_id, current_hours);
    let cap = cap_hours(rate, period, holidays, config);
    let part2 = lookback.min(cap) / Decimal::from(LOOKBACK_DIVISOR) * regular_rate;

    debug!(
        employee_id,
        holiday = %holiday.date,
        %part1,
        %part2,
        "holiday pay computed"
    );
    part1 + part2
}
