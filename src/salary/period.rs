//! Per-period payroll computation and the multi-period driver.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{error, info};

use crate::aggregate::{hours_by_employee_date, totals_by_employee};
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BonusRow, HoursHistory, NormalizedShift, PayPeriod, PayRateRecord, PeriodSalary,
    PublicHoliday,
};
use crate::salary::employee_salary::base_salary;
use crate::salary::holiday_pay::holiday_pay;

fn rate_for<'a>(rates: &'a [PayRateRecord], employee_id: &str) -> Option<&'a PayRateRecord> {
    rates.iter().find(|rate| rate.employee_id == employee_id)
}

fn bonus_in_period(bonus_rows: &[BonusRow], employee_id: &str, period: &PayPeriod) -> Decimal {
    bonus_rows
        .iter()
        .filter(|row| row.employee_id == employee_id && period.contains_date(row.date))
        .map(BonusRow::total_bonus)
        .sum()
}

/// Computes salaries for every employee with shifts in one pay period.
///
/// Consumes the history by value and returns it shifted by this period's
/// totals; callers must feed periods in chronological order.
///
/// # Returns
///
/// The period's salary rows and the history to pass to the next period.
pub fn calculate_period(
    shifts: &[NormalizedShift],
    pay_rates: &[PayRateRecord],
    holidays: &[PublicHoliday],
    bonus_rows: &[BonusRow],
    period: &PayPeriod,
    history: HoursHistory,
    config: &PayrollConfig,
) -> EngineResult<(Vec<PeriodSalary>, HoursHistory)> {
    let period_shifts: Vec<NormalizedShift> = shifts
        .iter()
        .filter(|shift| period.contains_date(shift.date()))
        .cloned()
        .collect();
    let daily_hours = hours_by_employee_date(&period_shifts);
    let totals = totals_by_employee(&period_shifts);

    let mut salaries = Vec::with_capacity(totals.len());
    for employee in &totals {
        if employee.total_hours < Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!(
                    "negative period hours for employee {}",
                    employee.employee_id
                ),
            });
        }
        let rate = rate_for(pay_rates, &employee.employee_id);
        let base = base_salary(employee, rate, period, holidays, config);

        let is_temp = employee.department == config.temp_department;
        let mut holiday_amounts = BTreeMap::new();
        if let Some(rate) = rate.filter(|_| !is_temp) {
            for holiday in period.holidays_in_period(holidays) {
                let amount = holiday_pay(
                    &employee.employee_id,
                    rate,
                    holiday,
                    period,
                    holidays,
                    &daily_hours,
                    employee.total_hours,
                    &history,
                    config,
                );
                holiday_amounts.insert(holiday.date, amount);
            }
        }

        let bonus = bonus_in_period(bonus_rows, &employee.employee_id, period);
        let holiday_total: Decimal = holiday_amounts.values().copied().sum();
        let total_compensation = if is_temp {
            Decimal::ZERO
        } else {
            base.salary + holiday_total + bonus
        };

        salaries.push(PeriodSalary {
            employee_id: employee.employee_id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            department: employee.department.clone(),
            period: period.clone(),
            total_hours: employee.total_hours,
            working_days: employee.working_days,
            salary: base.salary,
            regular_pay: base.regular_pay,
            overtime_pay: base.overtime_pay,
            holiday_pay: holiday_amounts,
            bonus,
            total_compensation,
            pay_rate_matched: rate.is_some(),
        });
    }

    let next_history = history.shifted(
        totals
            .iter()
            .map(|t| (t.employee_id.clone(), t.total_hours)),
    );

    info!(
        period_start = %period.start_date,
        period_end = %period.end_date,
        employees = salaries.len(),
        unmatched = salaries.iter().filter(|s| !s.pay_rate_matched).count(),
        "calculated pay period"
    );
    Ok((salaries, next_history))
}

/// Runs payroll over consecutive bi-weekly periods from an anchor date.
///
/// A failure in one period is logged and skipped; remaining periods still
/// run (with that period's hours absent from the rolling history).
pub fn run_payroll(
    shifts: &[NormalizedShift],
    pay_rates: &[PayRateRecord],
    holidays: &[PublicHoliday],
    bonus_rows: &[BonusRow],
    anchor: NaiveDate,
    period_count: u32,
    config: &PayrollConfig,
) -> Vec<PeriodSalary> {
    let mut all_salaries = Vec::new();
    let mut history = HoursHistory::new();

    for index in 0..period_count {
        let period = PayPeriod::nth(anchor, index);
        match calculate_period(
            shifts, pay_rates, holidays, bonus_rows, &period, history.clone(), config,
        ) {
            Ok((salaries, next_history)) => {
                all_salaries.extend(salaries);
                history = next_history;
            }
            Err(err) => {
                error!(
                    period_start = %period.start_date,
                    error = %err,
                    "period calculation failed, continuing"
                );
            }
        }
    }
    all_salaries
}
