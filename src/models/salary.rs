//! Salary result models and the rolling hours history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pay_period::PayPeriod;

/// Number of preceding periods retained per employee in [`HoursHistory`].
const HISTORY_PERIODS: usize = 3;

/// Computed compensation for one employee over one bi-weekly period.
///
/// A `PeriodSalary` is created once per employee per period and never
/// mutated afterwards; the only state carried between periods is the
/// [`HoursHistory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSalary {
    /// Employee number.
    pub employee_id: String,
    /// Employee first name.
    pub first_name: String,
    /// Employee last name.
    pub last_name: String,
    /// Department the employee worked in.
    pub department: String,
    /// The period this salary covers.
    pub period: PayPeriod,
    /// Total normalized working hours in the period.
    pub total_hours: Decimal,
    /// Number of distinct dates worked in the period.
    pub working_days: u32,
    /// Base salary for the period (regular plus overtime pay).
    pub salary: Decimal,
    /// Regular portion of the salary.
    pub regular_pay: Decimal,
    /// Overtime portion of the salary.
    pub overtime_pay: Decimal,
    /// Holiday pay keyed by holiday date.
    #[serde(default)]
    pub holiday_pay: BTreeMap<NaiveDate, Decimal>,
    /// Production bonus summed over the period.
    pub bonus: Decimal,
    /// Salary plus holiday pay plus bonus; always zero for Temp.
    pub total_compensation: Decimal,
    /// False when no pay-rate row matched the employee.
    pub pay_rate_matched: bool,
}

impl PeriodSalary {
    /// Sum of all holiday-pay amounts in the period.
    pub fn holiday_pay_total(&self) -> Decimal {
        self.holiday_pay.values().copied().sum()
    }
}

/// Rolling per-employee hour totals for the preceding periods.
///
/// Holiday-pay capping looks at a four-period window: the current period
/// plus the three preceding totals stored here. The history is a plain
/// value — each period's calculation receives one and returns a shifted
/// copy, so there is no shared mutable state and periods must be processed
/// in chronological order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HoursHistory;
/// use rust_decimal::Decimal;
///
/// let history = HoursHistory::new();
/// let shifted = history.shifted([("EE012".to_string(), Decimal::from(80))]);
/// assert_eq!(shifted.preceding_total("EE012"), Decimal::from(80));
/// assert_eq!(
///     shifted.four_period_total("EE012", Decimal::from(75)),
///     Decimal::from(155),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursHistory {
    totals: BTreeMap<String, [Decimal; HISTORY_PERIODS]>,
}

impl HoursHistory {
    /// Creates an empty history (all employees at zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the stored preceding-period hours for an employee.
    pub fn preceding_total(&self, employee_id: &str) -> Decimal {
        self.totals
            .get(employee_id)
            .map(|h| h.iter().copied().sum())
            .unwrap_or(Decimal::ZERO)
    }

    /// The rolling four-period total: current hours plus the three stored
    /// preceding totals.
    pub fn four_period_total(&self, employee_id: &str, current_hours: Decimal) -> Decimal {
        current_hours + self.preceding_total(employee_id)
    }

    /// Returns a new history with each employee's newest total shifted in
    /// and the oldest dropped.
    ///
    /// Employees absent from `period_totals` keep their stored history
    /// unchanged.
    pub fn shifted<I>(&self, period_totals: I) -> Self
    where
        I: IntoIterator<Item = (String, Decimal)>,
    {
        let mut totals = self.totals.clone();
        for (employee_id, hours) in period_totals {
            let entry = totals
                .entry(employee_id)
                .or_insert([Decimal::ZERO; HISTORY_PERIODS]);
            entry.rotate_left(1);
            entry[HISTORY_PERIODS - 1] = hours;
        }
        Self { totals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_history_totals_zero() {
        let history = HoursHistory::new();
        assert_eq!(history.preceding_total("EE012"), Decimal::ZERO);
        assert_eq!(history.four_period_total("EE012", dec("75")), dec("75"));
    }

    #[test]
    fn test_shift_in_single_period() {
        let history = HoursHistory::new().shifted([("EE012".to_string(), dec("80"))]);
        assert_eq!(history.preceding_total("EE012"), dec("80"));
    }

    #[test]
    fn test_oldest_period_drops_after_three_shifts() {
        let mut history = HoursHistory::new();
        for hours in ["70", "80", "90", "100"] {
            history = history.shifted([("EE012".to_string(), dec(hours))]);
        }
        // 70 has rolled out of the window.
        assert_eq!(history.preceding_total("EE012"), dec("270"));
    }

    #[test]
    fn test_shift_leaves_absent_employees_untouched() {
        let history = HoursHistory::new()
            .shifted([("EE012".to_string(), dec("80"))])
            .shifted([("EE045".to_string(), dec("60"))]);
        assert_eq!(history.preceding_total("EE012"), dec("80"));
        assert_eq!(history.preceding_total("EE045"), dec("60"));
    }

    #[test]
    fn test_shifted_returns_new_value() {
        let history = HoursHistory::new();
        let _shifted = history.shifted([("EE012".to_string(), dec("80"))]);
        // The original is unchanged; history is passed by value between periods.
        assert_eq!(history.preceding_total("EE012"), Decimal::ZERO);
    }

    #[test]
    fn test_holiday_pay_total_sums_dates() {
        let mut holiday_pay = BTreeMap::new();
        holiday_pay.insert(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(), dec("120.50"));
        holiday_pay.insert(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), dec("80"));
        let salary = PeriodSalary {
            employee_id: "EE012".to_string(),
            first_name: "May".to_string(),
            last_name: "Chen".to_string(),
            department: "Production".to_string(),
            period: PayPeriod::biweekly(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap()),
            total_hours: dec("75"),
            working_days: 10,
            salary: dec("1600"),
            regular_pay: dec("1600"),
            overtime_pay: Decimal::ZERO,
            holiday_pay,
            bonus: Decimal::ZERO,
            total_compensation: dec("1800.50"),
            pay_rate_matched: true,
        };
        assert_eq!(salary.holiday_pay_total(), dec("200.50"));
    }
}
