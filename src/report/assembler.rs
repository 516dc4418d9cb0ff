//! Report assembly.
//!
//! Shapes evaluated bonus rows and period salaries into the flat tables a
//! rendering collaborator consumes: the bonus report, the not-reported
//! working-hour report, and the salary summary, plus the date-ranged file
//! stems the reports are saved under.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BonusRow, PeriodSalary, Process};

/// One not-reported-working-hour summary line per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotReportedSummary {
    /// Employee number.
    pub employee_id: String,
    /// Process from the employee's first flagged row.
    pub process: Process,
    /// Summed make-ready count over the flagged rows.
    pub make_ready: u32,
    /// Summed output quantity.
    pub output_qty: Decimal,
    /// Summed revenue.
    pub revenue: Decimal,
}

/// One salary-summary line per period salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySummaryRow {
    /// Employee number.
    pub employee_id: String,
    /// Full name in "First Last" form.
    pub employee_name: String,
    /// Department.
    pub department: String,
    /// Total normalized hours in the period.
    pub total_hours: Decimal,
    /// Regular portion of the salary.
    pub regular_pay: Decimal,
    /// Overtime portion of the salary.
    pub overtime_pay: Decimal,
    /// Holiday pay summed over the period's holidays.
    pub holiday_pay: Decimal,
    /// Production bonus for the period.
    pub bonus: Decimal,
    /// Total compensation.
    pub total_compensation: Decimal,
}

/// The rows that earned a bonus at either tier.
pub fn bonus_report(rows: &[BonusRow]) -> Vec<BonusRow> {
    rows.iter()
        .filter(|row| row.silver || row.gold)
        .cloned()
        .collect()
}

/// Groups flagged rows by employee, keeping the first process seen and
/// summing the production figures.
pub fn not_reported_report(rows: &[BonusRow]) -> Vec<NotReportedSummary> {
    let mut summaries: Vec<NotReportedSummary> = Vec::new();
    for row in rows.iter().filter(|row| row.not_reported_working_hour) {
        match summaries
            .iter_mut()
            .find(|s| s.employee_id == row.employee_id)
        {
            Some(summary) => {
                summary.make_ready += row.make_ready;
                summary.output_qty += row.output_qty;
                summary.revenue += row.revenue;
            }
            None => summaries.push(NotReportedSummary {
                employee_id: row.employee_id.clone(),
                process: row.process.clone(),
                make_ready: row.make_ready,
                output_qty: row.output_qty,
                revenue: row.revenue,
            }),
        }
    }
    summaries
}

/// Flattens period salaries into summary lines.
pub fn salary_summary(salaries: &[PeriodSalary]) -> Vec<SalarySummaryRow> {
    salaries
        .iter()
        .map(|salary| SalarySummaryRow {
            employee_id: salary.employee_id.clone(),
            employee_name: format!("{} {}", salary.first_name, salary.last_name),
            department: salary.department.clone(),
            total_hours: salary.total_hours,
            regular_pay: salary.regular_pay,
            overtime_pay: salary.overtime_pay,
            holiday_pay: salary.holiday_pay_total(),
            bonus: salary.bonus,
            total_compensation: salary.total_compensation,
        })
        .collect()
}

fn date_range(dates: impl Iterator<Item = NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    dates.fold(None, |range, date| match range {
        None => Some((date, date)),
        Some((min, max)) => Some((min.min(date), max.max(date))),
    })
}

/// File stem for the production report, spanning the dates present in the
/// bonus table. `None` when the table is empty.
pub fn production_report_stem(rows: &[BonusRow]) -> Option<String> {
    let (min, max) = date_range(rows.iter().map(|row| row.date))?;
    Some(format!("Production Report from {min} to {max}"))
}

/// File stem for the payroll report, spanning the calculated periods.
pub fn payroll_report_stem(salaries: &[PeriodSalary]) -> Option<String> {
    let min = salaries.iter().map(|s| s.period.start_date).min()?;
    let max = salaries.iter().map(|s| s.period.end_date).max()?;
    Some(format!("Payroll Report from {min} to {max}"))
}
