//! Working-hours aggregation.
//!
//! Pure reductions over normalized shifts: per-employee period totals and
//! per-day hour sums. Shifts with zero or negative working hours are
//! excluded from both.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::NormalizedShift;

/// Total worked hours for one employee over a set of shifts.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeHours {
    /// Employee number.
    pub employee_id: String,
    /// Employee first name, from the first shift seen.
    pub first_name: String,
    /// Employee last name, from the first shift seen.
    pub last_name: String,
    /// Department, from the first shift seen.
    pub department: String,
    /// Sum of working hours across all shifts.
    pub total_hours: Decimal,
    /// Number of distinct dates worked.
    pub working_days: u32,
}

/// Sums working hours per employee, preserving first-encounter order.
///
/// Name and department are carried from the employee's first shift. Shifts
/// with non-positive hours are skipped.
pub fn totals_by_employee(shifts: &[NormalizedShift]) -> Vec<EmployeeHours> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, EmployeeHours> = HashMap::new();
    let mut dates: HashMap<String, Vec<NaiveDate>> = HashMap::new();

    for shift in shifts {
        if shift.working_hours <= Decimal::ZERO {
            continue;
        }
        let entry = totals
            .entry(shift.employee_id.clone())
            .or_insert_with(|| {
                order.push(shift.employee_id.clone());
                EmployeeHours {
                    employee_id: shift.employee_id.clone(),
                    first_name: shift.first_name.clone(),
                    last_name: shift.last_name.clone(),
                    department: shift.department.clone(),
                    total_hours: Decimal::ZERO,
                    working_days: 0,
                }
            });
        entry.total_hours += shift.working_hours;

        let worked = dates.entry(shift.employee_id.clone()).or_default();
        if !worked.contains(&shift.date()) {
            worked.push(shift.date());
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let mut total = totals.remove(&id)?;
            total.working_days = dates.get(&id).map_or(0, |d| d.len() as u32);
            Some(total)
        })
        .collect()
}

/// Sums working hours per (employee id, date).
///
/// Used to attach hours to production records and to price hours worked on
/// public holidays. Shifts with non-positive hours are skipped.
pub fn hours_by_employee_date(
    shifts: &[NormalizedShift],
) -> HashMap<(String, NaiveDate), Decimal> {
    let mut hours = HashMap::new();
    for shift in shifts {
        if shift.working_hours <= Decimal::ZERO {
            continue;
        }
        *hours
            .entry((shift.employee_id.clone(), shift.date()))
            .or_insert(Decimal::ZERO) += shift.working_hours;
    }
    hours
}
