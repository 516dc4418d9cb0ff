//! Salary calculation.
//!
//! Computes per-employee, per-period compensation from normalized working
//! hours: base salary by pay type, public-holiday pay, production bonus,
//! and the combined total.

pub mod employee_salary;
pub mod holiday_pay;
pub mod period;

pub use employee_salary::{base_salary, trigger_hours, BaseSalary};
pub use holiday_pay::holiday_pay;
pub use period::{calculate_period, run_payroll};
