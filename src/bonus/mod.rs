//! Production bonus evaluation.
//!
//! Aggregates production and sheeting reports, prices output against the
//! die price table, and evaluates Silver/Gold performance eligibility per
//! (process, shift date, employee) using the plant's agreed threshold
//! tables.

pub mod eligibility;
pub mod engine;
pub mod make_ready;
pub mod sheeting;
pub mod tables;

pub use eligibility::{gold_eligible, silver_eligible};
pub use engine::evaluate_bonuses;
pub use make_ready::summarize_production;
pub use sheeting::{sheeting_gold, sheets_by_employee_date};
