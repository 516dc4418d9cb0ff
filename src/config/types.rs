//! Configuration types for the payroll engine.
//!
//! Organization policy that is tuned per deployment — the business-hours
//! override, schedule tolerance, lunch rule, and payroll defaults — lives
//! here rather than in code. The numeric values shipped in
//! `config/payroll.yaml` are the ones the plant actually runs with.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Time-normalizer policy.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerConfig {
    /// Department whose shifts are forced to fixed business hours.
    pub business_department: String,
    /// Employee ids exempt from the business-hours override.
    pub business_exempt_ids: Vec<String>,
    /// Forced start-of-day for the business department.
    pub business_start: NaiveTime,
    /// Forced end-of-day for the business department.
    pub business_end: NaiveTime,
    /// Maximum schedule/timesheet start difference that is auto-corrected.
    pub schedule_tolerance_hours: Decimal,
    /// Working-hours threshold above which lunch is deducted.
    pub lunch_threshold_hours: Decimal,
    /// Hours deducted for lunch.
    pub lunch_deduction_hours: Decimal,
    /// Job code marking paid vacation rows.
    pub vacation_job_code: String,
}

impl NormalizerConfig {
    /// Returns true if the employee is exempt from the business override.
    pub fn is_business_exempt(&self, employee_id: &str) -> bool {
        self.business_exempt_ids.iter().any(|id| id == employee_id)
    }
}

/// Salary-calculation policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Overtime-trigger hours assumed when the pay-rate row has none.
    pub default_overtime_trigger_hours: Decimal,
    /// Department whose employees never receive compensation here.
    pub temp_department: String,
}

/// The complete engine configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Time-normalizer policy.
    pub normalizer: NormalizerConfig,
    /// Salary-calculation policy.
    pub payroll: PayrollConfig,
}

impl Default for EngineConfig {
    /// The organization's current policy values, identical to the shipped
    /// `config/payroll.yaml`.
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig {
                business_department: "Business".to_string(),
                business_exempt_ids: ["EE109", "EE037", "EE034", "EE059"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                business_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
                business_end: NaiveTime::from_hms_opt(19, 30, 0).unwrap_or_default(),
                schedule_tolerance_hours: Decimal::ONE,
                lunch_threshold_hours: Decimal::from(7),
                lunch_deduction_hours: Decimal::new(5, 1),
                vacation_job_code: "Vacation - paid".to_string(),
            },
            payroll: PayrollConfig {
                default_overtime_trigger_hours: Decimal::from(80),
                temp_department: "Temp".to_string(),
            },
        }
    }
}
