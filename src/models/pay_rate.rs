//! Pay-rate models.
//!
//! This module defines the [`PayRateRecord`] rows from the pay-rate table
//! and the closed [`PayType`] classification they dispatch on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an employee's base compensation is computed.
///
/// Rows whose pay-type column does not map to one of these variants yield a
/// zero salary rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Flat per-period amount equal to the regular rate.
    Annual,
    /// Total hours (or trigger hours plus overtime) times the hourly rates.
    Hourly,
    /// Working days times the daily rate.
    Daily,
}

impl PayType {
    /// Parses a free-text pay-type label by keyword, case-insensitively.
    ///
    /// Returns `None` when no recognized keyword is present.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayType;
    ///
    /// assert_eq!(PayType::from_label("Hourly rate"), Some(PayType::Hourly));
    /// assert_eq!(PayType::from_label(" ANNUAL "), Some(PayType::Annual));
    /// assert_eq!(PayType::from_label("piecework"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let lowered = label.trim().to_lowercase();
        if lowered.contains("daily") {
            Some(PayType::Daily)
        } else if lowered.contains("annual") {
            Some(PayType::Annual)
        } else if lowered.contains("hourly") {
            Some(PayType::Hourly)
        } else {
            None
        }
    }
}

/// One row of the pay-rate table, keyed by employee id.
///
/// Optional fields default during salary calculation: a missing overtime
/// rate falls back to the regular rate and missing trigger hours fall back
/// to the configured default (80).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRateRecord {
    /// Employee number the rates apply to.
    pub employee_id: String,
    /// Pay-type classification; `None` yields a zero salary.
    #[serde(default)]
    pub pay_type: Option<PayType>,
    /// Regular rate (hourly, daily, or flat depending on pay type).
    #[serde(default)]
    pub regular_rate: Option<Decimal>,
    /// Overtime hourly rate.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Bi-weekly overtime-trigger hours when a holiday falls in the period.
    #[serde(default)]
    pub trigger_hours_with_holiday: Option<Decimal>,
    /// Bi-weekly overtime-trigger hours when no holiday falls in the period.
    #[serde(default)]
    pub trigger_hours_without_holiday: Option<Decimal>,
    /// When set, the employee's salary is not computed (always zero).
    #[serde(default)]
    pub skip_calculation: bool,
    /// When set, pay follows actual clock hours with no overtime split.
    #[serde(default)]
    pub follow_clock_time: bool,
}
