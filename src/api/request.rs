//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/production`
//! and `/payroll` endpoints. Requests carry the raw source tables directly;
//! each collection deserializes to the corresponding domain row type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    BonusRate, BonusRow, DiePrice, PayRateRecord, ProductionRecord, PublicHoliday, ScheduleEntry,
    SheetingRecord, TimeRecord,
};

/// Request body for the `/production` endpoint.
///
/// Contains the timesheet alongside the production, sheeting, die-price and
/// bonus-rate tables for one reporting window. The schedule is optional;
/// when posted it is applied during timesheet normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRequest {
    /// Raw timesheet rows for the window.
    pub timesheet: Vec<TimeRecord>,
    /// Posted schedule entries, when available.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    /// Sheeting-operator report rows.
    #[serde(default)]
    pub sheeting: Vec<SheetingRecord>,
    /// Production report rows for non-sheeting processes.
    #[serde(default)]
    pub production: Vec<ProductionRecord>,
    /// Die price table for revenue lookup.
    #[serde(default)]
    pub die_prices: Vec<DiePrice>,
    /// Operator bonus-rate table.
    #[serde(default)]
    pub bonus_rates: Vec<BonusRate>,
}

/// Request body for the `/payroll` endpoint.
///
/// Contains the timesheet, schedule, holiday and pay-rate tables plus the
/// period layout to calculate. Previously evaluated bonus rows may be
/// supplied so production bonuses land in the period totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Raw timesheet rows covering the requested periods.
    pub timesheet: Vec<TimeRecord>,
    /// Posted schedule entries, when available.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    /// Recognized public holidays.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
    /// Pay-rate table keyed by employee id.
    pub pay_rates: Vec<PayRateRecord>,
    /// Evaluated bonus rows to fold into period compensation.
    #[serde(default)]
    pub bonus_rows: Vec<BonusRow>,
    /// Anchor date of the first bi-weekly period.
    pub start_date: NaiveDate,
    /// Number of consecutive bi-weekly periods to calculate.
    #[serde(default = "default_period_count")]
    pub period_count: u32,
}

fn default_period_count() -> u32 {
    1
}
