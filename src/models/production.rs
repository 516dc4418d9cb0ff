//! Production-report models.
//!
//! This module defines the raw production and sheeting rows consumed by the
//! bonus engine, the die-price and bonus-rate lookup tables, the canonical
//! [`Process`] classification, and the unified [`BonusRow`] the engine
//! produces.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Canonical production process for bonus evaluation.
///
/// Raw reports carry free-text process names; printing is split per device
/// because the two presses have different threshold tables. Processes with
/// no rule table pass through as [`Process::Other`] and are never eligible.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Process;
///
/// assert_eq!(Process::from_raw("Printing", "SP1-HD102CX"), Process::PrintingCx102);
/// assert_eq!(Process::from_raw("Printing", "CP1-HD104CX"), Process::PrintingCx104);
/// assert_eq!(Process::from_raw("Die Cutting", "DC-03"), Process::DieCutting);
/// assert_eq!(
///     Process::from_raw("Laminating", "LM-01"),
///     Process::Other("Laminating".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    /// Paper sheeting (Gold-only bonus rule).
    Sheeting,
    /// Die cutting.
    DieCutting,
    /// Gluing line.
    Gluing,
    /// Window patching line.
    WindowPatching,
    /// Printing on the CX102 press.
    PrintingCx102,
    /// Printing on the CX104 press.
    PrintingCx104,
    /// Any other process; carries the raw name and is never bonus-eligible.
    Other(String),
}

impl Process {
    /// Classifies a raw (process, device) pair into a canonical process.
    pub fn from_raw(process: &str, device: &str) -> Self {
        match process {
            "Printing" if device == "SP1-HD102CX" => Process::PrintingCx102,
            "Printing" if device == "CP1-HD104CX" => Process::PrintingCx104,
            "Sheeting" => Process::Sheeting,
            "Die Cutting" => Process::DieCutting,
            "Gluing" => Process::Gluing,
            "WindowPatching" => Process::WindowPatching,
            other => Process::Other(other.to_string()),
        }
    }

    /// The display name used in reports.
    pub fn name(&self) -> &str {
        match self {
            Process::Sheeting => "Sheeting",
            Process::DieCutting => "Die Cutting",
            Process::Gluing => "Gluing",
            Process::WindowPatching => "WindowPatching",
            Process::PrintingCx102 => "Printing_CX102",
            Process::PrintingCx104 => "Printing_CX104",
            Process::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw production-report row for a non-sheeting process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// ERP number used together with the product code for price lookup.
    pub erp_num: String,
    /// Product name.
    pub product: String,
    /// Main product code (already stripped of any "|" suffix).
    pub main_product_code: String,
    /// Makeup style of the run.
    pub makeup_style: String,
    /// Raw process name from the report.
    pub process: String,
    /// Device the run was produced on.
    pub device: String,
    /// Die number used for the run.
    pub die_number: String,
    /// The shift date the run is attributed to.
    pub shift_date: NaiveDate,
    /// Employee (member) id that worked the run.
    pub employee_id: String,
    /// Output quantity for the run.
    pub output_qty: Decimal,
}

/// A raw sheeting-operator report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetingRecord {
    /// Employee number.
    pub employee_id: String,
    /// Start of the sheeting run; its date is the shift date.
    pub start_time: NaiveDateTime,
    /// Number of paper sheets produced.
    pub sheet_count: Decimal,
}

impl SheetingRecord {
    /// The shift date the run is attributed to.
    pub fn shift_date(&self) -> NaiveDate {
        self.start_time.date()
    }
}

/// One row of the die price table, keyed by (ERP number, product id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiePrice {
    /// ERP number (one row per number after the source list is split).
    pub erp_num: String,
    /// Product id matched against the production row's main product code.
    pub product_id: String,
    /// Unit price used for revenue computation.
    pub price: Decimal,
}

/// One row of the operator bonus-rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusRate {
    /// Employee number.
    pub employee_id: String,
    /// Operator name as listed in the rate table.
    pub name: String,
    /// Plant location.
    pub location: String,
    /// Machine the rates apply to (e.g. "Sheeter").
    pub machine: String,
    /// Bonus rate per hour at the Silver tier.
    pub silver_rate: Decimal,
    /// Bonus rate per hour at the Gold tier.
    pub gold_rate: Decimal,
}

/// Aggregated production per (process, shift date, employee).
///
/// Quantities, make-ready counts and revenue are summed over the raw rows in
/// the group; the line count is the maximum observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    /// Canonical process.
    pub process: Process,
    /// The shift date.
    pub shift_date: NaiveDate,
    /// Employee number.
    pub employee_id: String,
    /// Total output quantity.
    pub output_qty: Decimal,
    /// Total make-ready count.
    pub make_ready: u32,
    /// Number of distinct devices worked that date.
    pub lines: u32,
    /// Total revenue (output quantity times looked-up unit price).
    pub revenue: Decimal,
}

/// A fully evaluated bonus row, one per (process, shift date, employee).
///
/// Sheeting and non-sheeting rows share this shape so the report assembler
/// can merge them into a single table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusRow {
    /// Employee number.
    pub employee_id: String,
    /// First name from the matched timesheet row, empty when unmatched.
    pub first_name: String,
    /// Last name from the matched timesheet row, empty when unmatched.
    pub last_name: String,
    /// The shift date.
    pub date: NaiveDate,
    /// Normalized working hours for the date; `None` when the employee has
    /// production output but no timesheet record.
    pub working_hours: Option<Decimal>,
    /// Canonical process.
    pub process: Process,
    /// Make-ready count for the group.
    pub make_ready: u32,
    /// Number of distinct lines/devices worked.
    pub lines: u32,
    /// Output quantity.
    pub output_qty: Decimal,
    /// Revenue attributed to the group.
    pub revenue: Decimal,
    /// Plant location from the bonus-rate table.
    #[serde(default)]
    pub location: Option<String>,
    /// Machine from the bonus-rate table.
    #[serde(default)]
    pub machine: Option<String>,
    /// Silver rate, when a rate row matched.
    #[serde(default)]
    pub silver_rate: Option<Decimal>,
    /// Gold rate, when a rate row matched.
    #[serde(default)]
    pub gold_rate: Option<Decimal>,
    /// Positive output or make-ready with no matched working hours.
    pub not_reported_working_hour: bool,
    /// Silver eligibility (never set when Gold holds).
    pub silver: bool,
    /// Gold eligibility.
    pub gold: bool,
    /// Hours times silver rate when the Silver flag holds, else zero.
    pub silver_bonus: Decimal,
    /// Hours times gold rate when the Gold flag holds, else zero.
    pub gold_bonus: Decimal,
}

impl BonusRow {
    /// Combined bonus amount for the row.
    pub fn total_bonus(&self) -> Decimal {
        self.silver_bonus + self.gold_bonus
    }
}
