//! Bonus evaluation engine.
//!
//! Joins aggregated production, normalized working hours and operator rate
//! rows into the unified [`BonusRow`] table, evaluating Silver/Gold
//! eligibility and bonus amounts for every (process, shift date, employee)
//! group. Production with no matching timesheet hours is kept and flagged,
//! never paid.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::aggregate::hours_by_employee_date;
use crate::bonus::eligibility::{gold_eligible, silver_eligible};
use crate::bonus::make_ready::summarize_production;
use crate::bonus::sheeting::{sheeting_gold, sheets_by_employee_date};
use crate::models::{
    BonusRate, BonusRow, DiePrice, NormalizedShift, Process, ProductionRecord, ProductionSummary,
    SheetingRecord,
};

/// Machine name a rate row must carry to apply to sheeting work.
const SHEETER_MACHINE: &str = "Sheeter";

struct RateLookup<'a> {
    by_employee: HashMap<&'a str, &'a BonusRate>,
}

impl<'a> RateLookup<'a> {
    fn new(rates: &'a [BonusRate]) -> Self {
        let mut by_employee = HashMap::new();
        for rate in rates {
            by_employee.entry(rate.employee_id.as_str()).or_insert(rate);
        }
        Self { by_employee }
    }

    fn general(&self, employee_id: &str) -> Option<&'a BonusRate> {
        self.by_employee.get(employee_id).copied()
    }

    fn sheeter(&self, employee_id: &str) -> Option<&'a BonusRate> {
        self.general(employee_id)
            .filter(|rate| rate.machine == SHEETER_MACHINE)
    }
}

struct NameLookup<'a> {
    by_employee: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> NameLookup<'a> {
    fn new(shifts: &'a [NormalizedShift]) -> Self {
        let mut by_employee = HashMap::new();
        for shift in shifts {
            by_employee
                .entry(shift.employee_id.as_str())
                .or_insert((shift.first_name.as_str(), shift.last_name.as_str()));
        }
        Self { by_employee }
    }

    fn names(&self, employee_id: &str) -> (String, String) {
        self.by_employee
            .get(employee_id)
            .map(|(first, last)| (first.to_string(), last.to_string()))
            .unwrap_or_default()
    }
}

fn bonus_amount(hours: Option<Decimal>, rate: Option<Decimal>, flag: bool) -> Decimal {
    match (hours, rate, flag) {
        (Some(hours), Some(rate), true) => hours * rate,
        _ => Decimal::ZERO,
    }
}

fn row_for_summary(
    summary: ProductionSummary,
    hours: Option<Decimal>,
    rate: Option<&BonusRate>,
    names: &NameLookup<'_>,
) -> BonusRow {
    let has_production = summary.output_qty > Decimal::ZERO || summary.make_ready > 0;
    let (silver, gold) = match hours {
        Some(hours) => {
            let gold = gold_eligible(&summary, hours);
            (silver_eligible(&summary, hours) && !gold, gold)
        }
        None => (false, false),
    };
    let (first_name, last_name) = names.names(&summary.employee_id);

    BonusRow {
        employee_id: summary.employee_id,
        first_name,
        last_name,
        date: summary.shift_date,
        working_hours: hours,
        process: summary.process,
        make_ready: summary.make_ready,
        lines: summary.lines,
        output_qty: summary.output_qty,
        revenue: summary.revenue,
        location: rate.map(|r| r.location.clone()),
        machine: rate.map(|r| r.machine.clone()),
        silver_rate: rate.map(|r| r.silver_rate),
        gold_rate: rate.map(|r| r.gold_rate),
        not_reported_working_hour: has_production && hours.is_none(),
        silver,
        gold,
        silver_bonus: bonus_amount(hours, rate.map(|r| r.silver_rate), silver),
        gold_bonus: bonus_amount(hours, rate.map(|r| r.gold_rate), gold),
    }
}

fn sheeting_row(
    employee_id: String,
    date: NaiveDate,
    sheets: Decimal,
    hours: Option<Decimal>,
    rate: Option<&BonusRate>,
    names: &NameLookup<'_>,
) -> BonusRow {
    let gold = hours.is_some_and(|hours| sheeting_gold(hours, sheets));
    let (first_name, last_name) = names.names(&employee_id);

    BonusRow {
        employee_id,
        first_name,
        last_name,
        date,
        working_hours: hours,
        process: Process::Sheeting,
        make_ready: 1,
        lines: 1,
        output_qty: sheets,
        revenue: Decimal::ZERO,
        location: rate.map(|r| r.location.clone()),
        machine: rate.map(|r| r.machine.clone()),
        silver_rate: rate.map(|r| r.silver_rate),
        gold_rate: rate.map(|r| r.gold_rate),
        not_reported_working_hour: sheets > Decimal::ZERO && hours.is_none(),
        silver: false,
        gold,
        silver_bonus: Decimal::ZERO,
        gold_bonus: bonus_amount(hours, rate.map(|r| r.gold_rate), gold),
    }
}

/// Evaluates the full bonus table for one reporting window.
///
/// # Arguments
///
/// * `production` - Raw production rows for all non-sheeting processes.
/// * `sheeting` - Raw sheeting-operator rows.
/// * `die_prices` - Unit prices for revenue computation.
/// * `rates` - Operator Silver/Gold rate rows.
/// * `shifts` - Normalized timesheet shifts supplying hours and names.
///
/// # Returns
///
/// One [`BonusRow`] per (process, shift date, employee), sheeting included.
pub fn evaluate_bonuses(
    production: &[ProductionRecord],
    sheeting: &[SheetingRecord],
    die_prices: &[DiePrice],
    rates: &[BonusRate],
    shifts: &[NormalizedShift],
) -> Vec<BonusRow> {
    let hours = hours_by_employee_date(shifts);
    let rate_lookup = RateLookup::new(rates);
    let name_lookup = NameLookup::new(shifts);

    let mut rows: Vec<BonusRow> = summarize_production(production, die_prices)
        .into_iter()
        .map(|summary| {
            let worked = hours
                .get(&(summary.employee_id.clone(), summary.shift_date))
                .copied();
            let rate = rate_lookup.general(&summary.employee_id);
            row_for_summary(summary, worked, rate, &name_lookup)
        })
        .collect();

    for ((employee_id, date), sheets) in sheets_by_employee_date(sheeting) {
        let worked = hours.get(&(employee_id.clone(), date)).copied();
        let rate = rate_lookup.sheeter(&employee_id);
        rows.push(sheeting_row(
            employee_id,
            date,
            sheets,
            worked,
            rate,
            &name_lookup,
        ));
    }

    info!(
        rows = rows.len(),
        eligible = rows.iter().filter(|r| r.silver || r.gold).count(),
        not_reported = rows.iter().filter(|r| r.not_reported_working_hour).count(),
        "evaluated bonus table"
    );
    rows
}
