//! Make-ready counting and production aggregation.
//!
//! Raw production rows are grouped twice: first into fine setup groups of
//! (product, process, device, die number, shift date, employee) to count
//! make-readies, then into one [`ProductionSummary`] per (process, shift
//! date, employee) with summed quantity, make-ready and revenue and the
//! maximum line count.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DiePrice, Process, ProductionRecord, ProductionSummary};

fn canonical_process(record: &ProductionRecord) -> Process {
    Process::from_raw(&record.process, &record.device)
}

fn is_printing(process: &Process, raw: &str) -> bool {
    matches!(process, Process::PrintingCx102 | Process::PrintingCx104) || raw == "Printing"
}

/// Counts make-readies for one fine setup group.
///
/// Die cutting counts distinct die numbers. Printing counts distinct
/// products times distinct product codes times the total of distinct makeup
/// styles per (product, code). Every other process counts distinct
/// (product, code) pairs.
fn make_ready_count(records: &[&ProductionRecord]) -> u32 {
    let Some(first) = records.first() else {
        return 0;
    };
    let process = canonical_process(first);

    if process == Process::DieCutting {
        let dies: BTreeSet<&str> = records.iter().map(|r| r.die_number.as_str()).collect();
        return dies.len() as u32;
    }

    if is_printing(&process, &first.process) {
        let products: BTreeSet<&str> = records.iter().map(|r| r.product.as_str()).collect();
        let codes: BTreeSet<&str> = records
            .iter()
            .map(|r| r.main_product_code.as_str())
            .collect();
        let mut styles_per_pair: BTreeMap<(&str, &str), BTreeSet<&str>> = BTreeMap::new();
        for record in records {
            styles_per_pair
                .entry((record.product.as_str(), record.main_product_code.as_str()))
                .or_default()
                .insert(record.makeup_style.as_str());
        }
        let style_total: usize = styles_per_pair.values().map(BTreeSet::len).sum();
        return (products.len() * codes.len() * style_total) as u32;
    }

    let pairs: BTreeSet<(&str, &str)> = records
        .iter()
        .map(|r| (r.product.as_str(), r.main_product_code.as_str()))
        .collect();
    pairs.len() as u32
}

fn price_for(record: &ProductionRecord, prices: &HashMap<(String, String), Decimal>) -> Decimal {
    prices
        .get(&(record.erp_num.clone(), record.main_product_code.clone()))
        .copied()
        .unwrap_or(Decimal::ZERO)
}

/// Aggregates raw production rows into one summary per (process, shift
/// date, employee).
///
/// Revenue is output quantity times the unit price looked up by (ERP
/// number, main product code); rows without a price contribute zero
/// revenue. The line count is the number of distinct devices the employee
/// ran for the process on the date.
pub fn summarize_production(
    records: &[ProductionRecord],
    die_prices: &[DiePrice],
) -> Vec<ProductionSummary> {
    let prices: HashMap<(String, String), Decimal> = die_prices
        .iter()
        .map(|p| ((p.erp_num.clone(), p.product_id.clone()), p.price))
        .collect();

    // Fine setup groups for make-ready counting.
    type SetupKey<'a> = (&'a str, Process, &'a str, &'a str, NaiveDate, &'a str);
    let mut setups: BTreeMap<SetupKey<'_>, Vec<&ProductionRecord>> = BTreeMap::new();
    for record in records {
        let key = (
            record.product.as_str(),
            canonical_process(record),
            record.device.as_str(),
            record.die_number.as_str(),
            record.shift_date,
            record.employee_id.as_str(),
        );
        setups.entry(key).or_default().push(record);
    }

    // Distinct devices per (employee, process, date).
    let mut devices: BTreeMap<(&str, Process, NaiveDate), BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        devices
            .entry((
                record.employee_id.as_str(),
                canonical_process(record),
                record.shift_date,
            ))
            .or_default()
            .insert(record.device.as_str());
    }

    let mut summaries: BTreeMap<(Process, NaiveDate, &str), ProductionSummary> = BTreeMap::new();
    for ((_, process, _, _, date, employee), group) in &setups {
        let summary = summaries
            .entry((process.clone(), *date, *employee))
            .or_insert_with(|| ProductionSummary {
                process: process.clone(),
                shift_date: *date,
                employee_id: employee.to_string(),
                output_qty: Decimal::ZERO,
                make_ready: 0,
                lines: devices
                    .get(&(*employee, process.clone(), *date))
                    .map_or(0, |d| d.len() as u32),
                revenue: Decimal::ZERO,
            });
        summary.make_ready += make_ready_count(group);
        for record in group {
            summary.output_qty += record.output_qty;
            summary.revenue += record.output_qty * price_for(record, &prices);
        }
    }

    summaries.into_values().collect()
}
