//! Chart data tables.
//!
//! Pre-aggregated series behind the performance charts a rendering
//! collaborator draws: production figures summed by (process, location) and
//! by (employee, process). The by-employee series are display-filtered so
//! the charts only show meaningful bars.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::BonusRow;

/// Location label used for rows with no matched rate row.
const UNKNOWN_LOCATION: &str = "Unknown";

/// Summed production figures for one chart group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartTotals {
    /// Summed working hours (rows without hours contribute nothing).
    pub working_hours: Decimal,
    /// Summed make-ready count.
    pub make_ready: Decimal,
    /// Summed output quantity.
    pub output_qty: Decimal,
    /// Summed revenue.
    pub revenue: Decimal,
}

impl ChartTotals {
    fn add(&mut self, row: &BonusRow) {
        self.working_hours += row.working_hours.unwrap_or(Decimal::ZERO);
        self.make_ready += Decimal::from(row.make_ready);
        self.output_qty += row.output_qty;
        self.revenue += row.revenue;
    }
}

/// Which figure a chart series plots, with its display filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    /// Working hours; bars shown from 8 hours up.
    WorkingHours,
    /// Make-ready count; zero bars hidden.
    MakeReady,
    /// Output quantity; bars shown above 100.
    OutputQty,
    /// Revenue; bars shown above 100.
    Revenue,
}

impl ChartMetric {
    fn value(self, totals: &ChartTotals) -> Decimal {
        match self {
            ChartMetric::WorkingHours => totals.working_hours,
            ChartMetric::MakeReady => totals.make_ready,
            ChartMetric::OutputQty => totals.output_qty,
            ChartMetric::Revenue => totals.revenue,
        }
    }

    fn displayed(self, value: Decimal) -> bool {
        match self {
            ChartMetric::WorkingHours => value >= Decimal::from(8),
            ChartMetric::MakeReady => value > Decimal::ZERO,
            ChartMetric::OutputQty | ChartMetric::Revenue => value > Decimal::from(100),
        }
    }
}

/// Sums production figures per (process name, location).
pub fn totals_by_process_location(rows: &[BonusRow]) -> BTreeMap<(String, String), ChartTotals> {
    let mut totals: BTreeMap<(String, String), ChartTotals> = BTreeMap::new();
    for row in rows {
        let location = row
            .location
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
        totals
            .entry((row.process.name().to_string(), location))
            .or_default()
            .add(row);
    }
    totals
}

/// One metric's series per (employee, process name), display-filtered.
pub fn employee_process_series(
    rows: &[BonusRow],
    metric: ChartMetric,
) -> Vec<((String, String), Decimal)> {
    let mut totals: BTreeMap<(String, String), ChartTotals> = BTreeMap::new();
    for row in rows {
        totals
            .entry((row.employee_id.clone(), row.process.name().to_string()))
            .or_default()
            .add(row);
    }
    totals
        .into_iter()
        .map(|(key, group)| (key, metric.value(&group)))
        .filter(|(_, value)| metric.displayed(*value))
        .collect()
}
