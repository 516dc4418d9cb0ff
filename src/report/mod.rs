//! Report tables.
//!
//! Flat, renderer-agnostic tables assembled from bonus rows and period
//! salaries. Rendering (spreadsheets, PDF charts) is a collaborator's
//! concern; this module only shapes and filters the data.

pub mod assembler;
pub mod charts;

pub use assembler::{
    bonus_report, not_reported_report, payroll_report_stem, production_report_stem,
    salary_summary, NotReportedSummary, SalarySummaryRow,
};
pub use charts::{
    employee_process_series, totals_by_process_location, ChartMetric, ChartTotals,
};
