//! Silver/Gold eligibility evaluation for non-sheeting processes.

use rust_decimal::Decimal;

use crate::bonus::tables::{
    CeilingTable, HourBand, RevenueBand, DIE_CUTTING_GOLD, DIE_CUTTING_SILVER, GLUING_GOLD,
    GLUING_SILVER, PRINTING_CX102_GOLD, PRINTING_CX102_SILVER, PRINTING_CX104_GOLD,
    PRINTING_CX104_SILVER,
};
use crate::models::{Process, ProductionSummary};

/// Make-ready counts at or above this qualify a die-cutting shift with any
/// positive hours, regardless of output.
const DIE_CUTTING_CATCH_ALL_MAKE_READY: u32 = 5;

fn die_cutting_eligible(bands: &[HourBand], hours: Decimal, summary: &ProductionSummary) -> bool {
    let Some(band) = bands.iter().find(|band| band.contains(hours)) else {
        return false;
    };
    if summary.make_ready >= DIE_CUTTING_CATCH_ALL_MAKE_READY {
        return hours > Decimal::ZERO && summary.output_qty >= Decimal::ZERO;
    }
    band.rows.iter().any(|row| {
        summary.make_ready == row.make_ready
            && hours >= row.min_hours()
            && summary.output_qty >= row.min_output()
    })
}

fn revenue_eligible(bands: &[RevenueBand], hours: Decimal, summary: &ProductionSummary) -> bool {
    bands
        .iter()
        .any(|band| band.contains(hours) && summary.revenue >= band.min_revenue(summary.lines))
}

fn printing_eligible(
    tables: &[CeilingTable],
    hours: Decimal,
    summary: &ProductionSummary,
) -> bool {
    tables.iter().any(|table| {
        hours <= Decimal::from(table.ceiling_hours)
            && table.rows.iter().any(|row| {
                summary.make_ready == row.make_ready
                    && hours >= row.min_hours()
                    && summary.output_qty >= row.min_output()
            })
    })
}

/// Whether a production summary reaches the Silver tier at the given hours.
///
/// `Other` processes and Sheeting (which has no Silver tier) never qualify.
pub fn silver_eligible(summary: &ProductionSummary, hours: Decimal) -> bool {
    match &summary.process {
        Process::DieCutting => die_cutting_eligible(DIE_CUTTING_SILVER, hours, summary),
        Process::Gluing | Process::WindowPatching => {
            revenue_eligible(GLUING_SILVER, hours, summary)
        }
        Process::PrintingCx102 => printing_eligible(PRINTING_CX102_SILVER, hours, summary),
        Process::PrintingCx104 => printing_eligible(PRINTING_CX104_SILVER, hours, summary),
        Process::Sheeting | Process::Other(_) => false,
    }
}

/// Whether a production summary reaches the Gold tier at the given hours.
pub fn gold_eligible(summary: &ProductionSummary, hours: Decimal) -> bool {
    match &summary.process {
        Process::DieCutting => die_cutting_eligible(DIE_CUTTING_GOLD, hours, summary),
        Process::Gluing | Process::WindowPatching => revenue_eligible(GLUING_GOLD, hours, summary),
        Process::PrintingCx102 => printing_eligible(PRINTING_CX102_GOLD, hours, summary),
        Process::PrintingCx104 => printing_eligible(PRINTING_CX104_GOLD, hours, summary),
        Process::Sheeting | Process::Other(_) => false,
    }
}
