//! Production bonus threshold tables.
//!
//! These tables encode the plant's agreed performance thresholds verbatim.
//! Hours are stored as centihours (hours times 100) so the tables stay
//! integer consts; [`ThresholdRow::min_hours`] converts back to a
//! [`Decimal`]. Do not edit values without a signed-off revision of the
//! bonus agreement.

use rust_decimal::Decimal;

/// One make-ready keyed threshold: at exactly this make-ready count, the
/// row qualifies when hours and output both reach their minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdRow {
    /// Exact make-ready count this row applies to.
    pub make_ready: u32,
    /// Minimum working hours, in centihours.
    pub min_hours_centi: i64,
    /// Minimum output quantity.
    pub min_output: i64,
}

impl ThresholdRow {
    const fn new(make_ready: u32, min_hours_centi: i64, min_output: i64) -> Self {
        Self {
            make_ready,
            min_hours_centi,
            min_output,
        }
    }

    /// Minimum working hours as a decimal.
    pub fn min_hours(&self) -> Decimal {
        Decimal::new(self.min_hours_centi, 2)
    }

    /// Minimum output quantity as a decimal.
    pub fn min_output(&self) -> Decimal {
        Decimal::from(self.min_output)
    }
}

/// A die-cutting hour band: applies when `lower < hours` and, unless the
/// band is open-ended, `hours <= upper`.
#[derive(Debug, Clone, Copy)]
pub struct HourBand {
    /// Exclusive lower hour bound.
    pub lower_hours: u32,
    /// Inclusive upper hour bound; `None` for the open top band.
    pub upper_hours: Option<u32>,
    /// Threshold rows for make-ready counts 1 through 4. Counts of 5 or
    /// more qualify with any positive hours.
    pub rows: &'static [ThresholdRow],
}

impl HourBand {
    /// Whether `hours` falls inside this band.
    pub fn contains(&self, hours: Decimal) -> bool {
        let lower = Decimal::from(self.lower_hours);
        match self.upper_hours {
            Some(upper) => hours > lower && hours <= Decimal::from(upper),
            None => hours >= lower,
        }
    }
}

/// A printing ceiling table: the whole table only applies when hours do not
/// exceed its ceiling.
#[derive(Debug, Clone, Copy)]
pub struct CeilingTable {
    /// Inclusive hour ceiling for the table.
    pub ceiling_hours: u32,
    /// Threshold rows keyed by exact make-ready count.
    pub rows: &'static [ThresholdRow],
}

/// A gluing/window-patching revenue band with a single revenue minimum.
///
/// When more than one line was run, the minimum scales to
/// 0.75 times the line count.
#[derive(Debug, Clone, Copy)]
pub struct RevenueBand {
    /// Exclusive lower hour bound.
    pub lower_hours: u32,
    /// Inclusive upper hour bound; `None` for the open top band.
    pub upper_hours: Option<u32>,
    /// Minimum revenue on a single line.
    pub min_revenue: i64,
}

impl RevenueBand {
    /// Whether `hours` falls inside this band.
    pub fn contains(&self, hours: Decimal) -> bool {
        let lower = Decimal::from(self.lower_hours);
        match self.upper_hours {
            Some(upper) => hours > lower && hours <= Decimal::from(upper),
            None => hours >= lower,
        }
    }

    /// The revenue minimum for the given line count.
    pub fn min_revenue(&self, lines: u32) -> Decimal {
        let base = Decimal::from(self.min_revenue);
        if lines > 1 {
            base * Decimal::new(75, 2) * Decimal::from(lines)
        } else {
            base
        }
    }
}

const fn row(make_ready: u32, min_hours_centi: i64, min_output: i64) -> ThresholdRow {
    ThresholdRow::new(make_ready, min_hours_centi, min_output)
}

/// Die cutting, Silver tier.
pub const DIE_CUTTING_SILVER: &[HourBand] = &[
    HourBand {
        lower_hours: 8,
        upper_hours: Some(10),
        rows: &[
            row(1, 800, 34_000),
            row(2, 600, 25_800),
            row(3, 400, 17_200),
            row(4, 200, 8_600),
        ],
    },
    HourBand {
        lower_hours: 10,
        upper_hours: Some(12),
        rows: &[
            row(1, 1_000, 43_000),
            row(2, 800, 34_400),
            row(3, 600, 25_800),
            row(4, 400, 17_200),
        ],
    },
    HourBand {
        lower_hours: 12,
        upper_hours: None,
        rows: &[
            row(1, 1_200, 51_600),
            row(2, 1_000, 43_000),
            row(3, 800, 34_400),
            row(4, 600, 25_800),
        ],
    },
];

/// Die cutting, Gold tier.
pub const DIE_CUTTING_GOLD: &[HourBand] = &[
    HourBand {
        lower_hours: 8,
        upper_hours: Some(10),
        rows: &[
            row(1, 800, 42_400),
            row(2, 650, 34_450),
            row(3, 500, 26_500),
            row(4, 350, 18_550),
        ],
    },
    HourBand {
        lower_hours: 10,
        upper_hours: Some(12),
        rows: &[
            row(1, 1_000, 53_000),
            row(2, 850, 45_050),
            row(3, 700, 37_100),
            row(4, 550, 29_150),
        ],
    },
    HourBand {
        lower_hours: 12,
        upper_hours: None,
        rows: &[
            row(1, 1_200, 63_600),
            row(2, 1_050, 55_650),
            row(3, 900, 47_700),
            row(4, 750, 39_750),
        ],
    },
];

/// Gluing and window patching, Silver tier.
pub const GLUING_SILVER: &[RevenueBand] = &[
    RevenueBand {
        lower_hours: 8,
        upper_hours: Some(10),
        min_revenue: 28_000,
    },
    RevenueBand {
        lower_hours: 10,
        upper_hours: Some(12),
        min_revenue: 35_000,
    },
    RevenueBand {
        lower_hours: 12,
        upper_hours: None,
        min_revenue: 42_000,
    },
];

/// Gluing and window patching, Gold tier.
pub const GLUING_GOLD: &[RevenueBand] = &[
    RevenueBand {
        lower_hours: 8,
        upper_hours: Some(10),
        min_revenue: 32_000,
    },
    RevenueBand {
        lower_hours: 10,
        upper_hours: Some(12),
        min_revenue: 40_000,
    },
    RevenueBand {
        lower_hours: 12,
        upper_hours: None,
        min_revenue: 48_000,
    },
];

/// CX102 press, Silver tier.
pub const PRINTING_CX102_SILVER: &[CeilingTable] = &[
    CeilingTable {
        ceiling_hours: 8,
        rows: &[
            row(1, 800, 64_000),
            row(2, 700, 56_000),
            row(3, 600, 48_000),
            row(4, 500, 40_000),
            row(5, 400, 32_000),
            row(6, 300, 24_000),
            row(7, 200, 16_000),
            row(8, 100, 0),
            row(9, 0, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 10,
        rows: &[
            row(1, 1_000, 80_000),
            row(2, 900, 72_000),
            row(3, 800, 64_000),
            row(4, 700, 56_000),
            row(5, 600, 48_000),
            row(6, 500, 40_000),
            row(7, 400, 32_000),
            row(8, 300, 24_000),
            row(9, 200, 16_000),
            row(10, 100, 0),
            row(11, 0, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 12,
        rows: &[
            row(1, 1_200, 96_000),
            row(2, 1_100, 88_000),
            row(3, 1_000, 80_000),
            row(4, 900, 72_000),
            row(5, 800, 64_000),
            row(6, 700, 56_000),
            row(7, 600, 48_000),
            row(8, 500, 40_000),
            row(9, 400, 32_000),
            row(10, 300, 24_000),
            row(11, 200, 16_000),
            row(12, 100, 0),
            row(13, 0, 0),
        ],
    },
];

/// CX104 press, Silver tier.
pub const PRINTING_CX104_SILVER: &[CeilingTable] = &[
    CeilingTable {
        ceiling_hours: 8,
        rows: &[
            row(1, 800, 68_000),
            row(2, 700, 59_500),
            row(3, 600, 51_000),
            row(4, 500, 42_500),
            row(5, 400, 34_000),
            row(6, 300, 25_500),
            row(7, 200, 17_000),
            row(8, 100, 0),
            row(9, 0, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 10,
        rows: &[
            row(1, 1_000, 85_000),
            row(2, 900, 76_500),
            row(3, 800, 68_000),
            row(4, 700, 59_500),
            row(5, 600, 51_000),
            row(6, 500, 42_500),
            row(7, 400, 34_000),
            row(8, 300, 25_500),
            row(9, 200, 17_000),
            row(10, 100, 0),
            row(11, 0, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 12,
        rows: &[
            row(1, 1_200, 102_000),
            row(2, 1_100, 93_500),
            row(3, 1_000, 85_000),
            row(4, 900, 76_500),
            row(5, 800, 68_000),
            row(6, 700, 59_500),
            row(7, 600, 51_000),
            row(8, 500, 42_500),
            row(9, 400, 34_000),
            row(10, 300, 25_500),
            row(11, 200, 17_000),
            row(12, 100, 0),
            row(13, 0, 0),
        ],
    },
];

/// CX102 press, Gold tier.
pub const PRINTING_CX102_GOLD: &[CeilingTable] = &[
    CeilingTable {
        ceiling_hours: 8,
        rows: &[
            row(1, 800, 72_000),
            row(2, 715, 64_350),
            row(3, 630, 56_700),
            row(4, 545, 49_050),
            row(5, 460, 41_400),
            row(6, 375, 33_750),
            row(7, 290, 26_100),
            row(8, 205, 18_450),
            row(9, 120, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 10,
        rows: &[
            row(1, 1_000, 90_000),
            row(2, 915, 82_350),
            row(3, 830, 74_700),
            row(4, 745, 67_050),
            row(5, 660, 59_400),
            row(6, 575, 51_750),
            row(7, 490, 44_100),
            row(8, 405, 36_450),
            row(9, 320, 28_800),
            row(10, 235, 21_150),
            row(11, 150, 13_500),
            row(12, 65, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 12,
        rows: &[
            row(1, 1_200, 108_000),
            row(2, 1_115, 100_350),
            row(3, 1_030, 92_700),
            row(4, 945, 85_050),
            row(5, 860, 77_400),
            row(6, 775, 69_750),
            row(7, 690, 62_100),
            row(8, 605, 54_450),
            row(9, 520, 46_800),
            row(10, 435, 39_150),
            row(11, 350, 31_500),
            row(12, 265, 23_850),
            row(13, 180, 16_200),
            row(14, 95, 0),
        ],
    },
];

/// CX104 press, Gold tier.
pub const PRINTING_CX104_GOLD: &[CeilingTable] = &[
    CeilingTable {
        ceiling_hours: 8,
        rows: &[
            row(1, 800, 76_000),
            row(2, 715, 67_925),
            row(3, 630, 59_850),
            row(4, 545, 51_775),
            row(5, 460, 43_700),
            row(6, 375, 35_625),
            row(7, 290, 27_550),
            row(8, 205, 19_475),
            row(9, 120, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 10,
        rows: &[
            row(1, 1_000, 95_000),
            row(2, 915, 86_925),
            row(3, 830, 78_850),
            row(4, 745, 70_775),
            row(5, 660, 62_700),
            row(6, 575, 54_625),
            row(7, 490, 46_550),
            row(8, 405, 38_475),
            row(9, 320, 30_400),
            row(10, 235, 22_325),
            row(11, 150, 14_250),
            row(12, 65, 0),
        ],
    },
    CeilingTable {
        ceiling_hours: 12,
        rows: &[
            row(1, 1_200, 114_000),
            row(2, 1_115, 105_925),
            row(3, 1_030, 97_850),
            row(4, 945, 89_775),
            row(5, 860, 81_700),
            row(6, 775, 73_625),
            row(7, 690, 65_550),
            row(8, 605, 57_475),
            row(9, 520, 49_400),
            row(10, 435, 41_325),
            row(11, 350, 33_250),
            row(12, 265, 25_175),
            row(13, 180, 17_100),
            row(14, 95, 0),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_consecutive_keys(rows: &[ThresholdRow]) {
        for (i, threshold) in rows.iter().enumerate() {
            assert_eq!(
                threshold.make_ready,
                i as u32 + 1,
                "make-ready keys must run consecutively from 1"
            );
        }
    }

    #[test]
    fn test_die_cutting_bands_cover_one_through_four() {
        for band in DIE_CUTTING_SILVER.iter().chain(DIE_CUTTING_GOLD) {
            assert_eq!(band.rows.len(), 4);
            assert_consecutive_keys(band.rows);
        }
    }

    #[test]
    fn test_printing_tables_have_consecutive_keys() {
        let all = PRINTING_CX102_SILVER
            .iter()
            .chain(PRINTING_CX104_SILVER)
            .chain(PRINTING_CX102_GOLD)
            .chain(PRINTING_CX104_GOLD);
        for table in all {
            assert_consecutive_keys(table.rows);
        }
    }

    #[test]
    fn test_printing_silver_row_counts_match_ceilings() {
        for tables in [PRINTING_CX102_SILVER, PRINTING_CX104_SILVER] {
            assert_eq!(tables[0].rows.len(), 9);
            assert_eq!(tables[1].rows.len(), 11);
            assert_eq!(tables[2].rows.len(), 13);
        }
    }

    #[test]
    fn test_printing_gold_row_counts_match_ceilings() {
        for tables in [PRINTING_CX102_GOLD, PRINTING_CX104_GOLD] {
            assert_eq!(tables[0].rows.len(), 9);
            assert_eq!(tables[1].rows.len(), 12);
            assert_eq!(tables[2].rows.len(), 14);
        }
    }

    #[test]
    fn test_hour_band_bounds() {
        let band = DIE_CUTTING_SILVER[0];
        assert!(!band.contains(dec("8")));
        assert!(band.contains(dec("8.5")));
        assert!(band.contains(dec("10")));
        assert!(!band.contains(dec("10.5")));

        let open = DIE_CUTTING_SILVER[2];
        assert!(open.contains(dec("12")));
        assert!(open.contains(dec("16")));
    }

    #[test]
    fn test_fractional_gold_minimum_hours() {
        let table = PRINTING_CX102_GOLD[0];
        assert_eq!(table.rows[1].min_hours(), dec("7.15"));
        assert_eq!(table.rows[1].min_output(), dec("64350"));
    }

    #[test]
    fn test_gluing_scaling_for_multiple_lines() {
        let band = GLUING_SILVER[0];
        assert_eq!(band.min_revenue(1), dec("28000"));
        // 28000 * 0.75 * 2
        assert_eq!(band.min_revenue(2), dec("42000"));
    }

    #[test]
    fn test_gold_minimums_exceed_silver() {
        for (silver, gold) in GLUING_SILVER.iter().zip(GLUING_GOLD) {
            assert!(gold.min_revenue > silver.min_revenue);
        }
        for (silver, gold) in DIE_CUTTING_SILVER.iter().zip(DIE_CUTTING_GOLD) {
            for (s, g) in silver.rows.iter().zip(gold.rows) {
                assert!(g.min_output >= s.min_output);
            }
        }
    }
}
