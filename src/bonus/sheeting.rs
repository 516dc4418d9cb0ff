//! Sheeting performance rules.
//!
//! Sheeting has no Silver tier. Gold thresholds step up with hours worked;
//! past twelve hours the sheet minimum grows by 10 000 sheets for each
//! whole additional hour.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::SheetingRecord;

/// Whether a sheeting shift reaches the Gold tier.
///
/// # Example
///
/// ```
/// use payroll_engine::bonus::sheeting_gold;
/// use rust_decimal::Decimal;
///
/// assert!(sheeting_gold(Decimal::from(8), Decimal::from(80_000)));
/// assert!(!sheeting_gold(Decimal::from(7), Decimal::from(80_000)));
/// ```
pub fn sheeting_gold(hours: Decimal, sheets: Decimal) -> bool {
    let h = |n: i64| Decimal::from(n);
    if hours > h(7) && hours <= h(8) {
        sheets >= h(80_000)
    } else if hours > h(8) && hours <= h(10) {
        sheets >= h(100_000)
    } else if hours > h(10) && hours < h(12) {
        sheets >= h(120_000)
    } else if hours >= h(12) {
        let extra_hours = (hours - h(12)).floor();
        sheets >= h(120_000) + extra_hours * h(10_000)
    } else {
        false
    }
}

/// Sums sheet counts per (employee id, shift date).
pub fn sheets_by_employee_date(
    records: &[SheetingRecord],
) -> BTreeMap<(String, NaiveDate), Decimal> {
    let mut sheets = BTreeMap::new();
    for record in records {
        *sheets
            .entry((record.employee_id.clone(), record.shift_date()))
            .or_insert(Decimal::ZERO) += record.sheet_count;
    }
    sheets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_gold_band_boundaries() {
        assert!(sheeting_gold(dec("7.5"), dec("80000")));
        assert!(!sheeting_gold(dec("7.5"), dec("79999")));
        assert!(sheeting_gold(dec("9"), dec("100000")));
        assert!(!sheeting_gold(dec("9"), dec("99999")));
        assert!(sheeting_gold(dec("11"), dec("120000")));
    }

    #[test]
    fn test_seven_hours_or_less_never_gold() {
        assert!(!sheeting_gold(dec("7"), dec("500000")));
        assert!(!sheeting_gold(dec("0"), dec("500000")));
    }

    #[test]
    fn test_open_band_grows_per_whole_hour() {
        // At 12.5h the floor of the extra hours is 0, so 120000 suffices.
        assert!(sheeting_gold(dec("12.5"), dec("120000")));
        assert!(!sheeting_gold(dec("12.5"), dec("119999")));
        // At 14h two whole extra hours raise the bar to 140000.
        assert!(sheeting_gold(dec("14"), dec("140000")));
        assert!(!sheeting_gold(dec("14"), dec("139999")));
    }

    #[test]
    fn test_sheet_sums_group_by_employee_and_date() {
        let record = |time: &str, count: &str| SheetingRecord {
            employee_id: "EE030".to_string(),
            start_time: NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").unwrap(),
            sheet_count: dec(count),
        };
        let records = vec![
            record("2025-08-05 07:00:00", "40000"),
            record("2025-08-05 13:00:00", "45000"),
            record("2025-08-06 07:00:00", "90000"),
        ];
        let sheets = sheets_by_employee_date(&records);
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(sheets[&("EE030".to_string(), date)], dec("85000"));
        assert_eq!(sheets.len(), 2);
    }
}
