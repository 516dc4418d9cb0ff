//! Pay period and public holiday models.
//!
//! This module contains the [`PayPeriod`] and [`PublicHoliday`] types that
//! define the calculation window for salary and holiday-pay computations.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days in a bi-weekly payroll period.
pub const PERIOD_DAYS: i64 = 14;

/// A recognized public holiday.
///
/// The holiday list is supplied by a collaborator, already filtered to the
/// ten recognized holiday names.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     description: "Civic Holiday".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The holiday's name (e.g. "Labour Day").
    pub description: String,
}

/// A fixed 14-day payroll window.
///
/// Periods are laid out back to back from a configured anchor date; each
/// period runs from its start date through start + 13 days inclusive.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::biweekly(NaiveDate::from_ymd_opt(2025, 7, 28).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 8, 10).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates the bi-weekly period starting on the given date.
    pub fn biweekly(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: start_date + Duration::days(PERIOD_DAYS - 1),
        }
    }

    /// Creates the nth bi-weekly period from an anchor start date.
    ///
    /// `nth(anchor, 0)` is the period beginning on the anchor itself.
    pub fn nth(anchor: NaiveDate, index: u32) -> Self {
        Self::biweekly(anchor + Duration::days(PERIOD_DAYS * i64::from(index)))
    }

    /// Checks if a given date falls within this pay period, inclusive of
    /// both endpoints.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if any of the given holidays falls within this period.
    pub fn has_holiday(&self, holidays: &[PublicHoliday]) -> bool {
        holidays.iter().any(|h| self.contains_date(h.date))
    }

    /// The holidays from the given list that fall within this period.
    pub fn holidays_in_period<'a>(
        &self,
        holidays: &'a [PublicHoliday],
    ) -> impl Iterator<Item = &'a PublicHoliday> + use<'a> {
        let period = self.clone();
        holidays.iter().filter(move |h| period.contains_date(h.date))
    }
}
