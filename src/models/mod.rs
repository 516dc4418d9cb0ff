//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_period;
mod pay_rate;
mod production;
mod salary;
mod time_record;

pub use pay_period::{PayPeriod, PublicHoliday, PERIOD_DAYS};
pub use pay_rate::{PayRateRecord, PayType};
pub use production::{
    BonusRate, BonusRow, DiePrice, Process, ProductionRecord, ProductionSummary, SheetingRecord,
};
pub use salary::{HoursHistory, PeriodSalary};
pub use time_record::{
    NormalizedShift, ScheduleAlert, ScheduleChange, ScheduleEntry, ShiftAdjustment, TimeRecord,
    VacationEntry,
};
