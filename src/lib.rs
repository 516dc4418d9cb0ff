//! Payroll and production-bonus engine for a carton factory.
//!
//! This crate normalizes raw clock-system timesheets, evaluates Silver/Gold
//! production bonuses against per-process threshold tables, and calculates
//! bi-weekly salaries including overtime and statutory-holiday pay.

#![warn(missing_docs)]

pub mod aggregate;
pub mod api;
pub mod bonus;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod report;
pub mod salary;
