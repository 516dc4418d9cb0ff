//! Configuration loading and management for the payroll engine.
//!
//! Policy constants that are organization-specific — the business-hours
//! override and its exempt list, the schedule tolerance, the lunch rule,
//! and payroll defaults — are configuration, not literals. See
//! `config/payroll.yaml` for the shipped values.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("config/payroll.yaml").unwrap();
//! println!("Lunch threshold: {}h", loader.config().normalizer.lunch_threshold_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, NormalizerConfig, PayrollConfig};
