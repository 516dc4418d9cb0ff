//! Response types for the payroll engine API.
//!
//! This module defines the success envelopes for the `/production` and
//! `/payroll` endpoints plus the error response structures and error
//! handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    BonusRow, PeriodSalary, ScheduleAlert, ScheduleChange, ShiftAdjustment, VacationEntry,
};
use crate::report::{NotReportedSummary, SalarySummaryRow};

/// Response body for the `/production` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionResponse {
    /// Unique identifier for this evaluation.
    pub calculation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// All evaluated bonus rows, one per (process, shift date, employee).
    pub rows: Vec<BonusRow>,
    /// The rows that earned a Silver or Gold bonus.
    pub bonus_report: Vec<BonusRow>,
    /// Per-employee totals for production with no matching timesheet hours.
    pub not_reported: Vec<NotReportedSummary>,
    /// Suggested file stem for the rendered report, when rows exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_stem: Option<String>,
}

/// Response body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Per-period, per-employee salary results.
    pub periods: Vec<PeriodSalary>,
    /// Flat summary rows over all calculated periods.
    pub summary: Vec<SalarySummaryRow>,
    /// Consolidated single-day vacation runs from the timesheet.
    pub vacations: Vec<VacationEntry>,
    /// Business-hour and lunch adjustments applied during normalization.
    pub adjustments: Vec<ShiftAdjustment>,
    /// Start-time corrections applied from the posted schedule.
    pub schedule_changes: Vec<ScheduleChange>,
    /// Schedule discrepancies too large to auto-correct.
    pub schedule_alerts: Vec<ScheduleAlert>,
    /// Suggested file stem for the rendered report, when periods exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_stem: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRecord {
                employee_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid record for employee '{}': {}", employee_id, message),
                    "The submitted row contains invalid information",
                ),
            },
            EngineError::RateNotFound {
                employee_id,
                machine,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_NOT_FOUND",
                    format!(
                        "Bonus rate not found for employee '{}' on machine '{}'",
                        employee_id, machine
                    ),
                    "The bonus-rate table has no row for the requested employee and machine",
                ),
            },
            EngineError::PeriodError {
                period_start,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PERIOD_ERROR",
                    format!("Salary computation failed for period starting {}", period_start),
                    message,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_record_maps_to_400() {
        let engine_error = EngineError::InvalidRecord {
            employee_id: "EE042".to_string(),
            message: "end time before start time".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RECORD");
        assert!(api_error.error.message.contains("EE042"));
    }

    #[test]
    fn test_rate_not_found_maps_to_400() {
        let engine_error = EngineError::RateNotFound {
            employee_id: "EE030".to_string(),
            machine: "Sheeter".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "RATE_NOT_FOUND");
    }

    #[test]
    fn test_period_error_maps_to_500() {
        let engine_error = EngineError::PeriodError {
            period_start: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            message: "no pay rates loaded".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "PERIOD_ERROR");
        assert!(api_error.error.message.contains("2025-08-04"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
