//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::bonus::evaluate_bonuses;
use crate::normalize::normalize_timesheet;
use crate::report::{
    bonus_report, not_reported_report, payroll_report_stem, production_report_stem,
    salary_summary,
};
use crate::salary::run_payroll;

use super::request::{PayrollRequest, ProductionRequest};
use super::response::{ApiError, PayrollResponse, ProductionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/production", post(production_handler))
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Maps a JSON extractor rejection to an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Builds a 400 response from an API error body.
fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /production endpoint.
///
/// Normalizes the submitted timesheet, evaluates Silver/Gold production
/// bonuses against it, and returns the evaluated rows plus the derived
/// report tables.
async fn production_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing production bonus request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let config = state.config().config();
    let start_time = Instant::now();

    let normalized = normalize_timesheet(request.timesheet, &request.schedule, &config.normalizer);
    let rows = evaluate_bonuses(
        &request.production,
        &request.sheeting,
        &request.die_prices,
        &request.bonus_rates,
        &normalized.shifts,
    );

    let response = ProductionResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        bonus_report: bonus_report(&rows),
        not_reported: not_reported_report(&rows),
        report_stem: production_report_stem(&rows),
        rows,
    };

    info!(
        correlation_id = %correlation_id,
        row_count = response.rows.len(),
        awarded_count = response.bonus_report.len(),
        not_reported_count = response.not_reported.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Production bonus evaluation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /payroll endpoint.
///
/// Normalizes the submitted timesheet, runs the requested bi-weekly
/// periods, and returns the per-period salaries plus the normalization
/// logs (vacations, adjustments, schedule changes and alerts).
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if request.period_count == 0 {
        warn!(correlation_id = %correlation_id, "Rejected request with zero periods");
        return bad_request(ApiError::validation_error("period_count must be at least 1"));
    }

    let config = state.config().config();
    let start_time = Instant::now();

    let normalized = normalize_timesheet(request.timesheet, &request.schedule, &config.normalizer);
    let periods = run_payroll(
        &normalized.shifts,
        &request.pay_rates,
        &request.holidays,
        &request.bonus_rows,
        request.start_date,
        request.period_count,
        &config.payroll,
    );

    let response = PayrollResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        summary: salary_summary(&periods),
        vacations: normalized.vacations,
        adjustments: normalized.adjustments,
        schedule_changes: normalized.schedule_changes,
        schedule_alerts: normalized.schedule_alerts,
        report_stem: payroll_report_stem(&periods),
        periods,
    };

    info!(
        correlation_id = %correlation_id,
        period_count = request.period_count,
        salary_count = response.periods.len(),
        vacation_count = response.vacations.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Payroll calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{
        BonusRate, PayRateRecord, PayType, ProductionRecord, PublicHoliday, TimeRecord,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time_record(
        employee_id: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> TimeRecord {
        TimeRecord {
            employee_id: Some(employee_id.to_string()),
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            department: "Production".to_string(),
            start_date: Some(date.to_string()),
            start_time: Some(start_time.to_string()),
            end_date: Some(date.to_string()),
            end_time: Some(end_time.to_string()),
            job: None,
        }
    }

    fn production_record(employee_id: &str, date: &str, output_qty: &str) -> ProductionRecord {
        ProductionRecord {
            erp_num: "ERP100".to_string(),
            product: "Carton A".to_string(),
            main_product_code: "PC-100".to_string(),
            makeup_style: "Style 1".to_string(),
            process: "Die Cutting".to_string(),
            device: "DC-02".to_string(),
            die_number: "DIE-7".to_string(),
            shift_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            employee_id: employee_id.to_string(),
            output_qty: dec(output_qty),
        }
    }

    fn create_production_request() -> ProductionRequest {
        ProductionRequest {
            // 06:58 -> 07:00, 16:03 -> 16:00; 9h span, lunch leaves 8.5h
            timesheet: vec![time_record("EE030", "2025-08-05", "06:58", "16:03")],
            schedule: vec![],
            sheeting: vec![],
            production: vec![production_record("EE030", "2025-08-05", "42400")],
            die_prices: vec![],
            bonus_rates: vec![BonusRate {
                employee_id: "EE030".to_string(),
                name: "Ana Silva".to_string(),
                location: "Plant 1".to_string(),
                machine: "Die Cutter".to_string(),
                silver_rate: dec("2"),
                gold_rate: dec("3"),
            }],
        }
    }

    fn create_payroll_request() -> PayrollRequest {
        PayrollRequest {
            timesheet: vec![
                time_record("EE030", "2025-07-28", "07:00", "17:00"),
                time_record("EE030", "2025-07-30", "07:00", "17:00"),
            ],
            schedule: vec![],
            holidays: vec![PublicHoliday {
                date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
                description: "Civic Holiday".to_string(),
            }],
            pay_rates: vec![PayRateRecord {
                employee_id: "EE030".to_string(),
                pay_type: Some(PayType::Hourly),
                regular_rate: Some(dec("20")),
                overtime_rate: Some(dec("30")),
                trigger_hours_with_holiday: Some(dec("72")),
                trigger_hours_without_holiday: Some(dec("80")),
                skip_calculation: false,
                follow_clock_time: false,
            }],
            bonus_rows: vec![],
            start_date: NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(),
            period_count: 1,
        }
    }

    // ====== POST /production ======

    #[tokio::test]
    async fn test_api_001_production_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_production_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/production")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ProductionResponse = serde_json::from_slice(&body).unwrap();

        // 42400 output at 8.5h with make-ready 1 clears the Gold threshold;
        // 8.5h at the gold rate of 3 pays 25.50.
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.bonus_report.len(), 1);
        let row = &result.bonus_report[0];
        assert_eq!(row.employee_id, "EE030");
        assert!(row.gold);
        assert_eq!(row.working_hours, Some(dec("8.5")));
        assert_eq!(row.total_bonus(), dec("25.50"));
        assert!(result.not_reported.is_empty());
        assert_eq!(
            result.report_stem.as_deref(),
            Some("Production Report from 2025-08-05 to 2025-08-05")
        );
    }

    #[tokio::test]
    async fn test_api_002_production_without_timesheet_flags_not_reported() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_production_request();
        request.timesheet.clear();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/production")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ProductionResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert!(result.rows[0].not_reported_working_hour);
        assert!(result.bonus_report.is_empty());
        assert_eq!(result.not_reported.len(), 1);
        assert_eq!(result.not_reported[0].employee_id, "EE030");
        assert_eq!(result.not_reported[0].output_qty, dec("42400"));
    }

    #[tokio::test]
    async fn test_api_003_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/production")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_004_missing_timesheet_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        // JSON with no timesheet field at all
        let body = r#"{"production": []}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/production")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        // Check that error mentions the missing field
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("timesheet"),
            "Expected error message to mention missing field or timesheet, got: {}",
            error.message
        );
    }

    // ====== POST /payroll ======

    #[tokio::test]
    async fn test_api_005_payroll_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_payroll_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayrollResponse = serde_json::from_slice(&body).unwrap();

        // Two 10h days, lunch deducted, is 19h. The holiday in the period
        // drops the trigger to 72, so salary is 72 * 20 = 1440. No hours
        // on the holiday itself, so holiday pay is the lookback part only:
        // min(19, 72 + 80) / 10 * 20 = 38.
        assert_eq!(result.periods.len(), 1);
        let salary = &result.periods[0];
        assert_eq!(salary.employee_id, "EE030");
        assert_eq!(salary.total_hours, dec("19.0"));
        assert_eq!(salary.salary, dec("1440"));
        assert_eq!(salary.holiday_pay_total(), dec("38"));
        assert_eq!(salary.total_compensation, dec("1478"));
        assert!(salary.pay_rate_matched);

        assert_eq!(result.summary.len(), 1);
        assert_eq!(result.summary[0].employee_name, "Ana Silva");
        assert_eq!(
            result.report_stem.as_deref(),
            Some("Payroll Report from 2025-07-28 to 2025-08-10")
        );
    }

    #[tokio::test]
    async fn test_api_006_payroll_rejects_zero_period_count() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_payroll_request();
        request.period_count = 0;
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("period_count"));
    }

    #[tokio::test]
    async fn test_api_007_payroll_missing_content_type_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_payroll_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_api_008_payroll_empty_timesheet_returns_empty_periods() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_payroll_request();
        request.timesheet.clear();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayrollResponse = serde_json::from_slice(&body).unwrap();

        assert!(result.periods.is_empty());
        assert!(result.summary.is_empty());
        assert!(result.report_stem.is_none());
    }
}
