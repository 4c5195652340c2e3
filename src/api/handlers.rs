//! HTTP request handlers for the Child Support Assessment Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_validated, check_wage_reduction, validate_amount};
use crate::error::EngineError;
use crate::models::{CalculationRecord, WageRecord};

use super::request::{CalculationRequest, WageCheckRequest, WageRecordRequest};
use super::response::{ApiError, ApiErrorResponse, WageRecordResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/history", get(history_handler).delete(clear_history_handler))
        .route("/wage-check", post(wage_check_handler))
        .route(
            "/wages",
            post(record_wage_handler)
                .get(wages_handler)
                .delete(clear_wages_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Validates the inputs, runs the assessment against the selected rate year,
/// saves it to the calculation history and returns the saved record.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rates = match state.config().resolve_rates(request.financial_year.as_deref()) {
        Ok(rates) => rates,
        Err(err) => return error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    let result = match calculate_validated(&request.inputs, rates) {
        Ok(result) => result,
        Err(err) => return error_response(correlation_id, err),
    };
    let duration = start_time.elapsed();

    let record = state.history().save(request.inputs, result, Utc::now());

    info!(
        correlation_id = %correlation_id,
        calculation_id = record.id,
        financial_year = %rates.financial_year,
        final_amount = %record.result.final_amount,
        offset_applied = record.result.offset_applied,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    json_response(StatusCode::OK, record)
}

/// Handler for GET /history. Returns saved calculations, oldest first.
async fn history_handler(State(state): State<AppState>) -> Response {
    let records: Vec<CalculationRecord> = state.history().records().cloned().collect();
    json_response(StatusCode::OK, records)
}

/// Handler for DELETE /history. Removes every saved calculation.
async fn clear_history_handler(State(state): State<AppState>) -> Response {
    state.history().clear();
    info!("Calculation history cleared");
    StatusCode::NO_CONTENT.into_response()
}

/// Handler for POST /wage-check.
async fn wage_check_handler(
    State(state): State<AppState>,
    payload: Result<Json<WageCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let validated = validate_amount("new_wage", request.new_wage)
        .and_then(|_| validate_amount("previous_wage", request.previous_wage));
    if let Err(err) = validated {
        return error_response(correlation_id, err);
    }

    let rates = match state.config().resolve_rates(request.financial_year.as_deref()) {
        Ok(rates) => rates,
        Err(err) => return error_response(correlation_id, err),
    };

    let check = check_wage_reduction(request.new_wage, request.previous_wage, rates);
    info!(
        correlation_id = %correlation_id,
        percentage_drop = %check.percentage_drop,
        qualifies = check.qualifies,
        "Wage check completed"
    );

    json_response(StatusCode::OK, check)
}

/// The reference wage of the most recent saved calculation, if one was given.
fn latest_reference_wage(state: &AppState) -> Option<Decimal> {
    state
        .history()
        .latest()
        .map(|record| record.inputs.reference_wage)
        .filter(|wage| *wage > Decimal::ZERO)
}

/// Handler for POST /wages.
///
/// Records a wage and checks it against the previously recorded one with the
/// current rate table. Before any wage is recorded, the reference wage of the
/// latest saved calculation stands in as the previous wage.
async fn record_wage_handler(
    State(state): State<AppState>,
    payload: Result<Json<WageRecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rates = match validate_amount("wage", request.wage)
        .and_then(|_| state.config().current_rates())
    {
        Ok(rates) => rates,
        Err(err) => return error_response(correlation_id, err),
    };

    let reference_wage = latest_reference_wage(&state);
    let (record, check) = {
        let mut wages = state.wages();
        let check = wages
            .latest()
            .map(|r| r.wage)
            .or(reference_wage)
            .map(|prev| check_wage_reduction(request.wage, prev, rates));
        let record = wages.record(request.wage, Utc::now());
        (record, check)
    };

    if let Some(check) = check.as_ref().filter(|c| c.qualifies) {
        info!(
            correlation_id = %correlation_id,
            percentage_drop = %check.percentage_drop,
            "Wage reduction qualifies for a new estimate"
        );
    }

    json_response(StatusCode::OK, WageRecordResponse { record, check })
}

/// Handler for GET /wages. Returns recorded wages, oldest first.
async fn wages_handler(State(state): State<AppState>) -> Response {
    let records: Vec<WageRecord> = state.wages().records().cloned().collect();
    json_response(StatusCode::OK, records)
}

/// Handler for DELETE /wages. Removes every recorded wage.
async fn clear_wages_handler(State(state): State<AppState>) -> Response {
    state.wages().clear();
    info!("Wage history cleared");
    StatusCode::NO_CONTENT.into_response()
}
