//! HTTP request handlers for the Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_settlement_report, normalize_inputs};
use crate::error::EngineError;
use crate::models::SettlementReport;
use crate::payments::summarize_sales;
use crate::report::render_text_report;

use super::request::{PaymentsSummaryQuery, SettlementRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report/text", post(text_report_handler))
        .route("/payments/summary", get(payments_summary_handler))
        .with_state(state)
}

/// Converts a JSON body rejection into an API error.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    ApiErrorResponse::bad_request(error)
}

/// Normalizes a request and computes its settlement report.
fn settle(
    state: &AppState,
    correlation_id: Uuid,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Result<SettlementReport, ApiErrorResponse> {
    let Json(request) = payload.map_err(|rejection| json_rejection_error(correlation_id, rejection))?;

    let inputs = normalize_inputs(&request.raw_inputs()).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Settlement input rejected"
        );
        ApiErrorResponse::from(err)
    })?;

    let start_time = Instant::now();
    let report = build_settlement_report(
        &inputs,
        state.config().constants(),
        &request.invoice_number,
        &request.resolved_date_range(),
    );

    info!(
        correlation_id = %correlation_id,
        calculation_id = %report.calculation_id,
        custom_expenses = inputs.custom_expenses.len(),
        amount_owed = %report.breakdown.amount_owed,
        duration_us = start_time.elapsed().as_micros(),
        "Settlement calculated"
    );

    Ok(report)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts raw settlement fields and returns the settlement report as JSON.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match settle(&state, correlation_id, payload) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// Handler for POST /report/text endpoint.
///
/// Accepts the same body as `/calculate` and returns the printable report.
async fn text_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing text report request");

    match settle(&state, correlation_id, payload) {
        Ok(report) => {
            let text = render_text_report(&report, state.config().report());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for GET /payments/summary endpoint.
///
/// Fetches the payment history for the requested window and returns total
/// sales with the best and worst selling products.
async fn payments_summary_handler(
    State(state): State<AppState>,
    query: Result<Query<PaymentsSummaryQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid summary query");
            return ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
                .into_response();
        }
    };

    let Some(client) = state.payments() else {
        warn!(correlation_id = %correlation_id, "Payment history requested without credentials");
        return ApiErrorResponse::from(EngineError::MissingCredentials {
            variable: crate::payments::APP_ID_VAR.to_string(),
        })
        .into_response();
    };

    info!(
        correlation_id = %correlation_id,
        start_date = %query.start_date,
        end_date = %query.end_date,
        "Processing payments summary request"
    );

    let summary = client
        .fetch_history(query.start_date, query.end_date)
        .await
        .and_then(|transactions| summarize_sales(&transactions));

    match summary {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                transactions = summary.transaction_count,
                total_sales = %summary.total_sales,
                "Payments summary completed"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payments summary failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
