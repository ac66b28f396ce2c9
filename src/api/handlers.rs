//! HTTP request handlers for the Rate Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_final_amount, calculate_rental_amount, resolve_rates, validate_bulk_rule,
};
use crate::models::{
    AdditionalCharge, AuditStep, AuditTrace, BaseRentalTable, BookingPeriod, BulkDiscountRule,
    ManualOverrides, QuoteResult,
};

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request and returns the calculated booking quote.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let vehicle_id = request.vehicle.id;
    let table: BaseRentalTable = request.vehicle.base_rental_table.into();
    let overrides: ManualOverrides = request.vehicle.manual_overrides.into();
    let booking: BookingPeriod = request.booking.into();
    let additional_charges: Vec<AdditionalCharge> = request
        .additional_charges
        .into_iter()
        .map(Into::into)
        .collect();
    let discount_adjustment = request.discount_adjustment.unwrap_or(Decimal::ZERO);

    // A request-level bulk rule replaces the fleet-wide rule for this quote
    let request_rule: Option<BulkDiscountRule> = request.bulk_discount_rule.map(Into::into);
    let bulk = request_rule
        .as_ref()
        .or_else(|| state.config().bulk_discount());

    // Perform the calculation
    let start_time = Instant::now();
    match perform_quote(
        &table,
        &overrides,
        bulk,
        &booking,
        &additional_charges,
        discount_adjustment,
    ) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                vehicle_id = %vehicle_id,
                total_amount = %result.breakdown.total_amount_collected,
                duration_us = duration.as_micros(),
                "Quote completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                vehicle_id = %vehicle_id,
                error = %err,
                "Quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the quote calculation for a booking.
fn perform_quote(
    table: &BaseRentalTable,
    overrides: &ManualOverrides,
    bulk: Option<&BulkDiscountRule>,
    booking: &BookingPeriod,
    additional_charges: &[AdditionalCharge],
    discount_adjustment: Decimal,
) -> Result<QuoteResult, crate::error::RateError> {
    let start_time = Instant::now();
    let mut all_audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    // A request-level rule bypasses config loading, so validate it here
    if let Some(rule) = bulk {
        validate_bulk_rule(rule)?;
    }

    let resolution = resolve_rates(table, overrides, bulk, step_number)?;
    step_number += resolution.audit_steps.len() as u32;
    all_audit_steps.extend(resolution.audit_steps);

    let rental = calculate_rental_amount(&resolution.rates, booking, step_number)?;
    step_number += 1;
    all_audit_steps.push(rental.audit_step);

    let final_amount = calculate_final_amount(
        rental.total,
        additional_charges,
        discount_adjustment,
        step_number,
    );
    all_audit_steps.push(final_amount.audit_step);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(QuoteResult {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rates: resolution.rates,
        charge_lines: rental.charge_lines,
        breakdown: final_amount.breakdown,
        audit_trace: AuditTrace {
            steps: all_audit_steps,
            duration_us,
        },
    })
}
