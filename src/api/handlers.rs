//! HTTP request handlers for the Tariff Interpretation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::PricingQuoteInput;
use crate::pricing::calculate_quote;

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
/// Accepts a quote request and returns the computed pricing quote. The
/// same endpoint serves checkout confirmation, live quotes on open
/// sessions, and what-if simulation.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let loader = state.config();

    // Validate the lot is served by this instance
    if let Err(err) = loader.ensure_serves(&request.company_id, &request.parking_lot_id) {
        warn!(
            correlation_id = %correlation_id,
            parking_lot_id = %request.parking_lot_id,
            "Parking lot not served"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let input: PricingQuoteInput = request.into();

    match calculate_quote(loader.snapshot(), &input) {
        Ok(output) => {
            info!(
                correlation_id = %correlation_id,
                parking_lot_id = %input.parking_lot_id,
                vehicle_type = %input.vehicle_type,
                total = output.total,
                segments = output.breakdown.segments.len(),
                partially_billed = output.breakdown.partially_billed,
                "Quote computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(output),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
