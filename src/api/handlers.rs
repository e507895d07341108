use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{HealthResponse, RecommendationRequest, RecommendationResponse},
    services,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Ranks catalog products against the submitted constraints
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection.body_text(), "Rejected request body");
        AppError::InvalidInput(rejection.body_text())
    })?;

    request.validate().map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Invalid recommendation request");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        category = %request.category,
        budget = request.budget,
        top_k = request.top_k,
        must_have_count = request.must_have_features.len(),
        nice_to_have_count = request.nice_to_have_features.len(),
        "Processing recommendation request"
    );

    let response = services::get_recommendations(&request, state.catalog.products());

    tracing::info!(
        request_id = %request_id,
        returned = response.recommendations.len(),
        "Recommendation request completed"
    );

    Ok(Json(response))
}
