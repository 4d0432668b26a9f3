//! Translation form endpoints

use axum::extract::State;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, TranslateRequest, TranslateResponse};
use crate::domain::{FormOptions, ProviderKind};

/// GET /api/options
pub async fn options() -> Json<FormOptions> {
    Json(FormOptions::default())
}

/// POST /api/translate
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let form = request.validate().map_err(|errors| {
        warn!(request_id = %request_id, errors = ?errors, "Incomplete translation form");
        ApiError::form_invalid(errors)
    })?;

    let service = &state.translation_service;

    if !service.validate_syntax(Some(&form.query)) {
        warn!(request_id = %request_id, "Rejected invalid input query");
        return Err(ApiError::bad_request("Invalid base SQL query").with_param("query"));
    }

    let provider = ProviderKind::for_model(&form.model);

    info!(
        request_id = %request_id,
        provider = %provider,
        model = %form.model,
        source_engine = %form.source_engine,
        target_engine = %form.target_engine,
        "Translation requested"
    );

    let client = state.resolver.resolve(provider.as_str(), &form.model)?;

    let response = service
        .swap(&client, &form.query, &form.source_engine, &form.target_engine)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Translation failed");
            ApiError::from(e)
        })?;

    let is_valid = service.validate_syntax(response.query.as_deref());

    info!(request_id = %request_id, is_valid, "Translation completed");

    Ok(Json(TranslateResponse::from_domain(response, is_valid)))
}
