use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use polyglot_engine::{validate, TranslateRequest, TranslationReport, ValidationError};
use polyglot_logging::polyglot_info;

use crate::types::{ErrorBody, HealthResponse, ServerState};

/// Failures a handler reports to the client as `{ message }`.
#[derive(Debug)]
pub(crate) enum ApiError {
    Validation(ValidationError),
    Body(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

pub(crate) async fn translate(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslationReport>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        polyglot_info!("Rejected unreadable body: {}", rejection.body_text());
        ApiError::Body(rejection)
    })?;
    let request = validate(request).map_err(|err| {
        polyglot_info!("Rejected request: {}", err);
        ApiError::Validation(err)
    })?;

    let report = state.dispatcher.dispatch(&request).await;
    polyglot_info!(
        "Translated into {} of {} targets",
        report.translations.len(),
        request.target_languages.len()
    );
    Ok(Json(report))
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
