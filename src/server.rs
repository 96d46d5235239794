//! HTTP transport over the translation service.
//!
//! Deliberately thin: deserialize the wire request, optionally apply the
//! configured simulated delay, call the engine, map its typed errors to
//! status codes. No translation logic lives here.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{extract::State, Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::TranslateError;
use crate::service::{self, TranslationRequest, TranslationResult};

/// Build the application router.
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/translate", post(translate_handler))
        .route("/health", get(health_handler))
        .route("/languages", get(languages_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

async fn translate_handler(
    State(config): State<Arc<Config>>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    if config.simulated_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.simulated_delay_ms)).await;
    }

    let result = service::translate(&request)?;
    info!(
        source = %result.metadata.source_language,
        target = %result.metadata.target_language,
        elapsed_ms = result.metadata.processing_time_ms,
        "translation completed"
    );
    Ok(Json(result))
}

async fn health_handler() -> Json<serde_json::Value> {
    let supported: Vec<_> = service::supported_languages()
        .iter()
        .map(|l| l.name())
        .collect();
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "supportedLanguages": supported,
    }))
}

async fn languages_handler() -> Json<serde_json::Value> {
    let supported: Vec<_> = service::supported_languages()
        .iter()
        .map(|l| l.name())
        .collect();

    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (source, target) in service::supported_pairs() {
        grouped.entry(source.name()).or_default().push(target.name());
    }
    let pairs: Vec<_> = grouped
        .into_iter()
        .map(|(from, to)| json!({ "from": from, "to": to }))
        .collect();

    Json(json!({ "supported": supported, "pairs": pairs }))
}

/// Transport-side wrapper mapping engine errors to HTTP responses.
pub struct ApiError(TranslateError);

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            TranslateError::Validation(err) => {
                warn!(code = err.code(), "rejected invalid translation request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string(), "code": err.code() })),
                )
                    .into_response()
            }
            TranslateError::Engine(fault) => {
                error!(%fault, "translation engine fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error during translation" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineFault, ValidationError};

    // ==================== Error Mapping Tests ====================

    #[test]
    fn test_validation_error_maps_to_400() {
        let err = ApiError(TranslateError::Validation(ValidationError::SameLanguage));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_engine_fault_maps_to_500() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ApiError(TranslateError::Engine(EngineFault::InvalidRule {
            pattern: "(".to_string(),
            source,
        }));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_router_builds() {
        let config = Config {
            environment: "test".to_string(),
            port: 0,
            simulated_delay_ms: 0,
        };
        let _router = router(config);
    }
}
