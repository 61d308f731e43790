use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::core::context::RequestContext;
use crate::domain::model::{LookupPayload, LookupRequest, LookupResult};
use crate::utils::error::{ErrorCategory, LookupError};

/// Error body returned by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0.category() {
            ErrorCategory::Validation => tracing::debug!("Rejected lookup: {}", self.0),
            ErrorCategory::Configuration => tracing::error!("Lookup misconfigured: {}", self.0),
            ErrorCategory::Upstream | ErrorCategory::Internal => {
                tracing::error!("WHOIS API Error: {}", self.0)
            }
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// POST /lookup - resolve one domain into a domain or contact view
pub async fn post_lookup(
    State(state): State<AppState>,
    payload: Result<Json<LookupPayload>, JsonRejection>,
) -> Result<Json<LookupResult>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        LookupError::validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let request = LookupRequest::try_from(payload)?;

    tracing::info!(
        "Received lookup request for {} ({} view)",
        request.domain_name,
        request.view
    );

    let ctx: RequestContext = state
        .gateway
        .default_context()
        .with_cancellation(state.shutdown.child_token());
    let result = state.gateway.execute(&request, &ctx).await?;

    Ok(Json(result))
}
