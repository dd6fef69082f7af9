use super::super::dto::ErrorResponse;
use super::super::state::ServerState;
use crate::model::ModelProvider;
use crate::tooling::ToolServerError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Passes the tool server's `tools/list` envelope through unchanged.
#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    responses(
        (status = 200, description = "Raw tools/list response from the tool server", body = Object),
        (status = 502, description = "Tool server unreachable or malformed", body = ErrorResponse),
        (status = 504, description = "Tool server timed out", body = ErrorResponse)
    )
)]
pub async fn tools_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Serving /tools request");
    state.client().tools().await.map(Json).map_err(|err| {
        error!(error = %err, "Tool catalogue request failed");
        error_response(&err)
    })
}

fn error_response(err: &ToolServerError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, kind) = if err.is_timeout() {
        (StatusCode::GATEWAY_TIMEOUT, "upstream_unavailable")
    } else if err.is_unavailable() {
        (StatusCode::BAD_GATEWAY, "upstream_unavailable")
    } else {
        (StatusCode::BAD_GATEWAY, "protocol_error")
    };
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            kind: kind.to_string(),
        }),
    )
}
