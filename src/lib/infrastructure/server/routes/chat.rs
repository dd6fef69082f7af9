use super::super::dto::{ErrorResponse, RestChatRequest, RestChatResponse};
use super::super::state::ServerState;
use crate::client::{ChatRequest, ClientError};
use crate::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = RestChatRequest,
    responses(
        (status = 200, description = "Prompt answered or iteration cap reached", body = RestChatResponse),
        (status = 400, description = "Empty prompt or credential, or unreadable JSON", body = ErrorResponse),
        (status = 422, description = "Body is missing required fields", body = ErrorResponse),
        (status = 502, description = "Tool server or model provider failed", body = ErrorResponse),
        (status = 504, description = "Tool server timed out", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    payload: Result<Json<RestChatRequest>, JsonRejection>,
) -> Result<Json<RestChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        error!(status = rejection.status().as_u16(), "Rejecting unreadable /chat body");
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
                kind: "invalid_request".to_string(),
            }),
        )
    })?;
    let RestChatRequest {
        prompt,
        credential,
        model,
    } = payload;

    info!(model = model.as_deref(), "Received /chat request");

    let client = state.client();
    match client
        .chat(ChatRequest {
            prompt,
            credential,
            model,
        })
        .await
    {
        Ok(outcome) => Ok(Json(RestChatResponse::from(outcome))),
        Err(err) => {
            error!(kind = err.kind(), "Rejecting /chat request");
            Err(error_response(&err))
        }
    }
}

fn error_response(err: &ClientError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        ClientError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
        _ if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        ClientError::Agent(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            kind: err.kind().to_string(),
        }),
    )
}
