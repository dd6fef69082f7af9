//! REST surface: `POST /chat`, `GET /tools`, `GET /health` and the OpenAPI
//! document at `/api-doc/openapi.json`.

mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ErrorResponse, HealthResponse, RestChatRequest, RestChatResponse};
pub use error::ServerError;

use crate::client::BridgeClient;
use crate::model::ModelProvider;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application router without binding a listener.
pub fn router<P>(client: Arc<BridgeClient<P>>, cors_origins: &[String]) -> Result<Router, ServerError>
where
    P: ModelProvider + 'static,
{
    router::build_router(client, cors_origins)
}

pub async fn serve<P>(
    client: Arc<BridgeClient<P>>,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(client, addr, cors_origins).await
}
