use super::dto::{ErrorResponse, HealthResponse, RestChatRequest, RestChatResponse};
use super::routes;
use crate::agent::{AgentStatus, AgentStep};
use crate::domain::ToolDescriptor;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::chat::chat_handler,
        routes::tools::tools_handler,
        routes::health::health_handler
    ),
    components(
        schemas(
            RestChatRequest,
            RestChatResponse,
            ErrorResponse,
            HealthResponse,
            AgentStatus,
            AgentStep,
            ToolDescriptor
        )
    ),
    tags(
        (name = "chat", description = "Answer a prompt with the remote tool server in the loop"),
        (name = "tools", description = "Tool catalogue of the remote tool server"),
        (name = "health", description = "Liveness check")
    )
)]
pub(super) struct ApiDoc;
