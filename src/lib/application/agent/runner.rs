use super::dispatch::dispatch_batch;
use super::errors::AgentError;
use super::models::{AgentOptions, AgentOutcome, AgentStatus, AgentStep};
use super::state::LoopState;
use super::translator::SchemaTranslator;
use crate::application::tooling::ToolServer;
use crate::constants::MAX_ITERATIONS_SENTINEL;
use crate::domain::Transcript;
use crate::model::{ModelProvider, ModelRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Alternates model inference and tool execution for one chat request.
///
/// The tool catalogue is fetched once per run, the transcript lives only for
/// the duration of [`Agent::run`], and no step is retried.
pub struct Agent<P: ModelProvider> {
    provider: Arc<P>,
    tools: Arc<dyn ToolServer>,
}

impl<P: ModelProvider> Agent<P> {
    pub fn new(provider: Arc<P>, tools: Arc<dyn ToolServer>) -> Self {
        Self { provider, tools }
    }

    pub async fn run(
        &self,
        prompt: String,
        credential: &str,
        options: &AgentOptions,
    ) -> Result<AgentOutcome, AgentError> {
        info!(model = options.model.as_str(), "Agent run started");

        let descriptors = self.tools.list_tools().await?;
        let tool_specs = SchemaTranslator::to_model_format(&descriptors);
        info!(tool_count = tool_specs.len(), "Tool catalogue loaded");

        let mut transcript = Transcript::new(options.system_prompt.as_deref(), prompt);
        let mut steps = Vec::new();
        let mut rounds = 0usize;
        let mut state = LoopState::AwaitingModel;

        loop {
            state = match state {
                LoopState::AwaitingModel if rounds >= options.max_iterations => {
                    LoopState::CapExhausted
                }
                LoopState::AwaitingModel => {
                    debug_assert!(transcript.is_settled());
                    rounds += 1;
                    debug!(
                        round = rounds,
                        turns = transcript.turns().len(),
                        "Submitting transcript to model provider"
                    );
                    let request = ModelRequest {
                        model: &options.model,
                        api_key: credential,
                        turns: transcript.turns(),
                        tools: &tool_specs,
                    };
                    let response = self.provider.chat(request).await?;

                    if response.tool_calls.is_empty() {
                        LoopState::Done(response.content.unwrap_or_default())
                    } else {
                        let calls = response.tool_calls.clone();
                        transcript.push_assistant(response.content, response.tool_calls)?;
                        LoopState::DispatchingTools(calls)
                    }
                }
                LoopState::DispatchingTools(calls) => {
                    info!(
                        round = rounds,
                        calls = calls.len(),
                        "Model requested tool execution"
                    );
                    let results = dispatch_batch(
                        self.tools.as_ref(),
                        &calls,
                        options.max_concurrent_tool_calls,
                    )
                    .await;

                    for result in results {
                        steps.push(AgentStep {
                            round: rounds,
                            call_id: result.call_id.clone(),
                            tool: result.tool,
                            success: result.success,
                        });
                        transcript.push_tool_result(result.call_id, result.content)?;
                    }
                    LoopState::AwaitingModel
                }
                LoopState::Done(response) => {
                    debug_assert_eq!(transcript.tool_rounds() + 1, rounds);
                    info!(
                        rounds,
                        tool_rounds = transcript.tool_rounds(),
                        tool_calls = steps.len(),
                        "Agent returned final response"
                    );
                    return Ok(AgentOutcome {
                        response,
                        status: AgentStatus::Completed,
                        iterations: rounds,
                        steps,
                    });
                }
                LoopState::CapExhausted => {
                    debug_assert_eq!(transcript.tool_rounds(), rounds);
                    warn!(
                        max_iterations = options.max_iterations,
                        tool_rounds = transcript.tool_rounds(),
                        "Agent stopped at the iteration cap"
                    );
                    return Ok(AgentOutcome {
                        response: MAX_ITERATIONS_SENTINEL.to_string(),
                        status: AgentStatus::MaxIterationsReached,
                        iterations: rounds,
                        steps,
                    });
                }
            };
        }
    }
}
