use crate::domain::ModelToolCall;

/// Agent loop states. `Done` and `CapExhausted` are terminal.
#[derive(Debug)]
pub(super) enum LoopState {
    AwaitingModel,
    DispatchingTools(Vec<ModelToolCall>),
    Done(String),
    CapExhausted,
}
