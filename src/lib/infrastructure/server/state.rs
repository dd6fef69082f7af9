use crate::client::BridgeClient;
use crate::model::ModelProvider;
use std::sync::Arc;

pub(crate) struct ServerState<P: ModelProvider> {
    client: Arc<BridgeClient<P>>,
}

impl<P: ModelProvider> ServerState<P> {
    pub(crate) fn new(client: Arc<BridgeClient<P>>) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> Arc<BridgeClient<P>> {
        Arc::clone(&self.client)
    }
}
