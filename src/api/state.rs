use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::adapters::http::WhoisXmlApiClient;
use crate::config::Settings;
use crate::core::gateway::LookupGateway;
use crate::core::ConfigProvider;

pub type Gateway = LookupGateway<WhoisXmlApiClient, Settings>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
    /// Cancels in-flight provider calls when the server shuts down.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let provider = WhoisXmlApiClient::new(settings.api_endpoint());
        Self {
            gateway: Arc::new(LookupGateway::new(provider, settings)),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }
}
