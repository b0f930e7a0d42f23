use std::sync::Arc;

use sqlmorph_ai::{CompletionClient, ConversionService, OpenAiClient};
use sqlmorph_core::{Result, Settings};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ConversionService>,
}

impl AppState {
    /// Build the production state: an OpenAI-backed conversion service.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Arc::new(OpenAiClient::new(&settings.llm)?);
        Ok(Self::with_client(client))
    }

    /// Build state around any completion client. Tests use this to inject
    /// mocks; nothing else about the stack changes.
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            service: Arc::new(ConversionService::new(client)),
        }
    }
}
