use crate::{
    domain::common::{FridgeChefConfig, services::Service},
    infrastructure::llm::OpenAiClient,
};

/// The concrete service type the API works with: one OpenAI client
/// serves both the chat-completion and image-generation ports.
pub type FridgeChefService = Service<OpenAiClient, OpenAiClient>;

pub async fn create_service(config: FridgeChefConfig) -> Result<FridgeChefService, anyhow::Error> {
    let client = OpenAiClient::new(config.openai)?;
    Ok(Service::new(client.clone(), client))
}
