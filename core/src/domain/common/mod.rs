pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct FridgeChefConfig {
    pub openai: OpenAiConfig,
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// Missing key is surfaced on first use, not at startup.
    pub api_key: Option<String>,
    pub api_base: String,
    pub chat_model: String,
    pub image_model: String,
    /// No default; upstream calls run unbounded unless this is set.
    pub request_timeout_secs: Option<u64>,
}
