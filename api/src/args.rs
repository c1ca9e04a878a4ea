use clap::Parser;
use fridgechef_core::domain::common::{FridgeChefConfig, OpenAiConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "fridgechef-api", about = "FridgeChef recipe generation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openai: OpenAiArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/fridgechef".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OpenAiArgs {
    /// Checked at call time so the server can boot without it, but any
    /// generation request fails loudly until it is set.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long, env = "OPENAI_API_BASE", default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub chat_model: String,

    #[arg(long, env = "OPENAI_IMAGE_MODEL", default_value = "gpt-image-1")]
    pub image_model: String,

    /// Upstream request timeout in seconds. Unset means no timeout.
    #[arg(long, env = "OPENAI_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

impl From<Args> for FridgeChefConfig {
    fn from(args: Args) -> Self {
        Self {
            openai: OpenAiConfig {
                api_key: args.openai.api_key,
                api_base: args.openai.api_base,
                chat_model: args.openai.chat_model,
                image_model: args.openai.image_model,
                request_timeout_secs: args.openai.request_timeout_secs,
            },
        }
    }
}
