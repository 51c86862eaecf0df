use clap::Parser;
use julius_types::models::DEFAULT_UPSTREAM_BASE_URL;
use julius_types::{RelayConfig, UpstreamConfig};

#[derive(Parser, Debug)]
#[command(
    name = "julius-server",
    about = "OpenAI-compatible chat-completions relay for the Julius playground",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(long, env = "JULIUS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "JULIUS_PORT", default_value = "8045")]
    pub port: u16,

    /// Expected bearer credential; leave unset to disable authorization
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    #[arg(long, env = "JULIUS_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_BASE_URL)]
    pub upstream_url: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            host: self.host.clone(),
            port: self.port,
            auth_token: None,
            upstream: UpstreamConfig { base_url: self.upstream_url.clone() },
        }
        .with_auth_token(self.auth_token.clone())
    }
}
