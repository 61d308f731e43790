use crate::config::toml_config::TomlConfig;
use crate::config::{Overrides, Settings};
use crate::core::{DateStyle, LookupView};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "whois-lookup")]
#[command(about = "HTTP gateway for WHOIS domain and contact lookups")]
pub struct ServerConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Socket address to listen on [default: 127.0.0.1:3000]")]
    pub bind: Option<String>,

    #[arg(long, help = "WHOIS provider endpoint")]
    pub api_endpoint: Option<String>,

    #[arg(long, env = "WHOIS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Provider request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_parser = parse_date_style, help = "Date style: us, iso or eu")]
    pub date_style: Option<DateStyle>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

fn parse_date_style(value: &str) -> std::result::Result<DateStyle, String> {
    value.parse().map_err(|e: crate::utils::error::LookupError| e.to_string())
}

fn parse_view(value: &str) -> std::result::Result<LookupView, String> {
    value.parse().map_err(|e: crate::utils::error::LookupError| e.to_string())
}

impl ServerConfig {
    pub fn into_settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Ok(Settings::resolve(
            file,
            Overrides {
                bind: self.bind,
                api_endpoint: self.api_endpoint,
                api_key: self.api_key,
                timeout_seconds: self.timeout_seconds,
                date_style: self.date_style,
            },
        ))
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "whois-client")]
#[command(about = "Look up WHOIS domain or contact information")]
pub struct ClientConfig {
    #[arg(help = "Domain to look up; omit to start an interactive prompt")]
    pub domain: Option<String>,

    #[arg(long = "type", short = 't', default_value = "domain", value_parser = parse_view)]
    pub view: LookupView,

    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub server: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
