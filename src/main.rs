use clap::Parser;
use tokio_util::sync::CancellationToken;
use whois_lookup::core::ConfigProvider;
use whois_lookup::utils::{logger, validation::Validate};
use whois_lookup::{api, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting whois-lookup server");

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // lookups report the missing key per request; the server still starts
    if settings.api_key().is_none() {
        tracing::warn!("WHOIS_API_KEY is not set; lookups will fail until it is configured");
    }

    let bind = settings.bind.clone();
    let shutdown = CancellationToken::new();
    let state = AppState::new(settings).with_shutdown(shutdown.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    api::serve(state, &bind).await
}
