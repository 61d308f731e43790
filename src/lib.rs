pub mod adapters;
pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ClientConfig, ServerConfig};

pub use adapters::WhoisXmlApiClient;
pub use api::{create_router, AppState};
pub use client::{LookupClient, LookupSession, ViewState};
pub use config::Settings;
pub use crate::core::{context::RequestContext, gateway::LookupGateway, ConfigProvider};
pub use domain::model::{ContactView, DomainView, LookupResult, LookupView};
pub use utils::error::{LookupError, Result};
