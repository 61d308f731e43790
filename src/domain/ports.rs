use crate::core::context::RequestContext;
use crate::domain::model::WhoisResponse;
use crate::utils::error::{LookupError, Result};
use crate::utils::secret::ApiKey;
use async_trait::async_trait;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `1/15/2020`
    #[default]
    Us,
    /// `2020-01-15`
    Iso,
    /// `15/01/2020`
    Eu,
}

impl FromStr for DateStyle {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(DateStyle::Us),
            "iso" => Ok(DateStyle::Iso),
            "eu" => Ok(DateStyle::Eu),
            other => Err(LookupError::config(format!(
                "Unknown date style '{}'. Valid styles: us, iso, eu",
                other
            ))),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&ApiKey>;
    fn request_timeout(&self) -> Option<Duration>;
    fn date_style(&self) -> DateStyle;
}

/// Source of raw WHOIS records. One call per lookup, no retries.
#[async_trait]
pub trait WhoisProvider: Send + Sync {
    async fn fetch(
        &self,
        api_key: &ApiKey,
        domain_name: &str,
        ctx: &RequestContext,
    ) -> Result<WhoisResponse>;
}
