use crate::utils::error::{LookupError, Result};
use std::net::SocketAddr;
use url::Url;

pub const DOMAIN_REQUIRED_MESSAGE: &str = "Domain name is required";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: &str) -> LookupError {
    LookupError::config(format!(
        "Invalid value for {}: '{}' ({})",
        field_name, value, reason
    ))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                &format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            &format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| invalid(field_name, addr, &format!("Invalid socket address: {}", e)))
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            &format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Trims the requested domain, rejecting blank input.
pub fn validate_domain_name(value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(domain) if !domain.is_empty() => Ok(domain.to_string()),
        _ => Err(LookupError::validation(DOMAIN_REQUIRED_MESSAGE)),
    }
}
