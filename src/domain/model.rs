use crate::utils::error::{LookupError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_VIEW_MESSAGE: &str = "Invalid type. Must be 'domain' or 'contact'";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupView {
    Domain,
    Contact,
}

impl LookupView {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupView::Domain => "domain",
            LookupView::Contact => "contact",
        }
    }
}

impl FromStr for LookupView {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "domain" => Ok(LookupView::Domain),
            "contact" => Ok(LookupView::Contact),
            _ => Err(LookupError::validation(INVALID_VIEW_MESSAGE)),
        }
    }
}

impl fmt::Display for LookupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /lookup`. Both fields stay optional so the handler can
/// report which one is wrong instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupPayload {
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub view: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub domain_name: String,
    pub view: LookupView,
}

impl LookupRequest {
    pub fn new(domain_name: &str, view: &str) -> Result<Self> {
        let domain_name = crate::utils::validation::validate_domain_name(Some(domain_name))?;
        let view = view.parse()?;
        Ok(Self { domain_name, view })
    }
}

impl TryFrom<LookupPayload> for LookupRequest {
    type Error = LookupError;

    fn try_from(payload: LookupPayload) -> Result<Self> {
        let domain_name =
            crate::utils::validation::validate_domain_name(payload.domain.as_deref())?;
        let view = payload
            .view
            .as_deref()
            .ok_or_else(|| LookupError::validation(INVALID_VIEW_MESSAGE))?
            .parse()?;
        Ok(Self { domain_name, view })
    }
}

/// Provider response envelope. Every leaf is optional, and a leaf of the
/// wrong JSON type reads as absent so mapping never fails once the record
/// itself is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhoisResponse {
    #[serde(rename = "WhoisRecord", default, deserialize_with = "lenient_object")]
    pub whois_record: Option<RawWhoisRecord>,
    #[serde(rename = "ErrorMessage", default, deserialize_with = "lenient_object")]
    pub error_message: Option<ProviderErrorMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorMessage {
    #[serde(rename = "errorCode", default, deserialize_with = "lenient_string")]
    pub error_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWhoisRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub domain_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registrar_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expires_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub name_servers: Option<NameServers>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub registrant: Option<RawContact>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub technical_contact: Option<RawContact>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub administrative_contact: Option<RawContact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameServers {
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub host_names: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Non-string entries are dropped; anything but an array reads as empty.
fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_object<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainView {
    pub domain_name: String,
    pub registrar: String,
    pub registration_date: String,
    pub expiration_date: String,
    #[serde(rename = "estimatedDomainAge")]
    pub estimated_age: String,
    #[serde(rename = "hostnames")]
    pub hostnames_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub registrant_name: String,
    pub technical_contact_name: String,
    pub administrative_contact_name: String,
    pub contact_email: String,
}

/// Result of a lookup; serializes as the bare inner view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Domain(DomainView),
    Contact(ContactView),
}

impl LookupResult {
    pub fn view(&self) -> LookupView {
        match self {
            LookupResult::Domain(_) => LookupView::Domain,
            LookupResult::Contact(_) => LookupView::Contact,
        }
    }
}
