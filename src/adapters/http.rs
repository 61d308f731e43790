use crate::core::context::RequestContext;
use crate::domain::model::WhoisResponse;
use crate::domain::ports::WhoisProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::secret::ApiKey;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";

/// WhoisXML API client. The `reqwest::Client` is shared across requests.
#[derive(Debug, Clone)]
pub struct WhoisXmlApiClient {
    client: Client,
    endpoint: String,
}

impl WhoisXmlApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl WhoisProvider for WhoisXmlApiClient {
    async fn fetch(
        &self,
        api_key: &ApiKey,
        domain_name: &str,
        ctx: &RequestContext,
    ) -> Result<WhoisResponse> {
        tracing::debug!("Making WHOIS API request to: {}", self.endpoint);

        let mut request = self.client.get(&self.endpoint).query(&[
            ("apiKey", api_key.expose_secret()),
            ("domainName", domain_name),
            ("outputFormat", "JSON"),
        ]);
        if let Some(timeout) = ctx.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::TimeoutError {
                    seconds: ctx.timeout().map(|t| t.as_secs()).unwrap_or_default(),
                }
            } else {
                LookupError::ApiError(e.without_url())
            }
        })?;

        let status = response.status();
        tracing::debug!("WHOIS API response status: {}", status);
        if !status.is_success() {
            return Err(LookupError::UpstreamStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LookupError::ApiError(e.without_url()))?;
        let parsed: WhoisResponse = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/whoisserver/WhoisService")
                .query_param("apiKey", "secret-key")
                .query_param("domainName", "amazon.com")
                .query_param("outputFormat", "JSON");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "WhoisRecord": {"domainName": "amazon.com", "registrarName": "MarkMonitor Inc."}
                }));
        });

        let client = WhoisXmlApiClient::new(server.url("/whoisserver/WhoisService"));
        let response = client
            .fetch(
                &ApiKey::new("secret-key"),
                "amazon.com",
                &RequestContext::new(),
            )
            .await
            .unwrap();

        api_mock.assert();
        let record = response.whois_record.unwrap();
        assert_eq!(record.registrar_name.as_deref(), Some("MarkMonitor Inc."));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(503);
        });

        let client = WhoisXmlApiClient::new(server.url("/"));
        let err = client
            .fetch(&ApiKey::new("k"), "amazon.com", &RequestContext::new())
            .await
            .unwrap_err();

        api_mock.assert();
        assert!(matches!(err, LookupError::UpstreamStatusError { status: 503 }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = WhoisXmlApiClient::new(server.url("/"));
        let err = client
            .fetch(&ApiKey::new("k"), "amazon.com", &RequestContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::SerializationError(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_fetch_error_message_without_record() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(serde_json::json!({
                "ErrorMessage": {"errorCode": "WHOIS_01", "msg": "Domain name is invalid"}
            }));
        });

        let client = WhoisXmlApiClient::new(server.url("/"));
        let response = client
            .fetch(&ApiKey::new("k"), "bad..name", &RequestContext::new())
            .await
            .unwrap();

        assert!(response.whois_record.is_none());
        assert_eq!(
            response.error_message.unwrap().msg.as_deref(),
            Some("Domain name is invalid")
        );
    }
}
