//! Terminal presentation client for the `/lookup` endpoint.

pub mod render;

use crate::domain::model::{
    ContactView, DomainView, LookupPayload, LookupResult, LookupView,
};
use reqwest::Client;
use thiserror::Error;

pub const EMPTY_DOMAIN_MESSAGE: &str = "Please enter a domain name";
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch WHOIS data";

#[derive(Error, Debug)]
pub enum ClientError {
    /// Message from a non-success response, shown verbatim.
    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// What the client currently displays. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Domain(DomainView),
    Contact(ContactView),
}

#[derive(Debug, Clone)]
pub struct LookupClient {
    http: Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn lookup_url(&self) -> String {
        format!("{}/lookup", self.base_url)
    }

    pub async fn lookup(
        &self,
        domain: &str,
        view: LookupView,
    ) -> std::result::Result<LookupResult, ClientError> {
        let payload = LookupPayload {
            domain: Some(domain.to_string()),
            view: Some(view.as_str().to_string()),
        };

        tracing::debug!("POST {} for {}", self.lookup_url(), domain);
        let response = self.http.post(self.lookup_url()).json(&payload).send().await?;
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or(FALLBACK_ERROR_MESSAGE);
            return Err(ClientError::Server(message.to_string()));
        }

        let parsed = match view {
            LookupView::Domain => serde_json::from_value(body).map(LookupResult::Domain),
            LookupView::Contact => serde_json::from_value(body).map(LookupResult::Contact),
        };
        parsed.map_err(|e| ClientError::Server(format!("Unexpected response: {}", e)))
    }
}

/// Form state for one user. Submissions are single-flight.
#[derive(Debug, Default)]
pub struct LookupSession {
    state: ViewState,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Clears the previous outcome and moves to `Loading`. Returns the
    /// trimmed domain to send, or `None` when nothing should be sent.
    pub fn begin(&mut self, domain: &str) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        let domain = domain.trim();
        if domain.is_empty() {
            self.state = ViewState::Error(EMPTY_DOMAIN_MESSAGE.to_string());
            return None;
        }

        self.state = ViewState::Loading;
        Some(domain.to_string())
    }

    pub fn finish(&mut self, outcome: std::result::Result<LookupResult, ClientError>) {
        self.state = match outcome {
            Ok(LookupResult::Domain(view)) => ViewState::Domain(view),
            Ok(LookupResult::Contact(view)) => ViewState::Contact(view),
            Err(e) => ViewState::Error(e.to_string()),
        };
    }

    pub async fn submit(
        &mut self,
        client: &LookupClient,
        domain: &str,
        view: LookupView,
    ) -> &ViewState {
        if let Some(domain) = self.begin(domain) {
            let outcome = client.lookup(&domain, view).await;
            self.finish(outcome);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NOT_AVAILABLE;

    fn contact() -> ContactView {
        ContactView {
            registrant_name: "Jane Roe".to_string(),
            technical_contact_name: NOT_AVAILABLE.to_string(),
            administrative_contact_name: NOT_AVAILABLE.to_string(),
            contact_email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_blank_domain_is_rejected_locally() {
        let mut session = LookupSession::new();
        assert_eq!(session.begin("   "), None);
        assert_eq!(
            session.state(),
            &ViewState::Error(EMPTY_DOMAIN_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_begin_is_single_flight() {
        let mut session = LookupSession::new();
        assert_eq!(session.begin(" example.com "), Some("example.com".to_string()));
        assert!(session.is_loading());
        assert_eq!(session.begin("example.org"), None);
        assert!(session.is_loading());
    }

    #[test]
    fn test_new_submission_clears_previous_outcome() {
        let mut session = LookupSession::new();
        session.begin("example.com");
        session.finish(Err(ClientError::Server("boom".to_string())));
        assert_eq!(session.state(), &ViewState::Error("boom".to_string()));

        session.begin("example.com");
        assert_eq!(session.state(), &ViewState::Loading);

        session.finish(Ok(LookupResult::Contact(contact())));
        assert_eq!(session.state(), &ViewState::Contact(contact()));
    }

    #[tokio::test]
    async fn test_submit_blank_never_touches_network() {
        // nothing listens here; a request would surface a transport error
        let client = LookupClient::new("http://127.0.0.1:9");
        let mut session = LookupSession::new();

        let state = session.submit(&client, "", LookupView::Domain).await;
        assert_eq!(state, &ViewState::Error(EMPTY_DOMAIN_MESSAGE.to_string()));
    }

    #[test]
    fn test_lookup_url_trims_trailing_slash() {
        let client = LookupClient::new("http://localhost:3000/");
        assert_eq!(client.lookup_url(), "http://localhost:3000/lookup");
    }
}
