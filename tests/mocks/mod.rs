#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use whois_lookup::{AppState, Settings};

pub const PROVIDER_PATH: &str = "/whoisserver/WhoisService";
pub const TEST_API_KEY: &str = "test-api-key";

pub fn full_record() -> serde_json::Value {
    serde_json::json!({
        "WhoisRecord": {
            "domainName": "amazon.com",
            "registrarName": "MarkMonitor, Inc.",
            "createdDate": "1994-11-01T05:00:00Z",
            "expiresDate": "2024-10-31T04:00:00Z",
            "estimatedDomainAge": 10889,
            "nameServers": {
                "hostNames": ["ns1.amzndns.co.uk", "ns1.amzndns.com", "ns1.amzndns.net"]
            },
            "registrant": {
                "name": "Hostmaster, Amazon Legal Dept.",
                "email": "hostmaster@amazon.com"
            },
            "technicalContact": {"name": "Hostmaster, Amazon Legal Dept."},
            "administrativeContact": {"name": "Hostmaster, Amazon Legal Dept."}
        }
    })
}

pub fn mock_provider<'a>(
    server: &'a MockServer,
    domain: &str,
    status: u16,
    body: serde_json::Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(PROVIDER_PATH)
            .query_param("apiKey", TEST_API_KEY)
            .query_param("domainName", domain)
            .query_param("outputFormat", "JSON");
        then.status(status)
            .header("Content-Type", "application/json")
            .json_body(body);
    })
}

pub fn settings_for(server: &MockServer) -> Settings {
    Settings::default()
        .with_endpoint(server.url(PROVIDER_PATH))
        .with_api_key(TEST_API_KEY)
}

pub fn state_for(server: &MockServer) -> AppState {
    AppState::new(settings_for(server))
}
