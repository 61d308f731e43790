use crate::client::ViewState;
use crate::domain::model::{ContactView, DomainView};

pub const LOADING_MESSAGE: &str = "Looking up domain...";

pub fn domain_rows(view: &DomainView) -> Vec<(&'static str, &str)> {
    vec![
        ("Domain Name", view.domain_name.as_str()),
        ("Registrar", view.registrar.as_str()),
        ("Registration Date", view.registration_date.as_str()),
        ("Expiration Date", view.expiration_date.as_str()),
        ("Estimated Domain Age", view.estimated_age.as_str()),
        ("Hostnames", view.hostnames_summary.as_str()),
    ]
}

pub fn contact_rows(view: &ContactView) -> Vec<(&'static str, &str)> {
    vec![
        ("Registrant Name", view.registrant_name.as_str()),
        ("Technical Contact Name", view.technical_contact_name.as_str()),
        ("Administrative Contact Name", view.administrative_contact_name.as_str()),
        ("Contact Email", view.contact_email.as_str()),
    ]
}

/// Two-column `Field | Value` table under a title line.
pub fn render_table(title: &str, rows: &[(&str, &str)]) -> String {
    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0)
        .max("Field".len());
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max("Value".len());
    let rule = format!("+-{}-+-{}-+", "-".repeat(key_width), "-".repeat(value_width));

    let mut lines = vec![title.to_string(), rule.clone()];
    lines.push(format!(
        "| {:<kw$} | {:<vw$} |",
        "Field",
        "Value",
        kw = key_width,
        vw = value_width
    ));
    lines.push(rule.clone());
    for (key, value) in rows {
        lines.push(format!(
            "| {:<kw$} | {:<vw$} |",
            key,
            value,
            kw = key_width,
            vw = value_width
        ));
    }
    lines.push(rule);
    lines.join("\n")
}

pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => LOADING_MESSAGE.to_string(),
        ViewState::Error(message) => format!("Error: {}", message),
        ViewState::Domain(view) => render_table("Domain Information", &domain_rows(view)),
        ViewState::Contact(view) => render_table("Contact Information", &contact_rows(view)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> DomainView {
        DomainView {
            domain_name: "amazon.com".to_string(),
            registrar: "MarkMonitor, Inc.".to_string(),
            registration_date: "11/1/1994".to_string(),
            expiration_date: "10/31/2024".to_string(),
            estimated_age: "29 years, 7 months".to_string(),
            hostnames_summary: "ns1.amzndns.co.uk, ns1...".to_string(),
        }
    }

    #[test]
    fn test_render_domain_table() {
        let out = render_state(&ViewState::Domain(domain()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Domain Information");
        assert!(out.contains("| Registrar            | MarkMonitor, Inc.         |"));
        assert!(out.contains("| Hostnames            | ns1.amzndns.co.uk, ns1... |"));
        // title, 3 rules, header, 6 rows
        assert_eq!(lines.len(), 11);

        let widths: Vec<usize> = lines[1..].iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_contact_table() {
        let view = ContactView {
            registrant_name: "N/A".to_string(),
            technical_contact_name: "N/A".to_string(),
            administrative_contact_name: "N/A".to_string(),
            contact_email: "N/A".to_string(),
        };
        let out = render_state(&ViewState::Contact(view));

        assert!(out.starts_with("Contact Information"));
        assert!(out.contains("| Administrative Contact Name | N/A   |"));
    }

    #[test]
    fn test_render_other_states() {
        assert_eq!(render_state(&ViewState::Idle), "");
        assert_eq!(render_state(&ViewState::Loading), LOADING_MESSAGE);
        assert_eq!(
            render_state(&ViewState::Error("WHOIS API request failed: 503".to_string())),
            "Error: WHOIS API request failed: 503"
        );
    }
}
