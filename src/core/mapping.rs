use crate::core::format::{calculate_age, format_date, format_hostnames};
use crate::domain::model::{
    ContactView, DomainView, LookupResult, LookupView, RawContact, RawWhoisRecord, NOT_AVAILABLE,
};
use crate::domain::ports::DateStyle;

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn contact_name(contact: Option<&RawContact>) -> String {
    or_na(contact.and_then(|c| c.name.as_deref()))
}

pub fn to_domain_view(record: &RawWhoisRecord, requested: &str, style: DateStyle) -> DomainView {
    let created = record.created_date.as_deref().unwrap_or_default();
    let expires = record.expires_date.as_deref().unwrap_or_default();
    let hostnames = record
        .name_servers
        .as_ref()
        .map(|ns| ns.host_names.as_slice())
        .unwrap_or_default();

    DomainView {
        domain_name: match record.domain_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => requested.to_string(),
        },
        registrar: or_na(record.registrar_name.as_deref()),
        registration_date: format_date(created, style),
        expiration_date: format_date(expires, style),
        estimated_age: calculate_age(created),
        hostnames_summary: format_hostnames(hostnames),
    }
}

pub fn to_contact_view(record: &RawWhoisRecord) -> ContactView {
    let registrant = record.registrant.as_ref();

    ContactView {
        registrant_name: contact_name(registrant),
        technical_contact_name: contact_name(record.technical_contact.as_ref()),
        administrative_contact_name: contact_name(record.administrative_contact.as_ref()),
        contact_email: or_na(registrant.and_then(|c| c.email.as_deref())),
    }
}

pub fn map_record(
    record: &RawWhoisRecord,
    requested: &str,
    view: LookupView,
    style: DateStyle,
) -> LookupResult {
    match view {
        LookupView::Domain => LookupResult::Domain(to_domain_view(record, requested, style)),
        LookupView::Contact => LookupResult::Contact(to_contact_view(record)),
    }
}
