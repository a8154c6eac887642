//! Ownership predicate.
//!
//! Events reach the system through several creation paths, each stamping a
//! different identity representation into `createdBy` (id, email, full name,
//! display name) and sometimes an organizer reference on top. Ownership is
//! therefore a pure OR across one declared table of comparisons instead of
//! an ad-hoc chain at every call site. There is no precedence among the
//! pairs and the match is intentionally not hierarchical or exclusive.

use eventdesk_auth::Principal;
use eventdesk_core::PrincipalId;
use eventdesk_events::EventRecord;

/// Event-side identity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKey {
    CreatedBy,
    /// `organizerId` when present, else `organizer`.
    OrganizerRef,
}

/// Principal-side identity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKey {
    FullName,
    Name,
    Id,
    Email,
}

/// The comparison set. Any satisfied pair establishes ownership.
pub const OWNERSHIP_COMPARISONS: &[(EventKey, PrincipalKey)] = &[
    (EventKey::CreatedBy, PrincipalKey::FullName),
    (EventKey::CreatedBy, PrincipalKey::Name),
    (EventKey::CreatedBy, PrincipalKey::Id),
    (EventKey::CreatedBy, PrincipalKey::Email),
    (EventKey::OrganizerRef, PrincipalKey::Id),
];

fn event_value(event: &EventRecord, key: EventKey) -> Option<&str> {
    match key {
        EventKey::CreatedBy => event.created_by.as_deref(),
        EventKey::OrganizerRef => event.organizer_ref(),
    }
}

fn principal_value(principal: &Principal, key: PrincipalKey) -> Option<&str> {
    match key {
        PrincipalKey::FullName => principal.full_name.as_deref(),
        PrincipalKey::Name => principal.name.as_deref(),
        PrincipalKey::Id => Some(PrincipalId::as_str(&principal.id)),
        PrincipalKey::Email => principal.email.as_deref(),
    }
}

/// Whether `principal` owns `event` under any declared comparison.
///
/// A missing side of a comparison never matches; an event with no ownership
/// fields at all is owned by nobody.
pub fn is_owner(principal: &Principal, event: &EventRecord) -> bool {
    OWNERSHIP_COMPARISONS.iter().any(|&(event_key, principal_key)| {
        match (
            event_value(event, event_key),
            principal_value(principal, principal_key),
        ) {
            (Some(event_side), Some(principal_side)) => event_side == principal_side,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        serde_json::from_str(
            r#"{
                "id": 7,
                "email": "a@x.com",
                "name": "Alice",
                "fullName": "Alice Smith"
            }"#,
        )
        .unwrap()
    }

    fn event(json: &str) -> EventRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn created_by_matches_any_identity_key() {
        let principal = principal();
        for created_by in ["Alice Smith", "Alice", "7", "a@x.com"] {
            let event = event(&format!(r#"{{"id": 1, "createdBy": "{created_by}"}}"#));
            assert!(is_owner(&principal, &event), "createdBy={created_by}");
        }
    }

    #[test]
    fn email_match_suffices_despite_mismatched_organizer() {
        let principal = principal();
        let event = event(r#"{"id": 1, "createdBy": "a@x.com", "organizerId": 999}"#);
        assert!(is_owner(&principal, &event));
    }

    #[test]
    fn organizer_id_matches_principal_id() {
        let principal = principal();
        let by_id = event(r#"{"id": 1, "createdBy": "someone else", "organizerId": 7}"#);
        assert!(is_owner(&principal, &by_id));

        // Numeric organizerId compares against the principal's string id.
        let numeric = event(r#"{"id": 1, "organizerId": 7}"#);
        assert!(is_owner(&principal, &numeric));
    }

    #[test]
    fn organizer_field_is_the_fallback_reference() {
        let principal = principal();
        let by_organizer = event(r#"{"id": 1, "organizer": "7"}"#);
        assert!(is_owner(&principal, &by_organizer));

        // organizerId takes precedence as the reference; a stale organizer
        // name alone no longer matches once an id is present.
        let shadowed = event(r#"{"id": 1, "organizer": "7", "organizerId": 42}"#);
        assert!(!is_owner(&principal, &shadowed));
    }

    #[test]
    fn no_ownership_fields_means_no_owner() {
        let principal = principal();
        let event = event(r#"{"id": 1}"#);
        assert!(!is_owner(&principal, &event));
    }

    #[test]
    fn sparse_principal_never_spuriously_matches() {
        let sparse: Principal = serde_json::from_str(r#"{"id": "u-1"}"#).unwrap();
        let event = event(r#"{"id": 1, "createdBy": "Alice Smith"}"#);
        assert!(!is_owner(&sparse, &event));
    }
}
