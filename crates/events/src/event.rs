use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventdesk_core::{EventId, PrincipalId};

/// Who may discover an event without an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Private,
}

/// Moderation outcome. `Rejected` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// Runtime lifecycle stage, independent of moderation.
///
/// `Completed` is reached only by time progression (see
/// [`EventRecord::current_status`]), never by a manual transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Upcoming,
    Active,
    Hold,
    Inactive,
    Completed,
}

/// Invitation state of one attendee-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// One entry of an event's attendee list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub invitation_status: InvitationStatus,
}

impl Invitation {
    /// Whether this entry belongs to `email`. Membership counts regardless of
    /// invitation status (a declined invitee can still view the event).
    pub fn is_for(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}

/// An event resource as fetched from upstream.
///
/// The record is read-only to this crate family: decisions derive values
/// from it, nothing mutates it. Ownership is stamped inconsistently by the
/// different creation paths (`createdBy` may be an id, an email, or a name;
/// `organizer`/`organizerId` may or may not be present), so all ownership
/// fields are kept side by side and matched as a pure OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: EventId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default)]
    pub event_status: Option<EventStatus>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub organizer_id: Option<PrincipalId>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attendees: Vec<Invitation>,
}

impl EventRecord {
    pub fn is_public(&self) -> bool {
        self.visibility == Some(Visibility::Public)
    }

    /// The organizer identity to compare against a principal id:
    /// `organizerId` when present, else the `organizer` field.
    pub fn organizer_ref(&self) -> Option<&str> {
        self.organizer_id
            .as_ref()
            .map(PrincipalId::as_str)
            .or(self.organizer.as_deref())
    }

    /// Whether `email` appears in the attendee list with any status.
    pub fn has_invitee(&self, email: &str) -> bool {
        self.attendees.iter().any(|a| a.is_for(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rest_payload() {
        let json = r#"{
            "id": 42,
            "title": "Launch day",
            "visibility": "PUBLIC",
            "approvalStatus": "APPROVED",
            "eventStatus": "UPCOMING",
            "createdBy": "a@x.com",
            "organizerId": 7,
            "startTime": "2026-09-01T09:00:00Z",
            "endTime": "2026-09-01T17:00:00Z",
            "attendees": [
                {"email": "bob@x.com", "invitationStatus": "ACCEPTED"},
                {"email": "carol@x.com", "invitationStatus": "DECLINED"}
            ]
        }"#;

        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.id.as_str(), "42");
        assert!(event.is_public());
        assert_eq!(event.approval_status, Some(ApprovalStatus::Approved));
        assert_eq!(event.event_status, Some(EventStatus::Upcoming));
        assert_eq!(event.organizer_ref(), Some("7"));
        assert!(event.has_invitee("carol@x.com"));
        assert!(!event.has_invitee("dave@x.com"));
    }

    #[test]
    fn sparse_payload_defaults_to_unknowns() {
        let event: EventRecord = serde_json::from_str(r#"{"id": "evt-1"}"#).unwrap();
        assert!(!event.is_public());
        assert_eq!(event.approval_status, None);
        assert_eq!(event.organizer_ref(), None);
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn organizer_id_wins_over_organizer_name() {
        let event: EventRecord = serde_json::from_str(
            r#"{"id": 1, "organizer": "Alice Smith", "organizerId": "7"}"#,
        )
        .unwrap();
        assert_eq!(event.organizer_ref(), Some("7"));

        let without_id: EventRecord =
            serde_json::from_str(r#"{"id": 1, "organizer": "Alice Smith"}"#).unwrap();
        assert_eq!(without_id.organizer_ref(), Some("Alice Smith"));
    }

    #[test]
    fn invitation_membership_ignores_status() {
        let declined = Invitation {
            email: Some("x@y.z".to_string()),
            invitation_status: InvitationStatus::Declined,
        };
        assert!(declined.is_for("x@y.z"));
        assert!(!declined.is_for("other@y.z"));

        let anonymous = Invitation {
            email: None,
            invitation_status: InvitationStatus::Pending,
        };
        assert!(!anonymous.is_for("x@y.z"));
    }

    #[test]
    fn statuses_use_screaming_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Upcoming).unwrap(),
            "\"UPCOMING\""
        );
        assert_eq!(
            serde_json::from_str::<ApprovalStatus>("\"REJECTED\"").unwrap(),
            ApprovalStatus::Rejected
        );
        assert_eq!(
            serde_json::from_str::<Visibility>("\"PRIVATE\"").unwrap(),
            Visibility::Private
        );
    }
}
