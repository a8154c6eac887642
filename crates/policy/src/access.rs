//! View/manage access decisions.
//!
//! Viewing and managing are independent rights: an Admin can view every
//! event but manage only their own, so `can_manage` never consults
//! `can_view`. Both functions are total and fail-closed; malformed input
//! resolves to `false`, never an error.

use tracing::warn;

use eventdesk_auth::{Principal, RoleAssignment, RoleKind};
use eventdesk_events::{EventRecord, Invitation};

use crate::ownership::is_owner;

/// Whether `principal` may view `event`.
///
/// SuperAdmin and Admin view everything; an Attendee views public events and
/// events whose invitation list carries their email (any invitation status).
/// Everything else (unknown roles, unresolved roles, missing principal) is
/// denied.
pub fn can_view(
    principal: Option<&Principal>,
    event: &EventRecord,
    invitations: &[Invitation],
) -> bool {
    let Some(principal) = principal else {
        return false;
    };

    match &principal.role {
        Some(RoleAssignment::Resolved(role)) => match role.kind() {
            RoleKind::SuperAdmin | RoleKind::Admin => true,
            RoleKind::Attendee => {
                event.is_public()
                    || principal
                        .email
                        .as_deref()
                        .is_some_and(|email| invitations.iter().any(|i| i.is_for(email)))
            }
            RoleKind::Other => false,
        },
        Some(RoleAssignment::Unresolved(name)) => {
            warn!(principal = %principal.id, role = %name, "unresolved role; denying view");
            false
        }
        None => false,
    }
}

/// Whether `principal` may manage `event` (edit, delete, moderate, invite).
///
/// SuperAdmin manages everything; an Admin manages the events they own (see
/// [`is_owner`]); Attendees and everything unresolved manage nothing.
pub fn can_manage(principal: Option<&Principal>, event: &EventRecord) -> bool {
    let Some(principal) = principal else {
        return false;
    };

    match &principal.role {
        Some(RoleAssignment::Resolved(role)) => match role.kind() {
            RoleKind::SuperAdmin => true,
            RoleKind::Admin => is_owner(principal, event),
            RoleKind::Attendee | RoleKind::Other => false,
        },
        Some(RoleAssignment::Unresolved(name)) => {
            warn!(principal = %principal.id, role = %name, "unresolved role; denying manage");
            false
        }
        None => false,
    }
}
