//! Action-gate computation.
//!
//! The gate is the externally visible decision record for one
//! (principal, event) pair: the view/manage verdicts plus one boolean per
//! lifecycle action. It is a pure function of its inputs with no caching;
//! after any mutation that changes an event's statuses or a user's role,
//! the caller must re-fetch and recompute the whole gate before rendering
//! action affordances; patching a stale gate is a defect, not a tolerated
//! race.

use serde::Serialize;

use eventdesk_auth::Principal;
use eventdesk_events::{action_permitted, EventAction, EventRecord, Invitation};

use crate::access::{can_manage, can_view};

/// Immutable decision record for one (principal, event) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionGate {
    pub can_view: bool,
    pub can_manage: bool,
    pub edit: bool,
    pub delete: bool,
    pub approve: bool,
    pub reject: bool,
    pub hold: bool,
    pub reactivate: bool,
    pub invite: bool,
}

impl ActionGate {
    /// A gate that denies everything (the fail-closed default).
    pub const DENY_ALL: ActionGate = ActionGate {
        can_view: false,
        can_manage: false,
        edit: false,
        delete: false,
        approve: false,
        reject: false,
        hold: false,
        reactivate: false,
        invite: false,
    };

    pub fn allows(&self, action: EventAction) -> bool {
        match action {
            EventAction::Edit => self.edit,
            EventAction::Delete => self.delete,
            EventAction::Approve => self.approve,
            EventAction::Reject => self.reject,
            EventAction::Hold => self.hold,
            EventAction::Reactivate => self.reactivate,
            EventAction::Invite => self.invite,
        }
    }
}

/// Compute the action gate for one (principal, event) pair.
///
/// Every action flag requires management rights as its precondition; the
/// status conditions come from the gating table in `eventdesk-events`.
pub fn compute_gate(
    principal: Option<&Principal>,
    event: &EventRecord,
    invitations: &[Invitation],
) -> ActionGate {
    let can_view = can_view(principal, event, invitations);
    let can_manage = can_manage(principal, event);

    let permitted = |action: EventAction| {
        can_manage && action_permitted(action, event.approval_status, event.event_status)
    };

    ActionGate {
        can_view,
        can_manage,
        edit: permitted(EventAction::Edit),
        delete: permitted(EventAction::Delete),
        approve: permitted(EventAction::Approve),
        reject: permitted(EventAction::Reject),
        hold: permitted(EventAction::Hold),
        reactivate: permitted(EventAction::Reactivate),
        invite: permitted(EventAction::Invite),
    }
}
