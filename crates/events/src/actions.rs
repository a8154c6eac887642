//! Action-gating table.
//!
//! This table is the single source of truth for which lifecycle actions may
//! be *offered* given an event's status combination. Management rights are a
//! separate precondition layered on top by the policy crate; the table only
//! answers the status question.
//!
//! The conditions are literal ORs/ANDs, not a priority chain. Edit and
//! Delete deliberately overlap without being identical. A missing axis
//! satisfies no positive membership test and every negated one (an unknown
//! status is never "INACTIVE", for example).

use serde::{Deserialize, Serialize};

use crate::event::{ApprovalStatus, EventStatus};

/// Lifecycle actions a caller can surface for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Edit,
    Delete,
    Approve,
    Reject,
    Hold,
    Reactivate,
    Invite,
}

impl EventAction {
    pub const ALL: [EventAction; 7] = [
        EventAction::Edit,
        EventAction::Delete,
        EventAction::Approve,
        EventAction::Reject,
        EventAction::Hold,
        EventAction::Reactivate,
        EventAction::Invite,
    ];
}

/// Whether the status combination permits offering `action`.
pub fn action_permitted(
    action: EventAction,
    approval: Option<ApprovalStatus>,
    status: Option<EventStatus>,
) -> bool {
    use ApprovalStatus::{Approved, Pending, Rejected};
    use EventStatus::{Hold, Inactive, Upcoming};

    match action {
        EventAction::Edit => {
            matches!(approval, Some(Pending | Approved))
                || matches!(status, Some(Inactive | Upcoming))
        }
        EventAction::Delete => {
            matches!(approval, Some(Pending | Rejected | Approved))
                || matches!(status, Some(Inactive | Upcoming | Hold))
        }
        EventAction::Approve => approval == Some(Pending),
        EventAction::Reject => approval == Some(Pending),
        EventAction::Hold => {
            approval == Some(Approved) && !matches!(status, Some(Inactive | Hold))
        }
        EventAction::Reactivate => matches!(status, Some(Inactive | Hold)),
        EventAction::Invite => {
            approval == Some(Approved) && !matches!(status, Some(Inactive | Hold))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use ApprovalStatus::{Approved, Pending, Rejected};
    use EventStatus::{Active, Completed, Hold, Inactive, Upcoming};

    fn permitted(approval: ApprovalStatus, status: EventStatus) -> Vec<EventAction> {
        EventAction::ALL
            .into_iter()
            .filter(|a| action_permitted(*a, Some(approval), Some(status)))
            .collect()
    }

    #[test]
    fn pending_upcoming_offers_moderation_and_editing() {
        assert_eq!(
            permitted(Pending, Upcoming),
            vec![
                EventAction::Edit,
                EventAction::Delete,
                EventAction::Approve,
                EventAction::Reject,
            ]
        );
    }

    #[test]
    fn approved_hold_offers_reactivation() {
        assert_eq!(
            permitted(Approved, Hold),
            vec![EventAction::Edit, EventAction::Delete, EventAction::Reactivate]
        );
    }

    #[test]
    fn approved_active_offers_hold_and_invite() {
        assert_eq!(
            permitted(Approved, Active),
            vec![
                EventAction::Edit,
                EventAction::Delete,
                EventAction::Hold,
                EventAction::Invite,
            ]
        );
    }

    #[test]
    fn rejected_completed_offers_delete_only() {
        assert_eq!(permitted(Rejected, Completed), vec![EventAction::Delete]);
    }

    #[test]
    fn edit_and_delete_overlap_but_differ() {
        // REJECTED + ACTIVE: deletable but not editable; the apparent
        // redundancy between the two conditions is load-bearing.
        assert!(!action_permitted(EventAction::Edit, Some(Rejected), Some(Active)));
        assert!(action_permitted(EventAction::Delete, Some(Rejected), Some(Active)));
    }

    #[test]
    fn unknown_axes_fail_positive_tests_and_pass_negated_ones() {
        // No approval axis: nothing keyed on approval is offered.
        assert!(!action_permitted(EventAction::Approve, None, Some(Upcoming)));
        assert!(!action_permitted(EventAction::Hold, None, Some(Upcoming)));
        // No status axis: approval-only conditions still apply, and the
        // negated membership in Hold/Invite is vacuously satisfied.
        assert!(action_permitted(EventAction::Approve, Some(Pending), None));
        assert!(action_permitted(EventAction::Hold, Some(Approved), None));
        assert!(action_permitted(EventAction::Invite, Some(Approved), None));
        assert!(!action_permitted(EventAction::Reactivate, Some(Approved), None));
    }

    fn approval_strategy() -> impl Strategy<Value = Option<ApprovalStatus>> {
        prop_oneof![
            Just(None),
            Just(Some(Pending)),
            Just(Some(Approved)),
            Just(Some(Rejected)),
        ]
    }

    fn status_strategy() -> impl Strategy<Value = Option<EventStatus>> {
        prop_oneof![
            Just(None),
            Just(Some(Upcoming)),
            Just(Some(Active)),
            Just(Some(Hold)),
            Just(Some(Inactive)),
            Just(Some(Completed)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: Approve and Reject are offered under exactly the same
        /// condition: approval is PENDING.
        #[test]
        fn approve_and_reject_agree(
            approval in approval_strategy(),
            status in status_strategy(),
        ) {
            let approve = action_permitted(EventAction::Approve, approval, status);
            let reject = action_permitted(EventAction::Reject, approval, status);
            prop_assert_eq!(approve, reject);
            prop_assert_eq!(approve, approval == Some(Pending));
        }

        /// Property: Hold and Invite share one gate, and neither is ever
        /// offered alongside Reactivate (their status conditions are
        /// complementary over known statuses).
        #[test]
        fn hold_invite_and_reactivate_are_disjoint(
            approval in approval_strategy(),
            status in status_strategy(),
        ) {
            let hold = action_permitted(EventAction::Hold, approval, status);
            let invite = action_permitted(EventAction::Invite, approval, status);
            let reactivate = action_permitted(EventAction::Reactivate, approval, status);

            prop_assert_eq!(hold, invite);
            prop_assert!(!(hold && reactivate));
        }

        /// Property: anything editable is also deletable (Delete's
        /// conditions are a superset of Edit's).
        #[test]
        fn editable_implies_deletable(
            approval in approval_strategy(),
            status in status_strategy(),
        ) {
            if action_permitted(EventAction::Edit, approval, status) {
                prop_assert!(action_permitted(EventAction::Delete, approval, status));
            }
        }
    }
}
