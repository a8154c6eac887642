//! `eventdesk-events` — the event resource model and its lifecycle rules.
//!
//! Events carry two independent status axes: approval (moderation outcome)
//! and operational (runtime stage). This crate owns their enumerations, the
//! legal transitions between them, and the action-gating table that decides
//! which lifecycle actions may be offered in each combination.

pub mod actions;
pub mod event;
pub mod lifecycle;

pub use actions::{action_permitted, EventAction};
pub use event::{
    ApprovalStatus, EventRecord, EventStatus, Invitation, InvitationStatus, Visibility,
};
pub use lifecycle::{HoldTransition, Lifecycle, Rejection};
