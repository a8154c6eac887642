//! Event lifecycle state machine.
//!
//! Two independent axes: approval (`PENDING → APPROVED | REJECTED`, with
//! `REJECTED` terminal) and operational (`UPCOMING/ACTIVE/HOLD/INACTIVE/
//! COMPLETED`). No combination of the two is structurally forbidden; the
//! gating table in [`crate::actions`] decides what is *offered*.
//!
//! Transitions are pure: they take the current state and return the next
//! state (or a [`DomainError`]), never mutating the fetched record. Illegal
//! transitions are always rejected, never silently allowed.

use chrono::{DateTime, Utc};
use tracing::debug;

use eventdesk_core::{DomainError, DomainResult};

use crate::event::{ApprovalStatus, EventRecord, EventStatus};

/// Snapshot of both status axes of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    pub approval: ApprovalStatus,
    pub operational: EventStatus,
}

/// Outcome of a rejection: the new lifecycle plus the mandatory remarks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub lifecycle: Lifecycle,
    pub remarks: String,
}

/// Outcome of a hold: the new lifecycle plus the operational state to
/// restore on reactivation. Callers must persist `resume_to` alongside the
/// event; reactivation without it falls back to `UPCOMING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldTransition {
    pub lifecycle: Lifecycle,
    pub resume_to: EventStatus,
}

impl Lifecycle {
    pub fn new(approval: ApprovalStatus, operational: EventStatus) -> Self {
        Self {
            approval,
            operational,
        }
    }

    /// `PENDING → APPROVED`. Illegal from `APPROVED` and `REJECTED`.
    pub fn approve(&self) -> DomainResult<Lifecycle> {
        match self.approval {
            ApprovalStatus::Pending => {
                debug!(operational = ?self.operational, "event approved");
                Ok(Lifecycle {
                    approval: ApprovalStatus::Approved,
                    ..*self
                })
            }
            ApprovalStatus::Approved => {
                Err(DomainError::invariant("event is already approved"))
            }
            ApprovalStatus::Rejected => {
                Err(DomainError::invariant("rejected events cannot be approved"))
            }
        }
    }

    /// `PENDING → REJECTED`, recording remarks. Remarks are mandatory:
    /// blank remarks are a validation error, not an empty record.
    pub fn reject(&self, remarks: &str) -> DomainResult<Rejection> {
        if remarks.trim().is_empty() {
            return Err(DomainError::validation(
                "remarks are mandatory when rejecting an event",
            ));
        }
        match self.approval {
            ApprovalStatus::Pending => {
                debug!(operational = ?self.operational, "event rejected");
                Ok(Rejection {
                    lifecycle: Lifecycle {
                        approval: ApprovalStatus::Rejected,
                        ..*self
                    },
                    remarks: remarks.trim().to_string(),
                })
            }
            ApprovalStatus::Approved => {
                Err(DomainError::invariant("approved events cannot be rejected"))
            }
            ApprovalStatus::Rejected => {
                Err(DomainError::invariant("event is already rejected"))
            }
        }
    }

    /// Suspend an approved event. Legal only when the operational state is
    /// neither `INACTIVE` nor `HOLD`. The prior state is carried in the
    /// returned transition so reactivation can restore it.
    pub fn hold(&self) -> DomainResult<HoldTransition> {
        if self.approval != ApprovalStatus::Approved {
            return Err(DomainError::invariant("only approved events can be held"));
        }
        match self.operational {
            EventStatus::Inactive | EventStatus::Hold => Err(DomainError::invariant(
                "event is already held or inactive",
            )),
            prior => {
                debug!(resume_to = ?prior, "event put on hold");
                Ok(HoldTransition {
                    lifecycle: Lifecycle {
                        operational: EventStatus::Hold,
                        ..*self
                    },
                    resume_to: prior,
                })
            }
        }
    }

    /// Leave `HOLD`/`INACTIVE`, restoring the recorded pre-hold state.
    ///
    /// `resume_to` is the state captured by [`Lifecycle::hold`]; when the
    /// caller has no record of it (legacy data), the event resumes as
    /// `UPCOMING`.
    pub fn reactivate(&self, resume_to: Option<EventStatus>) -> DomainResult<Lifecycle> {
        match self.operational {
            EventStatus::Inactive | EventStatus::Hold => {
                let operational = resume_to.unwrap_or(EventStatus::Upcoming);
                debug!(from = ?self.operational, to = ?operational, "event reactivated");
                Ok(Lifecycle {
                    operational,
                    ..*self
                })
            }
            _ => Err(DomainError::invariant(
                "only held or inactive events can be reactivated",
            )),
        }
    }
}

impl EventRecord {
    /// Both status axes, when the record carries them. A record missing
    /// either axis has no lifecycle to transition.
    pub fn lifecycle(&self) -> Option<Lifecycle> {
        match (self.approval_status, self.event_status) {
            (Some(approval), Some(operational)) => Some(Lifecycle::new(approval, operational)),
            _ => None,
        }
    }

    /// Time-derived operational status at `now`.
    ///
    /// Stored `INACTIVE`/`HOLD` always win; otherwise the event window
    /// decides: before `startTime` is `UPCOMING`, past `endTime` is
    /// `COMPLETED`, in between is `ACTIVE`. Records without a usable window
    /// keep their stored status. Pure; the clock is an input.
    pub fn current_status(&self, now: DateTime<Utc>) -> Option<EventStatus> {
        match self.event_status {
            Some(EventStatus::Inactive) => Some(EventStatus::Inactive),
            Some(EventStatus::Hold) => Some(EventStatus::Hold),
            stored => match (self.start_time, self.end_time) {
                (Some(start), _) if now < start => Some(EventStatus::Upcoming),
                (_, Some(end)) if now > end => Some(EventStatus::Completed),
                (Some(_), Some(_)) => Some(EventStatus::Active),
                _ => stored,
            },
        }
    }
}
