//! Role assignment model.
//!
//! Upstream user payloads carry the role in one of two shapes: a bare role
//! name string (legacy sessions, no permission data) or a full role object
//! with its permission set. That duality is a real external-data
//! inconsistency, so it is modeled as an explicit tagged variant rather than
//! papered over; every consumer must match both arms.

use serde::{Deserialize, Serialize};

use eventdesk_core::RoleId;

use crate::Permission;

/// A resolved role: identity plus the granted permission set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleData {
    #[serde(default)]
    pub id: Option<RoleId>,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl RoleData {
    pub fn kind(&self) -> RoleKind {
        RoleKind::from_name(&self.name)
    }
}

/// A principal's role as delivered by upstream.
///
/// `Unresolved` carries only the role name; it grants nothing anywhere in
/// this crate family (fail-closed) until a resolved object is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleAssignment {
    Resolved(RoleData),
    Unresolved(String),
}

impl RoleAssignment {
    pub fn name(&self) -> &str {
        match self {
            RoleAssignment::Resolved(data) => &data.name,
            RoleAssignment::Unresolved(name) => name,
        }
    }

    pub fn kind(&self) -> RoleKind {
        RoleKind::from_name(self.name())
    }

    /// Stable identity for memoization: the role id when one is present,
    /// else the role name.
    pub fn identity(&self) -> &str {
        match self {
            RoleAssignment::Resolved(data) => data
                .id
                .as_ref()
                .map(RoleId::as_str)
                .unwrap_or(data.name.as_str()),
            RoleAssignment::Unresolved(name) => name,
        }
    }
}

/// The role families this system distinguishes.
///
/// Matching is ASCII-case-insensitive; anything outside the three known
/// families is `Other` and grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    SuperAdmin,
    Admin,
    Attendee,
    Other,
}

impl RoleKind {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("superadmin") {
            RoleKind::SuperAdmin
        } else if name.eq_ignore_ascii_case("admin") {
            RoleKind::Admin
        } else if name.eq_ignore_ascii_case("attendee") {
            RoleKind::Attendee
        } else {
            RoleKind::Other
        }
    }
}
