use serde::{Deserialize, Serialize};

use eventdesk_core::PrincipalId;

use crate::roles::{RoleAssignment, RoleData};

/// The authenticated actor whose rights are being evaluated.
///
/// Mirrors the REST user payload. Events are created through several paths
/// that stamp different identity representations (`id`, `email`, `name`,
/// `fullName`), so all of them are kept; ownership checks compare across the
/// whole set. Missing fields simply never match anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: PrincipalId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<RoleAssignment>,
}

impl Principal {
    /// The role object, when the assignment has been resolved with
    /// permission data. Unresolved (bare-string) assignments yield `None`.
    pub fn resolved_role(&self) -> Option<&RoleData> {
        match &self.role {
            Some(RoleAssignment::Resolved(data)) => Some(data),
            Some(RoleAssignment::Unresolved(_)) | None => None,
        }
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(RoleAssignment::name)
    }
}
