//! `eventdesk-auth` — principal identity and permission resolution.
//!
//! This crate is intentionally decoupled from HTTP and storage: principals
//! arrive as already-fetched REST payloads and everything here is a pure
//! derivation over them, apart from the explicit permission cache.

pub mod permissions;
pub mod principal;
pub mod resolver;
pub mod roles;

pub use permissions::Permission;
pub use principal::Principal;
pub use resolver::{PermissionCache, PermissionResolver};
pub use roles::{RoleAssignment, RoleData, RoleKind};
