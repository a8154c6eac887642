//! Session-scoped decision facade.
//!
//! One `PolicyEngine` lives per authenticated session: created at login with
//! a fresh permission cache and cleared at logout. Every method is a pure
//! query except `clear_cache`.

use std::collections::HashSet;
use std::sync::Arc;

use eventdesk_auth::{Permission, PermissionCache, PermissionResolver, Principal};
use eventdesk_events::{EventRecord, Invitation};

use crate::access;
use crate::gate::{compute_gate, ActionGate};

/// The decision surface exposed to the presentation layer.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    resolver: PermissionResolver,
}

impl PolicyEngine {
    /// Engine with a fresh, empty permission cache (session login).
    pub fn new() -> Self {
        Self::with_cache(Arc::new(PermissionCache::new()))
    }

    /// Engine over an externally owned cache handle.
    pub fn with_cache(cache: Arc<PermissionCache>) -> Self {
        Self {
            resolver: PermissionResolver::new(cache),
        }
    }

    pub fn resolver(&self) -> &PermissionResolver {
        &self.resolver
    }

    pub fn permissions_of(&self, principal: Option<&Principal>) -> Arc<HashSet<Permission>> {
        self.resolver.permissions_of(principal)
    }

    pub fn has_permission(&self, principal: Option<&Principal>, name: &str) -> bool {
        self.resolver.has_permission(principal, name)
    }

    pub fn has_any(&self, principal: Option<&Principal>, names: &[&str]) -> bool {
        self.resolver.has_any(principal, names)
    }

    pub fn has_all(&self, principal: Option<&Principal>, names: &[&str]) -> bool {
        self.resolver.has_all(principal, names)
    }

    pub fn can_view(
        &self,
        principal: Option<&Principal>,
        event: &EventRecord,
        invitations: &[Invitation],
    ) -> bool {
        access::can_view(principal, event, invitations)
    }

    pub fn can_manage(&self, principal: Option<&Principal>, event: &EventRecord) -> bool {
        access::can_manage(principal, event)
    }

    pub fn compute_gate(
        &self,
        principal: Option<&Principal>,
        event: &EventRecord,
        invitations: &[Invitation],
    ) -> ActionGate {
        compute_gate(principal, event, invitations)
    }

    /// The only mutator: wholesale cache invalidation (logout). Idempotent.
    pub fn clear_cache(&self) {
        self.resolver.clear_cache();
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}
