//! Effective-permission resolution with explicit memoization.
//!
//! Resolution is referentially transparent: a cache hit returns exactly the
//! set a fresh computation would produce. The cache is an explicit handle
//! owned by the session boundary (created at login, cleared at logout),
//! never an ambient static reached into by business logic.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, trace, warn};

use eventdesk_core::PrincipalId;

use crate::principal::Principal;
use crate::roles::RoleAssignment;
use crate::Permission;

// ─────────────────────────────────────────────────────────────────────────────
// Permission Cache
// ─────────────────────────────────────────────────────────────────────────────

/// Cache key: the principal plus the identity of its role assignment.
///
/// A role's permission set is treated as immutable once resolved for a
/// session; a changed assignment shows up as a new key, a changed role
/// definition requires `clear()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    principal: PrincipalId,
    role: String,
}

/// Process-scoped store of resolved permission sets.
///
/// Entries are write-once per key and only removed wholesale via `clear()`,
/// so concurrent readers never observe a mutated set.
#[derive(Debug, Default)]
pub struct PermissionCache {
    entries: Mutex<HashMap<CacheKey, Arc<HashSet<Permission>>>>,
    resolutions: AtomicU64,
}

impl PermissionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry. Idempotent; owned by the session boundary (logout),
    /// not by individual queries.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if !entries.is_empty() {
            debug!(entries = entries.len(), "clearing permission cache");
        }
        entries.clear();
    }

    /// Number of resolutions computed from source data (cache misses).
    ///
    /// Monotonic across `clear()`; lets callers and tests observe whether a
    /// query was served from cache or recomputed.
    pub fn resolutions(&self) -> u64 {
        self.resolutions.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_or_populate<F>(&self, key: CacheKey, resolve: F) -> Arc<HashSet<Permission>>
    where
        F: FnOnce() -> HashSet<Permission>,
    {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(set) = entries.get(&key) {
            trace!(principal = %key.principal, role = %key.role, "permission cache hit");
            return Arc::clone(set);
        }

        let set = Arc::new(resolve());
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        debug!(
            principal = %key.principal,
            role = %key.role,
            permissions = set.len(),
            "resolved permissions from role data"
        );
        entries.insert(key, Arc::clone(&set));
        set
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Permission Resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Derives a principal's effective permission set from its role assignment.
///
/// All queries are pure set-membership checks over `permissions_of`; the
/// only state is the injected cache handle.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    cache: Arc<PermissionCache>,
    empty: Arc<HashSet<Permission>>,
}

impl PermissionResolver {
    pub fn new(cache: Arc<PermissionCache>) -> Self {
        Self {
            cache,
            empty: Arc::new(HashSet::new()),
        }
    }

    pub fn cache(&self) -> &Arc<PermissionCache> {
        &self.cache
    }

    /// Effective permission set of a principal.
    ///
    /// Fail-closed: an absent principal, an absent role, and an unresolved
    /// (bare-string) role all yield the empty set. A resolved role yields its
    /// permission set verbatim, memoized by `(principal id, role identity)`.
    pub fn permissions_of(&self, principal: Option<&Principal>) -> Arc<HashSet<Permission>> {
        let Some(principal) = principal else {
            return Arc::clone(&self.empty);
        };

        match &principal.role {
            None => Arc::clone(&self.empty),
            Some(RoleAssignment::Unresolved(name)) => {
                // Known sharp edge: legacy sessions carry only the role name.
                warn!(
                    principal = %principal.id,
                    role = %name,
                    "role assignment is unresolved; denying all permissions"
                );
                Arc::clone(&self.empty)
            }
            Some(role @ RoleAssignment::Resolved(data)) => {
                let key = CacheKey {
                    principal: principal.id.clone(),
                    role: role.identity().to_string(),
                };
                self.cache
                    .get_or_populate(key, || data.permissions.iter().cloned().collect())
            }
        }
    }

    pub fn has_permission(&self, principal: Option<&Principal>, name: &str) -> bool {
        self.permissions_of(principal)
            .iter()
            .any(|p| p.as_str() == name)
    }

    /// True when the principal holds at least one of `names`.
    pub fn has_any(&self, principal: Option<&Principal>, names: &[&str]) -> bool {
        let permissions = self.permissions_of(principal);
        names
            .iter()
            .any(|name| permissions.iter().any(|p| p.as_str() == *name))
    }

    /// True when the principal holds every one of `names`.
    ///
    /// Vacuously true for an empty `names` slice (`∅ ⊆ S`).
    pub fn has_all(&self, principal: Option<&Principal>, names: &[&str]) -> bool {
        let permissions = self.permissions_of(principal);
        names
            .iter()
            .all(|name| permissions.iter().any(|p| p.as_str() == *name))
    }

    /// Idempotent wholesale cache invalidation (session logout).
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
