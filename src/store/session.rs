use tracing::warn;

use crate::storage::{KvStore, ADMIN_SESSION_KEY};

/// Access code gating the admin role. There is no account system behind
/// it, just this shared value.
pub const ADMIN_PASSWORD: &str = "admin";

/// Session-scoped admin confirmation. The flag lives in an ephemeral
/// store and disappears with the session; it is never written to the
/// durable collections.
pub struct AdminSession<S: KvStore> {
    kv: S,
}

impl<S: KvStore> AdminSession<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Check the access code; on success the confirmation is remembered
    /// for the rest of the session.
    pub fn confirm(&mut self, password: &str) -> bool {
        if password != ADMIN_PASSWORD {
            return false;
        }
        if let Err(error) = self.kv.set(ADMIN_SESSION_KEY, "true") {
            warn!("Failed to persist admin confirmation: {error:#}");
        }
        true
    }

    pub fn is_confirmed(&self) -> bool {
        match self.kv.get(ADMIN_SESSION_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(error) => {
                warn!("Failed to read admin confirmation: {error:#}");
                false
            }
        }
    }

    /// Drop the confirmation, e.g. at session end.
    pub fn clear(&mut self) {
        if let Err(error) = self.kv.remove(ADMIN_SESSION_KEY) {
            warn!("Failed to clear admin confirmation: {error:#}");
        }
    }
}
