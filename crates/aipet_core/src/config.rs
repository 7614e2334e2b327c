//! Store configuration.

use crate::storage::DEFAULT_KEY_PREFIX;

/// Principal stamped into `created_by` when no auth context exists.
pub const DEFAULT_PRINCIPAL: &str = "current_user";

/// Settings shared by every entity store opened over one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Value written to `created_by` on create.
    pub principal: String,
    /// Prefix joined with the collection name to form the slot key.
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = principal.into();
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }
}
