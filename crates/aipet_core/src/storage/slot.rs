//! Slot storage contract and error type.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Prefix prepended to collection names to build slot keys.
pub const DEFAULT_KEY_PREFIX: &str = "aipet_";

pub type SlotResult<T> = Result<T, SlotError>;

/// Backend failure while reading or writing a slot.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    /// Writing the value would push the backend over its byte budget.
    QuotaExceeded {
        key: String,
        required: usize,
        limit: usize,
    },
    /// Connection was not bootstrapped through `open_db*`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                required,
                limit,
            } => write!(
                f,
                "storage quota exceeded writing slot `{key}`: {required} bytes required, limit {limit}"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "slot database not initialized: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "slot database is missing required table `{table}`")
            }
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. }
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed string storage, the persistence seam of every entity store.
///
/// Implementations are synchronous: `write` returns only after the value is
/// stored (or has definitively failed).
pub trait SlotStorage {
    /// Returns the slot value, or `None` when nothing was ever written.
    fn read(&self, key: &str) -> SlotResult<Option<String>>;
    /// Replaces the slot value.
    fn write(&self, key: &str, value: &str) -> SlotResult<()>;
    /// Drops the slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> SlotResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> SlotResult<()> {
        (**self).remove(key)
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Rc<S> {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> SlotResult<()> {
        (**self).remove(key)
    }
}

/// Builds the slot key for a collection: `prefix + collection`.
pub fn slot_key(prefix: &str, collection: &str) -> String {
    format!("{prefix}{collection}")
}

#[cfg(test)]
mod tests {
    use super::{slot_key, SlotError, DEFAULT_KEY_PREFIX};

    #[test]
    fn slot_key_prefixes_collection_name() {
        assert_eq!(slot_key(DEFAULT_KEY_PREFIX, "Token"), "aipet_Token");
        assert_eq!(slot_key("base44_", "CaseStudy"), "base44_CaseStudy");
    }

    #[test]
    fn quota_error_message_names_slot_and_sizes() {
        let err = SlotError::QuotaExceeded {
            key: "aipet_Token".to_string(),
            required: 120,
            limit: 100,
        };
        let message = err.to_string();
        assert!(message.contains("aipet_Token"));
        assert!(message.contains("120"));
        assert!(message.contains("100"));
    }
}
