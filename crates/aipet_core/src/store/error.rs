use crate::storage::SlotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity store failure.
///
/// Every variant except `NotFound` is a persistence failure.
#[derive(Debug)]
pub enum StoreError {
    /// No record with `id` exists in `collection`.
    NotFound {
        collection: &'static str,
        id: String,
    },
    Slot(SlotError),
    /// The collection could not be serialized into its slot.
    Encode {
        collection: &'static str,
        source: serde_json::Error,
    },
    /// The persisted slot does not decode into the collection's record type.
    Decode {
        collection: &'static str,
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_persistence(&self) -> bool {
        !self.is_not_found()
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { collection, id } => {
                write!(f, "{collection} with id {id} not found")
            }
            Self::Slot(err) => write!(f, "{err}"),
            Self::Encode { collection, source } => {
                write!(f, "failed to encode {collection} collection: {source}")
            }
            Self::Decode { collection, source } => {
                write!(f, "failed to decode persisted {collection} collection: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Slot(err) => Some(err),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}
