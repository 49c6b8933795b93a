use serde::{Deserialize, Serialize};

mod store;

pub use store::{InMemoryLogStore, LogStore};

/// Position of a record in the log, assigned at append time.
pub type Offset = u64;

/// A stored payload together with the offset it lives at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub value: Vec<u8>,
    pub offset: Offset,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LogError {
    #[error("offset not found")]
    OffsetNotFound,
}

/// Append-only log of opaque records.
///
/// Constructed once at startup and shared with whatever serves requests;
/// all operations take `&self`, so an `Arc<Log>` is enough.
#[derive(Debug, Default)]
pub struct Log<S = InMemoryLogStore> {
    store: S,
}

impl<S: LogStore> Log<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a payload, returning the offset it was assigned.
    pub fn append(&self, value: impl Into<Vec<u8>>) -> Result<Offset, LogError> {
        let value = value.into();
        let size = value.len();
        let offset = self.store.append(value)?;
        tracing::debug!(offset, size, "appended record");
        Ok(offset)
    }

    /// Read the record at `offset`.
    pub fn read(&self, offset: Offset) -> Result<Record, LogError> {
        self.store.read(offset).inspect_err(|_| {
            tracing::debug!(offset, len = self.store.len(), "read past end of log");
        })
    }

    pub fn len(&self) -> u64 {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
