// Log Storage Abstraction
//
// Defines the contract every record store behind a `Log` must honor,
// plus the process-local in-memory implementation.

use parking_lot::RwLock;

use super::{LogError, Offset, Record};

/// Storage backend for the log.
///
/// Properties required from implementations:
/// - Append-only
/// - Ordered
/// - Gap-free offsets starting at 0
///
/// Implementations MUST NOT:
/// - Reorder records
/// - Mutate or remove existing records
/// - Hand out the same offset twice
pub trait LogStore: Send + Sync {
    /// Append a payload and return the offset it was stored at.
    ///
    /// Assigning the offset and storing the payload must be a single
    /// atomic step: either both happen or neither does.
    fn append(&self, value: Vec<u8>) -> Result<Offset, LogError>;

    /// Return a copy of the record stored at `offset`.
    ///
    /// Fails with [`LogError::OffsetNotFound`] when `offset >= len()`.
    fn read(&self, offset: Offset) -> Result<Record, LogError>;

    /// Number of records stored so far.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Store that keeps every record in process memory.
///
/// Growth is unbounded; the log lives exactly as long as the value.
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    // The vector length doubles as the next offset, so both are guarded
    // by the same lock.
    records: RwLock<Vec<Vec<u8>>>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStore for InMemoryLogStore {
    fn append(&self, value: Vec<u8>) -> Result<Offset, LogError> {
        let mut records = self.records.write();
        let offset = records.len() as Offset;
        records.push(value);
        Ok(offset)
    }

    fn read(&self, offset: Offset) -> Result<Record, LogError> {
        let index = usize::try_from(offset).map_err(|_| LogError::OffsetNotFound)?;
        let records = self.records.read();
        let value = records.get(index).ok_or(LogError::OffsetNotFound)?;

        Ok(Record {
            value: value.clone(),
            offset,
        })
    }

    fn len(&self) -> u64 {
        self.records.read().len() as u64
    }
}
