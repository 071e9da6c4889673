use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Page index {page_id} out of bounds (max pages: {max_pages})")]
    PageOutOfBounds { page_id: usize, max_pages: usize },

    #[error("Invalid slot: page_id={0}, slot_id={1}")]
    InvalidSlot(usize, usize),

    #[error("Page not allocated: page_id={0}")]
    PageNotAllocated(usize),

    #[error("Record size {record_size} is too large for page size {page_size}")]
    RecordTooLarge {
        record_size: usize,
        page_size: usize,
    },

    #[error("Invalid record size: expected {expected}, got {actual}")]
    InvalidRecordSize { expected: usize, actual: usize },
}

pub type StorageResult<T> = Result<T, StorageError>;
