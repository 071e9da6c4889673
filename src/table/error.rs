use crate::config::ConfigError;
use crate::record::RecordError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Table full.")]
    Full { max_rows: usize },

    #[error("Row index {index} out of range (rows: {num_rows})")]
    RowOutOfRange { index: usize, num_rows: usize },

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl TableError {
    /// Whether the session may report this error and carry on
    ///
    /// Storage errors mean the slot arithmetic or capacity guard is broken,
    /// and decode failures mean a slot holds bytes no insert could write.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TableError::Full { .. } | TableError::RowOutOfRange { .. } => true,
            TableError::Record(err) => err.is_validation(),
            TableError::Storage(_) | TableError::Config(_) => false,
        }
    }
}

pub type TableResult<T> = Result<T, TableError>;
