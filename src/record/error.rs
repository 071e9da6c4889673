use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Field {field} is {len} bytes, max is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Field {field} contains a NUL byte")]
    NulByte { field: &'static str },

    #[error("Invalid record length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl RecordError {
    /// Errors caused by user input rather than by corrupted slot contents
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecordError::FieldTooLong { .. } | RecordError::NulByte { .. }
        )
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
