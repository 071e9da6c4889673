use crate::table::TableError;
use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

pub type ReplResult<T> = Result<T, ReplError>;
