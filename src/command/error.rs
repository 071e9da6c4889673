use thiserror::Error;

/// Input the command layer could not turn into something to run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    #[error("Unrecognized command '{0}'.")]
    UnrecognizedCommand(String),

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError(String),
}

pub type PrepareResult<T> = Result<T, PrepareError>;
