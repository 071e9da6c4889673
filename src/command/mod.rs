mod error;
mod parser;

pub use error::{PrepareError, PrepareResult};
pub use parser::{insert_parser, select_parser};

use chumsky::Parser;

use crate::record::Record;

/// A statement ready to run against the table
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Record),
    Select,
}

/// Commands starting with `.`, handled outside the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Help,
    Constants,
    Stats,
}

impl MetaCommand {
    pub fn is_meta(input: &str) -> bool {
        input.starts_with('.')
    }

    pub fn parse(input: &str) -> PrepareResult<Self> {
        match input.trim() {
            ".exit" => Ok(MetaCommand::Exit),
            ".help" => Ok(MetaCommand::Help),
            ".constants" => Ok(MetaCommand::Constants),
            ".stats" => Ok(MetaCommand::Stats),
            other => Err(PrepareError::UnrecognizedCommand(other.to_string())),
        }
    }
}

/// Turn one line of input into a statement
///
/// The leading word picks the statement kind; anything after it that does
/// not fit that statement's shape is a syntax error.
pub fn prepare(input: &str) -> PrepareResult<Statement> {
    let input = input.trim();
    let keyword = input.split_whitespace().next().unwrap_or_default();

    let result = match keyword {
        "insert" => insert_parser().parse(input).into_result(),
        "select" => select_parser().parse(input).into_result(),
        _ => return Err(PrepareError::UnrecognizedStatement(input.to_string())),
    };

    result.map_err(|errs| {
        let message = errs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        log::debug!("syntax error in {:?}: {}", input, message);
        PrepareError::SyntaxError(message)
    })
}
