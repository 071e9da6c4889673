use std::io::Write;

use super::error::ReplResult;
use super::format::OutputFormat;
use crate::command::{self, MetaCommand, Statement};
use crate::record::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, NAME_OFFSET, NAME_SIZE, ROW_SIZE,
};
use crate::table::Table;

/// What the driver loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Executes input lines against a table, writing responses to `out`
pub struct Session<W: Write> {
    table: Table,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(table: Table, format: OutputFormat, out: W) -> Self {
        Self { table, format, out }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Handle one line of input
    ///
    /// Parse errors, a full table and rejected field values are reported
    /// on the output and the session continues. Only broken storage
    /// invariants come back as `Err`.
    pub fn handle_line(&mut self, line: &str) -> ReplResult<Flow> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Flow::Continue);
        }

        if MetaCommand::is_meta(input) {
            return match MetaCommand::parse(input) {
                Ok(cmd) => self.run_meta(cmd),
                Err(err) => {
                    writeln!(self.out, "{}", err)?;
                    Ok(Flow::Continue)
                }
            };
        }

        match command::prepare(input) {
            Ok(statement) => self.execute(statement)?,
            Err(err) => writeln!(self.out, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn execute(&mut self, statement: Statement) -> ReplResult<()> {
        match statement {
            Statement::Insert(record) => match self.table.insert(&record) {
                Ok(_) => writeln!(self.out, "Executed.")?,
                Err(err) if err.is_recoverable() => writeln!(self.out, "Error: {}", err)?,
                Err(err) => return Err(err.into()),
            },
            Statement::Select => {
                let records = self.table.select()?;
                self.format.render(&records, &mut self.out)?;
                writeln!(self.out, "Executed.")?;
            }
        }
        Ok(())
    }

    fn run_meta(&mut self, cmd: MetaCommand) -> ReplResult<Flow> {
        match cmd {
            MetaCommand::Exit => return Ok(Flow::Exit),
            MetaCommand::Help => {
                writeln!(self.out, "insert <id> <name> <email>  Append a record")?;
                writeln!(self.out, "select                      Print all records")?;
                writeln!(self.out, ".constants                  Show the record and page layout")?;
                writeln!(self.out, ".stats                      Show table usage")?;
                writeln!(self.out, ".help                       Show this message")?;
                writeln!(self.out, ".exit                       Exit")?;
            }
            MetaCommand::Constants => {
                writeln!(self.out, "Constants:")?;
                writeln!(self.out, "ROW_SIZE: {}", ROW_SIZE)?;
                writeln!(self.out, "ID_SIZE: {}", ID_SIZE)?;
                writeln!(self.out, "ID_OFFSET: {}", ID_OFFSET)?;
                writeln!(self.out, "NAME_SIZE: {}", NAME_SIZE)?;
                writeln!(self.out, "NAME_OFFSET: {}", NAME_OFFSET)?;
                writeln!(self.out, "EMAIL_SIZE: {}", EMAIL_SIZE)?;
                writeln!(self.out, "EMAIL_OFFSET: {}", EMAIL_OFFSET)?;
                writeln!(self.out, "PAGE_SIZE: {}", self.table.page_size())?;
                writeln!(self.out, "ROWS_PER_PAGE: {}", self.table.rows_per_page())?;
                writeln!(self.out, "TABLE_MAX_PAGES: {}", self.table.max_pages())?;
                writeln!(self.out, "TABLE_MAX_ROWS: {}", self.table.max_rows())?;
            }
            MetaCommand::Stats => {
                writeln!(
                    self.out,
                    "rows: {}/{}, pages: {}/{}",
                    self.table.num_rows(),
                    self.table.max_rows(),
                    self.table.allocated_pages(),
                    self.table.max_pages()
                )?;
            }
        }
        Ok(Flow::Continue)
    }
}
