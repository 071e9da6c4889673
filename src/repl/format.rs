use clap::ValueEnum;
use prettytable::{Table as PrettyTable, row};
use std::io::{self, Write};

use crate::record::Record;

/// How `select` results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `id: .., name: .., email: ..` line per record
    #[default]
    Lines,
    /// Boxed table with a header row
    Table,
}

impl OutputFormat {
    pub fn render<W: Write>(&self, records: &[Record], out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Lines => {
                for record in records {
                    writeln!(out, "{}", record)?;
                }
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(());
                }
                let mut table = PrettyTable::new();
                table.set_titles(row!["id", "name", "email"]);
                for record in records {
                    table.add_row(row![record.id, record.name, record.email]);
                }
                table.print(out)?;
            }
        }
        Ok(())
    }
}
