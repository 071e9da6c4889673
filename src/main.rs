use clap::{Parser, ValueEnum};
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use slotdb::{LineSource, OutputFormat, OverflowPolicy, Repl, Session, Table, TableConfig};

/// In-memory single-table record store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with table settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page size in bytes
    #[arg(long)]
    page_size: Option<usize>,

    /// Maximum number of pages
    #[arg(long)]
    max_pages: Option<usize>,

    /// What to do with text longer than its field
    #[arg(long, value_enum)]
    on_overflow: Option<OnOverflow>,

    /// How select prints records
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnOverflow {
    Reject,
    Truncate,
}

impl From<OnOverflow> for OverflowPolicy {
    fn from(value: OnOverflow) -> Self {
        match value {
            OnOverflow::Reject => OverflowPolicy::Reject,
            OnOverflow::Truncate => OverflowPolicy::Truncate,
        }
    }
}

impl Args {
    fn table_config(&self) -> slotdb::ConfigResult<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::load(path)?,
            None => TableConfig::default(),
        };
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(on_overflow) = self.on_overflow {
            config.on_overflow = on_overflow.into();
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match args.table_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {}", err);
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let table = match Table::new(&config) {
        Ok(table) => table,
        Err(err) => {
            log::error!("cannot create table: {}", err);
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "table ready: page_size={}, rows_per_page={}, max_pages={}, max_rows={}, on_overflow={:?}",
        table.page_size(),
        table.rows_per_page(),
        table.max_pages(),
        table.max_rows(),
        table.on_overflow()
    );

    let source = if io::stdin().is_terminal() {
        match LineSource::editor() {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        LineSource::reader(BufReader::new(io::stdin()))
    };

    let session = Session::new(table, args.format, io::stdout());
    let mut repl = Repl::new(session, source);

    match repl.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session aborted: {}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
