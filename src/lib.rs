pub mod command;
pub mod config;
pub mod record;
pub mod repl;
pub mod storage;
pub mod table;

pub use command::{MetaCommand, PrepareError, PrepareResult, Statement};
pub use config::{ConfigError, ConfigResult, TableConfig};
pub use record::{OverflowPolicy, ROW_SIZE, Record, RecordError, RecordId, RecordResult};
pub use repl::{Flow, LineSource, OutputFormat, Repl, ReplError, ReplResult, Session};
pub use storage::{
    DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageStore, StorageError,
};
pub use table::{Table, TableError, TableResult, TableScan};
