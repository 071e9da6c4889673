mod error;
mod page;
mod page_store;

pub use error::{StorageError, StorageResult};
pub use page::Page;
pub use page_store::PageStore;

/// Default page size in bytes (4KB)
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// Default number of pages a table may allocate
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Largest accepted page size in bytes (1MB)
pub const MAX_PAGE_SIZE: usize = 1 << 20;
