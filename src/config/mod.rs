use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::record::{OverflowPolicy, ROW_SIZE};
use crate::storage::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Page size {page_size} cannot hold a {row_size}-byte record")]
    PageTooSmall { page_size: usize, row_size: usize },

    #[error("Page size {page_size} exceeds the {max}-byte limit")]
    PageTooLarge { page_size: usize, max: usize },

    #[error("max_pages must be at least 1")]
    NoPages,

    #[error("{max_pages} pages of {rows_per_page} rows overflow the row counter")]
    TooManyRows {
        rows_per_page: usize,
        max_pages: usize,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Table geometry and record policy, fixed for the life of the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
    pub max_pages: usize,
    pub on_overflow: OverflowPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            on_overflow: OverflowPolicy::default(),
        }
    }
}

impl TableConfig {
    /// Read a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_pages == 0 {
            return Err(ConfigError::NoPages);
        }
        if self.page_size < ROW_SIZE {
            return Err(ConfigError::PageTooSmall {
                page_size: self.page_size,
                row_size: ROW_SIZE,
            });
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::PageTooLarge {
                page_size: self.page_size,
                max: MAX_PAGE_SIZE,
            });
        }
        self.max_rows()?;
        Ok(())
    }

    pub fn rows_per_page(&self) -> usize {
        self.page_size / ROW_SIZE
    }

    /// Total row capacity; fails if it does not fit in a `usize`
    pub fn max_rows(&self) -> ConfigResult<usize> {
        self.rows_per_page()
            .checked_mul(self.max_pages)
            .ok_or(ConfigError::TooManyRows {
                rows_per_page: self.rows_per_page(),
                max_pages: self.max_pages,
            })
    }
}
