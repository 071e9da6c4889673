mod error;

pub use error::{TableError, TableResult};

use crate::config::TableConfig;
use crate::record::{OverflowPolicy, ROW_SIZE, Record, RecordId};
use crate::storage::PageStore;

/// The single in-memory table
///
/// Records are addressed purely by insertion order: the record at logical
/// index `i` lives at page `i / rows_per_page`, slot `i % rows_per_page`.
/// Nothing is ever relocated, and once `num_rows == max_rows` the table
/// stays full.
pub struct Table {
    pages: PageStore,
    num_rows: usize,
    max_rows: usize,
    on_overflow: OverflowPolicy,
}

impl Table {
    /// Create an empty table with no pages allocated
    pub fn new(config: &TableConfig) -> TableResult<Self> {
        config.validate()?;
        let max_rows = config.max_rows()?;
        let pages = PageStore::new(config.page_size, ROW_SIZE, config.max_pages)?;

        Ok(Self {
            pages,
            num_rows: 0,
            max_rows,
            on_overflow: config.on_overflow,
        })
    }

    /// Physical location of the record at a logical index
    pub fn row_slot(&self, index: usize) -> RecordId {
        let rows_per_page = self.pages.rows_per_page();
        RecordId::new(index / rows_per_page, index % rows_per_page)
    }

    /// Append a record at the next logical index
    pub fn insert(&mut self, record: &Record) -> TableResult<RecordId> {
        if self.num_rows >= self.max_rows {
            return Err(TableError::Full {
                max_rows: self.max_rows,
            });
        }

        // Encode first so a rejected record leaves no trace
        let bytes = record.serialize(self.on_overflow)?;

        let rid = self.row_slot(self.num_rows);
        self.pages.ensure_allocated(rid.page_id)?;
        self.pages.write_record(rid.page_id, rid.slot_id, &bytes)?;
        self.num_rows += 1;

        Ok(rid)
    }

    /// Read one record by logical index
    pub fn get(&self, index: usize) -> TableResult<Record> {
        if index >= self.num_rows {
            return Err(TableError::RowOutOfRange {
                index,
                num_rows: self.num_rows,
            });
        }

        let rid = self.row_slot(index);
        let bytes = self.pages.read_record(rid.page_id, rid.slot_id)?;
        Ok(Record::deserialize(bytes)?)
    }

    /// Iterate over all records in insertion order
    pub fn scan(&self) -> TableScan<'_> {
        TableScan {
            table: self,
            cursor: 0,
        }
    }

    /// Collect every record in insertion order
    pub fn select(&self) -> TableResult<Vec<Record>> {
        self.scan().collect()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= self.max_rows
    }

    pub fn rows_per_page(&self) -> usize {
        self.pages.rows_per_page()
    }

    pub fn max_pages(&self) -> usize {
        self.pages.max_pages()
    }

    pub fn page_size(&self) -> usize {
        self.pages.page_size()
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.allocated_pages()
    }

    pub fn on_overflow(&self) -> OverflowPolicy {
        self.on_overflow
    }
}

/// Cursor over the table's records in insertion order
pub struct TableScan<'a> {
    table: &'a Table,
    cursor: usize,
}

impl Iterator for TableScan<'_> {
    type Item = TableResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.table.num_rows {
            return None;
        }
        let item = self.table.get(self.cursor);
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableScan<'_> {}

#[cfg(test)]
mod tests;
