use super::error::{StorageError, StorageResult};
use super::page::Page;
use crate::record::{PageId, SlotId};

/// Bounded arena of lazily allocated pages
///
/// The page table grows on demand up to `max_pages` entries. An entry is
/// `None` until the page is first addressed, so an untouched page is never
/// confused with a page holding zero-valued records.
pub struct PageStore {
    pages: Vec<Option<Page>>,
    page_size: usize,
    record_size: usize,
    max_pages: usize,
    rows_per_page: usize,
    allocated: usize,
    /// Returned for reads of unallocated pages
    zero_record: Box<[u8]>,
}

impl PageStore {
    /// Create an empty store; fails if a record does not fit in a page
    pub fn new(page_size: usize, record_size: usize, max_pages: usize) -> StorageResult<Self> {
        let rows_per_page = Page::calculate_slot_count(page_size, record_size);
        if rows_per_page == 0 {
            return Err(StorageError::RecordTooLarge {
                record_size,
                page_size,
            });
        }

        Ok(Self {
            pages: Vec::new(),
            page_size,
            record_size,
            max_pages,
            rows_per_page,
            allocated: 0,
            zero_record: vec![0u8; record_size].into_boxed_slice(),
        })
    }

    /// Records per page
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages allocated so far
    pub fn allocated_pages(&self) -> usize {
        self.allocated
    }

    pub fn is_allocated(&self, page_id: PageId) -> bool {
        matches!(self.pages.get(page_id), Some(Some(_)))
    }

    /// Allocate and zero the page if it has not been touched yet
    pub fn ensure_allocated(&mut self, page_id: PageId) -> StorageResult<()> {
        if page_id >= self.max_pages {
            return Err(StorageError::PageOutOfBounds {
                page_id,
                max_pages: self.max_pages,
            });
        }

        if page_id >= self.pages.len() {
            self.pages.resize_with(page_id + 1, || None);
        }

        let entry = &mut self.pages[page_id];
        if entry.is_none() {
            *entry = Some(Page::new(self.page_size, self.record_size)?);
            self.allocated += 1;
            log::debug!(
                "allocated page {} ({} of {})",
                page_id,
                self.allocated,
                self.max_pages
            );
        }

        Ok(())
    }

    /// Overwrite a slot; the page must already be allocated
    pub fn write_record(
        &mut self,
        page_id: PageId,
        slot_id: SlotId,
        data: &[u8],
    ) -> StorageResult<()> {
        let page = self
            .pages
            .get_mut(page_id)
            .and_then(Option::as_mut)
            .ok_or(StorageError::PageNotAllocated(page_id))?;

        page.set_record(slot_id, data).map_err(|e| with_page_id(e, page_id))
    }

    /// Read a slot; an unallocated page reads as all zeros
    pub fn read_record(&self, page_id: PageId, slot_id: SlotId) -> StorageResult<&[u8]> {
        if page_id >= self.max_pages {
            return Err(StorageError::PageOutOfBounds {
                page_id,
                max_pages: self.max_pages,
            });
        }
        if slot_id >= self.rows_per_page {
            return Err(StorageError::InvalidSlot(page_id, slot_id));
        }

        match self.pages.get(page_id) {
            Some(Some(page)) => page.get_record(slot_id).map_err(|e| with_page_id(e, page_id)),
            _ => Ok(&self.zero_record[..]),
        }
    }
}

fn with_page_id(err: StorageError, page_id: PageId) -> StorageError {
    match err {
        StorageError::InvalidSlot(_, slot_id) => StorageError::InvalidSlot(page_id, slot_id),
        other => other,
    }
}
