use super::error::{StorageError, StorageResult};
use crate::record::SlotId;

/// A fixed-size, zero-initialized block of record slots
///
/// Slots are laid out back to back from offset 0; any tail space smaller
/// than one record is left unused.
pub struct Page {
    buffer: Box<[u8]>,
    record_size: usize,
    slot_count: usize,
}

impl Page {
    /// Calculate the number of slots for a given page and record size
    pub fn calculate_slot_count(page_size: usize, record_size: usize) -> usize {
        if record_size == 0 {
            return 0;
        }
        page_size / record_size
    }

    /// Create a new zeroed page
    pub fn new(page_size: usize, record_size: usize) -> StorageResult<Self> {
        let slot_count = Self::calculate_slot_count(page_size, record_size);
        if slot_count == 0 {
            return Err(StorageError::RecordTooLarge {
                record_size,
                page_size,
            });
        }

        Ok(Self {
            buffer: vec![0u8; page_size].into_boxed_slice(),
            record_size,
            slot_count,
        })
    }

    fn slot_range(&self, slot_id: SlotId) -> StorageResult<std::ops::Range<usize>> {
        if slot_id >= self.slot_count {
            return Err(StorageError::InvalidSlot(0, slot_id));
        }
        let start = slot_id * self.record_size;
        Ok(start..start + self.record_size)
    }

    /// Get record data from a slot
    pub fn get_record(&self, slot_id: SlotId) -> StorageResult<&[u8]> {
        let range = self.slot_range(slot_id)?;
        Ok(&self.buffer[range])
    }

    /// Overwrite the record data in a slot
    pub fn set_record(&mut self, slot_id: SlotId, data: &[u8]) -> StorageResult<()> {
        if data.len() != self.record_size {
            return Err(StorageError::InvalidRecordSize {
                expected: self.record_size,
                actual: data.len(),
            });
        }

        let range = self.slot_range(slot_id)?;
        self.buffer[range].copy_from_slice(data);
        Ok(())
    }

    /// Get the number of slots in this page
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }
}
