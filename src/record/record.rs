use std::fmt;

use serde::{Deserialize, Serialize};

use super::PageId;
use super::error::{RecordError, RecordResult};
use super::layout::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, NAME_OFFSET, NAME_SIZE, ROW_SIZE,
};

/// Slot identifier within a page
pub type SlotId = usize;

/// Physical identifier for a record (page + slot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    pub page_id: PageId,
    pub slot_id: SlotId,
}

impl RecordId {
    pub fn new(page_id: PageId, slot_id: SlotId) -> Self {
        Self { page_id, slot_id }
    }
}

/// What to do with a text value longer than its field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Refuse the record
    #[default]
    Reject,
    /// Drop the excess bytes, keeping whole characters
    Truncate,
}

/// A single stored row: identifier plus two fixed-width text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Record {
    /// Create a new record
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Serialize record to its fixed-width form
    /// Format: [id: i64 LE] [name: 32 bytes, zero padded] [email: 255 bytes, zero padded]
    pub fn serialize(&self, policy: OverflowPolicy) -> RecordResult<[u8; ROW_SIZE]> {
        let name = fit_field("name", &self.name, NAME_SIZE, policy)?;
        let email = fit_field("email", &self.email, EMAIL_SIZE, policy)?;

        let mut result = [0u8; ROW_SIZE];
        result[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        result[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name.as_bytes());
        result[EMAIL_OFFSET..EMAIL_OFFSET + email.len()].copy_from_slice(email.as_bytes());
        Ok(result)
    }

    /// Deserialize record from a slot's bytes
    pub fn deserialize(data: &[u8]) -> RecordResult<Self> {
        if data.len() != ROW_SIZE {
            return Err(RecordError::InvalidLength {
                expected: ROW_SIZE,
                actual: data.len(),
            });
        }

        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(&data[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        Ok(Self {
            id: i64::from_le_bytes(id),
            name: read_text(&data[NAME_OFFSET..NAME_OFFSET + NAME_SIZE])?,
            email: read_text(&data[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE])?,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {}, name: {}, email: {}", self.id, self.name, self.email)
    }
}

fn fit_field<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
    policy: OverflowPolicy,
) -> RecordResult<&'a str> {
    // Zero bytes are padding in the stored form
    if value.as_bytes().contains(&0) {
        return Err(RecordError::NulByte { field });
    }
    if value.len() <= max {
        return Ok(value);
    }

    match policy {
        OverflowPolicy::Reject => Err(RecordError::FieldTooLong {
            field,
            len: value.len(),
            max,
        }),
        OverflowPolicy::Truncate => {
            let mut end = max;
            while !value.is_char_boundary(end) {
                end -= 1;
            }
            log::warn!(
                "truncating {} from {} to {} bytes",
                field,
                value.len(),
                end
            );
            Ok(&value[..end])
        }
    }
}

fn read_text(bytes: &[u8]) -> RecordResult<String> {
    // Strip trailing zero padding
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8(bytes[..end].to_vec())
        .map_err(|e| RecordError::Deserialization(format!("Invalid UTF-8: {}", e)))
}
