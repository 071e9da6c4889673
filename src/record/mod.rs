mod error;
mod layout;
mod record;

pub use error::{RecordError, RecordResult};
pub use layout::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, NAME_OFFSET, NAME_SIZE, ROW_SIZE,
};
pub use record::{OverflowPolicy, Record, RecordId, SlotId};

/// Page index within the table's page array
pub type PageId = usize;
