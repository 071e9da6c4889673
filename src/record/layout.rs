//! Fixed byte layout of one serialized record.
//!
//! ```text
//! +---------+-------------+-----------------+
//! | id (8)  | name (32)   | email (255)     |
//! +---------+-------------+-----------------+
//! 0         8             40                295
//! ```

use std::mem::size_of;

pub const ID_SIZE: usize = size_of::<i64>();
pub const NAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;

pub const ID_OFFSET: usize = 0;
pub const NAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = NAME_OFFSET + NAME_SIZE;

/// Bytes occupied by every record, regardless of its text lengths
pub const ROW_SIZE: usize = ID_SIZE + NAME_SIZE + EMAIL_SIZE;
