//! Error types for codeplug decoding.
//!
//! Every failure on the decode path is fatal for the `decode()` call that
//! hit it: the input is static bytes, so there is nothing to retry and no
//! partial table is returned.

use std::str::Utf8Error;

use crate::cps::section::SectionId;

/// The error type for all decode operations.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A chunker was asked for zero-sized chunks.
    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    /// The section store has no section with this id.
    #[error("section 0x{0:02X} not found in codeplug")]
    SectionNotFound(SectionId),

    /// The name and pointer sections disagree on how many group lists exist.
    #[error("group list section counts differ: {names} names, {pointers} pointer blocks")]
    SectionCountMismatch { names: u32, pointers: u32 },

    /// A record or run extends past the end of its buffer.
    #[error("buffer too short at offset {offset:#x}: need {needed} bytes, {available} available")]
    BufferTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A pointer block sub-header carries an unexpected constant.
    ///
    /// Usually means the codeplug was written by an unsupported CPS
    /// revision or the block offset is wrong.
    #[error("malformed header in group list {index}: {field} expected {expected:#x}, found {actual:#x}")]
    MalformedHeader {
        index: usize,
        field: &'static str,
        expected: u32,
        actual: u32,
    },

    /// A text field is not valid UTF-8.
    #[error("invalid UTF-8 in field `{field}`: {source}")]
    InvalidEncoding {
        field: &'static str,
        #[source]
        source: Utf8Error,
    },

    /// A remapping table entry points outside the decoded records.
    #[error("mapping entry {position} points at record {index}, only {len} decoded")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// The remapping table has fewer entries than the element count.
    #[error("mapping table too short: {required} entries required, {actual} present")]
    MappingTableTooShort { required: usize, actual: usize },

    /// A pointer block declares more pointers than its stride can hold.
    #[error("group list {index} declares {count} pointers, block holds at most {capacity}")]
    PointerCapacityExceeded {
        index: usize,
        count: usize,
        capacity: usize,
    },

    /// A pointer block stride too small to hold a header and one pointer.
    #[error("pointer block stride {stride:#x} is below the minimum {minimum:#x}")]
    InvalidStride { stride: usize, minimum: usize },

    /// A record was queried for a field its layout does not carry.
    #[error("record has no field `{0}` of the requested type")]
    MissingField(&'static str),
}

/// A convenience `Result` alias using [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;
