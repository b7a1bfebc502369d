//! Layout constants for the codeplug group-list tables.
//!
//! These values were recovered by inspecting codeplugs written by the
//! vendor CPS; their meaning is not documented anywhere. Every one that
//! appears in the data is checked on read.

/// Section ids
pub const GROUP_LIST_NAME_SECTION: u16 = 0x6C;
pub const GROUP_LIST_POINTER_SECTION: u16 = 0x2B;

/// Group-list name record: one null-padded UTF-8 string
pub const GROUP_LIST_NAME_SIZE: usize = 32;

/// Byte distance between consecutive pointer blocks in section 0x2B
pub const POINTER_BLOCK_STRIDE: usize = 0x28e;

/// Pointer block sub-header (`u16 reserved, u16 marker, u16 count, u32, u32`)
pub const POINTER_HEADER_SIZE: usize = 0xe;
pub const POINTER_HEADER_MARKER: u16 = 0x40;
pub const POINTER_HEADER_CONST_A: u32 = 0x100;
pub const POINTER_HEADER_CONST_B: u32 = 0x10e;

/// One contact pointer (`u32` address)
pub const POINTER_RECORD_SIZE: usize = 4;

/// Smallest stride that fits a header and one pointer
pub const MIN_POINTER_BLOCK_STRIDE: usize = POINTER_HEADER_SIZE + POINTER_RECORD_SIZE;

/// Pointers that fit in one block after its header.
pub const fn pointer_capacity(stride: usize) -> usize {
    stride.saturating_sub(POINTER_HEADER_SIZE) / POINTER_RECORD_SIZE
}
