// cps/pointer.rs
//! Contact pointer runs stored in the group-list pointer section (0x2B).
//!
//! The section is an array of fixed-stride blocks, one per group list:
//!
//! ```text
//! +0x0  u16 reserved
//! +0x2  u16 marker   (0x40)
//! +0x4  u16 count
//! +0x6  u32          (0x100)
//! +0xa  u32          (0x10e)
//! +0xe  u32 addr * count
//! ```
//!
//! The rest of the block up to the stride is unused capacity.

use bytes::Buf;
use serde::Serialize;

use crate::constants::{
    MIN_POINTER_BLOCK_STRIDE, POINTER_HEADER_CONST_A, POINTER_HEADER_CONST_B,
    POINTER_HEADER_MARKER, POINTER_HEADER_SIZE, POINTER_RECORD_SIZE, pointer_capacity,
};
use crate::error::{DecodeError, Result};
use crate::parsers::{Field, FieldKind, RecordLayout, chunks};

/// Reference to a contact. Addresses are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PointerRecord {
    pub addr: u32,
}

impl PointerRecord {
    pub const SIZE: usize = POINTER_RECORD_SIZE;

    pub fn from_bytes(mut data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(DecodeError::BufferTooShort {
                offset: 0,
                needed: Self::SIZE,
                available: data.len(),
            });
        }
        Ok(Self { addr: data.get_u32_le() })
    }
}

const POINTER_HEADER: RecordLayout = RecordLayout::new(&[
    Field::new("reserved", FieldKind::U16),
    Field::new("marker", FieldKind::U16),
    Field::new("count", FieldKind::U16),
    Field::new("const_a", FieldKind::U32),
    Field::new("const_b", FieldKind::U32),
]);

/// Validated pointer block sub-header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerHeader {
    pub count: u16,
}

impl PointerHeader {
    /// Decode and check the sub-header of block `index` located at `offset`.
    pub fn parse(data: &[u8], offset: usize, index: usize) -> Result<Self> {
        debug_assert_eq!(POINTER_HEADER.size(), POINTER_HEADER_SIZE);
        let rec = POINTER_HEADER.decode_at(data, offset)?;

        check(index, "marker", u32::from(POINTER_HEADER_MARKER), u32::from(rec.u16("marker")?))?;
        check(index, "const_a", POINTER_HEADER_CONST_A, rec.u32("const_a")?)?;
        check(index, "const_b", POINTER_HEADER_CONST_B, rec.u32("const_b")?)?;

        Ok(Self { count: rec.u16("count")? })
    }
}

fn check(index: usize, field: &'static str, expected: u32, actual: u32) -> Result<()> {
    if expected != actual {
        return Err(DecodeError::MalformedHeader {
            index,
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reject strides that would make blocks overlap their own header.
pub fn check_stride(stride: usize) -> Result<()> {
    if stride < MIN_POINTER_BLOCK_STRIDE {
        return Err(DecodeError::InvalidStride {
            stride,
            minimum: MIN_POINTER_BLOCK_STRIDE,
        });
    }
    Ok(())
}

/// Read the pointer run of group list `index` from the pointer section bytes.
pub fn read_pointer_run(data: &[u8], index: usize, stride: usize) -> Result<Vec<PointerRecord>> {
    check_stride(stride)?;
    let start = index * stride;
    let header = PointerHeader::parse(data, start, index)?;
    let count = usize::from(header.count);

    let capacity = pointer_capacity(stride);
    if count > capacity {
        return Err(DecodeError::PointerCapacityExceeded { index, count, capacity });
    }

    let body = start + POINTER_HEADER_SIZE;
    let needed = count * PointerRecord::SIZE;
    let available = data.len().saturating_sub(body);
    if available < needed {
        return Err(DecodeError::BufferTooShort {
            offset: body,
            needed,
            available,
        });
    }

    let pointers = chunks(&data[body..body + needed], PointerRecord::SIZE)?
        .map(PointerRecord::from_bytes)
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(index, count, offset = start, "pointer run");
    Ok(pointers)
}
