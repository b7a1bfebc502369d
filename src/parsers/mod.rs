//! Byte-level helpers shared by the section decoders
//!
//! Chunking of record arrays and decoding of fixed-layout records.

mod chunks;
mod record;

pub use chunks::{Chunks, chunks};
pub use record::{Field, FieldKind, FieldValue, Record, RecordLayout, decode_text};
