//! Fixed-layout record decoding
//!
//! A [`RecordLayout`] is an ordered list of little-endian fields. Decoding
//! reads exactly `layout.size()` bytes at an offset and returns the values
//! keyed by field name.

use bitstream_io::{ByteRead, ByteReader, LittleEndian};

use crate::error::{DecodeError, Result};

/// Field types that appear in codeplug records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    /// Raw bytes, kept as-is
    Bytes(usize),
    /// Null-padded UTF-8
    Text(usize),
}

impl FieldKind {
    pub const fn size(self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 => 4,
            FieldKind::Bytes(n) | FieldKind::Text(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    Bytes(Vec<u8>),
    Text(String),
}

/// Ordered field list describing one fixed-size record.
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    fields: &'static [Field],
}

impl RecordLayout {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Total encoded size in bytes.
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].kind.size();
            i += 1;
        }
        total
    }

    /// Decode one record starting at `offset` in `data`.
    pub fn decode_at(&self, data: &[u8], offset: usize) -> Result<Record> {
        let size = self.size();
        let available = data.len().saturating_sub(offset);
        if available < size {
            return Err(DecodeError::BufferTooShort {
                offset,
                needed: size,
                available,
            });
        }

        // length is checked above, a read error can only mean a short slice
        let short = move |_: std::io::Error| DecodeError::BufferTooShort {
            offset,
            needed: size,
            available,
        };

        let mut reader = ByteReader::endian(&data[offset..offset + size], LittleEndian);
        let mut values = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            let value = match field.kind {
                FieldKind::U8 => FieldValue::U8(reader.read::<u8>().map_err(short)?),
                FieldKind::U16 => FieldValue::U16(reader.read::<u16>().map_err(short)?),
                FieldKind::U32 => FieldValue::U32(reader.read::<u32>().map_err(short)?),
                FieldKind::Bytes(n) => {
                    let mut buf = vec![0u8; n];
                    reader.read_bytes(&mut buf).map_err(short)?;
                    FieldValue::Bytes(buf)
                }
                FieldKind::Text(n) => {
                    let mut buf = vec![0u8; n];
                    reader.read_bytes(&mut buf).map_err(short)?;
                    FieldValue::Text(decode_text(field.name, &buf)?)
                }
            };
            values.push((field.name, value));
        }
        Ok(Record { values })
    }
}

/// Decoded record, fields in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn u16(&self, name: &'static str) -> Result<u16> {
        match self.get(name) {
            Some(FieldValue::U16(v)) => Ok(*v),
            _ => Err(DecodeError::MissingField(name)),
        }
    }

    pub fn u32(&self, name: &'static str) -> Result<u32> {
        match self.get(name) {
            Some(FieldValue::U32(v)) => Ok(*v),
            _ => Err(DecodeError::MissingField(name)),
        }
    }

    pub fn text(&self, name: &'static str) -> Result<&str> {
        match self.get(name) {
            Some(FieldValue::Text(v)) => Ok(v),
            _ => Err(DecodeError::MissingField(name)),
        }
    }

    pub fn into_text(self, name: &'static str) -> Result<String> {
        self.values
            .into_iter()
            .find_map(|(n, v)| match v {
                FieldValue::Text(s) if n == name => Some(s),
                _ => None,
            })
            .ok_or(DecodeError::MissingField(name))
    }
}

/// Strip trailing NUL padding, then require strict UTF-8.
pub fn decode_text(field: &'static str, raw: &[u8]) -> Result<String> {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    std::str::from_utf8(&raw[..end])
        .map(str::to_owned)
        .map_err(|source| DecodeError::InvalidEncoding { field, source })
}
