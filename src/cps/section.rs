// cps/section.rs
//! Section view handed over by the codeplug container loader.

use std::collections::{BTreeMap, HashMap};

use bytes::Bytes;

/// Numeric section identifier (`0x6C`, `0x2B`, ...).
pub type SectionId = u16;

/// One codeplug section: record bytes plus the header fields the decoders use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    /// Declared number of records
    pub element_count: u32,
    /// Logical position -> physical record index
    pub mappings: Vec<u32>,
    pub data: Bytes,
}

impl Section {
    pub fn new(id: SectionId, element_count: u32, mappings: Vec<u32>, data: impl Into<Bytes>) -> Self {
        Self {
            id,
            element_count,
            mappings,
            data: data.into(),
        }
    }
}

/// Lookup of sections by id.
pub trait SectionStore {
    fn section(&self, id: SectionId) -> Option<&Section>;
}

impl SectionStore for HashMap<SectionId, Section> {
    fn section(&self, id: SectionId) -> Option<&Section> {
        self.get(&id)
    }
}

impl SectionStore for BTreeMap<SectionId, Section> {
    fn section(&self, id: SectionId) -> Option<&Section> {
        self.get(&id)
    }
}

impl<S: SectionStore + ?Sized> SectionStore for &S {
    fn section(&self, id: SectionId) -> Option<&Section> {
        (**self).section(id)
    }
}
