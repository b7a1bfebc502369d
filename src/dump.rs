//! JSON section dumps.
//!
//! The container parser that splits a codeplug into sections lives outside
//! this crate. Its output can be saved as
//!
//! ```json
//! {"sections": [{"id": 108, "element_count": 1, "mappings": [0], "data": "475250..."}]}
//! ```
//!
//! and loaded back here. Contact names come as a plain JSON array of strings.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::cps::section::{Section, SectionId};

#[derive(Deserialize)]
struct DumpFile {
    sections: Vec<SectionJson>,
}

#[derive(Deserialize)]
struct SectionJson {
    id: SectionId,
    element_count: u32,
    #[serde(default)]
    mappings: Vec<u32>,
    /// hex encoded
    data: String,
}

/// Parse a section dump from its JSON text.
pub fn parse_sections(json: &str) -> anyhow::Result<BTreeMap<SectionId, Section>> {
    let dump: DumpFile = serde_json::from_str(json).context("malformed section dump")?;

    let mut out = BTreeMap::new();
    for s in dump.sections {
        let data = hex::decode(s.data.trim())
            .with_context(|| format!("section 0x{:02X}: bad hex data", s.id))?;
        if out.contains_key(&s.id) {
            bail!("section 0x{:02X} appears twice", s.id);
        }
        out.insert(s.id, Section::new(s.id, s.element_count, s.mappings, data));
    }
    tracing::debug!(sections = out.len(), "loaded section dump");
    Ok(out)
}

pub fn load_sections(path: &Path) -> anyhow::Result<BTreeMap<SectionId, Section>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_sections(&text).with_context(|| format!("loading {}", path.display()))
}

pub fn load_contacts(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{}: expected a JSON array of names", path.display()))
}
