// cps/rx_group_list.rs
//! RX group lists: names from section 0x6C, contact pointers from 0x2B.
//!
//! Both sections are indexed by storage slot. The name section's mapping
//! table gives the display order, which is what channels and the CPS use.

use crate::constants::{
    GROUP_LIST_NAME_SECTION, GROUP_LIST_NAME_SIZE, GROUP_LIST_POINTER_SECTION,
    POINTER_BLOCK_STRIDE,
};
use crate::cps::pointer::{check_stride, read_pointer_run};
use crate::cps::section::{Section, SectionId, SectionStore};
use crate::error::{DecodeError, Result};
use crate::parsers::{Field, FieldKind, RecordLayout, chunks};
use crate::types::{GroupList, GroupListTable};

const GROUP_LIST_NAME: RecordLayout =
    RecordLayout::new(&[Field::new("name", FieldKind::Text(GROUP_LIST_NAME_SIZE))]);

/// Where the group-list tables live and how the pointer section is strided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupListFormat {
    pub name_section: SectionId,
    pub pointer_section: SectionId,
    pub pointer_stride: usize,
}

impl Default for GroupListFormat {
    fn default() -> Self {
        Self {
            name_section: GROUP_LIST_NAME_SECTION,
            pointer_section: GROUP_LIST_POINTER_SECTION,
            pointer_stride: POINTER_BLOCK_STRIDE,
        }
    }
}

/// Decode all RX group lists using the default section layout.
pub fn parse_rx_group_lists<S: SectionStore + ?Sized>(store: &S) -> Result<GroupListTable> {
    parse_rx_group_lists_with(store, &GroupListFormat::default())
}

pub fn parse_rx_group_lists_with<S: SectionStore + ?Sized>(
    store: &S,
    format: &GroupListFormat,
) -> Result<GroupListTable> {
    check_stride(format.pointer_stride)?;
    let names = lookup(store, format.name_section)?;
    let pointers = lookup(store, format.pointer_section)?;

    // one pointer block per name, paired by storage slot
    if names.element_count != pointers.element_count {
        return Err(DecodeError::SectionCountMismatch {
            names: names.element_count,
            pointers: pointers.element_count,
        });
    }
    let count = names.element_count as usize;

    if names.mappings.len() < count {
        return Err(DecodeError::MappingTableTooShort {
            required: count,
            actual: names.mappings.len(),
        });
    }

    let records = read_records(names, pointers, count, format.pointer_stride)?;
    let order = logical_order(&names.mappings[..count], records.len())?;

    tracing::debug!(
        group_lists = count,
        name_section = format.name_section,
        pointer_section = format.pointer_section,
        "decoded rx group lists"
    );
    Ok(GroupListTable::from_parts(records, order))
}

fn lookup<S: SectionStore + ?Sized>(store: &S, id: SectionId) -> Result<&Section> {
    store.section(id).ok_or(DecodeError::SectionNotFound(id))
}

/// Decode names and pointer runs in storage order.
fn read_records(
    names: &Section,
    pointers: &Section,
    count: usize,
    stride: usize,
) -> Result<Vec<GroupList>> {
    let slots = chunks(&names.data, GROUP_LIST_NAME.size())?;
    if slots.len() < count {
        return Err(DecodeError::BufferTooShort {
            offset: slots.len() * GROUP_LIST_NAME.size(),
            needed: (count - slots.len()) * GROUP_LIST_NAME.size(),
            available: slots.remainder().len(),
        });
    }
    if slots.len() > count || !slots.remainder().is_empty() {
        tracing::debug!(
            declared = count,
            slots = slots.len(),
            trailing = slots.remainder().len(),
            "ignoring unused name slots"
        );
    }

    slots
        .take(count)
        .enumerate()
        .map(|(i, slot)| -> Result<GroupList> {
            let name = GROUP_LIST_NAME.decode_at(slot, 0)?.into_text("name")?;
            let pointers = read_pointer_run(&pointers.data, i, stride)?;
            Ok(GroupList { name, pointers })
        })
        .collect()
}

/// Resolve the mapping table into indices of the decoded records.
fn logical_order(mappings: &[u32], len: usize) -> Result<Vec<usize>> {
    mappings
        .iter()
        .enumerate()
        .map(|(position, &idx)| -> Result<usize> {
            let index = idx as usize;
            if index >= len {
                return Err(DecodeError::IndexOutOfRange { position, index, len });
            }
            Ok(index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::cps::pointer::PointerRecord;

    fn name_bytes(names: &[&str]) -> Vec<u8> {
        let mut v = Vec::new();
        for n in names {
            let mut slot = n.as_bytes().to_vec();
            slot.resize(GROUP_LIST_NAME_SIZE, 0);
            v.extend(slot);
        }
        v
    }

    fn pointer_bytes(runs: &[&[u32]]) -> Vec<u8> {
        let mut v = Vec::new();
        for run in runs {
            let mut block = Vec::new();
            block.extend_from_slice(&0u16.to_le_bytes());
            block.extend_from_slice(&0x40u16.to_le_bytes());
            block.extend_from_slice(&(run.len() as u16).to_le_bytes());
            block.extend_from_slice(&0x100u32.to_le_bytes());
            block.extend_from_slice(&0x10eu32.to_le_bytes());
            for a in *run {
                block.extend_from_slice(&a.to_le_bytes());
            }
            block.resize(POINTER_BLOCK_STRIDE, 0);
            v.extend(block);
        }
        v
    }

    fn store(names: &[&str], runs: &[&[u32]], mappings: Vec<u32>) -> HashMap<SectionId, Section> {
        let mut m = HashMap::new();
        m.insert(0x6C, Section::new(0x6C, names.len() as u32, mappings, name_bytes(names)));
        m.insert(0x2B, Section::new(0x2B, runs.len() as u32, vec![], pointer_bytes(runs)));
        m
    }

    #[test]
    fn single_group_list() {
        let s = store(&["GRP1"], &[&[7]], vec![0]);
        let t = parse_rx_group_lists(&s).unwrap();
        assert_eq!(t.len(), 1);
        let g = t.get(0).unwrap();
        assert_eq!(g.name, "GRP1");
        assert_eq!(g.pointers.iter().map(|p| p.addr).collect::<Vec<_>>(), [7]);
    }

    #[test]
    fn mapping_reorders() {
        let s = store(&["A", "B", "C"], &[&[1], &[2], &[3]], vec![2, 0, 1]);
        let t = parse_rx_group_lists(&s).unwrap();
        let names: Vec<&str> = t.iter().map(|(_, g)| g.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(t.get(0).unwrap().pointers[0].addr, 3);
    }

    #[test]
    fn extra_mapping_entries_are_ignored() {
        let s = store(&["A", "B"], &[&[], &[]], vec![1, 0, 7, 7]);
        let t = parse_rx_group_lists(&s).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0).unwrap().name, "B");
    }

    #[test]
    fn missing_sections_are_named() {
        let mut s = store(&["A"], &[&[]], vec![0]);
        s.remove(&0x2B);
        assert!(matches!(parse_rx_group_lists(&s), Err(DecodeError::SectionNotFound(0x2B))));
        s.remove(&0x6C);
        assert!(matches!(parse_rx_group_lists(&s), Err(DecodeError::SectionNotFound(0x6C))));
    }

    #[test]
    fn count_mismatch_is_fatal() {
        let s = store(&["A", "B", "C"], &[&[], &[], &[], &[]], vec![0, 1, 2]);
        assert!(matches!(
            parse_rx_group_lists(&s),
            Err(DecodeError::SectionCountMismatch { names: 3, pointers: 4 })
        ));
    }

    #[test]
    fn short_mapping_table_is_rejected() {
        let s = store(&["A", "B"], &[&[], &[]], vec![0]);
        assert!(matches!(
            parse_rx_group_lists(&s),
            Err(DecodeError::MappingTableTooShort { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn mapping_out_of_range() {
        let s = store(&["A", "B"], &[&[], &[]], vec![0, 2]);
        assert!(matches!(
            parse_rx_group_lists(&s),
            Err(DecodeError::IndexOutOfRange { position: 1, index: 2, len: 2 })
        ));
    }

    #[test]
    fn name_section_shorter_than_count() {
        let mut s = store(&["A", "B"], &[&[], &[]], vec![0, 1]);
        let sec = s.get_mut(&0x6C).unwrap();
        sec.data = sec.data.slice(..40);
        assert!(matches!(
            parse_rx_group_lists(&s),
            Err(DecodeError::BufferTooShort { offset: 32, needed: 32, available: 8 })
        ));
    }

    #[test]
    fn trailing_name_bytes_are_padding() {
        let mut s = store(&["A"], &[&[]], vec![0]);
        let sec = s.get_mut(&0x6C).unwrap();
        let mut data = sec.data.to_vec();
        data.extend_from_slice(&[0xFF; 40]);
        sec.data = data.into();
        assert_eq!(parse_rx_group_lists(&s).unwrap().get(0).unwrap().name, "A");
    }

    #[test]
    fn zero_stride_fails_before_decoding() {
        let mut s = store(&["A", "B"], &[&[]], vec![0, 1]);
        s.get_mut(&0x2B).unwrap().element_count = 2;
        let fmt = GroupListFormat { pointer_stride: 0, ..GroupListFormat::default() };
        assert!(matches!(
            parse_rx_group_lists_with(&s, &fmt),
            Err(DecodeError::InvalidStride { stride: 0, minimum: 18 })
        ));
    }

    #[test]
    fn empty_sections_give_empty_table() {
        let s = store(&[], &[], vec![]);
        let t = parse_rx_group_lists(&s).unwrap();
        assert!(t.is_empty());
        assert!(t.raw().is_empty());
    }

    #[test]
    fn all_nul_name_decodes_empty() {
        let s = store(&[""], &[&[9]], vec![0]);
        let g = parse_rx_group_lists(&s).unwrap().get(0).cloned().unwrap();
        assert_eq!(g.name, "");
        assert_eq!(g.pointers, vec![PointerRecord { addr: 9 }]);
    }

    #[test]
    fn custom_section_ids() {
        let mut s = store(&["A"], &[&[4]], vec![0]);
        let names = s.remove(&0x6C).unwrap();
        s.insert(0x70, Section { id: 0x70, ..names });
        let fmt = GroupListFormat { name_section: 0x70, ..GroupListFormat::default() };
        let t = parse_rx_group_lists_with(&s, &fmt).unwrap();
        assert_eq!(t.get(0).unwrap().pointers[0].addr, 4);
    }
}
