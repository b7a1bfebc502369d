use serde::Serialize;
use serde::ser::SerializeMap;

use crate::cps::pointer::PointerRecord;

/// One decoded RX group list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupList {
    pub name: String,
    pub pointers: Vec<PointerRecord>,
}

/// Group lists in display order.
///
/// Records are kept in storage order; `order` maps each logical position
/// to a record, so the raw and logical views share one backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListTable {
    records: Vec<GroupList>,
    order: Vec<usize>,
}

impl GroupListTable {
    /// Callers guarantee every `order` entry indexes into `records`.
    pub(crate) fn from_parts(records: Vec<GroupList>, order: Vec<usize>) -> Self {
        debug_assert!(order.iter().all(|&i| i < records.len()));
        Self { records, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Group list at logical position `index`.
    pub fn get(&self, index: usize) -> Option<&GroupList> {
        self.order.get(index).map(|&raw| &self.records[raw])
    }

    /// `(logical index, group list)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GroupList)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(i, &raw)| (i, &self.records[raw]))
    }

    /// Records in the order they are stored in the codeplug.
    pub fn raw(&self) -> &[GroupList] {
        &self.records
    }
}

impl Serialize for GroupListTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (i, gl) in self.iter() {
            map.serialize_entry(&i, gl)?;
        }
        map.end()
    }
}
