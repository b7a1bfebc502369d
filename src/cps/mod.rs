pub mod section;
pub mod pointer;
pub mod rx_group_list;

pub use section::{Section, SectionId, SectionStore};
pub use pointer::{PointerHeader, PointerRecord, check_stride, read_pointer_run};
pub use rx_group_list::{GroupListFormat, parse_rx_group_lists, parse_rx_group_lists_with};
