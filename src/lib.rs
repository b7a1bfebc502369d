// src/lib.rs
pub mod inspector {
    use std::path::PathBuf;

    use crate::cps::SectionId;

    pub struct Options {
        pub dump: PathBuf,
        pub contacts: Option<PathBuf>,
        pub json: bool,
        pub name_section: Option<SectionId>,
        pub pointer_section: Option<SectionId>,
    }

    /// Decode the dump and print its group lists to stdout
    pub fn run(opts: Options) -> anyhow::Result<()> {
        crate::core::run(opts)
    }
}

pub mod constants;
pub mod cps;
pub mod dump;
pub mod error;
pub mod parsers;
pub mod report;
pub mod types;
mod core;

pub use cps::{GroupListFormat, PointerRecord, Section, SectionId, SectionStore, parse_rx_group_lists};
pub use error::{DecodeError, Result};
pub use types::{GroupList, GroupListTable};
