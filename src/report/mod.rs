//! Report generation for decoded group lists

use std::fmt::Write as _;

use serde::Serialize;

use crate::cps::pointer::PointerRecord;
use crate::types::GroupListTable;

/// Looks up contact names by 0-based contact index.
pub trait ContactResolver {
    fn contact_name(&self, index: usize) -> Option<&str>;
}

impl ContactResolver for [String] {
    fn contact_name(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl ContactResolver for Vec<String> {
    fn contact_name(&self, index: usize) -> Option<&str> {
        self.as_slice().contact_name(index)
    }
}

/// Pointer addresses are 1-based, the contact table is not.
pub fn resolve_contact<R: ContactResolver + ?Sized>(contacts: &R, pointer: PointerRecord) -> Option<&str> {
    let index = pointer.addr.checked_sub(1)?;
    contacts.contact_name(index as usize)
}

#[derive(Serialize)]
struct PointerJson<'a> {
    addr: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<&'a str>,
}

#[derive(Serialize)]
struct GroupListJson<'a> {
    index: usize,
    name: &'a str,
    pointers: Vec<PointerJson<'a>>,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    generated: String,
    group_lists: Vec<GroupListJson<'a>>,
}

/// Renders group lists for the CLI
pub struct Reporter;

impl Reporter {
    /// Plain listing, one `Grouplist:` line followed by its members.
    pub fn render_text<R: ContactResolver + ?Sized>(table: &GroupListTable, contacts: &R) -> String {
        let mut out = String::new();
        for (index, gl) in table.iter() {
            let _ = writeln!(out, "Grouplist: {}", gl.name);
            for p in &gl.pointers {
                let name = match resolve_contact(contacts, *p) {
                    Some(name) => name,
                    None => {
                        tracing::warn!(group_list = index, addr = p.addr, "unresolved contact");
                        "<unknown>"
                    }
                };
                let _ = writeln!(out, "  addr: {:02X} contact:{}", p.addr, name);
            }
        }
        out
    }

    /// Pretty JSON document stamped with the generation time.
    pub fn render_json<R: ContactResolver + ?Sized>(
        table: &GroupListTable,
        contacts: &R,
    ) -> serde_json::Result<String> {
        let group_lists = table
            .iter()
            .map(|(index, gl)| GroupListJson {
                index,
                name: &gl.name,
                pointers: gl
                    .pointers
                    .iter()
                    .map(|p| PointerJson {
                        addr: p.addr,
                        contact: resolve_contact(contacts, *p),
                    })
                    .collect(),
            })
            .collect();

        let rep = ReportJson {
            generated: chrono::Utc::now().to_rfc3339(),
            group_lists,
        };
        serde_json::to_string_pretty(&rep)
    }
}
