use anyhow::Context;

use crate::cps::{GroupListFormat, parse_rx_group_lists_with};
use crate::dump::{load_contacts, load_sections};
use crate::report::Reporter;

pub fn run(opts: crate::inspector::Options) -> anyhow::Result<()> {
    let sections = load_sections(&opts.dump)?;
    let contacts = match &opts.contacts {
        Some(path) => load_contacts(path)?,
        None => Vec::new(),
    };

    let mut format = GroupListFormat::default();
    if let Some(id) = opts.name_section {
        format.name_section = id;
    }
    if let Some(id) = opts.pointer_section {
        format.pointer_section = id;
    }

    let table = parse_rx_group_lists_with(&sections, &format)
        .with_context(|| format!("decoding group lists from {}", opts.dump.display()))?;

    if opts.json {
        println!("{}", Reporter::render_json(&table, &contacts)?);
    } else {
        print!("{}", Reporter::render_text(&table, &contacts));
    }
    Ok(())
}
