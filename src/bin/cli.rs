use std::path::PathBuf;

use clap::Parser;
use codeplug_inspector::inspector::{Options, run};
use tracing::Level;

#[derive(Parser)]
#[clap(about = "Decode RX group lists from a codeplug section dump")]
struct Opt {
    /// JSON section dump written by the container loader
    #[clap(long)]
    dump: PathBuf,

    /// JSON array of contact names, in contact-table order
    #[clap(long)]
    contacts: Option<PathBuf>,

    /// Print a JSON report instead of the text listing
    #[clap(long, default_value_t = false)]
    json: bool,

    /// Override the group-list name section id (e.g. 0x6C)
    #[clap(long, value_parser = parse_id)]
    name_section: Option<u16>,

    /// Override the group-list pointer section id (e.g. 0x2B)
    #[clap(long, value_parser = parse_id)]
    pointer_section: Option<u16>,

    /// -v for debug, -vv for trace
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_id(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid section id `{s}`: {e}"))
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let level = match opt.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(Options {
        dump: opt.dump,
        contacts: opt.contacts,
        json: opt.json,
        name_section: opt.name_section,
        pointer_section: opt.pointer_section,
    })
}
