use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use regscale_core::dump::read_dump;
use regscale_core::layout::{FIELDS, RECORD_COUNT};
use regscale_core::scale::rescale_clamped;

use super::DEFAULT_INPUT;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Register dump to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub r#in: PathBuf,

    /// First record index
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Number of records to print
    #[arg(long, default_value_t = 8)]
    pub count: usize,

    /// Also show each field's rescaled value
    #[arg(long, default_value_t = false)]
    pub rescaled: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let dump = read_dump(&args.r#in).context("load register dump")?;

    if args.start >= RECORD_COUNT {
        anyhow::bail!(
            "--start {} out of range (dump holds {} records)",
            args.start,
            RECORD_COUNT
        );
    }
    let end = args.start.saturating_add(args.count).min(RECORD_COUNT);

    eprintln!("--- inspect ---");
    eprintln!("file            = {}", args.r#in.display());
    eprintln!("crc32           = {:08x}", dump.crc32());
    eprintln!("records         = {}..{} of {}", args.start, end, RECORD_COUNT);

    for i in args.start..end {
        let rec = dump.record(i)?;
        println!("{}", format_record(i, rec, args.rescaled));
    }

    Ok(())
}

fn format_record(index: usize, rec: &[u8], rescaled: bool) -> String {
    let hex: Vec<String> = rec.iter().map(|b| format!("{b:02x}")).collect();
    let mut line = format!("#{index:04} [{}]", hex.join(" "));
    for spec in FIELDS.iter() {
        let v = spec.read(rec);
        if rescaled {
            line.push_str(&format!(
                " {}={}->{}",
                spec.name,
                v,
                rescale_clamped(v, spec.max)
            ));
        } else {
            line.push_str(&format!(" {}={}", spec.name, v));
        }
    }
    line
}
