use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use regscale_core::dump::write_dump;
use regscale_core::layout::FIELDS;
use regscale_core::{load_rescaled, RescaleStats};

use super::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Args, Debug)]
pub struct RescaleArgs {
    /// Input register dump
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub r#in: PathBuf,

    /// Output path (parent directory must exist; replaced atomically)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Run the pass in memory and report, without writing the output
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Default for RescaleArgs {
    fn default() -> Self {
        Self {
            r#in: PathBuf::from(DEFAULT_INPUT),
            out: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }
}

pub fn run(args: RescaleArgs) -> anyhow::Result<()> {
    eprintln!("--- rescale ---");
    eprintln!("input           = {}", args.r#in.display());

    let (dump, rep) = load_rescaled(&args.r#in)
        .with_context(|| format!("load register dump {}", args.r#in.display()))?;

    if args.dry_run {
        eprintln!("output          = (dry run, not written)");
    } else {
        write_dump(&args.out, &dump)
            .with_context(|| format!("write rescaled dump {}", args.out.display()))?;
        eprintln!("output          = {}", args.out.display());
    }
    eprintln!("input_crc32     = {:08x}", rep.input_crc32);
    eprintln!("output_crc32    = {:08x}", rep.output_crc32);
    report_stats(&rep.stats);

    Ok(())
}

fn report_stats(stats: &RescaleStats) {
    eprintln!("records         = {}", stats.records);
    eprintln!("changed         = {}", stats.total_changed());
    eprintln!("clamped         = {}", stats.total_clamped());
    eprintln!("--- fields ---");
    for (spec, fs) in FIELDS.iter().zip(stats.fields.iter()) {
        eprintln!(
            "{} off={:>2} max={:>5} changed={} clamped={}",
            spec.name, spec.offset, spec.max, fs.changed, fs.clamped
        );
    }
}
