// crates/regscale-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "regscale")]
#[command(about = "Register dump rescaler (reference clock conversion)", long_about = None)]
pub struct Cli {
    /// Defaults to `rescale` with default paths when omitted.
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rescale every record of a register dump and write the result
    Rescale(cmd::rescale::RescaleArgs),

    /// Print decoded records of a register dump
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Some(Commands::Rescale(args)) => cmd::rescale::run(args),
        Some(Commands::Inspect(args)) => cmd::inspect::run(args),
        None => cmd::rescale::run(cmd::rescale::RescaleArgs::default()),
    }
}
