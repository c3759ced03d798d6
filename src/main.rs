//! msh2xdmf CLI Application

use clap::Parser;
use msh2xdmf::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "msh2xdmf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input .msh file
    #[arg(value_name = "FILE")]
    msh_file: PathBuf,

    /// Spatial dimension of the domain (2 or 3)
    #[arg(short, long, default_value_t = 2)]
    dimension: usize,

    /// Directory receiving the XDMF/H5 pairs and the association table
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    msh2xdmf::msh2xdmf(&cli.msh_file, cli.dimension, &cli.output)
}
