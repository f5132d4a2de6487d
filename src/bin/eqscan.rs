use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eqscan::scan_path;

/// scans exported model files (.json) for equations affected by
/// operator-precedence parser bugs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model file, or directory of model files, to scan
    path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Args::parse();
    scan_path(&cli.path)?;
    Ok(())
}
