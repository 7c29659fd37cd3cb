mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use anyhow::Context;
use chemjson::core::codec::{JsonCodec, OutputLayout};
use chemjson::core::models::element::ElementTable;
use chemjson::engine::geometry::GeometryOnlyEngine;
use chemjson::workflows::convert::{ConvertOptions, Converter};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("chemjson v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let data = read_input(&cli.input)?;

    let codec = JsonCodec::new(Arc::new(ElementTable::standard()), cli.precision);
    let converter = Converter::new(GeometryOnlyEngine::new(), codec);
    let options = ConvertOptions {
        hydrogens: cli.hydrogens.mode(),
        layout: if cli.compact {
            OutputLayout::Compact
        } else {
            OutputLayout::Pretty
        },
    };

    let output = converter.convert(&data, &cli.input_format, &cli.output_format, &options)?;
    println!("{output}");
    Ok(())
}

/// Reads the input argument as a file when a file exists at that path,
/// otherwise treats the argument itself as literal chemical data.
fn read_input(input: &str) -> Result<String> {
    let path = Path::new(input);
    if path.is_file() {
        debug!(path = %path.display(), "reading input from file");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
        Ok(content)
    } else {
        debug!("input is not an existing file; treating it as literal data");
        Ok(input.to_string())
    }
}
