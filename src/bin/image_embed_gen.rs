//! Static Image Embedding Utility
//!
//! Compiles an image into a Rust source file holding its raw pixel data, for
//! binaries that must ship without loose asset files. Rows are flipped to
//! bottom-up order to match GL texture sampling.
//!
//! Example:
//!   cargo run --bin image_embed_gen -- --input assets/icon.png --output src/embedded/icon.rs

use anyhow::{Context, Result};
use clap::Parser;
use engine_tools::image_embed;
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Compile an image into embeddable Rust pixel data", version)]
struct Args {
    #[arg(long)] input: PathBuf,
    #[arg(long)] output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let embedded = image_embed::compile(&args.input)?;
    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.output, image_embed::render_source(&embedded))
        .with_context(|| format!("write {}", args.output.display()))?;
    println!(
        "Wrote {} ({}x{}, {} channels)",
        args.output.display(),
        embedded.width,
        embedded.height,
        embedded.channels
    );
    Ok(())
}
