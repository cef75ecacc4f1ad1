//! Aseprite → RCSS Sprite Sheet Converter
//!
//! Converts the slice metadata of an Aseprite JSON export into an RCSS
//! `@spritesheet` block consumable by the UI library. Only the first
//! keyframe of each slice is used.
//!
//! Example:
//!   cargo run --bin sprite_rcss_gen -- assets/ui/hud.json assets/ui/hud.rcss

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Convert an Aseprite export JSON into an RCSS sprite sheet", version)]
struct Args {
    /// Aseprite export JSON (slices under meta.slices)
    input: PathBuf,
    /// RCSS sprite sheet to write
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    engine_tools::sprite_sheet::convert(&args.input, &args.output)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
