//! Aseprite slice export → RCSS sprite sheet conversion.
//! Library form of the converter so the binary and tests share one
//! implementation.

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::{fs, path::Path};

/// Consumed subset of the Aseprite JSON export. Everything else in the
/// document (frames, frameTags, slice colors) is ignored.
#[derive(Debug, Deserialize)]
pub struct Export { pub meta: Meta }
#[derive(Debug, Deserialize)]
pub struct Meta { pub image: String, pub slices: Vec<SliceEntry> }
#[derive(Debug, Deserialize)]
pub struct SliceEntry { pub name: String, pub keys: Vec<SliceKey> }
#[derive(Debug, Deserialize)]
pub struct SliceKey { pub bounds: Rect }
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Rect { pub x: u32, pub y: u32, pub w: u32, pub h: u32 }

/// Flattened sheet description: one static rect per slice, input order kept.
#[derive(Debug)]
pub struct SpriteSheet {
    pub image: String,
    pub slices: Vec<Slice>,
}

#[derive(Debug)]
pub struct Slice {
    pub name: String,
    pub bounds: Rect,
}

impl SpriteSheet {
    /// Collapses each slice to its first keyframe. Later keyframes are
    /// animation frames; only static slices are supported.
    pub fn from_export(export: Export) -> Result<Self> {
        let mut slices = Vec::with_capacity(export.meta.slices.len());
        for entry in export.meta.slices {
            let bounds = entry
                .keys
                .first()
                .map(|key| key.bounds)
                .ok_or_else(|| anyhow!("slice '{}' has no keyframes", entry.name))?;
            slices.push(Slice { name: entry.name, bounds });
        }
        Ok(Self { image: export.meta.image, slices })
    }

    /// Sheet identifier: base name of the source image, extension stripped.
    pub fn sheet_name(&self) -> &str {
        Path::new(&self.image)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// Renders the `@spritesheet` block. The closing brace is the last byte
    /// of the document (no trailing newline).
    pub fn to_rcss(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("@spritesheet {}\n", self.sheet_name()));
        out.push_str("{\n");
        out.push_str(&format!("\tsrc: {};\n", self.image));
        out.push_str("\tresolution: 1x;\n");
        for slice in &self.slices {
            let b = slice.bounds;
            out.push_str(&format!(
                "\t{}: {}px {}px {}px {}px;\n",
                slice.name, b.x, b.y, b.w, b.h
            ));
        }
        out.push('}');
        out
    }
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(wanted)
}

/// One-shot conversion: read `input`, write the rendered sheet to `output`.
/// The output file is only created once the input has parsed, so a malformed
/// export never leaves a partial file behind.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    if !has_extension(input, "json") {
        bail!("input {} must be a .json Aseprite export", input.display());
    }
    if !has_extension(output, "rcss") {
        bail!("output {} must be an .rcss sprite sheet", output.display());
    }
    let txt = fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let export: Export =
        serde_json::from_str(&txt).with_context(|| format!("parse {}", input.display()))?;
    let sheet = SpriteSheet::from_export(export)?;
    fs::write(output, sheet.to_rcss()).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}
