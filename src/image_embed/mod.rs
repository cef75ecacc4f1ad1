//! Image → embeddable Rust source compilation.
//! Decodes an image and emits a source file holding the raw pixels so a
//! binary can ship without loose asset files.

use anyhow::{Context, Result};
use image::GenericImageView;
use std::path::Path;

/// Decoded pixel data ready for rendering into source text. Rows are stored
/// bottom-up (GL texture order).
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub pixels: Vec<u8>,
}

pub fn compile(input: &Path) -> Result<EmbeddedImage> {
    let img = image::open(input).with_context(|| format!("read image {}", input.display()))?;
    let flipped = img.flipv();
    let (width, height) = flipped.dimensions();
    let channels = flipped.color().channel_count() as u32;
    Ok(EmbeddedImage { width, height, channels, pixels: flipped.into_bytes() })
}

/// Renders a self-contained Rust source file declaring `IMAGE`. Byte rows are
/// wrapped so the file stays diffable.
pub fn render_source(img: &EmbeddedImage) -> String {
    let mut out = String::new();
    out.push_str("// Generated by image_embed_gen. Do not edit.\n\n");
    out.push_str("pub struct StaticImageData {\n");
    out.push_str("    pub width: u32,\n");
    out.push_str("    pub height: u32,\n");
    out.push_str("    pub channels: u32,\n");
    out.push_str("    pub pixels: &'static [u8],\n");
    out.push_str("}\n\n");
    out.push_str("pub static IMAGE: StaticImageData = StaticImageData {\n");
    out.push_str(&format!("    width: {},\n", img.width));
    out.push_str(&format!("    height: {},\n", img.height));
    out.push_str(&format!("    channels: {},\n", img.channels));
    out.push_str("    pixels: &[\n");
    for row in img.pixels.chunks(32) {
        out.push_str("        ");
        for b in row {
            out.push_str(&format!("{}, ", b));
        }
        // trim the trailing space, keep the comma
        out.pop();
        out.push('\n');
    }
    out.push_str("    ],\n");
    out.push_str("};\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_declares_static_with_dimensions() {
        let img = EmbeddedImage { width: 2, height: 1, channels: 4, pixels: vec![1, 2, 3, 4, 5, 6, 7, 8] };
        let src = render_source(&img);
        assert!(src.contains("pub static IMAGE: StaticImageData"));
        assert!(src.contains("width: 2,"));
        assert!(src.contains("height: 1,"));
        assert!(src.contains("channels: 4,"));
        assert!(src.contains("1, 2, 3, 4, 5, 6, 7, 8,"));
    }

    #[test]
    fn compile_flips_rows_bottom_up() {
        let tmp = tempfile::tempdir().unwrap();
        let png = tmp.path().join("mark.png");
        let mut buf = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
        buf.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        buf.save(&png).unwrap();
        let embedded = compile(&png).unwrap();
        assert_eq!((embedded.width, embedded.height, embedded.channels), (2, 2, 4));
        // top-left marker must land at the start of the last stored row
        let row_len = (embedded.width * embedded.channels) as usize;
        assert_eq!(embedded.pixels[row_len], 255);
        assert_eq!(embedded.pixels[0], 0);
    }

    #[test]
    fn compile_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(compile(&tmp.path().join("absent.png")).is_err());
    }
}
