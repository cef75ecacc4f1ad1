use engine_tools::image_embed::{compile, render_source};
use std::fs;

#[test]
fn png_round_trips_into_source_text() {
    let tmp = tempfile::tempdir().unwrap();
    let png = tmp.path().join("icon.png");
    let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([7, 8, 9, 255]));
    img.save(&png).unwrap();

    let embedded = compile(&png).unwrap();
    assert_eq!((embedded.width, embedded.height, embedded.channels), (4, 2, 4));
    assert_eq!(embedded.pixels.len(), 4 * 2 * 4);

    let src = render_source(&embedded);
    assert!(src.starts_with("// Generated by image_embed_gen."));
    assert!(src.contains("pub static IMAGE: StaticImageData"));
    assert!(src.contains("width: 4,"));
    assert!(src.contains("height: 2,"));

    // generated file is plain text another build step can check in
    let out = tmp.path().join("icon.rs");
    fs::write(&out, &src).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), src);
}
