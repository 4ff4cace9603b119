mod common;

use footing_draw::{export_pdf, render_drawing, suggested_filename};

#[test]
fn export_produces_a_pdf_with_the_embedded_drawing() {
    let footing = common::sample_footing();
    let image = render_drawing(&footing).unwrap();
    assert!(!image.png.is_empty());
    assert_eq!((image.width, image.height), (900, 1200));

    let bytes = export_pdf(&image).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("FlateDecode"), "image stream is deflated");
    assert!(text.contains("Helvetica"), "caption font is present");
    // Landscape A4 media box.
    assert!(text.contains("841.89"));
}

#[test]
fn png_snapshot_round_trips_through_the_image_decoder() {
    let footing = common::sample_footing();
    let image = render_drawing(&footing).unwrap();

    let decoded = image::load_from_memory(&image.png).expect("valid png");
    assert_eq!(decoded.width(), image.width);
    assert_eq!(decoded.height(), image.height);

    // White page background after reset.
    let rgb = decoded.to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([255, 255, 255]));

    // Something black was actually drawn.
    assert!(rgb.pixels().any(|p| p.0 == [0, 0, 0]));
}

#[test]
fn suggested_filename_embeds_a_timestamp() {
    let name = suggested_filename();
    assert!(name.starts_with("foundation_drawing_"));
    assert!(name.ends_with(".pdf"));
    // foundation_drawing_YYYY-MM-DD_HH-MM-SS.pdf
    assert_eq!(name.len(), "foundation_drawing_".len() + 19 + ".pdf".len());
}
