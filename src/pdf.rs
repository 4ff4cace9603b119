//! Printable export: wraps a captured drawing in a landscape A4 page with a
//! fixed measurement-unit caption.

use chrono::Utc;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::raster::RasterImage;

/// A4 landscape, points.
const PAGE_WIDTH: f32 = 841.89;
const PAGE_HEIGHT: f32 = 595.28;
const PAGE_MARGIN: f32 = 20.0;
/// The image may fill the width but only 90% of the content height, leaving
/// room below for the caption.
const IMAGE_HEIGHT_SHARE: f32 = 0.9;

const CAPTION: &str = "UNITS: MILLIMETERS (mm)";
const CAPTION_SIZE: f32 = 9.0;

/// Suggested download filename with a UTC timestamp, e.g.
/// `foundation_drawing_2026-08-30_14-03-52.pdf`. Cosmetic metadata only;
/// the document content is independent of the clock.
pub fn suggested_filename() -> String {
    format!(
        "foundation_drawing_{}.pdf",
        Utc::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Build the complete PDF document around one captured drawing.
pub fn export_pdf(image: &RasterImage) -> Result<Vec<u8>, Error> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let page_id = alloc();
    let content_id = alloc();
    let image_id = alloc();
    let font_id = alloc();

    // The drawing is opaque (white page background), so a plain RGB
    // FlateDecode XObject suffices; no soft mask needed.
    let cursor = std::io::Cursor::new(&image.png);
    let reader =
        image::ImageReader::with_format(std::io::BufReader::new(cursor), image::ImageFormat::Png);
    let decoded = reader
        .decode()
        .map_err(|e| Error::Png(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (px_w, px_h) = (rgb.width(), rgb.height());
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(rgb.as_raw(), 6);

    {
        let mut xobj = pdf.image_xobject(image_id, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.width(px_w as i32);
        xobj.height(px_h as i32);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
    }

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    // Contain-fit the image inside the content box, centered both ways.
    let avail_w = PAGE_WIDTH - 2.0 * PAGE_MARGIN;
    let avail_h = (PAGE_HEIGHT - 2.0 * PAGE_MARGIN) * IMAGE_HEIGHT_SHARE;
    let fit = (avail_w / px_w as f32).min(avail_h / px_h as f32);
    let draw_w = px_w as f32 * fit;
    let draw_h = px_h as f32 * fit;
    let draw_x = (PAGE_WIDTH - draw_w) / 2.0;
    let draw_y = PAGE_MARGIN + (PAGE_HEIGHT - 2.0 * PAGE_MARGIN - draw_h) / 2.0;

    let mut content = Content::new();
    content.save_state();
    content.transform([draw_w, 0.0, 0.0, draw_h, draw_x, draw_y]);
    content.x_object(Name(b"Im1"));
    content.restore_state();

    content.begin_text();
    content.set_font(Name(b"F1"), CAPTION_SIZE);
    content.next_line(PAGE_MARGIN, PAGE_MARGIN * 0.5);
    content.show(Str(CAPTION.as_bytes()));
    content.end_text();

    pdf.stream(content_id, &content.finish());

    {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(pages_id);
        page.contents(content_id);
        let mut resources = page.resources();
        resources.x_objects().pair(Name(b"Im1"), image_id);
        resources.fonts().pair(Name(b"F1"), font_id);
    }

    pdf.pages(pages_id).kids([page_id]).count(1);
    pdf.catalog(catalog_id).pages(pages_id);

    Ok(pdf.finish())
}
