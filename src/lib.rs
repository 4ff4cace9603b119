pub mod draw;
pub mod error;
pub mod fonts;
pub mod model;
pub mod pdf;
pub mod raster;
pub mod scale;

pub use error::{Error, GeometryError};
pub use model::{FootingResult, SolverRecord};
pub use pdf::{export_pdf, suggested_filename};
pub use raster::RasterImage;
pub use scale::Canvas;

use std::path::Path;
use std::time::Instant;

/// One drawing surface and the latest captured raster for it.
///
/// The surface is exclusively owned and single-writer: a draw pass runs to
/// completion (or not at all) before the next one starts, and every pass
/// fully resets the surface first. A new result always replaces the cached
/// raster, so a stale capture can never be exported as current.
pub struct DrawingSession {
    surface: raster::Surface,
    raster: Option<RasterImage>,
}

impl DrawingSession {
    pub fn new(canvas: Canvas) -> Result<Self, Error> {
        Ok(DrawingSession {
            surface: raster::Surface::new(canvas)?,
            raster: None,
        })
    }

    /// Render a result and capture it. Latest result wins.
    pub fn draw(&mut self, footing: &FootingResult) -> Result<&RasterImage, Error> {
        let t0 = Instant::now();

        let primitives = draw::build_primitives(footing, self.surface.canvas());
        let t_layout = t0.elapsed();

        self.surface.render(&primitives);
        let image = self.surface.capture()?;
        let t_total = t0.elapsed();

        log::info!(
            "Timing: layout={:.1}ms, raster={:.1}ms, total={:.1}ms ({} primitives, {} png bytes)",
            t_layout.as_secs_f64() * 1000.0,
            (t_total - t_layout).as_secs_f64() * 1000.0,
            t_total.as_secs_f64() * 1000.0,
            primitives.len(),
            image.png.len(),
        );

        Ok(self.raster.insert(image))
    }

    /// The captured raster of the last successful draw. `None` before the
    /// first draw means "export unavailable", not an error.
    pub fn raster(&self) -> Option<&RasterImage> {
        self.raster.as_ref()
    }

    /// Drop the cached raster, e.g. when the current result is withdrawn.
    pub fn invalidate(&mut self) {
        self.raster = None;
    }
}

/// Render one result on a fresh default-size surface and return the capture.
pub fn render_drawing(footing: &FootingResult) -> Result<RasterImage, Error> {
    let mut session = DrawingSession::new(Canvas::default())?;
    let image = session.draw(footing)?.clone();
    Ok(image)
}

/// Full pipeline: solver record JSON file in, printable PDF out.
pub fn convert_record_to_pdf(input: &Path, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let data = std::fs::read(input)?;
    let footing = parse_record_bytes(&data)?;
    let t_parse = t0.elapsed();

    let image = render_drawing(&footing)?;
    let t_render = t0.elapsed();

    let bytes = pdf::export_pdf(&image)?;
    std::fs::write(output, &bytes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, export+write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}

/// Parse and validate a solver result record from raw JSON bytes.
pub fn parse_record_bytes(data: &[u8]) -> Result<FootingResult, Error> {
    let record: SolverRecord = serde_json::from_slice(data)?;
    FootingResult::from_record(&record).map_err(Error::Geometry)
}
