use crate::model::{FootingResult, Meters};

/// Pixels-per-meter by footing width: wider footings get a smaller
/// multiplier so the composition still fits the canvas. Breakpoints use
/// strict `<` semantics, so a width exactly at a breakpoint falls through
/// to the next bracket.
const PIXELS_PER_METER: &[(f64, f64)] = &[
    (2.0, 100.0),
    (2.5, 93.0),
    (3.0, 86.0),
    (3.5, 79.0),
    (4.0, 72.0),
    (4.5, 65.0),
    (5.0, 58.0),
];
const PIXELS_PER_METER_WIDEST: f64 = 51.0;

/// Divisor for the vertical offset of the composition. Smaller drawings sit
/// higher in the canvas than a straight centering would put them.
const VERTICAL_DIVISOR: &[(f64, f64)] = &[
    (2.0, 6.0),
    (3.0, 5.3),
    (4.0, 4.6),
    (5.0, 3.9),
    (6.0, 3.2),
];
const VERTICAL_DIVISOR_WIDEST: f64 = 2.5;

fn lookup(table: &[(f64, f64)], width_m: f64, widest: f64) -> f64 {
    table
        .iter()
        .find(|(breakpoint, _)| width_m < *breakpoint)
        .map(|(_, value)| *value)
        .unwrap_or(widest)
}

/// Scale factor for a footing of the given plan width.
pub fn pixels_per_meter(width: Meters) -> f64 {
    lookup(PIXELS_PER_METER, width.0, PIXELS_PER_METER_WIDEST)
}

/// Vertical-centering divisor for a footing of the given plan width.
pub fn vertical_divisor(width: Meters) -> f64 {
    lookup(VERTICAL_DIVISOR, width.0, VERTICAL_DIVISOR_WIDEST)
}

/// The fixed pixel budget one drawing is laid out into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    /// 3:4 portrait budget matching the host viewport the engine was sized for.
    fn default() -> Self {
        Canvas {
            width: 900,
            height: 1200,
        }
    }
}

/// Pedestal height as a fraction of the plan-view edge length.
pub const PEDESTAL_HEIGHT_FRACTION: f64 = 0.23;

/// Derived scale and placement for one drawing. Recomputed on every draw,
/// never persisted; everything downstream is a pure function of
/// `FootingResult` and this context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    pub pixels_per_meter: f64,
    /// Top-left offset of the combined plan + section composition.
    pub origin_x: f64,
    pub origin_y: f64,
    pub canvas: Canvas,
}

impl ScaleContext {
    pub fn compute(footing: &FootingResult, canvas: Canvas) -> Self {
        let ppm = pixels_per_meter(footing.width);
        let plan_side = ppm * footing.width.0;
        let section_depth = ppm * footing.thickness.0;

        // Breathing room right of the plan view for the rotated callout, and
        // between the two views for the horizontal callout stack.
        let horz_space = 30.0 + plan_side * 0.4;
        let vert_space = 50.0 + plan_side * 0.7;
        let pedestal = plan_side * PEDESTAL_HEIGHT_FRACTION;

        let total_w = plan_side + horz_space;
        let total_h = plan_side + vert_space + pedestal + section_depth;

        let origin_x = (canvas.width as f64 - total_w) / 2.0;
        let origin_y = (canvas.height as f64 - total_h) / vertical_divisor(footing.width);

        ScaleContext {
            pixels_per_meter: ppm,
            origin_x,
            origin_y,
            canvas,
        }
    }

    /// Convert a physical length to drawing-space pixels.
    pub fn px(&self, length: Meters) -> f64 {
        self.pixels_per_meter * length.0
    }
}
