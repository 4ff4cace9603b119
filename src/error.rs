use std::fmt;

/// Invalid input geometry: the drawing is unavailable rather than drawn wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    NonPositiveWidth(f64),
    NonPositiveThickness(f64),
    NegativeColumn { colx_mm: f64, coly_mm: f64 },
    ColumnExceedsFooting { column_mm: f64, footing_mm: f64 },
    ZeroBarCount,
    NonPositiveBarDiameter(f64),
    NonPositiveBarSpacing(f64),
    NonPositiveCover(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonPositiveWidth(v) => {
                write!(f, "footing width must be positive, got {v} mm")
            }
            GeometryError::NonPositiveThickness(v) => {
                write!(f, "footing thickness must be positive, got {v} mm")
            }
            GeometryError::NegativeColumn { colx_mm, coly_mm } => {
                write!(f, "column dimensions must be non-negative, got {colx_mm}x{coly_mm} mm")
            }
            GeometryError::ColumnExceedsFooting {
                column_mm,
                footing_mm,
            } => {
                write!(
                    f,
                    "column side ({column_mm} mm) exceeds footing width ({footing_mm} mm)"
                )
            }
            GeometryError::ZeroBarCount => write!(f, "bar count must be at least 1"),
            GeometryError::NonPositiveBarDiameter(v) => {
                write!(f, "bar diameter must be positive, got {v} mm")
            }
            GeometryError::NonPositiveBarSpacing(v) => {
                write!(f, "bar spacing must be positive, got {v} mm")
            }
            GeometryError::NonPositiveCover(v) => {
                write!(f, "cover must be positive, got {v} mm")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Geometry(GeometryError),
    /// The raster surface could not be allocated (zero-sized canvas).
    Surface { width: u32, height: u32 },
    Png(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Json(e) => write!(f, "invalid solver result record: {e}"),
            Error::Geometry(e) => write!(f, "drawing unavailable: {e}"),
            Error::Surface { width, height } => {
                write!(f, "cannot allocate {width}x{height} drawing surface")
            }
            Error::Png(msg) => write!(f, "png error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<GeometryError> for Error {
    fn from(e: GeometryError) -> Self {
        Error::Geometry(e)
    }
}
