use serde::{Deserialize, Deserializer};

use crate::error::GeometryError;

/// Millimeter-tagged length. Only used at the input boundary and when
/// formatting labels; all geometry math runs in meters.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Millimeters(pub f64);

/// Meter-tagged length, the internal unit for geometry.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Meters(pub f64);

impl Millimeters {
    pub fn to_meters(self) -> Meters {
        Meters(self.0 / 1000.0)
    }
}

impl Meters {
    pub fn to_millimeters(self) -> Millimeters {
        Millimeters(self.0 * 1000.0)
    }

    /// Label value: the length in whole millimeters, `Math.round` semantics.
    pub fn round_mm(self) -> i64 {
        (self.0 * 1000.0).round() as i64
    }
}

/// Side cover used for bar hooks and straight lengths, fixed at 75 mm.
pub const SIDE_COVER: Millimeters = Millimeters(75.0);

/// The flat result record produced by the external structural solver.
///
/// All linear fields are millimeters on the wire. The solver also returns a
/// long tail of check values (As, qa, ved/vrd, ...) consumed only by the
/// numeric report; they are ignored here.
#[derive(Clone, Debug, Deserialize)]
pub struct SolverRecord {
    /// Footing plan width, mm.
    pub b: f64,
    /// Footing thickness, mm.
    pub d: f64,
    /// Column cross-section along X, mm.
    pub colx: f64,
    /// Column cross-section along Y, mm.
    pub coly: f64,
    /// Reinforcement bar count.
    #[serde(rename = "N")]
    pub n: u32,
    /// Bar spacing, mm.
    pub s: f64,
    /// Bar diameter, mm.
    pub bar: f64,
    /// Nominal cover, mm. Serialized as either a number or a string.
    #[serde(deserialize_with = "number_or_string")]
    pub covr: f64,
}

/// The wizard forms submit `covr` as a string ("40"/"75"); the solver echoes
/// it back unchanged, so tolerate both representations.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(v) => Ok(v),
        NumOrStr::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid cover value {s:?}"))),
    }
}

/// Validated, unit-normalized drawing input. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct FootingResult {
    /// Footing plan width (the plan view is a `width x width` square).
    pub width: Meters,
    /// Footing thickness.
    pub thickness: Meters,
    /// Column cross-section along X.
    pub column_x: Meters,
    /// Column cross-section along Y.
    pub column_y: Meters,
    /// Reinforcement bar count, >= 1.
    pub bar_count: u32,
    /// Bar diameter, kept in mm as it only appears in callout labels.
    pub bar_diameter: Millimeters,
    /// Bar spacing, kept in mm for the same reason.
    pub bar_spacing: Millimeters,
    /// Nominal cover.
    pub cover: Millimeters,
}

impl FootingResult {
    /// Normalize a solver record into meters and validate its geometry.
    ///
    /// A zero-area column (colx = coly = 0) is accepted and draws a
    /// degenerate rectangle; a column wider than the footing is rejected.
    pub fn from_record(rec: &SolverRecord) -> Result<Self, GeometryError> {
        if !(rec.b > 0.0) {
            return Err(GeometryError::NonPositiveWidth(rec.b));
        }
        if !(rec.d > 0.0) {
            return Err(GeometryError::NonPositiveThickness(rec.d));
        }
        if !(rec.colx >= 0.0) || !(rec.coly >= 0.0) {
            return Err(GeometryError::NegativeColumn {
                colx_mm: rec.colx,
                coly_mm: rec.coly,
            });
        }
        let widest_col = rec.colx.max(rec.coly);
        if widest_col > rec.b {
            return Err(GeometryError::ColumnExceedsFooting {
                column_mm: widest_col,
                footing_mm: rec.b,
            });
        }
        if rec.n < 1 {
            return Err(GeometryError::ZeroBarCount);
        }
        if !(rec.bar > 0.0) {
            return Err(GeometryError::NonPositiveBarDiameter(rec.bar));
        }
        if !(rec.s > 0.0) {
            return Err(GeometryError::NonPositiveBarSpacing(rec.s));
        }
        if !(rec.covr > 0.0) {
            return Err(GeometryError::NonPositiveCover(rec.covr));
        }

        Ok(FootingResult {
            width: Millimeters(rec.b).to_meters(),
            thickness: Millimeters(rec.d).to_meters(),
            column_x: Millimeters(rec.colx).to_meters(),
            column_y: Millimeters(rec.coly).to_meters(),
            bar_count: rec.n,
            bar_diameter: Millimeters(rec.bar),
            bar_spacing: Millimeters(rec.s),
            cover: Millimeters(rec.covr),
        })
    }

    /// Hook (bend-up) length of a bottom bar: the thickness minus bottom and
    /// side cover, rounded up to the next centimeter.
    pub fn hook_length(&self) -> Meters {
        let clear = self.thickness.0 - (self.cover.0 + SIDE_COVER.0) / 1000.0;
        Meters((clear * 100.0).ceil() / 100.0)
    }

    /// Straight length of a bottom bar: footing width minus side cover on
    /// both ends.
    pub fn straight_bar_length(&self) -> Meters {
        Meters(self.width.0 - 2.0 * SIDE_COVER.0 / 1000.0)
    }

    /// Total fabricated bar length (straight part plus both hooks).
    pub fn total_bar_length(&self) -> Meters {
        Meters(2.0 * self.hook_length().0 + self.straight_bar_length().0)
    }

    /// The composed reinforcement callout, e.g. `6ϕ16@150-2330`.
    pub fn bar_callout(&self) -> String {
        format!(
            "{}\u{03d5}{}@{}-{}",
            self.bar_count,
            fmt_trimmed(self.bar_diameter.0),
            fmt_trimmed(self.bar_spacing.0),
            self.total_bar_length().round_mm()
        )
    }
}

/// Format a millimeter quantity without a trailing `.0` when it is whole.
fn fmt_trimmed(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
