//! Label font lookup and glyph outline extraction.
//!
//! Labels are rasterized straight into the drawing, so all that is needed
//! is one usable sans-serif face from the system (or an explicit override).
//! When none is found the renderer skips text rather than failing the draw.

use std::path::PathBuf;
use std::sync::OnceLock;

use memmap2::Mmap;
use tiny_skia::{Path, PathBuilder};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Regular-weight sans faces accepted for labels, in preference order.
const FACE_CANDIDATES: &[&str] = &[
    "Arial.ttf",
    "arial.ttf",
    "Helvetica.ttf",
    "LiberationSans-Regular.ttf",
    "DejaVuSans.ttf",
    "NotoSans-Regular.ttf",
    "FreeSans.ttf",
];

fn font_directories() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "macos")]
    {
        dirs.extend([
            "/Library/Fonts".into(),
            "/System/Library/Fonts".into(),
            "/System/Library/Fonts/Supplemental".into(),
        ]);
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(home).join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "linux")]
    {
        dirs.extend(["/usr/share/fonts".into(), "/usr/local/share/fonts".into()]);
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(home).join(".local/share/fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(windir) = std::env::var("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        } else {
            dirs.push("C:\\Windows\\Fonts".into());
        }
    }

    dirs
}

fn find_candidate(dir: &PathBuf, depth: u32) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();
    let mut best: Option<(usize, PathBuf)> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(rank) = FACE_CANDIDATES.iter().position(|c| *c == name) {
                if best.as_ref().map_or(true, |(r, _)| rank < *r) {
                    best = Some((rank, path));
                }
            }
        }
    }
    if let Some((_, path)) = best {
        return Some(path);
    }

    if depth > 0 {
        for sub in subdirs {
            if let Some(found) = find_candidate(&sub, depth - 1) {
                return Some(found);
            }
        }
    }
    None
}

fn locate_font_file() -> Option<PathBuf> {
    // Explicit override wins: a path straight to a TTF/OTF file.
    if let Ok(path) = std::env::var("FOOTING_DRAW_FONT") {
        let p = PathBuf::from(path.trim());
        if p.is_file() {
            return Some(p);
        }
        log::warn!("FOOTING_DRAW_FONT does not point at a file: {}", p.display());
    }

    for dir in font_directories() {
        if let Some(found) = find_candidate(&dir, 3) {
            return Some(found);
        }
    }
    None
}

static LABEL_FONT: OnceLock<Option<Mmap>> = OnceLock::new();

/// The raw bytes of the label face, memory-mapped once per process.
/// `None` when no usable face exists on this system.
pub fn label_font() -> Option<&'static [u8]> {
    LABEL_FONT
        .get_or_init(|| {
            let path = match locate_font_file() {
                Some(p) => p,
                None => {
                    log::warn!("no sans-serif face found; drawing labels will be skipped");
                    return None;
                }
            };
            let file = match std::fs::File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("cannot open font {}: {e}", path.display());
                    return None;
                }
            };
            // Font files are never written while mapped.
            match unsafe { Mmap::map(&file) } {
                Ok(map) => {
                    if Face::parse(&map, 0).is_err() {
                        log::warn!("cannot parse font {}", path.display());
                        return None;
                    }
                    log::debug!("label font: {}", path.display());
                    Some(map)
                }
                Err(e) => {
                    log::warn!("cannot map font {}: {e}", path.display());
                    None
                }
            }
        })
        .as_deref()
}

/// Collects glyph outlines into a pixel-space path. Font outlines are
/// y-up, the raster surface is y-down, hence the negated vertical scale.
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder
            .move_to(self.origin_x + x * self.scale, self.origin_y - y * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder
            .line_to(self.origin_x + x * self.scale, self.origin_y - y * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.origin_x + x1 * self.scale,
            self.origin_y - y1 * self.scale,
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.origin_x + x1 * self.scale,
            self.origin_y - y1 * self.scale,
            self.origin_x + x2 * self.scale,
            self.origin_y - y2 * self.scale,
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Advance width of `text` at `font_size` pixels.
pub fn text_width(font_data: &[u8], text: &str, font_size: f64) -> f64 {
    let Ok(face) = Face::parse(font_data, 0) else {
        return 0.0;
    };
    let upem = face.units_per_em().max(1) as f64;
    let scale = font_size / upem;

    text.chars()
        .map(|ch| match face.glyph_index(ch) {
            Some(gid) => {
                let adv = face.glyph_hor_advance(gid).unwrap_or(0) as f64 * scale;
                if adv > 0.0 { adv } else { font_size * 0.5 }
            }
            None => font_size * 0.5,
        })
        .sum()
}

/// Build one combined outline path for `text`, horizontally centered on
/// `anchor_x` with the em-box middle aligned on `anchor_y`.
pub fn centered_text_path(
    font_data: &[u8],
    text: &str,
    font_size: f64,
    anchor_x: f64,
    anchor_y: f64,
) -> Option<Path> {
    let face = Face::parse(font_data, 0).ok()?;
    let upem = face.units_per_em().max(1) as f64;
    let scale = font_size / upem;

    let total = text_width(font_data, text, font_size);
    let mut pen_x = anchor_x - total * 0.5;
    // Middle alignment: shift the baseline so the ascender/descender midpoint
    // lands on the anchor.
    let baseline_y = anchor_y + (face.ascender() as f64 + face.descender() as f64) * 0.5 * scale;

    let mut glyphs = GlyphPathBuilder {
        builder: PathBuilder::new(),
        origin_x: 0.0,
        origin_y: 0.0,
        scale: scale as f32,
    };

    for ch in text.chars() {
        let Some(gid) = face.glyph_index(ch) else {
            pen_x += font_size * 0.5;
            continue;
        };
        glyphs.origin_x = pen_x as f32;
        glyphs.origin_y = baseline_y as f32;
        let _ = face.outline_glyph(GlyphId(gid.0), &mut glyphs);
        let adv = face.glyph_hor_advance(gid).unwrap_or(0) as f64 * scale;
        pen_x += if adv > 0.0 { adv } else { font_size * 0.5 };
    }

    glyphs.builder.finish()
}
