//! RGBA raster the signature pads draw into, plus PNG / data-URI encoding.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Prefix of every exported signature.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Largest accepted width or height of a surface, in pixels.
pub const MAX_SURFACE_SIDE: u32 = 4096;

/// A point in surface (backing pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    /// Parse `#RRGGBB`, `#RRGGBBAA` or `transparent`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Some(Rgba::TRANSPARENT);
        }

        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
            8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
            _ => None,
        }
    }

    pub fn alpha(&self) -> u8 {
        self.0[3]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == 0 {
            write!(f, "transparent")
        } else if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

/// Drawing surface. Dimensions are at least 1x1.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    background: Rgba,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgba::TRANSPARENT)
    }

    /// Sides are clamped to `1..=MAX_SURFACE_SIDE`.
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Self {
        let width = width.clamp(1, MAX_SURFACE_SIDE);
        let height = height.clamp(1, MAX_SURFACE_SIDE);
        let mut surface = Self {
            width,
            height,
            background,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        surface.clear();
        surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(Rgba(px))
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        let bg = self.background.0;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
    }

    /// True when no pixel differs from the background.
    pub fn is_blank(&self) -> bool {
        let bg = self.background.0;
        self.pixels.chunks_exact(4).all(|px| px == bg)
    }

    /// Number of pixels that differ from the background.
    pub fn inked_pixels(&self) -> usize {
        let bg = self.background.0;
        self.pixels.chunks_exact(4).filter(|px| *px != bg).count()
    }

    /// Paint a segment of the given width with round caps.
    pub fn stroke_segment(&mut self, a: Point, b: Point, width: f32, color: Rgba) {
        let r = (width / 2.0).max(0.25);
        self.paint_capsule(a, b, r, color);
    }

    /// Paint a filled disc.
    pub fn fill_disc(&mut self, center: Point, radius: f32, color: Rgba) {
        self.paint_capsule(center, center, radius.max(0.25), color);
    }

    fn paint_capsule(&mut self, a: Point, b: Point, r: f32, color: Rgba) {
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }

        let min_x = (a.x.min(b.x) - r - 1.0).floor().max(0.0) as i64;
        let min_y = (a.y.min(b.y) - r - 1.0).floor().max(0.0) as i64;
        let max_x = ((a.x.max(b.x) + r + 1.0).ceil() as i64).min(self.width as i64 - 1);
        let max_y = ((a.y.max(b.y) + r + 1.0).ceil() as i64).min(self.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = distance_to_segment(center, a, b);
                let coverage = (r + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x as u32, y as u32, color, coverage);
                }
            }
        }
    }

    /// Source-over blend of `color` scaled by `coverage`.
    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let dst = &mut self.pixels[i..i + 4];

        let sa = color.0[3] as f32 / 255.0 * coverage;
        let da = dst[3] as f32 / 255.0;
        let oa = sa + da * (1.0 - sa);
        if oa <= 0.0 {
            return;
        }

        for c in 0..3 {
            let v = (color.0[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / oa;
            dst[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (oa * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Encode the raster as an RGBA PNG.
    pub fn encode_png(&self) -> AppResult<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder
                .write_header()
                .map_err(|e| AppError::SignatureEncode(e.to_string()))?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|e| AppError::SignatureEncode(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| AppError::SignatureEncode(e.to_string()))?;
        }
        Ok(out)
    }

    /// Encode the raster as a `data:image/png;base64,` URI.
    pub fn to_data_uri(&self) -> AppResult<String> {
        let png = self.encode_png()?;
        Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)))
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 <= f32::EPSILON {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Decode a stored signature back into PNG bytes.
///
/// Accepts a full data URI or bare base64.
pub fn decode_data_uri(data: &str) -> AppResult<Vec<u8>> {
    let payload = match data.split_once(',') {
        Some((_, b64)) => b64,
        None => data,
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::SignatureEncode(format!("Failed to decode base64: {e}")))
}
