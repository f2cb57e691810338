//! Freehand signature capture.
//!
//! Every engine implements [`SignatureCapture`]; the engine is picked once,
//! at startup, through [`SignatureEngine::resolve`].

pub mod basic;
pub mod input;
#[cfg(feature = "smooth")]
pub mod smooth;
pub mod surface;

pub use basic::BasicPad;
pub use input::{ClientRect, InputEvent, PadAction, SignatureScript, TouchPoint};
#[cfg(feature = "smooth")]
pub use smooth::SmoothPad;
pub use surface::{MAX_SURFACE_SIDE, PNG_DATA_URI_PREFIX, Point, Rgba, Surface, decode_data_uri};

use crate::ui::messages::warning;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Capability shared by every signature engine.
///
/// Drawing is immediate: `extend` rasterizes straight into the surface and no
/// vector path is kept once the pen is lifted.
pub trait SignatureCapture {
    /// Pen down at `p`; starts a new open path.
    fn begin(&mut self, p: Point);

    /// Continue the current path to `p`; ignored while the pen is up.
    fn extend(&mut self, p: Point);

    /// Pen up.
    fn end(&mut self);

    /// Wipe the surface and forget every stroke.
    fn clear(&mut self);

    /// True iff nothing was drawn since creation or the last `clear`.
    fn is_empty(&self) -> bool;

    fn surface(&self) -> &Surface;

    /// PNG data URI of the current raster. A blank surface still yields a
    /// valid image, so callers check [`is_empty`](Self::is_empty) first.
    fn export(&self) -> String {
        self.surface().to_data_uri().unwrap_or_default()
    }

    fn export_png(&self) -> Vec<u8> {
        self.surface().encode_png().unwrap_or_default()
    }
}

/// Pen appearance shared by both engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    pub width: f32,
    pub ink: Rgba,
    pub background: Rgba,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            ink: Rgba::BLACK,
            background: Rgba::TRANSPARENT,
        }
    }
}

/// Available engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SignatureEngine {
    /// Velocity-aware curves (needs the `smooth` feature).
    Smooth,
    /// Minimal self-contained pad: straight segments, fixed width.
    Basic,
}

impl SignatureEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureEngine::Smooth => "smooth",
            SignatureEngine::Basic => "basic",
        }
    }

    /// Whether this engine is compiled in.
    pub fn is_available(&self) -> bool {
        match self {
            SignatureEngine::Smooth => cfg!(feature = "smooth"),
            SignatureEngine::Basic => true,
        }
    }

    /// Settle on the engine to use for the whole run, substituting the basic
    /// pad when the requested one is not compiled in.
    pub fn resolve(requested: SignatureEngine) -> SignatureEngine {
        if requested.is_available() {
            requested
        } else {
            warning(format!(
                "Signature engine '{}' is not available, using 'basic'.",
                requested.as_str()
            ));
            SignatureEngine::Basic
        }
    }

    /// Build a fresh pad with a `width` x `height` backing surface.
    pub fn create(&self, width: u32, height: u32, style: PenStyle) -> Box<dyn SignatureCapture> {
        match self {
            #[cfg(feature = "smooth")]
            SignatureEngine::Smooth => Box::new(SmoothPad::new(width, height, style)),
            #[cfg(not(feature = "smooth"))]
            SignatureEngine::Smooth => Box::new(BasicPad::new(width, height, style)),
            SignatureEngine::Basic => Box::new(BasicPad::new(width, height, style)),
        }
    }
}
