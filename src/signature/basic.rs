use crate::signature::surface::{Point, Surface};
use crate::signature::{PenStyle, SignatureCapture};

/// Self-contained pad: each `extend` strokes a straight, fixed-width segment
/// from the previous point.
#[derive(Debug, Clone)]
pub struct BasicPad {
    surface: Surface,
    style: PenStyle,
    drawing: bool,
    has_stroke: bool,
    cursor: Option<Point>,
}

impl BasicPad {
    pub fn new(width: u32, height: u32, style: PenStyle) -> Self {
        Self {
            surface: Surface::with_background(width, height, style.background),
            style,
            drawing: false,
            has_stroke: false,
            cursor: None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl SignatureCapture for BasicPad {
    fn begin(&mut self, p: Point) {
        self.drawing = true;
        self.has_stroke = true;
        self.cursor = Some(p);
    }

    fn extend(&mut self, p: Point) {
        if !self.drawing {
            return;
        }
        if let Some(prev) = self.cursor {
            self.surface
                .stroke_segment(prev, p, self.style.width, self.style.ink);
        }
        self.cursor = Some(p);
    }

    fn end(&mut self) {
        self.drawing = false;
    }

    fn clear(&mut self) {
        self.surface.clear();
        self.has_stroke = false;
    }

    fn is_empty(&self) -> bool {
        !self.has_stroke
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
