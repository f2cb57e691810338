//! Velocity-aware pad in the style of the usual browser signature libraries:
//! quadratic curves through segment midpoints, thinner lines for faster
//! strokes, a dot for a tap.

use crate::signature::surface::{Point, Surface};
use crate::signature::{PenStyle, SignatureCapture};

/// Nominal time between two input events, in milliseconds.
const EVENT_INTERVAL_MS: f32 = 16.0;
const VELOCITY_FILTER_WEIGHT: f32 = 0.7;
/// Points closer than this to the previous one are dropped.
const MIN_DISTANCE: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct SmoothPad {
    surface: Surface,
    style: PenStyle,
    min_width: f32,
    max_width: f32,
    drawing: bool,
    has_stroke: bool,
    moved: bool,
    // last three accepted points of the open stroke
    points: Vec<Point>,
    last_velocity: f32,
    last_width: f32,
}

impl SmoothPad {
    pub fn new(width: u32, height: u32, style: PenStyle) -> Self {
        let min_width = (style.width * 0.25).max(0.5);
        let max_width = (style.width * 1.25).max(min_width);
        Self {
            surface: Surface::with_background(width, height, style.background),
            style,
            min_width,
            max_width,
            drawing: false,
            has_stroke: false,
            moved: false,
            points: Vec::with_capacity(3),
            last_velocity: 0.0,
            last_width: (min_width + max_width) / 2.0,
        }
    }

    pub fn with_width_range(mut self, min_width: f32, max_width: f32) -> Self {
        self.min_width = min_width.max(0.1);
        self.max_width = max_width.max(self.min_width);
        self.last_width = (self.min_width + self.max_width) / 2.0;
        self
    }

    fn stroke_width(&self, velocity: f32) -> f32 {
        (self.max_width / (velocity + 1.0)).max(self.min_width)
    }

    /// Render a quadratic curve as short segments with interpolated width.
    fn draw_curve(&mut self, start: Point, control: Point, end: Point, w0: f32, w1: f32) {
        let length = start.distance_to(control) + control.distance_to(end);
        let steps = (length.ceil() as usize).clamp(1, 256);

        let mut prev = start;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let mt = 1.0 - t;
            let p = Point::new(
                mt * mt * start.x + 2.0 * mt * t * control.x + t * t * end.x,
                mt * mt * start.y + 2.0 * mt * t * control.y + t * t * end.y,
            );
            let w = w0 + (w1 - w0) * t;
            self.surface.stroke_segment(prev, p, w, self.style.ink);
            prev = p;
        }
    }
}

impl SignatureCapture for SmoothPad {
    fn begin(&mut self, p: Point) {
        self.drawing = true;
        self.has_stroke = true;
        self.moved = false;
        self.points.clear();
        self.points.push(p);
        self.last_velocity = 0.0;
        self.last_width = (self.min_width + self.max_width) / 2.0;
    }

    fn extend(&mut self, p: Point) {
        if !self.drawing {
            return;
        }
        let Some(&last) = self.points.last() else {
            return;
        };
        if last.distance_to(p) < MIN_DISTANCE {
            return;
        }

        let raw_velocity = last.distance_to(p) / EVENT_INTERVAL_MS;
        let velocity = VELOCITY_FILTER_WEIGHT * raw_velocity
            + (1.0 - VELOCITY_FILTER_WEIGHT) * self.last_velocity;
        let width = self.stroke_width(velocity);

        self.points.push(p);
        self.moved = true;

        match self.points.as_slice() {
            [p0, p1] => {
                let (p0, p1) = (*p0, *p1);
                let mid = p0.midpoint(p1);
                self.surface
                    .stroke_segment(p0, mid, self.last_width, self.style.ink);
            }
            [.., p0, p1, p2] => {
                let (p0, p1, p2) = (*p0, *p1, *p2);
                self.draw_curve(p0.midpoint(p1), p1, p1.midpoint(p2), self.last_width, width);
                let keep = self.points.len() - 2;
                self.points.drain(..keep);
            }
            _ => {}
        }

        self.last_velocity = velocity;
        self.last_width = width;
    }

    fn end(&mut self) {
        if self.drawing {
            match self.points.as_slice() {
                [only] if !self.moved => {
                    let dot = (self.min_width + self.max_width) / 2.0;
                    self.surface.fill_disc(*only, dot / 2.0, self.style.ink);
                }
                [.., a, b] => {
                    let (a, b) = (*a, *b);
                    self.surface
                        .stroke_segment(a.midpoint(b), b, self.last_width, self.style.ink);
                }
                _ => {}
            }
        }
        self.drawing = false;
        self.points.clear();
    }

    fn clear(&mut self) {
        self.surface.clear();
        self.has_stroke = false;
        self.points.clear();
    }

    fn is_empty(&self) -> bool {
        !self.has_stroke
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
