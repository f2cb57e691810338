//! Input translation: pointer, touch and mouse events in client coordinates
//! become `begin` / `extend` / `end` calls in surface coordinates.

use crate::errors::{AppError, AppResult};
use crate::signature::SignatureCapture;
use crate::signature::surface::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the surface is displayed, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a client position into backing pixels:
    /// `surface_x = (x - left) * (backing_width / displayed_width)`.
    ///
    /// A zero-sized display axis maps 1:1.
    pub fn to_surface(&self, x: f32, y: f32, backing_width: u32, backing_height: u32) -> Point {
        let sx = scale(backing_width, self.width);
        let sy = scale(backing_height, self.height);
        Point::new((x - self.left) * sx, (y - self.top) * sy)
    }
}

fn scale(backing: u32, displayed: f32) -> f32 {
    if displayed > 0.0 {
        backing as f32 / displayed
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

/// One raw input event. `x`/`y` are client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerCancel,
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp,
    MouseLeave,
}

/// What an event asks of the pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadAction {
    Begin(Point),
    Extend(Point),
    End,
    Ignore,
}

impl InputEvent {
    /// Resolve the event against the display rect and backing size.
    ///
    /// Touch events use the first touch point; a touch event without one is
    /// ignored.
    pub fn action(&self, rect: &ClientRect, backing_width: u32, backing_height: u32) -> PadAction {
        let at = |x: f32, y: f32| rect.to_surface(x, y, backing_width, backing_height);

        match self {
            InputEvent::PointerDown { x, y } | InputEvent::MouseDown { x, y } => {
                PadAction::Begin(at(*x, *y))
            }
            InputEvent::PointerMove { x, y } | InputEvent::MouseMove { x, y } => {
                PadAction::Extend(at(*x, *y))
            }
            InputEvent::TouchStart { touches } => match touches.first() {
                Some(t) => PadAction::Begin(at(t.x, t.y)),
                None => PadAction::Ignore,
            },
            InputEvent::TouchMove { touches } => match touches.first() {
                Some(t) => PadAction::Extend(at(t.x, t.y)),
                None => PadAction::Ignore,
            },
            InputEvent::PointerUp
            | InputEvent::PointerCancel
            | InputEvent::TouchEnd
            | InputEvent::MouseUp
            | InputEvent::MouseLeave => PadAction::End,
        }
    }
}

/// Feed one event to a pad.
pub fn dispatch(pad: &mut dyn SignatureCapture, rect: &ClientRect, event: &InputEvent) {
    let (w, h) = (pad.surface().width(), pad.surface().height());
    match event.action(rect, w, h) {
        PadAction::Begin(p) => pad.begin(p),
        PadAction::Extend(p) => pad.extend(p),
        PadAction::End => pad.end(),
        PadAction::Ignore => {}
    }
}

/// A recorded drawing session: the display rect plus the events in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureScript {
    pub rect: ClientRect,
    pub events: Vec<InputEvent>,
}

impl SignatureScript {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::SignatureScript(e.to_string()))
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::SignatureScript(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Replay every event into `pad`.
    pub fn replay(&self, pad: &mut dyn SignatureCapture) {
        for event in &self.events {
            dispatch(pad, &self.rect, event);
        }
    }
}
