//! Window placement and pointer-driven dragging

use crate::types::{Point, StackOrder};
use crate::window::kind::WindowKind;
use serde::{Deserialize, Serialize};

pub const WINDOW_WIDTH: f64 = 600.0;
pub const WINDOW_HEIGHT: f64 = 400.0;
pub const TRACKER_WIDTH: f64 = 300.0;
const CASCADE_STEP: f64 = 7.0;

/// Desktop area windows are placed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Position and size of a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    /// Initial placement. The clue tracker docks top-right; everything else
    /// opens near the centre, cascaded by stack order.
    pub fn initial(kind: &WindowKind, viewport: Viewport, stack_order: StackOrder) -> Self {
        match kind {
            WindowKind::ClueTracker => Geometry {
                origin: Point::new(viewport.width - (TRACKER_WIDTH + 20.0), 20.0),
                width: TRACKER_WIDTH,
                height: WINDOW_HEIGHT,
            },
            _ => {
                let cascade = (stack_order % 3) as f64 * CASCADE_STEP;
                Geometry {
                    origin: Point::new(
                        viewport.width / 2.0 - WINDOW_WIDTH / 2.0 + cascade,
                        viewport.height / 2.0 - WINDOW_HEIGHT / 2.0 + cascade,
                    ),
                    width: WINDOW_WIDTH,
                    height: WINDOW_HEIGHT,
                }
            }
        }
    }
}

/// Captured at pointer-down on the title bar, dropped at pointer-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pointer_start: Point,
    origin_start: Point,
}

impl DragState {
    pub fn begin(pointer: Point, origin: Point) -> Self {
        Self {
            pointer_start: pointer,
            origin_start: origin,
        }
    }

    /// Window origin for the current pointer position
    pub fn origin_for(&self, pointer: Point) -> Point {
        Point::new(
            self.origin_start.x + (pointer.x - self.pointer_start.x),
            self.origin_start.y + (pointer.y - self.pointer_start.y),
        )
    }
}
