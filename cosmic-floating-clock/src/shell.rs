// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::{Point, Size, Vector};
use cosmic_floating_clock_config::{DEFAULT_OPACITY, MIN_OPACITY};

/// Position and opacity of the clock window, plus an in-progress drag.
///
/// `position` is where the window actually is, as last reported by the
/// windowing system. It is `None` until a report arrives, and some
/// compositors never send one.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    drag_origin: Option<Point>,
    position: Option<Point>,
    opacity: f32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new(DEFAULT_OPACITY)
    }
}

impl WindowState {
    pub fn new(opacity: f32) -> Self {
        Self {
            drag_origin: None,
            position: None,
            opacity,
        }
    }

    /// Default top-left corner: a quarter of the way into the screen.
    pub fn configure(screen: Size) -> Point {
        Point::new((screen.width / 4.0).floor(), (screen.height / 4.0).floor())
    }

    /// Record where the window really is.
    pub fn moved_to(&mut self, position: Point) {
        self.position = Some(position);
    }

    /// Remember where, inside the window, the pointer grabbed it.
    ///
    /// Returns `false` when the window position is unknown, in which case the
    /// caller should hand the drag to the compositor.
    pub fn start_move(&mut self, pointer: Point) -> bool {
        self.drag_origin = Some(pointer);
        self.position.is_some()
    }

    /// Target top-left corner for a pointer motion while dragging.
    ///
    /// `pointer` is relative to the window at its last reported position, so
    /// motion events that arrive before a pending move is applied still give
    /// the same target. Returns `None` when not dragging or when the window
    /// position is unknown.
    pub fn on_move(&self, pointer: Point) -> Option<Point> {
        let origin = self.drag_origin?;
        let position = self.position?;
        Some(position + Vector::new(pointer.x - origin.x, pointer.y - origin.y))
    }

    pub fn stop_move(&mut self) {
        self.drag_origin = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn set_transparency(&mut self, value: f32) {
        debug_assert!(
            (MIN_OPACITY..=1.0).contains(&value),
            "opacity {value} out of range"
        );
        self.opacity = value;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}
