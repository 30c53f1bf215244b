//! Canvas viewport: zoom, pan and the transform derived from them.
//!
//! The viewport holds view-only state. Nothing here touches the document;
//! the controller decides when a document event (focus, slide change)
//! should reset the view.
//!
//! Coordinates follow `screen = canvas * zoom + pan`.

use crate::config::EditorConfig;
use crate::drag::{DragGesture, DragTarget};
use crate::grid::generate_grid_commands;
use crate::slide::Point;
use slint::platform::PointerEventButton;

/// Transform to apply to the canvas when rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    /// Whether the renderer may animate towards this transform. Off while a
    /// pan gesture is running so the canvas tracks the pointer directly.
    pub animate: bool,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        animate: true,
    };
}

/// Only the secondary and auxiliary buttons pan; the primary button is
/// left to item selection.
pub fn is_pan_button(button: PointerEventButton) -> bool {
    matches!(button, PointerEventButton::Right | PointerEventButton::Middle)
}

#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f32,
    pan: Point,
    min_zoom: f32,
    max_zoom: f32,
    zoom_step: f32,
    gesture: DragGesture,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Viewport {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ORIGIN,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
            gesture: DragGesture::Idle,
        }
        .with_current_zoom_clamped()
    }

    fn with_current_zoom_clamped(mut self) -> Self {
        self.zoom = self.clamp(self.zoom);
        self
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Change the allowed zoom range. An inverted range is swapped. The
    /// current zoom is re-clamped.
    pub fn set_zoom_range(&mut self, min: f32, max: f32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_zoom = min;
        self.max_zoom = max;
        self.zoom = self.clamp(self.zoom);
    }

    fn clamp(&self, level: f32) -> f32 {
        if level.is_nan() {
            return self.zoom.clamp(self.min_zoom, self.max_zoom);
        }
        level.clamp(self.min_zoom, self.max_zoom)
    }

    // === Zoom ===

    /// Set the zoom level, silently clamped to the configured range.
    /// Returns the level actually applied.
    pub fn set_zoom(&mut self, level: f32) -> f32 {
        self.zoom = self.clamp(level);
        self.zoom
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_zoom(self.zoom + self.zoom_step)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_zoom(self.zoom - self.zoom_step)
    }

    pub fn reset_zoom(&mut self) -> f32 {
        self.set_zoom(1.0)
    }

    // === Pan ===

    pub fn set_pan(&mut self, x: f32, y: f32) {
        self.pan = Point::new(x, y);
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan = self.pan.offset(dx, dy);
    }

    /// Back to the origin, e.g. when content gains focus or another slide
    /// is selected. Zoom is kept.
    pub fn reset_pan(&mut self) {
        self.pan = Point::ORIGIN;
    }

    // === Pan gesture ===

    /// Pointer pressed on the canvas background. Starts a pan only for the
    /// pan buttons.
    pub fn pointer_down(&mut self, button: PointerEventButton, x: f32, y: f32) -> bool {
        if !is_pan_button(button) {
            return false;
        }
        self.gesture.begin(DragTarget::Canvas, x, y)
    }

    /// Pointer moved. While panning the offset follows the pointer.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        match self.gesture.update(x, y) {
            Some((dx, dy)) => {
                self.pan_by(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Pointer released. Returns the total pan of the gesture, if one ran.
    pub fn pointer_up(&mut self) -> Option<(f32, f32)> {
        self.gesture.end().map(|commit| (commit.dx, commit.dy))
    }

    pub fn is_panning(&self) -> bool {
        self.gesture.is_dragging()
    }

    // === Transform ===

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.zoom,
            translate_x: self.pan.x,
            translate_y: self.pan.y,
            animate: !self.is_panning(),
        }
    }

    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(canvas.x * self.zoom + self.pan.x, canvas.y * self.zoom + self.pan.y)
    }

    /// Convert a pointer delta from screen pixels to canvas units.
    pub fn screen_delta_to_canvas(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx / self.zoom, dy / self.zoom)
    }

    /// Grid overlay path for a canvas of the given size.
    pub fn grid_commands(&self, width: f32, height: f32, spacing: f32) -> String {
        generate_grid_commands(width, height, self.zoom, self.pan.x, self.pan.y, spacing)
    }
}
