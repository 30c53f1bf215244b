use crate::slide::Point;

/// Round `value` to the nearest multiple of `unit`.
///
/// A non-positive or non-finite `unit` disables snapping.
pub fn snap_to_grid(value: f32, unit: f32) -> f32 {
    if !(unit.is_finite() && unit > 0.0) {
        return value;
    }
    (value / unit).round() * unit
}

/// Snap both axes of `point` to the grid.
pub fn snap_point(point: Point, unit: f32) -> Point {
    Point::new(snap_to_grid(point.x, unit), snap_to_grid(point.y, unit))
}

/// Final position of an element dropped after moving by `(dx, dy)`.
///
/// Snapping happens once, on drop, against the raw sum.
pub fn snapped_drop_position(current: Point, dx: f32, dy: f32, unit: f32) -> Point {
    snap_point(current.offset(dx, dy), unit)
}

/// SVG path for the canvas grid overlay at the given zoom and pan.
///
/// Lines are `spacing * zoom` apart and shifted by the pan offset modulo
/// that distance, so the grid appears to extend forever. Vertical lines
/// come first, e.g. `"M 24 0 L 24 600 M 48 0 L 48 600 ... M 0 24 L 800 24"`.
/// Below 4px between lines nothing is drawn. A non-finite or negative canvas,
/// or one that needs more than 4096 lines per axis, also yields no path.
pub fn generate_grid_commands(
    width: f32,
    height: f32,
    zoom: f32,
    pan_x: f32,
    pan_y: f32,
    spacing: f32,
) -> String {
    let step = spacing * zoom;
    if !step.is_finite() || step < MIN_OVERLAY_SPACING {
        return String::new();
    }
    let finite = [width, height, pan_x, pan_y].iter().all(|v| v.is_finite());
    if !finite || width < 0.0 || height < 0.0 {
        return String::new();
    }
    if width.max(height) / step > MAX_OVERLAY_LINES {
        return String::new();
    }

    let mut segments = Vec::new();
    for x in line_positions(pan_x, width, step) {
        segments.push(format!("M {x} 0 L {x} {height}"));
    }
    for y in line_positions(pan_y, height, step) {
        segments.push(format!("M 0 {y} L {width} {y}"));
    }
    segments.join(" ")
}

const MIN_OVERLAY_SPACING: f32 = 4.0;
const MAX_OVERLAY_LINES: f32 = 4096.0;

/// Positions from `pan mod step` up to one step past `extent`.
fn line_positions(pan: f32, extent: f32, step: f32) -> impl Iterator<Item = f32> {
    std::iter::successors(Some(pan.rem_euclid(step)), move |pos| Some(pos + step))
        .take_while(move |pos| *pos < extent + step)
}
