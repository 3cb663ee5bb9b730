use kurbo::{Arc, BezPath, Point, Rect, Vec2};

use crate::foundation::math::normalize_degrees;
use crate::geometry::angles::Slice;

const ARC_TOLERANCE: f64 = 0.1;

/// Point at `radius` from `center` along `angle_deg` (y grows downward, so angles turn clockwise).
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        radius * rad.cos() + center.x,
        radius * rad.sin() + center.y,
    )
}

/// Radius of the ring on which child centers are placed.
pub fn effective_radius(width: f64, height: f64, inner_radius: f64) -> f64 {
    (width.min(height) - inner_radius) / 2.0
}

/// Centered square of side `min(width, height)`.
pub fn arc_bounds(width: f64, height: f64) -> Rect {
    let side = width.min(height);
    let x0 = (width - side) / 2.0;
    let y0 = (height - side) / 2.0;
    Rect::new(x0, y0, x0 + side, y0 + side)
}

/// Distance from `center` and angle in `[0, 360)` of `point`.
pub fn polar(center: Point, point: Point) -> (f64, f64) {
    let d = point - center;
    let radius = d.hypot();
    let angle = normalize_degrees(d.y.atan2(d.x).to_degrees());
    (radius, angle)
}

/// Closed wedge: center, arc from `slice.start_angle` to `slice.end_angle`, back to center.
pub fn wedge_path(center: Point, radius: f64, slice: &Slice) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(point_on_circle(center, radius, slice.start_angle));
    let arc = Arc::new(
        center,
        Vec2::new(radius, radius),
        slice.start_angle.to_radians(),
        slice.sweep().to_radians(),
        0.0,
    );
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/circle.rs"]
mod tests;
