use kurbo::{Affine, BezPath, Point, Rect, Shape, Vec2};

use crate::foundation::core::Rgba8;

const PATH_TOLERANCE: f64 = 0.1;

/// Drawing target handed to children and custom decorations.
///
/// Coordinates are local: `(0, 0)` maps to `origin` in container space. Each call sets its
/// own paint and transform on the underlying rasterizer, so children cannot leak state into
/// each other.
pub struct Surface<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    origin: Vec2,
}

impl<'a> Surface<'a> {
    pub(crate) fn new(ctx: &'a mut vello_cpu::RenderContext, origin: Vec2) -> Self {
        Self { ctx, origin }
    }

    /// Container-space position of the local origin.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.prepare(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Fill an arbitrary path (non-zero winding).
    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.prepare(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        let path = kurbo::Circle::new(center, radius).to_path(PATH_TOLERANCE);
        self.fill_path(&path, color);
    }

    /// Stroke a path with a fixed line width.
    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        self.prepare(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn prepare(&mut self, color: Rgba8) {
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate(self.origin)));
        self.ctx.set_paint(color.to_cpu());
    }
}

/// Custom hub content drawn in place of a flat inner circle.
pub trait Drawable {
    /// Draw into `bounds`, given in container coordinates.
    fn draw(&self, surface: &mut Surface<'_>, bounds: Rect);
}

/// What is painted at the center of the ring, on top of all children.
#[derive(Default)]
pub enum InnerDecoration {
    /// Nothing.
    #[default]
    None,
    /// A filled circle of the inner radius.
    FlatColor(Rgba8),
    /// Caller-supplied content drawn into the hub's bounding square.
    Custom(Box<dyn Drawable>),
}

impl InnerDecoration {
    /// Decoration implied by an optional hub color.
    pub fn from_color(color: Option<Rgba8>) -> Self {
        color.map_or(Self::None, Self::FlatColor)
    }
}

impl std::fmt::Debug for InnerDecoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::FlatColor(c) => f.debug_tuple("FlatColor").field(c).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

pub(crate) fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
