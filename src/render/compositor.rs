use kurbo::{Affine, BezPath, Point, Rect, Shape, Size, Vec2};

use crate::config::model::ClipStrategy;
use crate::foundation::{
    core::{Canvas, Rgba8},
    error::CircleResult,
};
use crate::geometry::{
    angles::Slice,
    circle::{point_on_circle, wedge_path},
};
use crate::layout::{measure::LayoutChild, state::SliceEntry};
use crate::render::{
    buffers::OffscreenBuffers,
    composite::{self, PixelRect},
    surface::{InnerDecoration, Surface, affine_to_cpu, bezpath_to_cpu, rect_to_cpu},
};

/// A child scheduled for drawing together with its layout result.
#[derive(Clone, Copy)]
pub(crate) struct DrawItem<'a> {
    pub(crate) child: &'a dyn LayoutChild,
    pub(crate) entry: &'a SliceEntry,
}

/// Ring geometry and overlay styling for one pie-mode frame.
pub(crate) struct PieStyle<'a> {
    pub(crate) center: Point,
    /// Wedges and dividers extend to this radius.
    pub(crate) outer_radius: f64,
    pub(crate) inner_radius: f64,
    pub(crate) divider_width: f64,
    pub(crate) divider_color: Rgba8,
    pub(crate) decoration: &'a InnerDecoration,
    pub(crate) clip: ClipStrategy,
}

/// Rasterizer plus the two scratch pixmaps, borrowed apart from the cached frame.
pub(crate) struct Scratch<'a> {
    canvas: Canvas,
    ctx: &'a mut vello_cpu::RenderContext,
    src: &'a mut vello_cpu::Pixmap,
    dst: &'a mut vello_cpu::Pixmap,
}

/// Split a buffer set into scratch space and the cached frame pixmap.
pub(crate) fn split(buffers: &mut OffscreenBuffers) -> (Scratch<'_>, &mut vello_cpu::Pixmap) {
    let OffscreenBuffers {
        canvas,
        src,
        dst,
        frame,
        ctx,
    } = buffers;
    (
        Scratch {
            canvas: *canvas,
            ctx,
            src,
            dst,
        },
        frame,
    )
}

fn begin(ctx: &mut vello_cpu::RenderContext) {
    ctx.reset();
    ctx.set_transform(affine_to_cpu(Affine::IDENTITY));
}

fn finish(ctx: &mut vello_cpu::RenderContext, into: &mut vello_cpu::Pixmap) {
    composite::clear(into.data_as_u8_slice_mut());
    ctx.flush();
    ctx.render_to_pixmap(into);
}

fn origin_of(entry: &SliceEntry) -> Vec2 {
    entry.bounds.origin().to_vec2()
}

/// Fill `target` with the optional background color (premultiplied), or clear it.
pub(crate) fn paint_background(target: &mut [u8], background: Option<Rgba8>) {
    match background {
        Some(color) => composite::fill(target, color.premultiplied()),
        None => composite::clear(target),
    }
}

/// Linear-mode drawing: every child at its bounds, unclipped, in one rasterization pass.
pub(crate) fn draw_plain(
    scratch: &mut Scratch<'_>,
    target: &mut [u8],
    background: Option<Rgba8>,
    items: &[DrawItem<'_>],
) -> CircleResult<()> {
    begin(scratch.ctx);
    if let Some(color) = background {
        scratch.ctx.set_paint(color.to_cpu());
        scratch
            .ctx
            .fill_rect(&rect_to_cpu(Rect::from_origin_size(Point::ZERO, scratch.canvas.to_size())));
    }
    for item in items {
        let mut surface = Surface::new(scratch.ctx, origin_of(item.entry));
        item.child.draw(&mut surface);
    }
    finish(scratch.ctx, scratch.src);
    composite::over_in_place(target, scratch.src.data_as_u8_slice())
}

fn span_of(item: &DrawItem<'_>, canvas: Canvas) -> PixelRect {
    PixelRect::covering(item.entry.bounds, canvas)
}

/// Composite each item onto `target`, restricted to its wedge.
pub(crate) fn compose_wedges(
    scratch: &mut Scratch<'_>,
    target: &mut [u8],
    items: &[DrawItem<'_>],
    style: &PieStyle<'_>,
) -> CircleResult<()> {
    let full = PixelRect::full(scratch.canvas);
    compose_within(scratch, target, items, style, full)
}

/// Rebuild `region` of the cached frame from scratch: background first, then every item
/// whose bounds reach into it, in slice order. Pixels outside `region` are not touched.
pub(crate) fn repaint_region(
    scratch: &mut Scratch<'_>,
    frame: &mut [u8],
    background: Option<Rgba8>,
    items: &[DrawItem<'_>],
    region: PixelRect,
    style: &PieStyle<'_>,
) -> CircleResult<()> {
    let region = region.intersect(PixelRect::full(scratch.canvas));
    if region.is_empty() {
        return Ok(());
    }
    let fill = background.map_or([0; 4], Rgba8::premultiplied);
    composite::fill_rect_in_place(frame, scratch.canvas.width, region, fill)?;

    let canvas = scratch.canvas;
    let overlapping: Vec<DrawItem<'_>> = items
        .iter()
        .copied()
        .filter(|item| span_of(item, canvas).overlaps(region))
        .collect();
    compose_within(scratch, frame, &overlapping, style, region)
}

/// Union of the pixel spans of `items`.
pub(crate) fn covered_region(items: &[DrawItem<'_>], canvas: Canvas) -> PixelRect {
    items
        .iter()
        .fold(PixelRect::default(), |acc, item| acc.union(span_of(item, canvas)))
}

fn compose_within(
    scratch: &mut Scratch<'_>,
    target: &mut [u8],
    items: &[DrawItem<'_>],
    style: &PieStyle<'_>,
    limit: PixelRect,
) -> CircleResult<()> {
    if items.is_empty() || limit.is_empty() {
        return Ok(());
    }
    match style.clip {
        ClipStrategy::Mask => {
            for item in items {
                compose_masked(scratch, target, item, style, limit)?;
            }
            Ok(())
        }
        ClipStrategy::PathClip => compose_path_clipped(scratch, target, items, style, limit),
    }
}

fn compose_masked(
    scratch: &mut Scratch<'_>,
    target: &mut [u8],
    item: &DrawItem<'_>,
    style: &PieStyle<'_>,
    limit: PixelRect,
) -> CircleResult<()> {
    let span = span_of(item, scratch.canvas).intersect(limit);
    if span.is_empty() || item.entry.slice.sweep() <= 0.0 {
        return Ok(());
    }

    begin(scratch.ctx);
    let mut surface = Surface::new(scratch.ctx, origin_of(item.entry));
    item.child.draw(&mut surface);
    finish(scratch.ctx, scratch.src);

    begin(scratch.ctx);
    scratch.ctx.set_paint(Rgba8::BLACK.to_cpu());
    scratch
        .ctx
        .fill_path(&bezpath_to_cpu(&wedge_for(style, &item.entry.slice)));
    finish(scratch.ctx, scratch.dst);

    let stride = scratch.canvas.width;
    composite::src_in_rect_in_place(
        scratch.dst.data_as_u8_slice_mut(),
        scratch.src.data_as_u8_slice(),
        stride,
        span,
    )?;
    composite::over_rect_in_place(target, scratch.dst.data_as_u8_slice(), stride, span)
}

fn compose_path_clipped(
    scratch: &mut Scratch<'_>,
    target: &mut [u8],
    items: &[DrawItem<'_>],
    style: &PieStyle<'_>,
    limit: PixelRect,
) -> CircleResult<()> {
    begin(scratch.ctx);
    for item in items {
        if item.entry.slice.sweep() <= 0.0 || item.entry.bounds.is_zero_area() {
            continue;
        }
        scratch.ctx.set_transform(affine_to_cpu(Affine::IDENTITY));
        scratch
            .ctx
            .push_clip_layer(&bezpath_to_cpu(&wedge_for(style, &item.entry.slice)));
        scratch
            .ctx
            .push_clip_layer(&bezpath_to_cpu(&item.entry.bounds.to_path(0.1)));
        let mut surface = Surface::new(scratch.ctx, origin_of(item.entry));
        item.child.draw(&mut surface);
        scratch.ctx.pop_layer();
        scratch.ctx.pop_layer();
    }
    finish(scratch.ctx, scratch.src);
    composite::over_rect_in_place(target, scratch.src.data_as_u8_slice(), scratch.canvas.width, limit)
}

fn wedge_for(style: &PieStyle<'_>, slice: &Slice) -> BezPath {
    wedge_path(style.center, style.outer_radius, slice)
}

/// Dividers and the hub decoration, drawn fresh on top of `target`.
pub(crate) fn draw_overlay(
    scratch: &mut Scratch<'_>,
    target: &mut [u8],
    slices: &[Slice],
    style: &PieStyle<'_>,
) -> CircleResult<()> {
    let dividers = divider_paths(style, slices);
    if dividers.is_empty() && matches!(style.decoration, InnerDecoration::None) {
        return Ok(());
    }

    begin(scratch.ctx);
    let mut surface = Surface::new(scratch.ctx, Vec2::ZERO);
    for path in &dividers {
        surface.stroke_path(path, style.divider_width, style.divider_color);
    }
    match style.decoration {
        InnerDecoration::None => {}
        InnerDecoration::FlatColor(color) => {
            surface.fill_circle(style.center, style.inner_radius, *color);
        }
        InnerDecoration::Custom(drawable) => {
            let side = 2.0 * style.inner_radius;
            let bounds = Rect::from_center_size(style.center, Size::new(side, side));
            drawable.draw(&mut surface, bounds);
        }
    }
    finish(scratch.ctx, scratch.dst);
    composite::over_in_place(target, scratch.dst.data_as_u8_slice())
}

/// Center-to-rim segments at every slice start plus the last slice's end.
pub(crate) fn divider_paths(style: &PieStyle<'_>, slices: &[Slice]) -> Vec<BezPath> {
    if slices.len() < 2 || style.divider_width.is_nan() || style.divider_width <= 0.0 {
        return Vec::new();
    }
    let spoke = |angle: f64| {
        let mut path = BezPath::new();
        path.move_to(style.center);
        path.line_to(point_on_circle(style.center, style.outer_radius, angle));
        path
    };
    let mut out: Vec<BezPath> = slices.iter().map(|s| spoke(s.start_angle)).collect();
    if let Some(last) = slices.last() {
        out.push(spoke(last.end_angle));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
