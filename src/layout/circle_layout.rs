use kurbo::{Point, Rect, Size, Vec2};

use crate::config::model::{
    ClipStrategy, LayoutConfig, LayoutMode, validate_angle_offset, validate_angle_range,
    validate_divider_width,
};
use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{CircleError, CircleResult},
};
use crate::geometry::{
    angles::{Slice, partition},
    circle::{effective_radius, point_on_circle, polar},
};
use crate::input::{
    event::PointerEvent,
    router::{PointerRouter, PointerTargets, RouteState},
};
use crate::layout::{
    measure::{Constraints, Container, LayoutChild, MeasureSpec},
    params::{ChildId, Dimension, LayoutParams, validate_weight},
    state::{LayoutState, SliceEntry},
};
use crate::render::{
    buffers::{BufferSet, BufferStats},
    cache::{CacheStats, RenderCache},
    composite,
    compositor::{self, DrawItem, PieStyle},
    frame::FrameRGBA,
    surface::InnerDecoration,
};

type TouchHandler = Box<dyn FnMut(&PointerEvent) -> bool>;

struct ChildSlot {
    id: ChildId,
    params: LayoutParams,
    child: Box<dyn LayoutChild>,
    measured: Size,
}

/// Radial container: children share the angle range by weight, are drawn clipped to their
/// wedge and receive pointer input by angle.
///
/// In [`LayoutMode::Normal`] the container behaves like a plain frame: children are still
/// positioned around the ring but draw unclipped and are hit-tested by their rectangles.
///
/// Setters that affect geometry mark the container for re-layout; the next
/// [`Container::draw`] runs the pending pass.
pub struct CircleLayout {
    config: LayoutConfig,
    decoration: InnerDecoration,
    children: Vec<ChildSlot>,
    next_id: u64,
    canvas: Canvas,
    state: LayoutState,
    needs_layout: bool,
    buffers: BufferSet,
    cache: RenderCache,
    router: PointerRouter,
    touch_handler: Option<TouchHandler>,
}

impl CircleLayout {
    /// Build an empty container from a validated configuration.
    pub fn new(config: LayoutConfig) -> CircleResult<Self> {
        config.validate()?;
        Ok(Self {
            decoration: InnerDecoration::from_color(config.inner_circle_color),
            cache: RenderCache::new(config.render_cache),
            config,
            children: Vec::new(),
            next_id: 0,
            canvas: Canvas::default(),
            state: LayoutState::default(),
            needs_layout: true,
            buffers: BufferSet::default(),
            router: PointerRouter::default(),
            touch_handler: None,
        })
    }

    /// Current configuration. Hub content set through
    /// [`CircleLayout::set_inner_decoration`] is not reflected here.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // ---- children ----

    /// Append a child; it takes the next slice clockwise.
    pub fn add_child(
        &mut self,
        child: impl LayoutChild + 'static,
        params: LayoutParams,
    ) -> CircleResult<ChildId> {
        params.validate()?;
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.children.push(ChildSlot {
            id,
            params,
            child: Box::new(child),
            measured: Size::ZERO,
        });
        self.geometry_changed("child added");
        Ok(id)
    }

    /// Detach a child. An active gesture on it is cancelled first.
    pub fn remove_child(&mut self, id: ChildId) -> Option<Box<dyn LayoutChild>> {
        if self.router.target() == Some(id) {
            self.with_router(|router, targets| router.force_cancel(targets));
        }
        let idx = self.children.iter().position(|s| s.id == id)?;
        let slot = self.children.remove(idx);
        self.cache.forget(id);
        self.geometry_changed("child removed");
        Some(slot.child)
    }

    /// Number of attached children, visible or not.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child ids in slice order.
    pub fn child_ids(&self) -> Vec<ChildId> {
        self.children.iter().map(|s| s.id).collect()
    }

    /// Shared access to a child.
    pub fn child(&self, id: ChildId) -> Option<&dyn LayoutChild> {
        self.slot(id).map(|s| s.child.as_ref())
    }

    /// Mutable access to a child; the child is marked dirty for the next frame.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn LayoutChild + 'static)> {
        let slot = self.children.iter_mut().find(|s| s.id == id)?;
        self.cache.mark_dirty(id);
        Some(slot.child.as_mut())
    }

    /// Mark a child's appearance as changed.
    pub fn invalidate_child(&mut self, id: ChildId) {
        if self.slot(id).is_some() {
            self.cache.mark_dirty(id);
        }
    }

    /// Layout params of a child.
    pub fn params(&self, id: ChildId) -> Option<LayoutParams> {
        self.slot(id).map(|s| s.params)
    }

    /// Change a child's share of the angle range.
    pub fn set_weight(&mut self, id: ChildId, weight: f64) -> CircleResult<()> {
        validate_weight(weight)?;
        let slot = self
            .children
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CircleError::validation(format!("unknown {id}")))?;
        slot.params.weight = weight;
        self.needs_layout = true;
        Ok(())
    }

    /// Replace a child's layout params.
    pub fn set_params(&mut self, id: ChildId, params: LayoutParams) -> CircleResult<()> {
        params.validate()?;
        let slot = self
            .children
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CircleError::validation(format!("unknown {id}")))?;
        slot.params = params;
        self.needs_layout = true;
        Ok(())
    }

    /// Ask for a layout pass before the next draw (e.g. after a child's visibility changed).
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    // ---- configuration ----

    /// Current mode.
    pub fn layout_mode(&self) -> LayoutMode {
        self.config.layout_mode
    }

    /// Switch between linear and radial behavior. Cancels any gesture in progress.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.config.layout_mode == mode {
            return;
        }
        self.with_router(|router, targets| router.force_cancel(targets));
        self.config.layout_mode = mode;
        self.geometry_changed("layout mode changed");
    }

    /// Rotation of the first slice start, in degrees.
    pub fn angle_offset(&self) -> f64 {
        self.config.angle_offset
    }

    /// Set the rotation of the first slice start.
    pub fn set_angle_offset(&mut self, offset: f64) -> CircleResult<()> {
        validate_angle_offset(offset)?;
        self.config.angle_offset = offset;
        self.needs_layout = true;
        Ok(())
    }

    /// Total sweep, in degrees.
    pub fn angle_range(&self) -> f64 {
        self.config.angle_range
    }

    /// Set the total sweep; must lie in `(0, 360]`.
    pub fn set_angle_range(&mut self, range: f64) -> CircleResult<()> {
        validate_angle_range(range)?;
        self.config.angle_range = range;
        self.needs_layout = true;
        Ok(())
    }

    /// Hub radius in pixels.
    pub fn inner_radius(&self) -> u32 {
        self.config.inner_radius
    }

    /// Set the hub radius; also moves the ring children sit on.
    pub fn set_inner_radius(&mut self, radius: u32) {
        self.config.inner_radius = radius;
        self.geometry_changed("inner radius changed");
    }

    /// Set the divider stroke width; `0` hides dividers.
    pub fn set_divider_width(&mut self, width: f64) -> CircleResult<()> {
        validate_divider_width(width)?;
        self.config.divider_width = width;
        self.cache.invalidate("divider changed");
        Ok(())
    }

    /// Set the divider color.
    pub fn set_divider_color(&mut self, color: Rgba8) {
        self.config.divider_color = color;
        self.cache.invalidate("divider changed");
    }

    /// Use a flat hub color, or no hub with `None`.
    pub fn set_inner_circle_color(&mut self, color: Option<Rgba8>) {
        self.config.inner_circle_color = color;
        self.set_inner_decoration(InnerDecoration::from_color(color));
    }

    /// Replace the hub decoration.
    pub fn set_inner_decoration(&mut self, decoration: InnerDecoration) {
        self.decoration = decoration;
        self.cache.invalidate("decoration changed");
    }

    /// Current hub decoration.
    pub fn inner_decoration(&self) -> &InnerDecoration {
        &self.decoration
    }

    /// Set the fill painted beneath the children.
    pub fn set_background(&mut self, background: Option<Rgba8>) {
        self.config.background = background;
        self.cache.invalidate("background changed");
    }

    /// Choose how children are clipped to their wedges.
    pub fn set_clip_strategy(&mut self, clip: ClipStrategy) {
        self.config.clip = clip;
        self.cache.invalidate("clip strategy changed");
    }

    /// Enable or disable frame reuse.
    pub fn set_render_cache_enabled(&mut self, enabled: bool) {
        self.config.render_cache = enabled;
        self.cache.set_enabled(enabled);
    }

    /// Install the container's own pointer handler, used for misses and declined downs.
    pub fn set_touch_handler(&mut self, handler: impl FnMut(&PointerEvent) -> bool + 'static) {
        self.touch_handler = Some(Box::new(handler));
    }

    /// Remove the container's own pointer handler; misses then report `false`.
    pub fn clear_touch_handler(&mut self) {
        self.touch_handler = None;
    }

    // ---- queries ----

    /// Measured size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Radius of the ring children are centered on: `(min(w, h) - inner_radius) / 2`.
    pub fn radius(&self) -> f64 {
        effective_radius(
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
            f64::from(self.config.inner_radius),
        )
    }

    /// Geometric center, `(w / 2, h / 2)`.
    pub fn center(&self) -> Point {
        self.canvas.center()
    }

    /// Result of the last layout pass.
    pub fn layout_state(&self) -> &LayoutState {
        &self.state
    }

    /// Slices of visible children from the last layout pass.
    pub fn slices(&self) -> Vec<Slice> {
        self.state.slices()
    }

    /// Slice of one child from the last layout pass.
    pub fn slice_of(&self, id: ChildId) -> Option<Slice> {
        self.state.entry(id).map(|e| e.slice)
    }

    /// Bounds of one child from the last layout pass.
    pub fn child_bounds(&self, id: ChildId) -> Option<Rect> {
        self.state.entry(id).map(|e| e.bounds)
    }

    /// Child a down event at `point` would be offered to.
    pub fn hit_test(&self, point: Point) -> Option<ChildId> {
        hit_child(
            &self.state,
            &self.children,
            self.config.layout_mode,
            f64::from(self.config.inner_radius),
            point,
        )
    }

    /// Gesture routing state.
    pub fn route_state(&self) -> RouteState {
        self.router.state()
    }

    /// Offscreen buffer counters.
    pub fn buffer_stats(&self) -> BufferStats {
        self.buffers.stats()
    }

    /// Frame cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Whether offscreen buffers are currently allocated.
    pub fn has_buffers(&self) -> bool {
        self.buffers.is_allocated()
    }

    /// Tear down offscreen buffers; draws are skipped until the next measure.
    pub fn release_buffers(&mut self) {
        self.buffers.release();
        self.cache.invalidate("buffers released");
    }

    /// Draw into a fresh transparent pixmap of the measured size.
    pub fn render_frame(&mut self) -> CircleResult<FrameRGBA> {
        if self.canvas.is_empty() {
            return Err(CircleError::render("container has no size; measure it first"));
        }
        let (Ok(width), Ok(height)) = (
            u16::try_from(self.canvas.width),
            u16::try_from(self.canvas.height),
        ) else {
            return Err(CircleError::render(format!(
                "canvas {}x{} exceeds rasterizer limits",
                self.canvas.width, self.canvas.height
            )));
        };
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        Container::draw(self, &mut pixmap)?;
        Ok(FrameRGBA::from_pixmap(&pixmap))
    }

    // ---- internals ----

    fn slot(&self, id: ChildId) -> Option<&ChildSlot> {
        self.children.iter().find(|s| s.id == id)
    }

    fn geometry_changed(&mut self, reason: &'static str) {
        self.needs_layout = true;
        self.cache.invalidate(reason);
    }

    fn with_router<R>(
        &mut self,
        f: impl FnOnce(&mut PointerRouter, &mut dyn PointerTargets) -> R,
    ) -> R {
        let mut targets = Targets {
            state: &self.state,
            children: &mut self.children,
            mode: self.config.layout_mode,
            inner_radius: f64::from(self.config.inner_radius),
            handler: &mut self.touch_handler,
        };
        f(&mut self.router, &mut targets)
    }

    fn place(&self, slot: &ChildSlot, slice: &Slice, count: usize, radius: f64) -> Rect {
        let width = i64::from(self.canvas.width);
        let height = i64::from(self.canvas.height);
        let (cx, cy) = if count > 1 {
            let p = point_on_circle(Point::ZERO, radius, slice.center_angle());
            (p.x.trunc() as i64 + width / 2, p.y.trunc() as i64 + height / 2)
        } else {
            (width / 2, height / 2)
        };

        let span = |dim: Dimension, center: i64, measured: f64, full: i64| -> (i64, i64) {
            match dim {
                Dimension::MatchParent => (0, full),
                Dimension::Wrap => {
                    let size = i64::from(to_px(measured));
                    let start = center - size / 2;
                    (start, start + size)
                }
            }
        };
        let (left, right) = span(slot.params.width, cx, slot.measured.width, width);
        let (top, bottom) = span(slot.params.height, cy, slot.measured.height, height);
        Rect::new(left as f64, top as f64, right as f64, bottom as f64)
    }

    fn draw_frame(&mut self, target: &mut vello_cpu::Pixmap) -> CircleResult<()> {
        let Some(buffers) = self.buffers.get_mut() else {
            tracing::trace!("draw skipped: no offscreen buffers");
            self.cache.record_skip();
            return Ok(());
        };

        let items: Vec<DrawItem<'_>> = self
            .state
            .entries
            .iter()
            .filter_map(|entry| {
                let slot = self.children.iter().find(|s| s.id == entry.id)?;
                slot.child.is_visible().then_some(DrawItem {
                    child: slot.child.as_ref(),
                    entry,
                })
            })
            .collect();

        let (mut scratch, frame) = compositor::split(buffers);
        let target_bytes = target.data_as_u8_slice_mut();

        if self.config.layout_mode == LayoutMode::Normal {
            return compositor::draw_plain(&mut scratch, target_bytes, self.config.background, &items);
        }

        let style = PieStyle {
            center: self.canvas.center(),
            outer_radius: self.canvas.min_dimension() / 2.0,
            inner_radius: f64::from(self.config.inner_radius),
            divider_width: self.config.divider_width,
            divider_color: self.config.divider_color,
            decoration: &self.decoration,
            clip: self.config.clip,
        };

        if self.cache.can_reuse(items.len()) {
            let active = self.router.target();
            let stale: Vec<DrawItem<'_>> = items
                .iter()
                .copied()
                .filter(|item| self.cache.is_dirty(item.entry.id) || active == Some(item.entry.id))
                .collect();
            let region = compositor::covered_region(&stale, self.canvas);
            compositor::repaint_region(
                &mut scratch,
                frame.data_as_u8_slice_mut(),
                self.config.background,
                &items,
                region,
                &style,
            )?;
            composite::over_in_place(target_bytes, frame.data_as_u8_slice())?;
            self.cache.commit_incremental();
        } else {
            self.cache.invalidate("full recomposition");
            let frame_bytes = frame.data_as_u8_slice_mut();
            compositor::paint_background(frame_bytes, self.config.background);
            compositor::compose_wedges(&mut scratch, frame_bytes, &items, &style)?;
            composite::over_in_place(target_bytes, frame.data_as_u8_slice())?;
            self.cache.commit_full();
        }

        compositor::draw_overlay(&mut scratch, target_bytes, &self.state.slices(), &style)
    }
}

impl Container for CircleLayout {
    #[tracing::instrument(skip(self), fields(children = self.children.len()))]
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let mut max_width = 0u32;
        let mut max_height = 0u32;
        for slot in self.children.iter_mut().filter(|s| s.child.is_visible()) {
            let constraints = Constraints::for_child(width, height, &slot.params);
            slot.measured = slot.child.measure(constraints);
            max_width = max_width.max(to_px(slot.measured.width));
            max_height = max_height.max(to_px(slot.measured.height));
        }
        max_width = max_width.max(self.config.min_width);
        max_height = max_height.max(self.config.min_height);

        let canvas = Canvas::new(width.resolve(max_width), height.resolve(max_height));
        if canvas != self.canvas {
            tracing::debug!(width = canvas.width, height = canvas.height, "container resized");
            self.canvas = canvas;
            self.needs_layout = true;
        }
        if self.buffers.ensure(canvas) {
            self.cache.invalidate("buffers reallocated");
        }
        canvas.to_size()
    }

    #[tracing::instrument(skip(self), fields(children = self.children.len()))]
    fn layout(&mut self) {
        let visible: Vec<usize> = (0..self.children.len())
            .filter(|&i| self.children[i].child.is_visible())
            .collect();
        let weights: Vec<f64> = visible
            .iter()
            .map(|&i| self.children[i].params.weight)
            .collect();
        let slices = partition(self.config.angle_offset, self.config.angle_range, &weights);
        let radius = self.radius();

        let mut entries = Vec::with_capacity(visible.len());
        for (&i, slice) in visible.iter().zip(&slices) {
            let bounds = self.place(&self.children[i], slice, visible.len(), radius);
            let slot = &mut self.children[i];
            slot.child.on_layout(bounds);
            entries.push(SliceEntry {
                id: slot.id,
                slice: *slice,
                bounds,
            });
        }

        let next = LayoutState {
            canvas: self.canvas,
            entries,
        };
        if next != self.state {
            self.cache.invalidate("layout changed");
        }
        self.state = next;
        self.needs_layout = false;
    }

    fn draw(&mut self, target: &mut vello_cpu::Pixmap) -> CircleResult<()> {
        if self.needs_layout {
            self.layout();
        }
        let (tw, th) = (u32::from(target.width()), u32::from(target.height()));
        if (tw, th) != (self.canvas.width, self.canvas.height) {
            return Err(CircleError::render(format!(
                "target is {tw}x{th} but container measured {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        self.draw_frame(target)
    }

    fn dispatch_pointer_event(&mut self, event: PointerEvent) -> bool {
        self.with_router(|router, targets| router.dispatch(targets, event))
    }
}

/// Borrowed view of a container that the pointer router drives.
struct Targets<'a> {
    state: &'a LayoutState,
    children: &'a mut Vec<ChildSlot>,
    mode: LayoutMode,
    inner_radius: f64,
    handler: &'a mut Option<TouchHandler>,
}

impl PointerTargets for Targets<'_> {
    fn hit(&self, position: Point) -> Option<ChildId> {
        hit_child(self.state, self.children.as_slice(), self.mode, self.inner_radius, position)
    }

    fn origin_of(&self, id: ChildId) -> Option<Vec2> {
        if !self.children.iter().any(|s| s.id == id) {
            return None;
        }
        self.state.entry(id).map(|e| e.bounds.origin().to_vec2())
    }

    fn deliver(&mut self, id: ChildId, event: &PointerEvent) -> bool {
        self.children
            .iter_mut()
            .find(|s| s.id == id)
            .is_some_and(|s| s.child.dispatch_pointer_event(event))
    }

    fn fallback(&mut self, event: &PointerEvent) -> bool {
        self.handler.as_mut().is_some_and(|h| h(event))
    }
}

fn hit_child(
    state: &LayoutState,
    children: &[ChildSlot],
    mode: LayoutMode,
    inner_radius: f64,
    point: Point,
) -> Option<ChildId> {
    let visible = |id: ChildId| {
        children
            .iter()
            .any(|s| s.id == id && s.child.is_visible())
    };
    match mode {
        LayoutMode::Normal => state
            .entries
            .iter()
            .rev()
            .filter(|e| visible(e.id))
            .find(|e| {
                let b = e.bounds;
                point.x >= b.x0 && point.x < b.x1 && point.y >= b.y0 && point.y < b.y1
            })
            .map(|e| e.id),
        LayoutMode::Pie => {
            let canvas = state.canvas;
            let (r, angle) = polar(canvas.center(), point);
            if r < inner_radius
                || r > f64::from(canvas.width) / 2.0
                || r > f64::from(canvas.height) / 2.0
            {
                return None;
            }
            state
                .entry_at_angle(angle)
                .map(|e| e.id)
                .filter(|&id| visible(id))
        }
    }
}

/// Whole-pixel extent of a measured length.
fn to_px(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/circle_layout.rs"]
mod tests;
