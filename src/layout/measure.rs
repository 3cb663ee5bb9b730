use kurbo::{Rect, Size};

use crate::foundation::error::CircleResult;
use crate::input::event::PointerEvent;
use crate::layout::params::{Dimension, LayoutParams};
use crate::render::surface::Surface;

/// How a size bound constrains a measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasureMode {
    /// Take exactly the given size.
    Exactly,
    /// Take at most the given size.
    AtMost,
    /// No constraint; the size is ignored.
    #[default]
    Unspecified,
}

/// One axis of a measure request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasureSpec {
    /// Constraint kind.
    pub mode: MeasureMode,
    /// Bound in pixels.
    pub size: u32,
}

impl MeasureSpec {
    /// Exactly `size` pixels.
    pub fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// Up to `size` pixels.
    pub fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// Unbounded.
    pub fn unspecified() -> Self {
        Self::default()
    }

    /// Settle a desired size against this spec.
    pub fn resolve(self, desired: u32) -> u32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }

    /// Spec handed to a child along one axis, given its sizing request.
    pub(crate) fn for_child(self, dim: Dimension) -> Self {
        match (self.mode, dim) {
            (MeasureMode::Unspecified, _) => Self::unspecified(),
            (MeasureMode::Exactly, Dimension::MatchParent) => Self::exactly(self.size),
            (_, _) => Self::at_most(self.size),
        }
    }
}

/// Two-axis measure request passed to children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Horizontal spec.
    pub width: MeasureSpec,
    /// Vertical spec.
    pub height: MeasureSpec,
}

impl Constraints {
    pub(crate) fn for_child(width: MeasureSpec, height: MeasureSpec, params: &LayoutParams) -> Self {
        Self {
            width: width.for_child(params.width),
            height: height.for_child(params.height),
        }
    }
}

/// A visual element hosted by a container.
///
/// Children draw in local coordinates (their bounds' top-left is the origin) and receive
/// pointer events already translated into that frame.
pub trait LayoutChild {
    /// Desired size under `constraints`.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// Paint the child.
    fn draw(&self, surface: &mut Surface<'_>);

    /// Handle a pointer event; return `true` to claim the gesture.
    fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool;

    /// Invisible children take no slice, draw nothing and receive no input.
    fn is_visible(&self) -> bool {
        true
    }

    /// Notification of the bounds assigned by the last layout pass.
    fn on_layout(&mut self, _bounds: Rect) {}
}

/// The measure / layout / draw / input protocol a host drives a container through.
pub trait Container {
    /// Measure children and settle the container size.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Assign slices and bounds to children.
    fn layout(&mut self);

    /// Paint onto `target`, which must match the measured size.
    fn draw(&mut self, target: &mut vello_cpu::Pixmap) -> CircleResult<()>;

    /// Route a pointer event given in container coordinates.
    fn dispatch_pointer_event(&mut self, event: PointerEvent) -> bool;
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
