use kurbo::{Point, Rect, Size};

use crate::foundation::core::Rgba8;
use crate::input::event::{PointerAction, PointerEvent};
use crate::layout::measure::{Constraints, LayoutChild};
use crate::render::surface::Surface;

/// A solid-color child: fills whatever bounds it is given.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    preferred: Size,
    color: Rgba8,
    clickable: bool,
    visible: bool,
    laid_out: Size,
    presses: u32,
}

impl Swatch {
    /// A visible, clickable swatch with a preferred size.
    pub fn new(width: f64, height: f64, color: Rgba8) -> Self {
        Self {
            preferred: Size::new(width, height),
            color,
            clickable: true,
            visible: true,
            laid_out: Size::ZERO,
            presses: 0,
        }
    }

    /// Whether downs are claimed.
    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Whether the swatch takes part in layout at all.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Fill color.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Change the fill color. Callers should invalidate the child on its container.
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    /// Completed presses (down followed by up) received so far.
    pub fn presses(&self) -> u32 {
        self.presses
    }
}

impl LayoutChild for Swatch {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let px = |v: f64| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
        Size::new(
            f64::from(constraints.width.resolve(px(self.preferred.width))),
            f64::from(constraints.height.resolve(px(self.preferred.height))),
        )
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        if self.color.a == 0 {
            return;
        }
        surface.fill_rect(Rect::from_origin_size(Point::ZERO, self.laid_out), self.color);
    }

    fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.action == PointerAction::Up && self.clickable {
            self.presses += 1;
        }
        self.clickable
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn on_layout(&mut self, bounds: Rect) {
        self.laid_out = bounds.size();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/swatch.rs"]
mod tests;
