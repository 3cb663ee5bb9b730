use kurbo::Rect;

use crate::foundation::core::Canvas;
use crate::geometry::angles::Slice;
use crate::layout::params::ChildId;

/// Result of one layout pass for one visible child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceEntry {
    /// The child this entry belongs to.
    pub id: ChildId,
    /// Its angular allocation.
    pub slice: Slice,
    /// Its bounds in container coordinates.
    pub bounds: Rect,
}

/// Immutable snapshot produced by a layout pass; replaced wholesale by the next pass.
///
/// Entries appear in child order, which is also draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutState {
    /// Container size the pass ran against.
    pub canvas: Canvas,
    /// Visible children in order.
    pub entries: Vec<SliceEntry>,
}

impl LayoutState {
    /// Entry of `id`, if it was visible during the pass.
    pub fn entry(&self, id: ChildId) -> Option<&SliceEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Slices in child order.
    pub fn slices(&self) -> Vec<Slice> {
        self.entries.iter().map(|e| e.slice).collect()
    }

    /// Entry whose wedge contains `angle`.
    pub fn entry_at_angle(&self, angle: f64) -> Option<&SliceEntry> {
        let angle = crate::foundation::math::normalize_degrees(angle);
        self.entries.iter().find(|e| e.slice.contains(angle))
    }
}
