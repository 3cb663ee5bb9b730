//! A radial ("pie") layout container.
//!
//! Children are given weighted angular slices of a ring, placed at the middle of their slice,
//! drawn clipped to their wedge and hit-tested by angle. Between slices the container draws
//! divider spokes, and a hub decoration covers the center.
//!
//! # Frame pipeline
//!
//! 1. **Measure**: children report sizes; the container settles its own size and (re)allocates
//!    offscreen buffers when it changes.
//! 2. **Layout**: weights become contiguous slices (`[start, end)` in degrees) and children get
//!    bounds on the effective radius. The result is swapped in as one [`LayoutState`].
//! 3. **Draw**: in [`LayoutMode::Pie`], each child is rendered offscreen and masked by its wedge
//!    ([`ClipStrategy::Mask`]) or rasterized through a wedge clip ([`ClipStrategy::PathClip`]).
//!    Background and children are cached in a frame bitmap that is reused while few children
//!    are dirty; dividers and the hub are always drawn fresh.
//! 4. **Input**: a down selects the child whose wedge contains the pointer angle; the gesture
//!    stays with it until up or cancel, and a new down cancels the previous target first.
//!
//! Pixels are premultiplied RGBA8 throughout; `unsafe` is forbidden in this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod geometry;
mod input;
mod layout;
mod render;
mod scene;
mod widgets;

pub use config::model::{ClipStrategy, LayoutConfig, LayoutMode};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{CircleError, CircleResult};
pub use geometry::angles::{Slice, partition, slice_index_at};
pub use geometry::circle::{arc_bounds, effective_radius, point_on_circle, polar, wedge_path};
pub use input::event::{PointerAction, PointerEvent};
pub use input::router::RouteState;
pub use layout::circle_layout::CircleLayout;
pub use layout::measure::{Constraints, Container, LayoutChild, MeasureMode, MeasureSpec};
pub use layout::params::{ChildId, Dimension, LayoutParams};
pub use layout::state::{LayoutState, SliceEntry};
pub use render::buffers::BufferStats;
pub use render::cache::CacheStats;
pub use render::frame::FrameRGBA;
pub use render::surface::{Drawable, InnerDecoration, Surface};
pub use scene::model::{SceneDesc, SwatchDesc};
pub use widgets::swatch::Swatch;

/// Re-export of the rasterizer crate whose `Pixmap` is the [`Container::draw`] target.
pub use vello_cpu;
