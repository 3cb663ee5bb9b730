use super::*;
use crate::input::event::PointerEvent;
use crate::layout::{measure::Constraints, params::ChildId};
use crate::render::buffers::BufferSet;

struct Solid(Rgba8);

impl LayoutChild for Solid {
    fn measure(&mut self, _constraints: Constraints) -> Size {
        Size::new(100.0, 100.0)
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        surface.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), self.0);
    }

    fn dispatch_pointer_event(&mut self, _event: &PointerEvent) -> bool {
        false
    }
}

fn style(decoration: &InnerDecoration, clip: ClipStrategy) -> PieStyle<'_> {
    PieStyle {
        center: Point::new(50.0, 50.0),
        outer_radius: 50.0,
        inner_radius: 10.0,
        divider_width: 2.0,
        divider_color: Rgba8::BLACK,
        decoration,
        clip,
    }
}

fn px(data: &[u8], x: usize, y: usize) -> [u8; 4] {
    let i = (y * 100 + x) * 4;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

fn render_quadrant(clip: ClipStrategy) -> Vec<u8> {
    let mut set = BufferSet::default();
    set.ensure(Canvas::new(100, 100));
    let buffers = set.get_mut().unwrap();
    let (mut scratch, frame) = split(buffers);

    let child = Solid(Rgba8::rgb(255, 0, 0));
    let entry = SliceEntry {
        id: ChildId(0),
        slice: Slice::new(0.0, 90.0),
        bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
    };
    let items = [DrawItem {
        child: &child,
        entry: &entry,
    }];
    let deco = InnerDecoration::None;
    paint_background(frame.data_as_u8_slice_mut(), None);
    compose_wedges(
        &mut scratch,
        frame.data_as_u8_slice_mut(),
        &items,
        &style(&deco, clip),
    )
    .unwrap();
    frame.data_as_u8_slice().to_vec()
}

#[test]
fn masked_child_only_shows_inside_its_wedge() {
    let data = render_quadrant(ClipStrategy::Mask);
    assert_eq!(px(&data, 75, 60), [255, 0, 0, 255]);
    assert_eq!(px(&data, 25, 60), [0, 0, 0, 0]);
    assert_eq!(px(&data, 75, 25), [0, 0, 0, 0]);
}

#[test]
fn path_clip_matches_mask_in_wedge_interiors() {
    let mask = render_quadrant(ClipStrategy::Mask);
    let clip = render_quadrant(ClipStrategy::PathClip);
    for (x, y) in [(75, 60), (60, 80), (25, 60), (75, 25), (20, 20)] {
        assert_eq!(px(&mask, x, y), px(&clip, x, y), "({x}, {y})");
    }
}

#[test]
fn dividers_need_two_slices_and_positive_width() {
    let deco = InnerDecoration::None;
    let s = style(&deco, ClipStrategy::Mask);
    let two = [Slice::new(0.0, 90.0), Slice::new(90.0, 360.0)];
    assert_eq!(divider_paths(&s, &two).len(), 3);
    assert!(divider_paths(&s, &two[..1]).is_empty());

    let thin = PieStyle {
        divider_width: 0.0,
        ..style(&deco, ClipStrategy::Mask)
    };
    assert!(divider_paths(&thin, &two).is_empty());
}

#[test]
fn flat_hub_is_drawn_over_children() {
    let mut set = BufferSet::default();
    set.ensure(Canvas::new(100, 100));
    let (mut scratch, frame) = split(set.get_mut().unwrap());
    paint_background(frame.data_as_u8_slice_mut(), Some(Rgba8::rgb(0, 0, 255)));

    let deco = InnerDecoration::FlatColor(Rgba8::WHITE);
    draw_overlay(
        &mut scratch,
        frame.data_as_u8_slice_mut(),
        &[],
        &style(&deco, ClipStrategy::Mask),
    )
    .unwrap();
    let data = frame.data_as_u8_slice();
    assert_eq!(px(data, 50, 50), [255, 255, 255, 255]);
    assert_eq!(px(data, 5, 5), [0, 0, 255, 255]);
}

#[test]
fn repaint_region_rebuilds_only_inside_the_region() {
    for clip in [ClipStrategy::Mask, ClipStrategy::PathClip] {
        let reference = render_quadrant(clip);

        let mut set = BufferSet::default();
        set.ensure(Canvas::new(100, 100));
        let (mut scratch, frame) = split(set.get_mut().unwrap());
        composite::fill(frame.data_as_u8_slice_mut(), [9, 9, 9, 9]);

        let child = Solid(Rgba8::rgb(255, 0, 0));
        let entry = SliceEntry {
            id: ChildId(0),
            slice: Slice::new(0.0, 90.0),
            bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
        };
        let items = [DrawItem {
            child: &child,
            entry: &entry,
        }];
        let deco = InnerDecoration::None;
        let region = PixelRect {
            x0: 50,
            y0: 50,
            x1: 100,
            y1: 100,
        };
        repaint_region(
            &mut scratch,
            frame.data_as_u8_slice_mut(),
            None,
            &items,
            region,
            &style(&deco, clip),
        )
        .unwrap();

        let data = frame.data_as_u8_slice();
        for (x, y) in [(75, 60), (60, 80), (52, 98), (99, 51)] {
            assert_eq!(px(data, x, y), px(&reference, x, y), "{clip:?} ({x}, {y})");
        }
        assert_eq!(px(data, 25, 60), [9, 9, 9, 9], "{clip:?}");
        assert_eq!(px(data, 75, 25), [9, 9, 9, 9], "{clip:?}");
    }
}

#[test]
fn covered_region_spans_all_items() {
    let child = Solid(Rgba8::BLACK);
    let a = SliceEntry {
        id: ChildId(0),
        slice: Slice::new(0.0, 90.0),
        bounds: Rect::new(10.0, 10.0, 20.0, 20.0),
    };
    let b = SliceEntry {
        id: ChildId(1),
        slice: Slice::new(90.0, 180.0),
        bounds: Rect::new(60.0, 40.0, 70.0, 90.0),
    };
    let canvas = Canvas::new(100, 100);
    assert!(covered_region(&[], canvas).is_empty());
    let items = [
        DrawItem {
            child: &child,
            entry: &a,
        },
        DrawItem {
            child: &child,
            entry: &b,
        },
    ];
    assert_eq!(
        covered_region(&items, canvas),
        PixelRect {
            x0: 10,
            y0: 10,
            x1: 70,
            y1: 90
        }
    );
}
