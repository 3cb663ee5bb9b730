use super::*;
use crate::layout::measure::MeasureSpec;

#[test]
fn measure_respects_constraints() {
    let mut s = Swatch::new(60.0, 20.0, Rgba8::BLACK);
    let size = s.measure(Constraints {
        width: MeasureSpec::at_most(40),
        height: MeasureSpec::exactly(100),
    });
    assert_eq!(size, Size::new(40.0, 100.0));
}

#[test]
fn presses_count_completed_gestures() {
    let mut s = Swatch::new(10.0, 10.0, Rgba8::BLACK);
    assert!(s.dispatch_pointer_event(&PointerEvent::down(1.0, 1.0)));
    assert!(s.dispatch_pointer_event(&PointerEvent::up(1.0, 1.0)));
    assert_eq!(s.presses(), 1);

    let mut inert = Swatch::new(10.0, 10.0, Rgba8::BLACK).with_clickable(false);
    assert!(!inert.dispatch_pointer_event(&PointerEvent::down(1.0, 1.0)));
    assert_eq!(inert.presses(), 0);
}

#[test]
fn layout_bounds_drive_the_fill_size() {
    let mut s = Swatch::new(10.0, 10.0, Rgba8::BLACK);
    s.on_layout(Rect::new(5.0, 5.0, 55.0, 25.0));
    assert_eq!(s.laid_out, Size::new(50.0, 20.0));
}
