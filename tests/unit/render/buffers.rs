use super::*;

#[test]
fn same_size_keeps_buffers() {
    let mut set = BufferSet::default();
    assert!(set.ensure(Canvas::new(20, 10)));
    assert!(!set.ensure(Canvas::new(20, 10)));
    assert_eq!(set.stats().allocations, 1);
    assert_eq!(set.stats().releases, 0);
    assert_eq!(set.stats().retained_bytes, 20 * 10 * 4 * 3);
}

#[test]
fn resize_releases_before_reallocating() {
    let mut set = BufferSet::default();
    set.ensure(Canvas::new(20, 10));
    assert!(set.ensure(Canvas::new(30, 30)));
    let stats = set.stats();
    assert_eq!(stats.allocations, 2);
    assert_eq!(stats.releases, 1);
    let live = set.get_mut().unwrap();
    assert_eq!(live.canvas, Canvas::new(30, 30));
    assert_eq!(live.src.width(), 30);
    assert_eq!(live.frame.height(), 30);
}

#[test]
fn empty_or_oversized_canvas_allocates_nothing() {
    let mut set = BufferSet::default();
    set.ensure(Canvas::new(0, 10));
    assert!(!set.is_allocated());
    set.ensure(Canvas::new(70_000, 10));
    assert!(!set.is_allocated());
    assert_eq!(set.stats().allocations, 0);
}

#[test]
fn explicit_release_forces_reallocation() {
    let mut set = BufferSet::default();
    set.ensure(Canvas::new(8, 8));
    set.release();
    assert!(!set.is_allocated());
    assert_eq!(set.stats().retained_bytes, 0);
    assert!(set.ensure(Canvas::new(8, 8)));
    assert_eq!(set.stats().allocations, 2);
    assert_eq!(set.stats().releases, 1);
}
