use super::*;

#[test]
fn over_transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_half_alpha_blends() {
    let out = over([0, 0, 255, 255], [128, 0, 0, 128]);
    assert_eq!(out, [128, 0, 127, 255]);
}

#[test]
fn src_in_uses_mask_alpha_only() {
    let src = [200, 100, 50, 200];
    assert_eq!(src_in(src, [0, 0, 0, 255]), src);
    assert_eq!(src_in(src, [9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(src_in(src, [0, 0, 0, 128]), [100, 50, 25, 100]);
}

#[test]
fn rect_ops_only_touch_the_span() {
    let canvas = Canvas::new(4, 2);
    let rect = PixelRect::covering(Rect::new(1.2, 0.0, 2.5, 1.0), canvas);
    assert_eq!(rect, PixelRect { x0: 1, y0: 0, x1: 3, y1: 1 });

    let src = vec![255u8; canvas.byte_len()];
    let mut dst = vec![0u8; canvas.byte_len()];
    over_rect_in_place(&mut dst, &src, canvas.width, rect).unwrap();
    let touched: Vec<usize> = dst
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| px[3] == 255)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(touched, vec![1, 2]);

    let mut mask = vec![0u8; canvas.byte_len()];
    mask[4..8].copy_from_slice(&[0, 0, 0, 255]);
    src_in_rect_in_place(&mut mask, &src, canvas.width, rect).unwrap();
    assert_eq!(&mask[4..8], &[255, 255, 255, 255]);
    assert_eq!(&mask[8..12], &[0, 0, 0, 0]);
}

#[test]
fn covering_clamps_to_canvas() {
    let canvas = Canvas::new(10, 10);
    let r = PixelRect::covering(Rect::new(-5.0, -5.0, 50.0, 3.0), canvas);
    assert_eq!(r, PixelRect { x0: 0, y0: 0, x1: 10, y1: 3 });
    assert!(PixelRect::covering(Rect::new(20.0, 0.0, 30.0, 5.0), canvas).is_empty());
}

#[test]
fn mismatched_buffers_are_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn unpremultiply_restores_straight_color() {
    assert_eq!(unpremultiply([100, 50, 0, 128]), [199, 100, 0, 128]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn span_union_and_intersection() {
    let a = PixelRect { x0: 0, y0: 0, x1: 4, y1: 4 };
    let b = PixelRect { x0: 2, y0: 3, x1: 6, y1: 8 };
    assert_eq!(a.union(b), PixelRect { x0: 0, y0: 0, x1: 6, y1: 8 });
    assert_eq!(a.intersect(b), PixelRect { x0: 2, y0: 3, x1: 4, y1: 4 });
    assert!(a.overlaps(b));

    let far = PixelRect { x0: 10, y0: 10, x1: 12, y1: 12 };
    assert!(a.intersect(far).is_empty());
    assert!(!a.overlaps(far));
    assert_eq!(PixelRect::default().union(b), b);
    assert_eq!(PixelRect::full(Canvas::new(3, 5)), PixelRect { x0: 0, y0: 0, x1: 3, y1: 5 });
}

#[test]
fn fill_rect_overwrites_only_the_span() {
    let canvas = Canvas::new(3, 2);
    let mut buf = vec![7u8; canvas.byte_len()];
    let rect = PixelRect { x0: 1, y0: 1, x1: 3, y1: 2 };
    fill_rect_in_place(&mut buf, canvas.width, rect, [1, 2, 3, 4]).unwrap();
    assert_eq!(&buf[..12], &[7u8; 12]);
    assert_eq!(&buf[12..16], &[7, 7, 7, 7]);
    assert_eq!(&buf[16..24], &[1, 2, 3, 4, 1, 2, 3, 4]);

    let outside = PixelRect { x0: 0, y0: 0, x1: 1, y1: 5 };
    assert!(fill_rect_in_place(&mut buf, canvas.width, outside, [0; 4]).is_err());
}
