use super::*;

#[test]
fn pixel_lookup_is_row_major() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: (0u8..16).collect(),
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), Some([4, 5, 6, 7]));
    assert_eq!(frame.pixel(0, 1), Some([8, 9, 10, 11]));
    assert_eq!(frame.pixel(2, 0), None);
}

#[test]
fn straight_copy_unpremultiplies() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba8(), vec![128, 0, 0, 128]);
}
