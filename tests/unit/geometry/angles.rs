use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn slices_are_contiguous_and_cover_the_range() {
    let slices = partition(90.0, 300.0, &[1.0, 2.5, 0.5, 4.0]);
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[0].start_angle, 90.0);
    for pair in slices.windows(2) {
        assert_eq!(pair[0].end_angle, pair[1].start_angle);
    }
    let total: f64 = slices.iter().map(Slice::sweep).sum();
    assert!(approx(total, 300.0));
    assert!(approx(slices[1].sweep(), 300.0 * 2.5 / 8.0));
}

#[test]
fn zero_total_weight_splits_evenly() {
    let slices = partition(0.0, 360.0, &[0.0, 0.0, 0.0]);
    for s in &slices {
        assert!(approx(s.sweep(), 120.0));
    }
    let slices = partition(0.0, 360.0, &[f64::NAN, -1.0]);
    assert!(approx(slices[0].sweep(), 180.0));
}

#[test]
fn bad_weights_count_as_zero_next_to_good_ones() {
    let slices = partition(0.0, 360.0, &[1.0, f64::INFINITY, -2.0, 1.0]);
    assert!(approx(slices[0].sweep(), 180.0));
    assert!(approx(slices[1].sweep(), 0.0));
    assert!(approx(slices[2].sweep(), 0.0));
    assert!(approx(slices[3].sweep(), 180.0));
    assert_eq!(slice_index_at(&slices, 185.0), Some(3));
}

#[test]
fn no_weights_no_slices() {
    assert!(partition(90.0, 360.0, &[]).is_empty());
}

#[test]
fn center_angle_hits_own_slice() {
    for (offset, range) in [(90.0, 360.0), (0.0, 180.0), (350.0, 360.0), (300.0, 200.0)] {
        let slices = partition(offset, range, &[1.0, 3.0, 2.0]);
        for (i, s) in slices.iter().enumerate() {
            assert_eq!(
                slice_index_at(&slices, s.center_angle()),
                Some(i),
                "offset {offset} range {range}"
            );
        }
    }
}

#[test]
fn wraparound_angle_resolves_to_seam_slice() {
    let slices = partition(350.0, 360.0, &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(slice_index_at(&slices, 5.0), Some(0));
    assert_eq!(slice_index_at(&slices, 349.0), Some(3));
    assert_eq!(slice_index_at(&slices, -10.0), Some(0));
}

#[test]
fn boundary_tie_goes_to_later_slice() {
    let slices = partition(0.0, 360.0, &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(slice_index_at(&slices, 90.0), Some(1));
    assert_eq!(slice_index_at(&slices, 180.0), Some(2));
    assert_eq!(slice_index_at(&slices, 0.0), Some(0));
}

#[test]
fn partial_range_leaves_a_gap() {
    let slices = partition(0.0, 180.0, &[1.0, 1.0]);
    assert_eq!(slice_index_at(&slices, 270.0), None);
    assert_eq!(slice_index_at(&slices, 180.0), None);
}

#[test]
fn weights_one_one_two_at_45_degrees_pick_third() {
    let slices = partition(90.0, 360.0, &[1.0, 1.0, 2.0]);
    assert_eq!(slice_index_at(&slices, 45.0), Some(2));
}

#[test]
fn degenerate_slices_contain_nothing() {
    assert!(!Slice::new(10.0, 10.0).contains(10.0));
    assert!(!Slice::new(10.0, 5.0).contains(7.0));
    assert!(Slice::new(10.0, 370.0).contains(3.0));
}
