use super::*;

#[test]
fn resolve_follows_mode() {
    assert_eq!(MeasureSpec::exactly(100).resolve(40), 100);
    assert_eq!(MeasureSpec::at_most(100).resolve(40), 40);
    assert_eq!(MeasureSpec::at_most(100).resolve(400), 100);
    assert_eq!(MeasureSpec::unspecified().resolve(400), 400);
}

#[test]
fn child_specs_depend_on_dimension() {
    let exact = MeasureSpec::exactly(300);
    assert_eq!(exact.for_child(Dimension::MatchParent), MeasureSpec::exactly(300));
    assert_eq!(exact.for_child(Dimension::Wrap), MeasureSpec::at_most(300));
    assert_eq!(
        MeasureSpec::at_most(50).for_child(Dimension::MatchParent),
        MeasureSpec::at_most(50)
    );
    assert_eq!(
        MeasureSpec::unspecified().for_child(Dimension::MatchParent),
        MeasureSpec::unspecified()
    );

    let c = Constraints::for_child(exact, MeasureSpec::at_most(20), &LayoutParams::match_parent(1.0));
    assert_eq!(c.width, MeasureSpec::exactly(300));
    assert_eq!(c.height, MeasureSpec::at_most(20));
}
