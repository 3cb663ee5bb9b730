use super::*;

const SCENE: &str = r##"{
    "width": 120,
    "height": 120,
    "config": { "layout_mode": "pie", "inner_radius": 20 },
    "children": [
        { "color": "#FF0000" },
        { "color": "#00FF00", "weight": 2, "match_parent": true },
        { "color": [0, 0, 255, 255], "visible": false }
    ]
}"##;

#[test]
fn scene_builds_a_laid_out_container() {
    let scene = SceneDesc::from_json(SCENE).unwrap();
    assert_eq!(scene.children[0].width, 48.0);
    assert!(scene.children[0].clickable);

    let layout = scene.build().unwrap();
    assert_eq!(layout.child_count(), 3);
    assert_eq!(layout.slices().len(), 2);
    let ids = layout.child_ids();
    assert_eq!(
        layout.child_bounds(ids[1]),
        Some(kurbo::Rect::new(0.0, 0.0, 120.0, 120.0))
    );
}

#[test]
fn bad_scenes_are_rejected() {
    assert!(matches!(
        SceneDesc::from_json(r#"{"width": 0, "height": 10}"#),
        Err(CircleError::Validation(_))
    ));
    assert!(SceneDesc::from_json(
        r##"{"width": 10, "height": 10, "children": [{"color": "#000000", "weight": 0}]}"##
    )
    .is_err());
    assert!(matches!(
        SceneDesc::from_json("[]"),
        Err(CircleError::Config(_))
    ));
}
