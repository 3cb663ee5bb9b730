use super::*;

#[test]
fn empty_document_takes_defaults() {
    let cfg = LayoutConfig::from_json("{}").unwrap();
    assert_eq!(cfg, LayoutConfig::default());
    assert_eq!(cfg.angle_offset, 90.0);
    assert_eq!(cfg.angle_range, 360.0);
    assert_eq!(cfg.inner_radius, 80);
    assert_eq!(cfg.divider_width, 1.0);
    assert_eq!(cfg.divider_color, Rgba8::DARKER_GRAY);
    assert_eq!(cfg.inner_circle_color, Some(Rgba8::WHITE));
    assert_eq!(cfg.layout_mode, LayoutMode::Normal);
    assert_eq!(cfg.clip, ClipStrategy::Mask);
    assert!(cfg.render_cache);
}

#[test]
fn layout_mode_accepts_names_and_codes() {
    let pie = LayoutConfig::from_json(r#"{"layout_mode":"Pie"}"#).unwrap();
    assert_eq!(pie.layout_mode, LayoutMode::Pie);
    let coded = LayoutConfig::from_json(r#"{"layout_mode":2}"#).unwrap();
    assert_eq!(coded.layout_mode, LayoutMode::Pie);
    let normal = LayoutConfig::from_json(r#"{"layout_mode":1}"#).unwrap();
    assert_eq!(normal.layout_mode, LayoutMode::Normal);
}

#[test]
fn unknown_layout_mode_falls_back_to_normal() {
    for doc in [
        r#"{"layout_mode":"spiral"}"#,
        r#"{"layout_mode":7}"#,
        r#"{"layout_mode":true}"#,
    ] {
        let cfg = LayoutConfig::from_json(doc).unwrap();
        assert_eq!(cfg.layout_mode, LayoutMode::Normal, "{doc}");
    }
    assert_eq!(LayoutMode::from_code(-3), LayoutMode::Normal);
}

#[test]
fn null_hub_color_disables_the_hub() {
    let cfg = LayoutConfig::from_json(r#"{"inner_circle_color":null}"#).unwrap();
    assert_eq!(cfg.inner_circle_color, None);
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(matches!(
        LayoutConfig::from_json(r#"{"angle_range":0}"#),
        Err(CircleError::Validation(_))
    ));
    assert!(LayoutConfig::from_json(r#"{"angle_range":361}"#).is_err());
    assert!(LayoutConfig::from_json(r#"{"divider_width":-1}"#).is_err());
    assert!(matches!(
        LayoutConfig::from_json("{not json"),
        Err(CircleError::Config(_))
    ));
}

#[test]
fn config_survives_json_round_trip() {
    let cfg = LayoutConfig {
        layout_mode: LayoutMode::Pie,
        clip: ClipStrategy::PathClip,
        background: Some(Rgba8::rgba(10, 20, 30, 40)),
        ..LayoutConfig::default()
    };
    let json = cfg.to_json().unwrap();
    assert!(json.contains("\"pie\""));
    assert!(json.contains("\"path_clip\""));
    assert_eq!(LayoutConfig::from_json(&json).unwrap(), cfg);
}
