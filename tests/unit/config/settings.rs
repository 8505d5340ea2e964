use super::*;

#[test]
fn defaults_are_valid() {
    let s = SceneSettings::default();
    s.validate().unwrap();
    assert_eq!(s.reset_duration, 2.0);
    assert_eq!(s.background.len(), 2);
    assert!(s.fps > 0);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let s = SceneSettings::from_json_str(r#"{"dpr": 2.0, "fps": 30}"#).unwrap();
    assert_eq!(s.dpr, 2.0);
    assert_eq!(s.frame_rate().unwrap().num, 30);
    assert_eq!(s.pop_out, PopOut::default());
    assert_eq!(s.ring, RingLayout::default());
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(matches!(
        SceneSettings::from_json_str(r#"{"dpi": 2.0}"#),
        Err(RingTimerError::Serde(_))
    ));
}

#[test]
fn validation_catches_degenerate_values() {
    for json in [
        r#"{"dpr": 0.0}"#,
        r#"{"fps": 0}"#,
        r#"{"reset_duration": -1.0}"#,
        r#"{"pop_out": {"distance": 40.0, "duration": 0.0}}"#,
        r#"{"viewport": {"width": 0, "height": 10}}"#,
        r#"{"background": [{"x": 0.0, "y": 0.0, "radius": 0.0}]}"#,
    ] {
        assert!(
            matches!(
                SceneSettings::from_json_str(json),
                Err(RingTimerError::Validation(_))
            ),
            "{json}"
        );
    }
}

#[test]
fn ring_canvas_follows_viewport_and_cap() {
    let mut s = SceneSettings::default();
    s.viewport = Canvas::new(400, 900).unwrap();
    assert_eq!(s.ring_canvas().unwrap(), Canvas::square(400).unwrap());

    s.viewport = Canvas::new(1920, 1080).unwrap();
    s.dpr = 2.0;
    assert_eq!(s.ring_canvas().unwrap(), Canvas::square(1500).unwrap());
}

#[test]
fn clear_rgba_is_premultiplied() {
    let mut s = SceneSettings::default();
    assert_eq!(s.clear_rgba(), [0, 0, 0, 0]);
    s.clear_color = Rgba8::new(255, 0, 0, 128);
    assert_eq!(s.clear_rgba(), [128, 0, 0, 128]);
}

#[test]
fn missing_file_is_reported() {
    let err = SceneSettings::from_json_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("read settings"));
}
