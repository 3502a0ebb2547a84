use super::*;

#[test]
fn default_is_ipad_pro_13() {
    let l = MockupLayout::default();
    assert_eq!(l.screen, PixelRect::new(231, 463, 1602, 2136).unwrap());
    assert_eq!(l.screen_radius, 56);
    assert_eq!(l.title_clear_bottom, 380);
    assert_eq!(l.title_color, Rgb8::new(35, 42, 52));
    assert_eq!(l.title_max_width, 1820.0);
    assert_eq!(l.output_dpi, 144);
    l.validate().unwrap();
}

#[test]
fn validate_rejects_oversized_radius() {
    let mut l = MockupLayout::default();
    l.screen = PixelRect::new(0, 0, 100, 40).unwrap();
    l.screen_radius = 21;
    assert!(l.validate().is_err());
    l.screen_radius = 20;
    l.validate().unwrap();
}

#[test]
fn validate_rejects_bad_title_metrics() {
    let mut l = MockupLayout::default();
    l.title_size_px = 0.0;
    assert!(l.validate().is_err());

    let mut l = MockupLayout::default();
    l.title_max_width = f32::NAN;
    assert!(l.validate().is_err());

    let mut l = MockupLayout::default();
    l.title_line_spacing = -1;
    assert!(l.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let l: MockupLayout = serde_json::from_str(r#"{ "title_size_px": 72.0 }"#).unwrap();
    assert_eq!(l.title_size_px, 72.0);
    assert_eq!(l.screen, MockupLayout::ipad_pro_13().screen);
}
