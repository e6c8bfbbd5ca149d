use std::io::Write;
use std::time::Duration;

use slidekit::config::SlideshowOptions;
use slidekit::error::Error;

#[test]
fn empty_bag_resolves_to_defaults() {
    let opts = SlideshowOptions::from_yaml_str("{}").unwrap();
    assert_eq!(opts, SlideshowOptions::default());
    assert_eq!(opts.left_button_id, "#slideshow-left");
    assert_eq!(opts.right_button_id, "#slideshow-right");
    assert_eq!(opts.slide_id, "#slide-");
    assert_eq!(opts.slide_class, ".slide");
    assert_eq!(opts.slide_info_class, ".slide-info");
    assert_eq!(opts.wait_time, Duration::from_millis(3000));
    assert_eq!(opts.fade_time, Duration::from_millis(400));
    assert!(opts.hover_pause);
    assert!((opts.dimensions_ratio - 2.0 / 3.0).abs() < f64::EPSILON);
    assert!(!opts.add_info_height);
    assert!(opts.remove_arrows_if_one_slide);
    assert!(opts.center_and_resize);
}

#[test]
fn parse_kebab_case_overrides() {
    let yaml = r#"
slide-class: ".panel"
wait-time: 1500
fade-time: 200
hover-pause: false
first-slide-index: 2
dimensions-ratio: 0.5
"#;
    let opts = SlideshowOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(opts.slide_class, ".panel");
    assert_eq!(opts.wait_time, Duration::from_millis(1500));
    assert_eq!(opts.fade_time, Duration::from_millis(200));
    assert!(!opts.hover_pause);
    assert_eq!(opts.first_slide_index, 2);
    assert!((opts.dimensions_ratio - 0.5).abs() < f64::EPSILON);
}

#[test]
fn durations_accept_humantime_strings() {
    let yaml = r#"
wait-time: 2s 500ms
fade-time: 250ms
"#;
    let opts = SlideshowOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(opts.wait_time, Duration::from_millis(2500));
    assert_eq!(opts.fade_time, Duration::from_millis(250));
}

#[test]
fn wrong_primitive_types_fall_back_to_defaults() {
    let yaml = r#"
slide-class: 7
hover-pause: 12
wait-time: soon
dimensions-ratio: "wide"
left-button-id: true
"#;
    let opts = SlideshowOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(opts.slide_class, ".slide");
    assert!(opts.hover_pause);
    assert_eq!(opts.wait_time, Duration::from_millis(3000));
    assert!((opts.dimensions_ratio - 2.0 / 3.0).abs() < f64::EPSILON);
    assert_eq!(opts.left_button_id, "#slideshow-left");
}

#[test]
fn numbers_coerce_to_non_negative_integers() {
    // Absolute value, round half away from zero.
    let yaml = r#"
wait-time: -1200.6
fade-time: 100.5
first-slide-index: 2.5
"#;
    let opts = SlideshowOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(opts.wait_time, Duration::from_millis(1201));
    assert_eq!(opts.fade_time, Duration::from_millis(101));
    assert_eq!(opts.first_slide_index, 3);
}

#[test]
fn non_positive_ratio_keeps_default() {
    let opts = SlideshowOptions::from_yaml_str("dimensions-ratio: -2").unwrap();
    assert!((opts.dimensions_ratio - 2.0 / 3.0).abs() < f64::EPSILON);
    let opts = SlideshowOptions::from_yaml_str("dimensions-ratio: 0").unwrap();
    assert!((opts.dimensions_ratio - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_keys_are_ignored() {
    let yaml = r#"
autoplay: true
wait-time: 100
"#;
    let opts = SlideshowOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(opts.wait_time, Duration::from_millis(100));
}

#[test]
fn non_mapping_bag_resolves_to_defaults() {
    assert_eq!(
        SlideshowOptions::from_yaml_str("[1, 2, 3]").unwrap(),
        SlideshowOptions::default()
    );
    assert_eq!(
        SlideshowOptions::from_yaml_str("just a string").unwrap(),
        SlideshowOptions::default()
    );
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = SlideshowOptions::from_yaml_str("a: [unclosed").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wait-time: 750").unwrap();
    let opts = SlideshowOptions::from_yaml_file(file.path()).unwrap();
    assert_eq!(opts.wait_time, Duration::from_millis(750));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SlideshowOptions::from_yaml_file("/no/such/slideshow.yaml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn lenient_deserialize_embeds_in_larger_configs() {
    #[derive(serde::Deserialize)]
    struct Page {
        slideshow: SlideshowOptions,
    }
    let yaml = r#"
slideshow:
  fade-time: 80
  hover-pause: "not a bool"
"#;
    let page: Page = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(page.slideshow.fade_time, Duration::from_millis(80));
    assert!(page.slideshow.hover_pause);
}
