use std::path::Path;
use std::time::Duration;

use serde::de::{Deserialize, Deserializer};
use serde_yaml::Value;
use tracing::debug;

use crate::error::Error;

/// Widget options. Every field has a working default and resolution never
/// fails: a value of the wrong primitive type is silently replaced by its
/// default rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowOptions {
    /// Selector for the previous-slide control.
    pub left_button_id: String,
    /// Selector for the next-slide control.
    pub right_button_id: String,
    /// Per-slide id prefix, combined with the 0-based slide index.
    pub slide_id: String,
    /// Class shared by all slides; its match count defines the slide count.
    pub slide_class: String,
    /// Class of the per-slide caption container.
    pub slide_info_class: String,
    /// Index of the slide shown first, reduced modulo the slide count.
    pub first_slide_index: usize,
    /// Time a slide stays fully visible before the next auto-advance.
    pub wait_time: Duration,
    /// Cross-fade duration.
    pub fade_time: Duration,
    /// Suspend the rotation timer while the pointer is over the container.
    pub hover_pause: bool,
    /// Container height as a fraction of its inner width.
    pub dimensions_ratio: f64,
    /// Add the caption's outer height to the container height.
    pub add_info_height: bool,
    /// Remove both navigation controls when only one slide exists.
    pub remove_arrows_if_one_slide: bool,
    /// Scale and center each slide's image to fill the container.
    pub center_and_resize: bool,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            left_button_id: "#slideshow-left".to_owned(),
            right_button_id: "#slideshow-right".to_owned(),
            slide_id: "#slide-".to_owned(),
            slide_class: ".slide".to_owned(),
            slide_info_class: ".slide-info".to_owned(),
            first_slide_index: 0,
            wait_time: Duration::from_millis(3000),
            fade_time: Duration::from_millis(400),
            hover_pause: true,
            dimensions_ratio: 2.0 / 3.0,
            add_info_height: false,
            remove_arrows_if_one_slide: true,
            center_and_resize: true,
        }
    }
}

impl SlideshowOptions {
    /// Resolve a loosely-typed options bag against the defaults.
    ///
    /// Hosts hand the widget whatever their page config carries, so this
    /// is an options-object merge rather than a strict parse: unknown keys
    /// are ignored, a key holding the wrong primitive type keeps its
    /// default, and numeric values are coerced to non-negative integers
    /// (absolute value, round half away from zero). A bag that is not a
    /// mapping resolves to all defaults.
    pub fn resolve(bag: &Value) -> Self {
        let mut opts = Self::default();
        let Value::Mapping(map) = bag else {
            return opts;
        };
        for (key, value) in map {
            let Value::String(key) = key else { continue };
            match key.as_str() {
                "left-button-id" => coerce_string(value, &mut opts.left_button_id),
                "right-button-id" => coerce_string(value, &mut opts.right_button_id),
                "slide-id" => coerce_string(value, &mut opts.slide_id),
                "slide-class" => coerce_string(value, &mut opts.slide_class),
                "slide-info-class" => coerce_string(value, &mut opts.slide_info_class),
                "first-slide-index" => coerce_index(value, &mut opts.first_slide_index),
                "wait-time" => coerce_duration(value, &mut opts.wait_time),
                "fade-time" => coerce_duration(value, &mut opts.fade_time),
                "hover-pause" => coerce_bool(value, &mut opts.hover_pause),
                "dimensions-ratio" => coerce_ratio(value, &mut opts.dimensions_ratio),
                "add-info-height" => coerce_bool(value, &mut opts.add_info_height),
                "remove-arrows-if-one-slide" => {
                    coerce_bool(value, &mut opts.remove_arrows_if_one_slide)
                }
                "center-and-resize" => coerce_bool(value, &mut opts.center_and_resize),
                other => debug!(key = other, "ignoring unknown slideshow option"),
            }
        }
        opts
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        let value: Value = serde_yaml::from_str(s)?;
        Ok(Self::resolve(&value))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&s)
    }
}

// Lenient deserialization so an options bag embedded in a larger config
// document gets the same merge semantics as `resolve`.
impl<'de> Deserialize<'de> for SlideshowOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::resolve(&value))
    }
}

fn coerce_string(value: &Value, target: &mut String) {
    if let Value::String(s) = value {
        *target = s.clone();
    }
}

fn coerce_bool(value: &Value, target: &mut bool) {
    if let Value::Bool(b) = value {
        *target = *b;
    }
}

fn coerce_index(value: &Value, target: &mut usize) {
    if let Some(n) = non_negative_integer(value) {
        *target = n as usize;
    }
}

fn coerce_duration(value: &Value, target: &mut Duration) {
    match value {
        Value::Number(_) => {
            // Bare numbers are milliseconds, the widget's historical unit.
            if let Some(ms) = non_negative_integer(value) {
                *target = Duration::from_millis(ms);
            }
        }
        // YAML configs may also spell durations the humantime way ("2s 500ms").
        Value::String(s) => {
            if let Ok(parsed) = humantime::parse_duration(s) {
                *target = parsed;
            }
        }
        _ => {}
    }
}

fn coerce_ratio(value: &Value, target: &mut f64) {
    if let Value::Number(n) = value {
        if let Some(ratio) = n.as_f64() {
            if ratio.is_finite() && ratio > 0.0 {
                *target = ratio;
            }
        }
    }
}

/// Absolute value, rounded half away from zero.
fn non_negative_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else { return None };
    let f = n.as_f64()?;
    if !f.is_finite() {
        return None;
    }
    Some(f.abs().round() as u64)
}
