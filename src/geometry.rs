//! Aspect-ratio fitting for slide images.

/// Computed position of an image within its slide area, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

/// Scale an image to fill `(area_w, area_h)` along one axis and center it
/// along the other, preserving its natural aspect ratio.
///
/// The branch condition is `area_h * iw / ih > area_w`: scaling the image
/// to the area height would overflow the width, so the width is pinned and
/// the image centered vertically; otherwise the height is pinned and the
/// image centered horizontally. Scaled dimensions within one pixel of the
/// area snap to it exactly, absorbing float error; the centering offset is
/// floored and computed from the unsnapped dimension.
pub fn cover_fit(natural_w: f64, natural_h: f64, area_w: f64, area_h: f64) -> Placement {
    let iw = natural_w.max(1.0);
    let ih = natural_h.max(1.0);
    if area_h * iw / ih > area_w {
        // Image is relatively wider than the area.
        let scaled_h = area_w * ih / iw;
        Placement {
            width: area_w,
            height: snap(scaled_h, area_h),
            left: 0.0,
            top: ((area_h - scaled_h) / 2.0).floor(),
        }
    } else {
        // Image is relatively taller than the area.
        let scaled_w = area_h * iw / ih;
        Placement {
            width: snap(scaled_w, area_w),
            height: area_h,
            left: ((area_w - scaled_w) / 2.0).floor(),
            top: 0.0,
        }
    }
}

/// Container height: inner width scaled by the configured ratio, plus the
/// shown slide's caption height when captions count toward the container.
pub fn container_height(inner_width: f64, ratio: f64, info_height: Option<f64>) -> f64 {
    inner_width * ratio + info_height.unwrap_or(0.0)
}

/// Snap `value` to `target` when float error keeps it within one pixel.
fn snap(value: f64, target: f64) -> f64 {
    if (value - target).abs() <= 1.0 {
        target
    } else {
        value
    }
}
