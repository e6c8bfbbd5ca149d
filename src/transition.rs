//! Cross-fade sequencing and geometry application.

use std::time::Duration;

use tracing::trace;

use crate::config::SlideshowOptions;
use crate::dom::Dom;
use crate::geometry;
use crate::registry::SlideRegistry;

/// Start the cross-fade from `from` to `to`.
///
/// Geometry runs first so the container is already sized for the incoming
/// slide while it fades in. The outgoing and incoming slides fade
/// concurrently; captions cross-fade with the incoming one snapped fully
/// hidden first, so a caption interrupted mid-fade restarts from zero
/// opacity. Once issued, fades run to completion; nothing cancels them.
pub fn begin(
    dom: &dyn Dom,
    registry: &SlideRegistry,
    opts: &SlideshowOptions,
    from: usize,
    to: usize,
) {
    update_dimensions(dom, registry, opts, from, Some(to));

    let (Some(outgoing), Some(incoming)) = (registry.get(from), registry.get(to)) else {
        return;
    };
    dom.fade_out(outgoing.node, opts.fade_time);
    dom.fade_in(incoming.node, opts.fade_time);

    if let Some(info) = outgoing.info {
        dom.fade_out(info, opts.fade_time);
    }
    if let Some(info) = incoming.info {
        dom.fade_out(info, Duration::ZERO);
        dom.fade_in(info, opts.fade_time);
    }
    trace!(from, to, "cross-fade started");
}

/// Recompute the container height and re-fit the relevant slide images
/// from the container's live inner width.
///
/// Mid-transition both the visible and the incoming slide are fitted, and
/// the incoming slide's caption decides the extra container height.
pub fn update_dimensions(
    dom: &dyn Dom,
    registry: &SlideRegistry,
    opts: &SlideshowOptions,
    index_on: usize,
    index_to: Option<usize>,
) {
    let width = dom.inner_width(registry.container());
    let height = width * opts.dimensions_ratio;
    let incoming = index_to.filter(|to| *to != index_on);

    if opts.center_and_resize {
        fit_slide_image(dom, registry, index_on, width, height);
        if let Some(to) = incoming {
            fit_slide_image(dom, registry, to, width, height);
        }
    }

    let info_height = if opts.add_info_height {
        let shown = incoming.unwrap_or(index_on);
        registry
            .get(shown)
            .and_then(|slide| slide.info)
            .map(|info| dom.outer_height(info))
    } else {
        None
    };
    dom.set_height(
        registry.container(),
        geometry::container_height(width, opts.dimensions_ratio, info_height),
    );
}

fn fit_slide_image(dom: &dyn Dom, registry: &SlideRegistry, index: usize, w: f64, h: f64) {
    let Some(image) = registry.get(index).and_then(|slide| slide.image) else {
        return;
    };
    let (iw, ih) = dom.natural_size(image);
    let placement = geometry::cover_fit(iw, ih, w, h);
    dom.set_image_bounds(
        image,
        placement.width,
        placement.height,
        placement.left,
        placement.top,
    );
}
