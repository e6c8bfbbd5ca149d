use std::time::Duration;

use tracing::debug;

use crate::config::SlideshowOptions;
use crate::dom::{Dom, NodeId};
use crate::error::Error;

/// One rotating panel: its element plus optional image and caption.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub node: NodeId,
    pub image: Option<NodeId>,
    pub info: Option<NodeId>,
}

/// The ordered slide set under one container, fixed at setup.
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    container: NodeId,
    slides: Vec<Slide>,
    first_index: usize,
}

impl SlideRegistry {
    /// Resolve the container and enumerate its slides.
    ///
    /// The slide count comes from class matches inside the container; each
    /// slide element is then looked up as `{slide_id}{index}`. Every
    /// fallible lookup happens before the first document mutation, so a
    /// failed build leaves the document exactly as it was.
    pub fn build(
        dom: &dyn Dom,
        container_selector: &str,
        opts: &SlideshowOptions,
    ) -> Result<Self, Error> {
        let container = dom
            .query(None, container_selector)
            .first()
            .copied()
            .ok_or_else(|| Error::ContainerNotFound(container_selector.to_owned()))?;

        let count = dom.query(Some(container), &opts.slide_class).len();
        if count == 0 {
            return Err(Error::NoSlidesFound {
                container: container_selector.to_owned(),
                class: opts.slide_class.clone(),
            });
        }

        let first_index = opts.first_slide_index % count;

        // Captions are matched document-wide and paired by position, the
        // same pairing the markup contract promises for slide ids.
        let infos = dom.query(None, &opts.slide_info_class);

        let mut slides = Vec::with_capacity(count);
        for i in 0..count {
            let selector = format!("{}{}", opts.slide_id, i);
            let node = dom
                .query(Some(container), &selector)
                .first()
                .copied()
                .ok_or(Error::SlideMissing { selector })?;
            let image = dom.query(Some(node), "img").first().copied();
            slides.push(Slide {
                node,
                image,
                info: infos.get(i).copied(),
            });
        }

        // Leave only the initial slide visible.
        for (i, slide) in slides.iter().enumerate() {
            if i != first_index {
                dom.fade_out(slide.node, Duration::ZERO);
            }
        }

        if count == 1 && opts.remove_arrows_if_one_slide {
            for selector in [&opts.left_button_id, &opts.right_button_id] {
                for node in dom.query(None, selector) {
                    dom.remove(node);
                }
            }
        }

        debug!(count, first_index, "slide registry built");
        Ok(Self {
            container,
            slides,
            first_index,
        })
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The configured first slide index, reduced modulo the slide count.
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    pub fn get(&self, index: usize) -> Option<Slide> {
        self.slides.get(index).copied()
    }
}
