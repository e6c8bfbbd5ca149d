//! The document surface a widget runs against.
//!
//! The host (a browser bridge, the demo's in-memory document, a test
//! double) supplies element queries, style animation, and measurement.
//! The widget owns all state and scheduling; nothing is ever stored on
//! the document itself.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Opaque handle to an element owned by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

pub trait Dom: Send + Sync {
    /// Elements matching `selector` in document order. Selectors are the
    /// minimal set the widget uses: `#id`, `.class`, or a bare tag name.
    /// With `scope` set, only descendants of `scope` match.
    fn query(&self, scope: Option<NodeId>, selector: &str) -> Vec<NodeId>;

    /// Detach an element (and its subtree) from the document.
    fn remove(&self, node: NodeId);

    /// Animate an element's opacity to zero over `duration`. A zero
    /// duration hides it instantly.
    fn fade_out(&self, node: NodeId, duration: Duration);

    /// Animate an element's opacity to full over `duration`.
    fn fade_in(&self, node: NodeId, duration: Duration);

    /// Rendered inner width of an element.
    fn inner_width(&self, node: NodeId) -> f64;

    /// Rendered outer height of an element, margins included.
    fn outer_height(&self, node: NodeId) -> f64;

    /// Natural size of an image element, with explicit sizing cleared.
    fn natural_size(&self, node: NodeId) -> (f64, f64);

    /// Absolutely position an image within its slide.
    fn set_image_bounds(&self, node: NodeId, width: f64, height: f64, left: f64, top: f64);

    /// Set an explicit height on an element.
    fn set_height(&self, node: NodeId, height: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeKind {
    In,
    Out,
}

/// One recorded fade, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub node: NodeId,
    pub kind: FadeKind,
    pub duration: Duration,
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<usize>,
    removed: bool,
    visible: bool,
    inner_width: f64,
    outer_height: f64,
    natural: (f64, f64),
    bounds: Option<(f64, f64, f64, f64)>,
    applied_height: Option<f64>,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<Node>,
    fades: Vec<Fade>,
    height_sets: usize,
}

/// In-memory [`Dom`] used by the demo binary and the test suite.
///
/// Fades apply their end state immediately (visibility flips on issue) and
/// are recorded in a log; transition pacing is owned by the widget's event
/// loop, not the document.
#[derive(Debug, Default)]
pub struct MemoryDom {
    inner: Mutex<Inner>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(
        &self,
        parent: Option<NodeId>,
        tag: &str,
        id: Option<&str>,
        classes: &[&str],
    ) -> NodeId {
        let mut inner = self.lock();
        let idx = inner.nodes.len();
        inner.nodes.push(Node {
            tag: tag.to_owned(),
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: parent.map(NodeId::index),
            visible: true,
            ..Node::default()
        });
        NodeId(idx as u32)
    }

    pub fn set_inner_width(&self, node: NodeId, width: f64) {
        self.lock().nodes[node.index()].inner_width = width;
    }

    pub fn set_outer_height(&self, node: NodeId, height: f64) {
        self.lock().nodes[node.index()].outer_height = height;
    }

    pub fn set_natural_size(&self, node: NodeId, width: f64, height: f64) {
        self.lock().nodes[node.index()].natural = (width, height);
    }

    /// Build the canonical fixture document: a container holding one
    /// `.slide` per natural image size (ids `slide-0..`), each with an
    /// `img` child and a `.slide-info` caption, plus the two navigation
    /// controls at document root.
    pub fn build_slideshow_fixture(&self, container_id: &str, naturals: &[(f64, f64)]) -> NodeId {
        let container = self.add_node(None, "div", Some(container_id), &[]);
        self.set_inner_width(container, 600.0);
        self.add_node(None, "a", Some("slideshow-left"), &[]);
        self.add_node(None, "a", Some("slideshow-right"), &[]);
        for (i, natural) in naturals.iter().enumerate() {
            let slide_id = format!("slide-{i}");
            let slide = self.add_node(Some(container), "div", Some(&slide_id), &["slide"]);
            let img = self.add_node(Some(slide), "img", None, &[]);
            self.set_natural_size(img, natural.0, natural.1);
            let info = self.add_node(Some(slide), "div", None, &["slide-info"]);
            self.set_outer_height(info, 40.0);
        }
        container
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.lock().nodes[node.index()].visible
    }

    pub fn is_removed(&self, node: NodeId) -> bool {
        self.lock().nodes[node.index()].removed
    }

    pub fn bounds(&self, node: NodeId) -> Option<(f64, f64, f64, f64)> {
        self.lock().nodes[node.index()].bounds
    }

    pub fn applied_height(&self, node: NodeId) -> Option<f64> {
        self.lock().nodes[node.index()].applied_height
    }

    /// How many times an explicit height was applied, across all nodes.
    pub fn height_sets(&self) -> usize {
        self.lock().height_sets
    }

    /// Every fade issued so far, in order.
    pub fn fades(&self) -> Vec<Fade> {
        self.lock().fades.clone()
    }

    pub fn clear_fades(&self) {
        self.lock().fades.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory dom lock poisoned")
    }
}

impl Dom for MemoryDom {
    fn query(&self, scope: Option<NodeId>, selector: &str) -> Vec<NodeId> {
        let inner = self.lock();
        let mut out = Vec::new();
        for idx in 0..inner.nodes.len() {
            if detached(&inner.nodes, idx) {
                continue;
            }
            if let Some(scope) = scope {
                if !is_descendant(&inner.nodes, idx, scope.index()) {
                    continue;
                }
            }
            if matches(&inner.nodes[idx], selector) {
                out.push(NodeId(idx as u32));
            }
        }
        out
    }

    fn remove(&self, node: NodeId) {
        self.lock().nodes[node.index()].removed = true;
    }

    fn fade_out(&self, node: NodeId, duration: Duration) {
        let mut inner = self.lock();
        inner.nodes[node.index()].visible = false;
        inner.fades.push(Fade {
            node,
            kind: FadeKind::Out,
            duration,
        });
    }

    fn fade_in(&self, node: NodeId, duration: Duration) {
        let mut inner = self.lock();
        inner.nodes[node.index()].visible = true;
        inner.fades.push(Fade {
            node,
            kind: FadeKind::In,
            duration,
        });
    }

    fn inner_width(&self, node: NodeId) -> f64 {
        self.lock().nodes[node.index()].inner_width
    }

    fn outer_height(&self, node: NodeId) -> f64 {
        self.lock().nodes[node.index()].outer_height
    }

    fn natural_size(&self, node: NodeId) -> (f64, f64) {
        self.lock().nodes[node.index()].natural
    }

    fn set_image_bounds(&self, node: NodeId, width: f64, height: f64, left: f64, top: f64) {
        self.lock().nodes[node.index()].bounds = Some((width, height, left, top));
    }

    fn set_height(&self, node: NodeId, height: f64) {
        let mut inner = self.lock();
        inner.nodes[node.index()].applied_height = Some(height);
        inner.height_sets += 1;
    }
}

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

fn matches(node: &Node, selector: &str) -> bool {
    if let Some(id) = selector.strip_prefix('#') {
        node.id.as_deref() == Some(id)
    } else if let Some(class) = selector.strip_prefix('.') {
        node.classes.iter().any(|c| c == class)
    } else {
        node.tag == selector
    }
}

/// True when the node or any ancestor has been removed.
fn detached(nodes: &[Node], mut idx: usize) -> bool {
    loop {
        let node = &nodes[idx];
        if node.removed {
            return true;
        }
        match node.parent {
            Some(parent) => idx = parent,
            None => return false,
        }
    }
}

/// Strict descendant: the scope node itself does not match.
fn is_descendant(nodes: &[Node], mut idx: usize, scope: usize) -> bool {
    while let Some(parent) = nodes[idx].parent {
        if parent == scope {
            return true;
        }
        idx = parent;
    }
    false
}
