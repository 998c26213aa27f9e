//! Toy scene graph standing in for a real engine host.
//!
//! Nodes live in a flat id map; "rendering" is a printable summary of
//! the attached strip. Good enough to watch the carousel reorder,
//! clone and move pages without a windowing stack.

use std::collections::HashMap;

use page_carousel::{DuplicateError, Extent, PageHost, Point};
use tracing::info;

/// A renderable node on the demo stage.
#[derive(Clone)]
pub struct DemoNode {
    pub title: String,
    pub tint: &'static str,
    pub position: Point,
}

/// Minimal scene graph: nodes by id, a strip offset, an input binding.
pub struct DemoStage {
    extent: Extent,
    nodes: HashMap<u32, DemoNode>,
    attached: Vec<u32>,
    content_offset: Point,
    next_id: u32,
    input_bound: bool,
}

impl DemoStage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            extent: Extent::new(width, height),
            nodes: HashMap::new(),
            attached: Vec::new(),
            content_offset: Point::ZERO,
            next_id: 0,
            input_bound: false,
        }
    }

    /// Creates a detached node and returns its handle.
    pub fn spawn(&mut self, title: impl Into<String>, tint: &'static str) -> u32 {
        self.next_id += 1;
        self.nodes.insert(
            self.next_id,
            DemoNode {
                title: title.into(),
                tint,
                position: Point::ZERO,
            },
        );
        self.next_id
    }

    /// One-line rendering of the attached strip, in slot order.
    pub fn summary(&self) -> String {
        let mut strip: Vec<&DemoNode> = self
            .attached
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .collect();
        strip.sort_by(|a, b| {
            (a.position.x, -a.position.y)
                .partial_cmp(&(b.position.x, -b.position.y))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let pages: Vec<String> = strip
            .iter()
            .map(|node| format!("[{} {}]", node.title, node.tint))
            .collect();
        format!(
            "input bound: {}; offset ({:.0}, {:.0}); {}",
            self.input_bound,
            self.content_offset.x,
            self.content_offset.y,
            pages.join(" "),
        )
    }
}

impl PageHost for DemoStage {
    type Page = u32;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn is_valid(&self, page: &u32) -> bool {
        self.nodes.contains_key(page)
    }

    fn duplicate(&mut self, page: &u32) -> Result<u32, DuplicateError> {
        let node = self
            .nodes
            .get(page)
            .ok_or_else(|| DuplicateError::new("source node was destroyed"))?
            .clone();
        self.next_id += 1;
        self.nodes.insert(self.next_id, node);
        Ok(self.next_id)
    }

    fn attach(&mut self, page: &u32) {
        if !self.attached.contains(page) {
            self.attached.push(*page);
        }
    }

    fn remove(&mut self, page: &u32) {
        self.attached.retain(|attached| attached != page);
        self.nodes.remove(page);
    }

    fn place(&mut self, page: &u32, position: Point) {
        if let Some(node) = self.nodes.get_mut(page) {
            node.position = position;
        }
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    fn subscribe_input(&mut self) {
        self.input_bound = true;
        info!("gesture listeners registered");
    }

    fn unsubscribe_input(&mut self) {
        self.input_bound = false;
        info!("gesture listeners released");
    }
}
