//! A page: one screen of content, owning its node tree.
//!
//! The page is the draw-order root. It owns a [`Stage`] plus the root node
//! every top-level element hangs off, caches the viewport its container
//! last pushed so geometry setters don't need it passed around, and
//! forwards frame ticks and draw calls into the tree.

use crate::animation::Tick;
use crate::node::{Inert, Node};
use crate::render::{Frame, Viewport};
use crate::resources::Resources;
use crate::stage::{NodeId, Stage};
use crate::transform::Transform;

pub struct Page {
    name: String,
    stage: Stage,
    root: NodeId,
    viewport: Viewport,
    draw_order: f32,
    visible: bool,
}

impl Page {
    pub(crate) fn new(name: impl Into<String>, viewport: Viewport) -> Self {
        let mut stage = Stage::new();
        let root = stage.insert_root(Node::new("", Inert));
        stage.set_size(root, viewport.logical_width, viewport.logical_height, &viewport);
        Self {
            name: name.into(),
            stage,
            root,
            viewport,
            draw_order: 0.0,
            visible: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root every top-level node is attached under. Spans the whole
    /// logical document.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Sort key of this page within its book.
    pub fn draw_order(&self) -> f32 {
        self.draw_order
    }

    pub(crate) fn set_draw_order_value(&mut self, order: f32) {
        self.draw_order = order;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide or show the whole page. A hidden page still updates when it is
    /// the current page; it just draws nothing.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Attach a node directly under the page root.
    pub fn add(&mut self, node: Node) -> NodeId {
        self.stage.insert(self.root, node)
    }

    /// Attach a node under any live parent.
    pub fn insert(&mut self, parent: NodeId, node: Node) -> NodeId {
        self.stage.insert(parent, node)
    }

    /// Depth-first lookup from the page root.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.stage.find(self.root, name)
    }

    /// Remove the first top-level node with this name (with its subtree).
    pub fn remove(&mut self, name: &str) {
        self.stage.remove_child(self.root, name);
    }

    /// Re-key a top-level node. This is where a root-level
    /// `set_draw_order` lands, since those nodes' parent is the page.
    pub fn set_child_draw_order(&mut self, name: &str, order: f32) {
        self.stage.set_child_draw_order(self.root, name, order);
    }

    /// Move a node, deriving render-space geometry from the page's
    /// current viewport.
    pub fn set_position(&mut self, id: NodeId, x: i32, y: i32) {
        let viewport = self.viewport;
        self.stage.set_position(id, x, y, &viewport);
    }

    /// Resize a node against the page's current viewport.
    pub fn set_size(&mut self, id: NodeId, width: i32, height: i32) {
        let viewport = self.viewport;
        self.stage.set_size(id, width, height, &viewport);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Advance the page's tree by one frame.
    pub(crate) fn update(&mut self, tick: &Tick) {
        self.stage.update(self.root, tick);
    }

    /// Walk the tree and emit this page's draw commands, starting from the
    /// shared base transform at mask index 0.
    pub(crate) fn draw(&mut self, frame: &mut Frame, base: &Transform, resources: &Resources) {
        if !self.visible {
            return;
        }
        let viewport = self.viewport;
        self.stage
            .draw(self.root, resources, &viewport, frame, base, 0);
    }

    pub(crate) fn renderer_ready(&mut self) {
        self.stage.renderer_ready(self.root);
    }

    /// Adopt new viewport parameters and re-derive render-space geometry
    /// for the whole tree.
    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.stage.set_size(
            self.root,
            viewport.logical_width,
            viewport.logical_height,
            &viewport,
        );
        self.stage.update_screen_dimensions(self.root, &viewport);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("name", &self.name)
            .field("nodes", &self.stage.len())
            .field("draw_order", &self.draw_order)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Inert;

    fn page() -> Page {
        Page::new("cover", Viewport::unit(100, 50))
    }

    #[test]
    fn test_root_spans_document() {
        let page = page();
        let root = page.stage().get(page.root()).unwrap();
        assert_eq!(root.size(), (100, 50));
        let rect = root.render_rect();
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_add_and_find() {
        let mut page = page();
        let hero = page.add(Node::new("hero", Inert));
        let sword = page.insert(hero, Node::new("sword", Inert));
        assert_eq!(page.find("sword"), Some(sword));
        assert_eq!(page.find("shield"), None);

        page.remove("hero");
        assert!(!page.stage().contains(hero));
        assert!(!page.stage().contains(sword));
    }

    #[test]
    fn test_top_level_reorder() {
        let mut page = page();
        page.add(Node::new("x", Inert).with_draw_order(5.0));
        page.add(Node::new("y", Inert).with_draw_order(1.0));

        page.set_child_draw_order("x", 0.0);
        let names: Vec<&str> = page
            .stage()
            .children(page.root())
            .iter()
            .filter_map(|&c| page.stage().get(c).map(|n| n.name()))
            .collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn test_viewport_change_rederives_child_geometry() {
        let mut page = page();
        let node = page.add(Node::new("n", Inert));
        page.set_size(node, 10, 10);
        page.set_position(node, 5, 5);
        let before = page.stage().get(node).unwrap().render_rect();

        // Same logical document mapped onto a window twice the size
        let mut viewport = Viewport::unit(100, 50);
        viewport.render_width = 200.0;
        viewport.render_height = 100.0;
        page.set_viewport(viewport);

        let after = page.stage().get(node).unwrap().render_rect();
        assert_eq!(after.width, before.width * 2.0);
        assert_eq!(after.height, before.height * 2.0);
        assert_eq!(after.x, before.x * 2.0);
    }

    #[test]
    fn test_hidden_page_draws_nothing() {
        let mut page = page();
        page.add(Node::new("n", Inert));
        page.set_visible(false);

        let mut frame = Frame::new();
        page.draw(&mut frame, &Transform::IDENTITY, &Resources::new());
        assert!(frame.is_empty());
    }
}
