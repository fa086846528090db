//! The scene-graph element: geometry, flags, draw order, animations, and
//! the behavior extension object that gives a node its visual content.

use std::any::Any;

use bitflags::bitflags;

use crate::animation::{Animation, Tick};
use crate::render::{Frame, Rect, Viewport};
use crate::resources::Resources;
use crate::stage::{NodeId, Stage};
use crate::transform::Transform;

bitflags! {
    /// Per-node state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u8 {
        /// The node and its subtree are drawn. Children stay in the tree
        /// when this is cleared; they are just skipped.
        const VISIBLE = 1 << 0;
        /// Children are clipped to this node's bounds via a stencil mask.
        const HIDE_OVERFLOW = 1 << 1;
        /// The node participates in the per-frame update walk. Set through
        /// `Stage::enable_updating`, which also flags every ancestor;
        /// never cleared by the tree itself.
        const NEEDS_UPDATE = 1 << 2;
    }
}

/// A scene-graph node.
///
/// Nodes are stored in a [`Stage`] arena and addressed by [`NodeId`]; the
/// struct itself is what behaviors see during draw. Logical geometry is
/// parent-relative integer document space; render-space geometry is derived
/// from it whenever geometry or viewport parameters change.
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) animations: Vec<Box<dyn Animation>>,
    pub(crate) behavior: Box<dyn Behavior>,

    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,

    pub(crate) render_x: f32,
    pub(crate) render_y: f32,
    pub(crate) render_width: f32,
    pub(crate) render_height: f32,

    pub(crate) flags: NodeFlags,
    /// Sort key among siblings; not required to be contiguous
    pub(crate) draw_order: f32,
    /// Depth-axis offset pushed into the working transform during draw
    pub(crate) depth: f32,

    /// Back-pointer into the arena's sparse array (for swap-remove fixup)
    pub(crate) sparse_index: u32,
}

impl Node {
    /// Create a detached node. It joins a tree through `Stage::insert`.
    pub fn new(name: impl Into<String>, behavior: impl Behavior + 'static) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            animations: Vec::new(),
            behavior: Box::new(behavior),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            render_x: 0.0,
            render_y: 0.0,
            render_width: 0.0,
            render_height: 0.0,
            flags: NodeFlags::VISIBLE,
            draw_order: 0.0,
            depth: 0.0,
            sparse_index: 0,
        }
    }

    /// Set the sibling sort key before insertion.
    pub fn with_draw_order(mut self, draw_order: f32) -> Self {
        self.draw_order = draw_order;
        self
    }

    /// Set the depth-axis offset before insertion.
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children, ascending by draw order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Logical position relative to the parent
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Logical size in document units
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Derived render-space bounds
    pub fn render_rect(&self) -> Rect {
        Rect::new(
            self.render_x,
            self.render_y,
            self.render_width,
            self.render_height,
        )
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE)
    }

    pub fn draw_order(&self) -> f32 {
        self.draw_order
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("children", &self.children.len())
            .field("draw_order", &self.draw_order)
            .field("flags", &self.flags)
            .finish()
    }
}

/// The extension points a node subtype can implement. Every hook defaults
/// to a no-op, so a behavior only writes the parts it cares about.
///
/// Hooks that run during the update walk get mutable tree access; hooks
/// that run during the draw walk get the node snapshot, the resource table,
/// and the finished working transform. Draw-side hooks must not mutate the
/// tree — both walks hold positions into live child lists.
pub trait Behavior: Any {
    /// One-time notification that the rendering context exists. Allocate
    /// renderer-side state (texture uploads and the like) here.
    fn on_ready(&mut self, stage: &mut Stage, id: NodeId) {
        let _ = (stage, id);
    }

    /// The viewport parameters changed; render-space geometry has already
    /// been re-derived by the time this runs.
    fn on_screen_dimensions_changed(&mut self, stage: &mut Stage, id: NodeId, viewport: &Viewport) {
        let _ = (stage, id, viewport);
    }

    /// Per-frame update, after this node's animations have advanced.
    fn on_update(&mut self, stage: &mut Stage, id: NodeId, tick: &Tick) {
        let _ = (stage, id, tick);
    }

    /// Emit draw commands for this node's own content.
    fn on_draw(&mut self, node: &Node, resources: &Resources, transform: &Transform, frame: &mut Frame) {
        let _ = (node, resources, transform, frame);
    }

    /// Carve a clipping mask for this node's children and return the mask
    /// index they must test against. Runs only when `HIDE_OVERFLOW` is
    /// set; returning `mask_index` unchanged means no mask was claimed.
    fn on_apply_mask(
        &mut self,
        node: &Node,
        transform: &Transform,
        frame: &mut Frame,
        mask_index: u32,
    ) -> u32 {
        let _ = (node, transform, frame);
        mask_index
    }
}

/// A behavior with no content. Used for grouping nodes and page roots, and
/// as the stand-in while a node's real behavior is checked out during a
/// traversal callback.
#[derive(Debug, Default)]
pub struct Inert;

impl Behavior for Inert {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let node = Node::new("hero", Inert);
        assert_eq!(node.name(), "hero");
        assert!(node.is_visible());
        assert!(!node.flags().contains(NodeFlags::NEEDS_UPDATE));
        assert_eq!(node.draw_order(), 0.0);
        assert_eq!(node.position(), (0, 0));
        assert_eq!(node.size(), (0, 0));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_builder_fields() {
        let node = Node::new("hero", Inert).with_draw_order(4.5).with_depth(2.0);
        assert_eq!(node.draw_order(), 4.5);
        assert_eq!(node.depth(), 2.0);
    }
}
