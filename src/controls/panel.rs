//! A solid rectangle, and the standard overflow-clipping container.

use crate::node::{Behavior, Node};
use crate::render::{Color, Command, Frame, StencilState};
use crate::resources::Resources;
use crate::transform::Transform;

/// Fills the node's bounds with a color. With `HIDE_OVERFLOW` set on the
/// node, the panel also carves its bounds into the stencil channel so
/// children are clipped to it.
#[derive(Debug)]
pub struct Panel {
    color: Color,
}

impl Panel {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Behavior for Panel {
    fn on_draw(&mut self, node: &Node, _resources: &Resources, transform: &Transform, frame: &mut Frame) {
        frame.push(Command::Rect {
            rect: node.render_rect(),
            color: self.color,
            transform: *transform,
        });
    }

    fn on_apply_mask(
        &mut self,
        node: &Node,
        transform: &Transform,
        frame: &mut Frame,
        mask_index: u32,
    ) -> u32 {
        // Raise the stencil inside our bounds, then point subsequent
        // draws at the new index. Color is ignored while carving.
        frame.set_stencil(StencilState::carve(mask_index));
        frame.push(Command::Rect {
            rect: node.render_rect(),
            color: Color::TRANSPARENT,
            transform: *transform,
        });
        frame.set_stencil(StencilState::test_equal(mask_index + 1));
        mask_index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::render::StencilMode;

    fn node() -> Node {
        Node::new("panel", Panel::new(Color::WHITE))
    }

    #[test]
    fn test_draw_emits_rect() {
        let mut panel = Panel::new(Color::from_hex(0x336699));
        let mut frame = Frame::new();
        panel.on_draw(&node(), &Resources::new(), &Transform::IDENTITY, &mut frame);

        assert_eq!(frame.len(), 1);
        assert!(matches!(frame.commands()[0], Command::Rect { .. }));
    }

    #[test]
    fn test_mask_claims_next_index() {
        let mut panel = Panel::new(Color::WHITE);
        let mut frame = Frame::new();
        let next = panel.on_apply_mask(&node(), &Transform::IDENTITY, &mut frame, 3);

        assert_eq!(next, 4);
        // carve at 3, the bounds quad, then test-equal at 4
        match &frame.commands()[0] {
            Command::Stencil(s) => {
                assert_eq!(s.reference, 3);
                assert_eq!(s.mode, StencilMode::IncrementWhereEqual);
            }
            other => panic!("expected stencil carve, got {other:?}"),
        }
        assert!(matches!(frame.commands()[1], Command::Rect { .. }));
        match &frame.commands()[2] {
            Command::Stencil(s) => {
                assert_eq!(s.reference, 4);
                assert_eq!(s.mode, StencilMode::TestEqual);
            }
            other => panic!("expected stencil test, got {other:?}"),
        }
    }
}
