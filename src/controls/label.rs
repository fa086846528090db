//! A text run in a registered font.

use crate::node::{Behavior, Node};
use crate::render::{Color, Command, Frame};
use crate::resources::Resources;
use crate::transform::Transform;

/// Draws its text within the node's bounds using a font from the resource
/// table. When the font id resolves to nothing the label draws nothing —
/// a dangling font reference is a caller bug the tree does not police.
#[derive(Debug)]
pub struct Label {
    font: String,
    text: String,
    color: Color,
}

impl Label {
    pub fn new(font: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            text: text.into(),
            color: Color::WHITE,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text. Reachable on a live node through
    /// `Stage::behavior_mut::<Label>`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Behavior for Label {
    fn on_draw(&mut self, node: &Node, resources: &Resources, transform: &Transform, frame: &mut Frame) {
        if resources.font(&self.font).is_none() {
            return;
        }
        frame.push(Command::Text {
            font: self.font.clone(),
            text: self.text.clone(),
            rect: node.render_rect(),
            color: self.color,
            transform: *transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::FontFace;

    #[test]
    fn test_draw_with_registered_font() {
        let mut resources = Resources::new();
        resources
            .add_font("body", FontFace::new(vec![0u8; 4], 16))
            .unwrap();

        let mut label = Label::new("body", "hello");
        let node = Node::new("greeting", Label::new("body", "hello"));
        let mut frame = Frame::new();
        label.on_draw(&node, &resources, &Transform::IDENTITY, &mut frame);

        match &frame.commands()[0] {
            Command::Text { font, text, .. } => {
                assert_eq!(font, "body");
                assert_eq!(text, "hello");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_font_draws_nothing() {
        let mut label = Label::new("ghost", "hello");
        let node = Node::new("greeting", Label::new("ghost", "hello"));
        let mut frame = Frame::new();
        label.on_draw(&node, &Resources::new(), &Transform::IDENTITY, &mut frame);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_set_text() {
        let mut label = Label::new("body", "0");
        label.set_text("1");
        assert_eq!(label.text(), "1");
    }
}
