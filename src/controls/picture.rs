//! A still image stretched over the node's bounds.

use crate::node::{Behavior, Node};
use crate::render::{Command, Frame};
use crate::resources::Resources;
use crate::transform::Transform;

/// Draws a registered image over the node's bounds. Draws nothing while
/// the image id is unregistered.
#[derive(Debug)]
pub struct Picture {
    image: String,
}

impl Picture {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Point the node at a different registered image.
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }
}

impl Behavior for Picture {
    fn on_draw(&mut self, node: &Node, resources: &Resources, transform: &Transform, frame: &mut Frame) {
        if resources.image(&self.image).is_none() {
            return;
        }
        frame.push(Command::Sprite {
            image: self.image.clone(),
            rect: node.render_rect(),
            transform: *transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Bitmap;

    #[test]
    fn test_draw_with_registered_image() {
        let mut resources = Resources::new();
        resources
            .add_image("logo", Bitmap::from_pixels(2, 2, vec![0u8; 16]))
            .unwrap();

        let mut picture = Picture::new("logo");
        let node = Node::new("logo", Picture::new("logo"));
        let mut frame = Frame::new();
        picture.on_draw(&node, &resources, &Transform::IDENTITY, &mut frame);

        assert!(matches!(frame.commands()[0], Command::Sprite { .. }));
    }

    #[test]
    fn test_missing_image_draws_nothing() {
        let mut picture = Picture::new("ghost");
        let node = Node::new("logo", Picture::new("ghost"));
        let mut frame = Frame::new();
        picture.on_draw(&node, &Resources::new(), &Transform::IDENTITY, &mut frame);
        assert!(frame.is_empty());
    }
}
