//! The renderer boundary: colors, rectangles, viewport mapping, stencil
//! configuration, and the per-frame command list.
//!
//! The scene graph does not rasterize anything itself. Each draw traversal
//! appends an ordered list of [`Command`]s to a [`Frame`]; a GPU backend
//! replays the list. The core only ever emits stencil-state changes — the
//! draw payloads come from node behaviors.

use bytemuck::{Pod, Zeroable};

use crate::transform::Transform;

/// An RGBA color with components in `[0, 1]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// An axis-aligned rectangle in render-space units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The mapping from logical document units to render-space units.
///
/// Logical coordinates are parent-relative integers in document space with
/// the origin at the top-left; render space is the renderer's floating-point
/// space with the origin at the bottom-left. The viewport carries both the
/// logical document size and the render-space window it maps onto, and is
/// replaced wholesale on size/orientation events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical document width in document units
    pub logical_width: i32,
    /// Logical document height in document units
    pub logical_height: i32,
    /// Render-space x of the document's left edge
    pub left: f32,
    /// Render-space y of the document's bottom edge
    pub bottom: f32,
    /// Render-space width of the document
    pub render_width: f32,
    /// Render-space height of the document
    pub render_height: f32,
}

impl Viewport {
    /// A viewport mapping the logical document 1:1 onto render space,
    /// anchored at the render-space origin.
    pub fn unit(logical_width: i32, logical_height: i32) -> Self {
        Self {
            logical_width,
            logical_height,
            left: 0.0,
            bottom: 0.0,
            render_width: logical_width as f32,
            render_height: logical_height as f32,
        }
    }

    /// Horizontal render units per logical unit
    pub fn scale_x(&self) -> f32 {
        self.render_width / self.logical_width as f32
    }

    /// Vertical render units per logical unit
    pub fn scale_y(&self) -> f32 {
        self.render_height / self.logical_height as f32
    }
}

/// How the stencil channel is configured for subsequent draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilMode {
    /// Draw color only where the stencil value equals the reference.
    /// Depth and stencil writes are disabled.
    TestEqual,
    /// Increment the stencil value where it equals the reference; color
    /// and depth writes are disabled. Used to carve a nested mask.
    IncrementWhereEqual,
}

/// A stencil configuration change emitted into the command list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilState {
    /// The mask index compared against the stencil channel
    pub reference: u32,
    pub mode: StencilMode,
}

impl StencilState {
    /// Content is drawn only where it lies inside all active masks.
    pub fn test_equal(reference: u32) -> Self {
        Self {
            reference,
            mode: StencilMode::TestEqual,
        }
    }

    /// Subsequent geometry raises the stencil value inside `reference`.
    pub fn carve(reference: u32) -> Self {
        Self {
            reference,
            mode: StencilMode::IncrementWhereEqual,
        }
    }
}

/// A single operation in the per-frame command list.
///
/// Geometry is in render-space units; `transform` is the node's finished
/// working transform, including animation contributions. Asset references
/// are resource-table ids resolved by the consumer.
#[derive(Debug, Clone)]
pub enum Command {
    /// Reconfigure the stencil channel for the commands that follow.
    Stencil(StencilState),

    /// A solid rectangle.
    Rect {
        rect: Rect,
        color: Color,
        transform: Transform,
    },

    /// A registered image stretched over `rect`.
    Sprite {
        image: String,
        rect: Rect,
        transform: Transform,
    },

    /// One cell of a registered tileset; `uv` is the cell's sub-rectangle
    /// of the tileset image in `[0, 1]` texture coordinates.
    Tile {
        tileset: String,
        uv: Rect,
        rect: Rect,
        transform: Transform,
    },

    /// A text run in a registered font.
    Text {
        font: String,
        text: String,
        rect: Rect,
        color: Color,
        transform: Transform,
    },
}

/// The ordered command list for one frame.
///
/// A frame is meant to be allocated once and reused: [`Frame::reset`] clears
/// the list but keeps its capacity, so steady-state drawing does not
/// allocate.
#[derive(Debug, Default)]
pub struct Frame {
    commands: Vec<Command>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the command list, keeping capacity for the next frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Append a command.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Append a stencil reconfiguration.
    pub fn set_stencil(&mut self, state: StencilState) {
        self.commands.push(Command::Stencil(state));
    }

    /// The recorded commands, in draw order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(50.0, 40.0));
        assert!(!rect.contains(110.0, 70.0));
        assert!(!rect.contains(5.0, 40.0));
    }

    #[test]
    fn test_viewport_scale() {
        let viewport = Viewport {
            logical_width: 800,
            logical_height: 600,
            left: -1.0,
            bottom: -1.0,
            render_width: 2.0,
            render_height: 2.0,
        };
        assert_eq!(viewport.scale_x(), 2.0 / 800.0);
        assert_eq!(viewport.scale_y(), 2.0 / 600.0);
    }

    #[test]
    fn test_viewport_unit() {
        let viewport = Viewport::unit(320, 240);
        assert_eq!(viewport.scale_x(), 1.0);
        assert_eq!(viewport.scale_y(), 1.0);
        assert_eq!(viewport.left, 0.0);
        assert_eq!(viewport.bottom, 0.0);
    }

    #[test]
    fn test_frame_reuse() {
        let mut frame = Frame::new();
        frame.set_stencil(StencilState::test_equal(0));
        frame.push(Command::Rect {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            color: Color::WHITE,
            transform: Transform::IDENTITY,
        });
        assert_eq!(frame.len(), 2);

        frame.reset();
        assert!(frame.is_empty());
    }
}
