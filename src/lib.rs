//! flipbook — a retained-mode 2D scene graph for page-based content.
//!
//! A [`Book`](book::Book) owns pages, shared resources, and the viewport
//! mapping from logical document units to render space. Each
//! [`Page`](page::Page) owns a tree of nodes; every node carries logical
//! geometry, a sibling draw order, flags, and a list of active animations.
//! Once per frame the book updates the current page's tree (animations
//! first, then behavior hooks, recursing only into update-flagged
//! children) and then draws every visible page, composing transforms
//! top-down and nesting overflow clips through a monotonically increasing
//! stencil mask index.
//!
//! Nothing here rasterizes: drawing produces an ordered
//! [`Command`](render::Command) list in a reusable [`Frame`](render::Frame)
//! for a GPU backend to replay. Node subtypes hook in through the
//! [`Behavior`](node::Behavior) trait; a handful of stock behaviors live
//! in [`controls`].
//!
//! ```no_run
//! use flipbook::prelude::*;
//!
//! let mut book = Book::new(320, 180);
//! let page = book.add_page("cover").expect("fresh book");
//! let frame_node = page.add(Node::new("frame", Panel::new(Color::from_hex(0x223344))));
//! page.set_size(frame_node, 100, 60);
//! page.set_position(frame_node, 10, 10);
//!
//! let mut frame = Frame::new();
//! book.update(16.7);
//! book.draw(&mut frame, &Transform::IDENTITY);
//! ```

pub mod animation;
pub mod book;
pub mod controls;
pub mod node;
pub mod page;
pub mod render;
pub mod resources;
pub mod stage;
pub mod transform;

pub mod prelude {
    pub use crate::animation::{Animation, Pulse, Slide, Spin, Tick, TimingFunction};
    pub use crate::book::{Book, BookError};
    pub use crate::controls::{Label, Panel, Picture, Sheet};
    pub use crate::node::{Behavior, Inert, Node, NodeFlags};
    pub use crate::page::Page;
    pub use crate::render::{
        Color, Command, Frame, Rect, StencilMode, StencilState, Viewport,
    };
    pub use crate::resources::{
        Bitmap, FontFace, ResourceError, ResourceKind, Resources, Tileset,
    };
    pub use crate::stage::{NodeId, Stage};
    pub use crate::transform::Transform;
}
