//! Ready-made node behaviors.
//!
//! These are reference implementations of the [`Behavior`] extension
//! points: a solid panel (which doubles as the overflow-clipping
//! container), a text label, a still image, and a tileset-backed sprite
//! sheet. Anything the tree itself needs works the same for hand-written
//! behaviors.
//!
//! [`Behavior`]: crate::node::Behavior

mod label;
mod panel;
mod picture;
mod sheet;

pub use label::Label;
pub use panel::Panel;
pub use picture::Picture;
pub use sheet::Sheet;
