//! Time-driven mutators attached to scene nodes.
//!
//! An animation lives in exactly one node's animation list. Every update
//! tick advances it; every draw lets it compose a contribution into the
//! node's working transform, which at that point is centered on the node —
//! so a plain scale or rotation pivots around the node's center.
//!
//! Finished animations are not removed by the tree. Callers decide when to
//! sweep them out (see `Stage::prune_finished_animations`).

mod effects;
mod timing;

pub use effects::{Pulse, Slide, Spin};
pub use timing::TimingFunction;

use crate::transform::Transform;

/// One frame's worth of time, handed down the update traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Milliseconds since the previous update
    pub delta_ms: f32,
    /// `delta_ms` relative to a 60 Hz reference frame; 1.0 means the frame
    /// took exactly one reference tick
    pub factor: f32,
    /// Milliseconds since the container started updating
    pub elapsed_ms: f32,
}

impl Tick {
    /// Milliseconds in one 60 Hz reference frame.
    pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;

    pub fn from_delta(delta_ms: f32, elapsed_ms: f32) -> Self {
        Self {
            delta_ms,
            factor: delta_ms / Self::REFERENCE_FRAME_MS,
            elapsed_ms,
        }
    }
}

/// A time-driven transform mutator owned by a node.
pub trait Animation {
    /// Advance the animation by one tick.
    fn update(&mut self, tick: &Tick);

    /// Compose this animation's contribution into the node's working
    /// transform. Called during draw, in animation-list order, with the
    /// transform centered on the node.
    fn apply(&self, transform: &mut Transform);

    /// True once the animation has run its course. The tree never checks
    /// this itself; removal is the caller's call.
    fn is_finished(&self) -> bool {
        false
    }
}
