//! A tileset-backed sprite sheet.

use crate::animation::Tick;
use crate::node::{Behavior, Node};
use crate::render::{Command, Frame};
use crate::resources::Resources;
use crate::stage::{NodeId, Stage};
use crate::transform::Transform;

/// Cell range and timing for a looping sheet animation.
#[derive(Debug, Clone, Copy)]
struct CellLoop {
    first: u32,
    last: u32,
    frame_ms: f32,
    timer_ms: f32,
}

/// Draws one cell of a registered tileset over the node's bounds.
///
/// `play` starts a looping cell animation driven from the update walk,
/// so the node (and its ancestor path) must be flagged with
/// `Stage::enable_updating` for the cells to advance.
#[derive(Debug)]
pub struct Sheet {
    tileset: String,
    cell: u32,
    cell_loop: Option<CellLoop>,
}

impl Sheet {
    pub fn new(tileset: impl Into<String>) -> Self {
        Self {
            tileset: tileset.into(),
            cell: 0,
            cell_loop: None,
        }
    }

    pub fn cell(&self) -> u32 {
        self.cell
    }

    /// Show a fixed cell, stopping any running loop.
    pub fn set_cell(&mut self, cell: u32) {
        self.cell = cell;
        self.cell_loop = None;
    }

    /// Loop through `first..=last`, holding each cell for `frame_ms`.
    pub fn play(&mut self, first: u32, last: u32, frame_ms: f32) {
        self.cell = first;
        self.cell_loop = Some(CellLoop {
            first,
            last,
            frame_ms,
            timer_ms: 0.0,
        });
    }

    pub fn is_playing(&self) -> bool {
        self.cell_loop.is_some()
    }

    /// Stop the loop, keeping whatever cell is showing.
    pub fn stop(&mut self) {
        self.cell_loop = None;
    }
}

impl Behavior for Sheet {
    fn on_update(&mut self, _stage: &mut Stage, _id: NodeId, tick: &Tick) {
        let Some(cell_loop) = self.cell_loop.as_mut() else {
            return;
        };
        if cell_loop.frame_ms <= 0.0 {
            return;
        }
        cell_loop.timer_ms += tick.delta_ms;
        while cell_loop.timer_ms >= cell_loop.frame_ms {
            cell_loop.timer_ms -= cell_loop.frame_ms;
            self.cell = if self.cell >= cell_loop.last {
                cell_loop.first
            } else {
                self.cell + 1
            };
        }
    }

    fn on_draw(&mut self, node: &Node, resources: &Resources, transform: &Transform, frame: &mut Frame) {
        let Some(tileset) = resources.tileset(&self.tileset) else {
            return;
        };
        let Some(uv) = tileset.tile_uv(self.cell) else {
            return;
        };
        frame.push(Command::Tile {
            tileset: self.tileset.clone(),
            uv,
            rect: node.render_rect(),
            transform: *transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Bitmap, Tileset};

    fn tick(delta_ms: f32) -> Tick {
        Tick::from_delta(delta_ms, 0.0)
    }

    fn resources_with_tiles() -> Resources {
        let mut resources = Resources::new();
        let bitmap = Bitmap::from_pixels(32, 16, vec![0u8; 32 * 16 * 4]);
        resources
            .add_tileset("walk", Tileset::new(bitmap, 16, 16))
            .unwrap();
        resources
    }

    #[test]
    fn test_loop_advances_and_wraps() {
        let mut stage = Stage::new();
        let id = stage.insert_root(Node::new("probe", crate::node::Inert));

        let mut sheet = Sheet::new("walk");
        sheet.play(0, 1, 100.0);
        assert_eq!(sheet.cell(), 0);

        sheet.on_update(&mut stage, id, &tick(100.0));
        assert_eq!(sheet.cell(), 1);
        sheet.on_update(&mut stage, id, &tick(100.0));
        assert_eq!(sheet.cell(), 0);

        // A long frame steps through several cells
        sheet.on_update(&mut stage, id, &tick(250.0));
        assert_eq!(sheet.cell(), 0);
    }

    #[test]
    fn test_set_cell_stops_loop() {
        let mut sheet = Sheet::new("walk");
        sheet.play(0, 3, 50.0);
        sheet.set_cell(2);
        assert!(!sheet.is_playing());
        assert_eq!(sheet.cell(), 2);
    }

    #[test]
    fn test_draw_emits_tile_with_cell_uv() {
        let resources = resources_with_tiles();
        let mut sheet = Sheet::new("walk");
        sheet.set_cell(1);
        let node = Node::new("walker", Sheet::new("walk"));
        let mut frame = Frame::new();
        sheet.on_draw(&node, &resources, &Transform::IDENTITY, &mut frame);

        match &frame.commands()[0] {
            Command::Tile { uv, .. } => {
                assert_eq!(uv.x, 0.5);
                assert_eq!(uv.y, 0.0);
            }
            other => panic!("expected tile, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_cell_draws_nothing() {
        let resources = resources_with_tiles();
        let mut sheet = Sheet::new("walk");
        sheet.set_cell(99);
        let node = Node::new("walker", Sheet::new("walk"));
        let mut frame = Frame::new();
        sheet.on_draw(&node, &resources, &Transform::IDENTITY, &mut frame);
        assert!(frame.is_empty());
    }
}
