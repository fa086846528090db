//! Ready-made animations for the common motions: eased translation,
//! continuous rotation, and a scale pulse.

use super::{Animation, Tick, TimingFunction};
use crate::transform::Transform;

use std::f32::consts::TAU;

/// Eased translation from the node's resting place to an offset.
///
/// Finishes once the duration has elapsed; the final offset stays applied
/// until the animation is pruned, so callers that want the node to land
/// should move it with `set_position` when sweeping.
#[derive(Debug)]
pub struct Slide {
    offset_x: f32,
    offset_y: f32,
    duration_ms: f32,
    timing: TimingFunction,
    elapsed_ms: f32,
}

impl Slide {
    pub fn new(offset_x: f32, offset_y: f32, duration_ms: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            duration_ms,
            timing: TimingFunction::EaseOut,
            elapsed_ms: 0.0,
        }
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }
}

impl Animation for Slide {
    fn update(&mut self, tick: &Tick) {
        self.elapsed_ms += tick.delta_ms;
    }

    fn apply(&self, transform: &mut Transform) {
        let eased = self.timing.evaluate(self.progress());
        transform.translate_by(self.offset_x * eased, self.offset_y * eased, 0.0);
    }

    fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// Continuous rotation around the node's center.
#[derive(Debug)]
pub struct Spin {
    turns_per_second: f32,
    /// Stop after this many full turns; `None` spins forever
    turn_limit: Option<f32>,
    angle: f32,
}

impl Spin {
    pub fn new(turns_per_second: f32) -> Self {
        Self {
            turns_per_second,
            turn_limit: None,
            angle: 0.0,
        }
    }

    /// Stop after `turns` full revolutions.
    pub fn limit(mut self, turns: f32) -> Self {
        self.turn_limit = Some(turns);
        self
    }
}

impl Animation for Spin {
    fn update(&mut self, tick: &Tick) {
        self.angle += self.turns_per_second * TAU * tick.delta_ms / 1000.0;
        if let Some(limit) = self.turn_limit {
            self.angle = self.angle.min(limit * TAU);
        }
    }

    fn apply(&self, transform: &mut Transform) {
        transform.apply(&Transform::rotate(self.angle));
    }

    fn is_finished(&self) -> bool {
        match self.turn_limit {
            Some(limit) => self.angle >= limit * TAU,
            None => false,
        }
    }
}

/// A breathing scale oscillation around the node's center. Never finishes.
#[derive(Debug)]
pub struct Pulse {
    amplitude: f32,
    period_ms: f32,
    elapsed_ms: f32,
}

impl Pulse {
    pub fn new(amplitude: f32, period_ms: f32) -> Self {
        Self {
            amplitude,
            period_ms,
            elapsed_ms: 0.0,
        }
    }
}

impl Animation for Pulse {
    fn update(&mut self, tick: &Tick) {
        self.elapsed_ms += tick.delta_ms;
    }

    fn apply(&self, transform: &mut Transform) {
        let phase = TAU * self.elapsed_ms / self.period_ms;
        let scale = 1.0 + self.amplitude * phase.sin();
        transform.apply(&Transform::scale(scale));
    }
}
