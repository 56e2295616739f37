use std::fmt::{Display, Formatter};
use crate::vector::Vector;

pub const DEFAULT_STIFFNESS: f32 = 0.02;
pub const DEFAULT_DAMPING: f32 = 0.85;

/// Spring-damper constants shared by every movable point.
///
/// One call to [`Spring::step`] is one frame: there is no time scaling, so the
/// perceived speed follows the display refresh rate. Stable for
/// `0 < damping < 1` and a small `stiffness`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    /// Explicit Euler step: add the spring force to the velocity, damp the
    /// velocity, then advance the position with the damped velocity.
    pub fn step(self: &Self, point: &mut MovablePoint) {
        let force = (point.pos - point.target) * -self.stiffness;
        point.vel = (point.vel + force) * self.damping;
        point.pos = point.pos + point.vel;
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }
}

impl Display for Spring {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "k {:<6} damping {:<6}", self.stiffness, self.damping)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovablePoint {
    pub pos: Vector,
    pub vel: Vector,
    pub target: Vector,
}

impl MovablePoint {
    /// At rest on its own target.
    pub fn at(pos: Vector) -> Self {
        Self { pos, vel: Vector::ZERO, target: pos }
    }

    pub fn set_target(&mut self, target: Vector) {
        self.target = target;
    }

    pub fn is_settled(&self, eps_pos: f32, eps_vel: f32) -> bool {
        self.pos.distance(self.target) < eps_pos && self.vel.length() < eps_vel
    }

    pub fn snap_to_target(&mut self) {
        self.pos = self.target;
        self.vel = Vector::ZERO;
    }
}
