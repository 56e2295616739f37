use std::ops::{Add, Mul, Neg, Sub};
use ggez::glam::Vec2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self: &Self, s: f32) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }

    pub fn length(self: &Self) -> f32 {
        f32::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn distance(self: &Self, other: Vector) -> f32 {
        (*self - other).length()
    }

    /// Unit vector in the same direction. A zero-length vector is divided by 1
    /// instead, so the zero vector comes back unchanged.
    pub fn normalize(self: &Self) -> Vector {
        let length = self.length();
        let divisor = if length == 0.0 { 1.0 } else { length };
        Vector::new(self.x / divisor, self.y / divisor)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Vec2 {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Vector {
        Vector::new(v.x, v.y)
    }
}
