// 2D vector math shared by the bumper and sled controllers

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Point or displacement on the playing field, in game units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn squared_mag(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn mag(&self) -> f64 {
        self.squared_mag().sqrt()
    }

    /// Unit vector pointing the same way as `self`
    ///
    /// The zero vector has no direction: the result has non-finite
    /// components. Callers must check the magnitude first.
    pub fn norm(&self) -> Self {
        let m = self.mag();
        Self::new(self.x / m, self.y / m)
    }

    /// Same direction as `self`, magnitude no greater than `d`
    ///
    /// A non-positive `d` yields the zero vector.
    pub fn limit(&self, d: f64) -> Self {
        if d <= 0.0 {
            return Self::ZERO;
        }
        let m = self.mag();
        if m > d {
            Self::new(d * self.x / m, d * self.y / m)
        } else {
            *self
        }
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).mag()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        v * self
    }
}
