//! Mutable 2D point used as the position vocabulary across the engine.
//!
//! Screen coordinates are Y-down, so an angle of 0° points right and angles
//! grow clockwise. In-place operations return `&mut Self` for chaining;
//! `copy_*` operations leave `self` untouched and return a new point.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

use crate::consts::FULL_TURN_DEG;

/// A position in stage space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    // --- Copies ---

    #[must_use]
    pub fn copy(&self) -> Self {
        *self
    }

    #[must_use]
    pub fn copy_translated(&self, offset: &Point) -> Self {
        self.copy_translated_xy(offset.x, offset.y)
    }

    #[must_use]
    pub fn copy_translated_xy(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// New point with both components divided by `factor` and floored.
    #[must_use]
    pub fn copy_reduced(&self, factor: f64) -> Self {
        Self::new((self.x / factor).floor(), (self.y / factor).floor())
    }

    /// New point with both components multiplied by `factor` and floored.
    #[must_use]
    pub fn copy_scaled(&self, factor: f64) -> Self {
        Self::new((self.x * factor).floor(), (self.y * factor).floor())
    }

    // --- In-place ---

    pub fn set_to(&mut self, other: &Point) -> &mut Self {
        self.set_to_xy(other.x, other.y)
    }

    pub fn set_to_xy(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn translate(&mut self, offset: &Point) -> &mut Self {
        self.translate_xy(offset.x, offset.y)
    }

    pub fn translate_xy(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Divide both components by `factor`, flooring the result.
    pub fn reduce(&mut self, factor: f64) -> &mut Self {
        *self = self.copy_reduced(factor);
        self
    }

    /// Multiply both components by `factor`, flooring the result.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        *self = self.copy_scaled(factor);
        self
    }

    /// Clamp `x` into `[min, max]`.
    ///
    /// `max` is checked before `min`, so an inverted range (`min > max`) is not
    /// rejected: values above `max` become `max`, anything else below `min`
    /// becomes `min`.
    pub fn clamp_x(&mut self, min: f64, max: f64) -> &mut Self {
        self.x = clamp_sequential(self.x, min, max);
        self
    }

    /// Clamp `y` into `[min, max]`. Same ordering rules as [`Point::clamp_x`].
    pub fn clamp_y(&mut self, min: f64, max: f64) -> &mut Self {
        self.y = clamp_sequential(self.y, min, max);
        self
    }

    /// Clamp into `[0, width - 1] x [0, height - 1]`.
    pub fn clamp_to_stage(&mut self, stage_width: f64, stage_height: f64) -> &mut Self {
        self.clamp_x(0.0, stage_width - 1.0).clamp_y(0.0, stage_height - 1.0)
    }

    // --- Queries ---

    /// Exact component equality.
    #[must_use]
    pub fn equals(&self, other: &Point) -> bool {
        self.equals_xy(other.x, other.y)
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals_xy(&self, x: f64, y: f64) -> bool {
        self.x == x && self.y == y
    }

    /// The point `distance` away from `self` along `angle_deg`.
    #[must_use]
    pub fn point_at_angle(&self, angle_deg: f64, distance: f64) -> Self {
        let rad = angle_deg.to_radians();
        self.copy_translated_xy(rad.cos() * distance, rad.sin() * distance)
    }

    /// Angle from `self` to `other` in degrees, `[0, 360)`, clockwise from +X.
    #[must_use]
    pub fn angle_to(&self, other: &Point) -> f64 {
        self.angle_to_xy(other.x, other.y)
    }

    #[must_use]
    pub fn angle_to_xy(&self, x: f64, y: f64) -> f64 {
        normalize_degrees((y - self.y).atan2(x - self.x).to_degrees())
    }

    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_xy(other.x, other.y)
    }

    #[must_use]
    pub fn distance_xy(&self, x: f64, y: f64) -> f64 {
        self.distance_squared_xy(x, y).sqrt()
    }

    #[must_use]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        self.distance_squared_xy(other.x, other.y)
    }

    #[must_use]
    pub fn distance_squared_xy(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

fn clamp_sequential(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Fold an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(deg: f64) -> f64 {
    let folded = deg % FULL_TURN_DEG;
    if folded < 0.0 {
        // -1e-15 + 360 rounds to 360; keep the half-open range.
        let wrapped = folded + FULL_TURN_DEG;
        if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
    } else {
        folded
    }
}
