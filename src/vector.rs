//! Mutable 2D displacement vector.
//!
//! A [`Vector2D`] is a displacement, not a position. Magnitude and direction are
//! always derived from the components on demand; nothing is cached.
//!
//! Directions use the same Y-down convention as [`crate::point::Point`]:
//! 0° is +X and angles grow clockwise on screen. The zero vector has
//! direction 0, and normalizing it yields the unit vector `(1, 0)`.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use serde::{Deserialize, Serialize};

use crate::point::{Point, normalize_degrees};

/// A 2D displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of length `magnitude` pointing along `direction_deg`.
    #[must_use]
    pub fn from_displacement(direction_deg: f64, magnitude: f64) -> Self {
        let rad = direction_deg.to_radians();
        Self::new(rad.cos() * magnitude, rad.sin() * magnitude)
    }

    /// Displacement from `origin` to `point`, or `point` itself when `origin` is `None`.
    #[must_use]
    pub fn from_point(point: &Point, origin: Option<&Point>) -> Self {
        match origin {
            Some(o) => Self::new(point.x - o.x, point.y - o.y),
            None => Self::new(point.x, point.y),
        }
    }

    // --- Derived properties ---

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Rescale to `magnitude` keeping direction. The zero vector becomes `(magnitude, 0)`.
    pub fn set_magnitude(&mut self, magnitude: f64) -> &mut Self {
        self.normalize().scale(magnitude)
    }

    /// Direction in degrees, `[0, 360)`.
    #[must_use]
    pub fn direction(&self) -> f64 {
        // atan2 of signed zeros can give 180.
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        normalize_degrees(self.y.atan2(self.x).to_degrees())
    }

    // --- Copies ---

    #[must_use]
    pub fn copy(&self) -> Self {
        *self
    }

    #[must_use]
    pub fn copy_normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    #[must_use]
    pub fn copy_reversed(&self) -> Self {
        let mut v = *self;
        v.reverse();
        v
    }

    #[must_use]
    pub fn copy_orthogonal(&self, left: bool) -> Self {
        let mut v = *self;
        v.orthogonalize(left);
        v
    }

    // --- In-place ---

    pub fn reverse(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.reverse()
    }

    /// Scale to unit length. The zero vector becomes `(1, 0)`.
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.magnitude();
        if m == 0.0 {
            self.x = 1.0;
            self.y = 0.0;
        } else {
            self.x /= m;
            self.y /= m;
        }
        self
    }

    /// Rotate exactly 90° by swapping components. `left` gives `(y, -x)`, otherwise `(-y, x)`.
    pub fn orthogonalize(&mut self, left: bool) -> &mut Self {
        let (x, y) = (self.x, self.y);
        if left {
            self.x = y;
            self.y = -x;
        } else {
            self.x = -y;
            self.y = x;
        }
        self
    }

    pub fn add(&mut self, other: &Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn sub(&mut self, other: &Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Rotate by `angle_deg`; positive is clockwise on a Y-down screen.
    pub fn rotate(&mut self, angle_deg: f64) -> &mut Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * cos - y * sin;
        self.y = x * sin + y * cos;
        self
    }

    /// Rotate so the vector points along `angle_deg`.
    pub fn rotate_to(&mut self, angle_deg: f64) -> &mut Self {
        let delta = angle_deg - self.direction();
        self.rotate(delta)
    }

    // --- Products ---

    /// `|U| * |V| * cos(theta)`; only the plain cosine when both are unit vectors.
    #[must_use]
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl From<Point> for Vector2D {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}
