//! Positioned bounding volumes.
//!
//! A [`Collider`] is a rectangle, a circle, or nothing, placed at `position`
//! and anchored through `origin`, the offset from the volume's top-left corner
//! to the point `position` refers to. Rectangles default to a top-left anchor,
//! circles to their centre.
//!
//! Circles keep the radius in the width slot and the diameter in the height
//! slot, so their positioning box is always a square of side `2r`. The public
//! [`Collider::width`], [`Collider::height`] and [`Collider::radius`] accessors
//! translate between the two layouts.
//!
//! `position_mut` / `origin_mut` hand out the live points: mutating them moves
//! the collider. Copy the point when an independent value is needed.

#[cfg(test)]
#[path = "collider_test.rs"]
mod collider_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collision;
use crate::consts::ORIGIN_DOT_RADIUS;
use crate::error::RenderError;
use crate::point::{Point, normalize_degrees};
use crate::render::{Color, Renderer};
use crate::stage::Stage;

/// Shape of a collider. Fixed for the collider's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderType {
    /// Takes part in no query.
    None,
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle.
    Circle,
}

/// A positioned bounding volume.
#[derive(Debug, Clone)]
pub struct Collider {
    stage: Rc<Stage>,
    kind: ColliderType,
    position: Point,
    origin: Point,
    /// Degrees in `[0, 360)`. Only affects rendering.
    angle: f64,
    /// Rectangle width, or circle radius.
    width: f64,
    /// Rectangle height, or circle diameter.
    height: f64,
}

impl Collider {
    /// Create a collider at `(x, y)`.
    ///
    /// For circles `width_or_radius` is the radius and `height` is ignored.
    #[must_use]
    pub fn new(stage: Rc<Stage>, kind: ColliderType, x: f64, y: f64, width_or_radius: f64, height: f64) -> Self {
        let (width, height, origin) = match kind {
            ColliderType::Circle => {
                let radius = width_or_radius;
                (radius, radius * 2.0, Point::new(radius, radius))
            }
            ColliderType::Rectangle | ColliderType::None => (width_or_radius, height, Point::default()),
        };
        debug!(?kind, x, y, width, height, "collider created");
        Self { stage, kind, position: Point::new(x, y), origin, angle: 0.0, width, height }
    }

    #[must_use]
    pub fn rectangle(stage: Rc<Stage>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(stage, ColliderType::Rectangle, x, y, width, height)
    }

    #[must_use]
    pub fn circle(stage: Rc<Stage>, x: f64, y: f64, radius: f64) -> Self {
        Self::new(stage, ColliderType::Circle, x, y, radius, 0.0)
    }

    #[must_use]
    pub fn none(stage: Rc<Stage>, x: f64, y: f64) -> Self {
        Self::new(stage, ColliderType::None, x, y, 0.0, 0.0)
    }

    // --- Accessors ---

    #[must_use]
    pub fn kind(&self) -> ColliderType {
        self.kind
    }

    #[must_use]
    pub fn stage(&self) -> &Rc<Stage> {
        &self.stage
    }

    #[must_use]
    pub fn position(&self) -> &Point {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    pub fn set_position(&mut self, position: &Point) {
        self.position.set_to(position);
    }

    #[must_use]
    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn origin_mut(&mut self) -> &mut Point {
        &mut self.origin
    }

    pub fn set_origin(&mut self, origin: &Point) {
        self.origin.set_to(origin);
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the render angle in degrees, folded into `[0, 360)`.
    pub fn set_angle(&mut self, angle_deg: f64) {
        self.angle = normalize_degrees(angle_deg);
    }

    /// Width of the positioning box (the diameter for circles).
    #[must_use]
    pub fn width(&self) -> f64 {
        match self.kind {
            ColliderType::Circle => self.height,
            ColliderType::Rectangle | ColliderType::None => self.width,
        }
    }

    /// Height of the positioning box (the diameter for circles).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Circle radius; 0 for other kinds.
    #[must_use]
    pub fn radius(&self) -> f64 {
        match self.kind {
            ColliderType::Circle => self.width,
            ColliderType::Rectangle | ColliderType::None => 0.0,
        }
    }

    /// Absolute top-left of the positioning box.
    fn top_left(&self) -> Point {
        Point::new(self.position.x - self.origin.x, self.position.y - self.origin.y)
    }

    /// Absolute top-left and size of the positioning box. `None` for [`ColliderType::None`].
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, f64, f64)> {
        match self.kind {
            ColliderType::None => None,
            ColliderType::Rectangle | ColliderType::Circle => Some((self.top_left(), self.width(), self.height())),
        }
    }

    /// Absolute centre of the positioning box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.top_left().copy_translated_xy(self.width() / 2.0, self.height() / 2.0)
    }

    // --- Queries ---

    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    #[must_use]
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        let corner = self.top_left();
        match self.kind {
            ColliderType::None => false,
            ColliderType::Rectangle => collision::point_in_rect(x, y, corner.x, corner.y, self.width, self.height),
            ColliderType::Circle => {
                let r = self.radius();
                collision::point_in_circle(x, y, corner.x + r, corner.y + r, r)
            }
        }
    }

    /// Whether the two volumes overlap. Symmetric in its arguments.
    #[must_use]
    pub fn collides_with(&self, other: &Collider) -> bool {
        match (self.kind, other.kind) {
            (ColliderType::None, _) | (_, ColliderType::None) => false,
            (ColliderType::Rectangle, ColliderType::Rectangle) => {
                let a = self.top_left();
                let b = other.top_left();
                collision::rect_in_rect(a.x, a.y, self.width, self.height, b.x, b.y, other.width, other.height)
            }
            (ColliderType::Circle, ColliderType::Circle) => {
                let a = self.center();
                let b = other.center();
                collision::circle_in_circle(a.x, a.y, self.radius(), b.x, b.y, other.radius())
            }
            (ColliderType::Rectangle, ColliderType::Circle) => rect_touches_circle(self, other),
            (ColliderType::Circle, ColliderType::Rectangle) => rect_touches_circle(other, self),
        }
    }

    /// First point where the directed segment `p0 -> p1` enters or leaves this volume.
    ///
    /// Only rectangles answer; circles and `None` colliders always return `None`.
    pub fn intersect_with_segment(&self, p0: &Point, p1: &Point, result: Option<&mut Point>) -> Option<Point> {
        match self.kind {
            ColliderType::Rectangle => {
                collision::segment_rectangle_intersection(p0, p1, &self.top_left(), self.width, self.height, result)
            }
            ColliderType::Circle | ColliderType::None => None,
        }
    }

    pub fn intersect_with_segment_xy(
        &self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        result: Option<&mut Point>,
    ) -> Option<Point> {
        self.intersect_with_segment(&Point::new(x0, y0), &Point::new(x1, y1), result)
    }

    // --- Debug drawing ---

    /// Draw the volume and its origin marker at `(x, y)` using the stage's colours.
    ///
    /// # Errors
    ///
    /// Propagates any [`RenderError`] from the renderer.
    pub fn render_volume(&self, x: f64, y: f64, renderer: &mut impl Renderer) -> Result<(), RenderError> {
        let color = self.stage.config().volume_color.clone();
        self.render_volume_with(x, y, &color, renderer)
    }

    /// Like [`Collider::render_volume`] with an explicit stroke colour.
    ///
    /// `restore` runs exactly once per call, even when the transform or a draw
    /// call fails, so the renderer's state stack stays balanced.
    ///
    /// # Errors
    ///
    /// Propagates any [`RenderError`] from the renderer.
    pub fn render_volume_with(
        &self,
        x: f64,
        y: f64,
        color: &Color,
        renderer: &mut impl Renderer,
    ) -> Result<(), RenderError> {
        trace!(kind = ?self.kind, x, y, angle = self.angle, "render volume");
        let drawn = renderer
            .translate_and_rotate(x, y, self.angle)
            .and_then(|()| self.draw_volume(color, renderer));
        renderer.restore();
        drawn
    }

    fn draw_volume(&self, color: &Color, renderer: &mut impl Renderer) -> Result<(), RenderError> {
        let config = self.stage.config();
        let line_width = config.volume_line_width;
        match self.kind {
            ColliderType::Rectangle => {
                renderer.stroke_rect(-self.origin.x, -self.origin.y, self.width, self.height, color, line_width)?;
            }
            ColliderType::Circle => {
                let r = self.radius();
                renderer.stroke_circle(r - self.origin.x, r - self.origin.y, r, color, line_width)?;
            }
            ColliderType::None => {}
        }
        renderer.fill_circle(0.0, 0.0, ORIGIN_DOT_RADIUS, &config.origin_color)
    }
}

fn rect_touches_circle(rect: &Collider, circle: &Collider) -> bool {
    let corner = rect.top_left();
    let center = circle.center();
    collision::rect_in_circle(corner.x, corner.y, rect.width, rect.height, center.x, center.y, circle.radius())
}
