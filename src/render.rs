//! Renderer boundary used to visualise bounding volumes.
//!
//! The geometry core only ever needs the small capability set in
//! [`Renderer`]. [`CanvasRenderer`] is the browser implementation and is the
//! only place that touches [`web_sys::CanvasRenderingContext2d`]; every
//! fallible canvas call is mapped into [`RenderError`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::error::RenderError;

/// A CSS colour string such as `"#00FF00"` or `"rgba(0, 0, 0, 0.5)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

/// Drawing capabilities consumed by [`crate::collider::Collider::render_volume`].
///
/// `translate_and_rotate` pushes a state that stays in effect until the
/// matching `restore`. The push happens even when the call reports an error,
/// so every `translate_and_rotate` is paired with exactly one `restore`.
pub trait Renderer {
    /// Save state, move the origin to `(x, y)` and rotate by `angle_deg` clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] if the backend rejects the transform.
    /// The saved state must still be popped with [`Renderer::restore`].
    fn translate_and_rotate(&mut self, x: f64, y: f64, angle_deg: f64) -> Result<(), RenderError>;

    /// Outline an axis-aligned rectangle in the current transform.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] if the backend call fails.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Color, line_width: f64)
    -> Result<(), RenderError>;

    /// Outline a circle centred at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] if the backend call fails.
    fn stroke_circle(&mut self, x: f64, y: f64, r: f64, color: &Color, line_width: f64) -> Result<(), RenderError>;

    /// Fill a circle centred at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] if the backend call fails.
    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: &Color) -> Result<(), RenderError>;

    /// Pop the state pushed by the last `translate_and_rotate`.
    fn restore(&mut self);
}

/// [`Renderer`] backed by a browser canvas 2D context.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn circle_path(&self, x: f64, y: f64, r: f64) -> Result<(), RenderError> {
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, 2.0 * PI).map_err(backend)
    }
}

impl Renderer for CanvasRenderer {
    fn translate_and_rotate(&mut self, x: f64, y: f64, angle_deg: f64) -> Result<(), RenderError> {
        // Saved before anything can fail; the caller's restore pops it.
        self.ctx.save();
        self.ctx.translate(x, y).map_err(backend)?;
        self.ctx.rotate(angle_deg.to_radians()).map_err(backend)
    }

    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &Color,
        line_width: f64,
    ) -> Result<(), RenderError> {
        self.ctx.set_stroke_style_str(color.as_str());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(x, y, w, h);
        Ok(())
    }

    fn stroke_circle(&mut self, x: f64, y: f64, r: f64, color: &Color, line_width: f64) -> Result<(), RenderError> {
        self.circle_path(x, y, r)?;
        self.ctx.set_stroke_style_str(color.as_str());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: &Color) -> Result<(), RenderError> {
        self.circle_path(x, y, r)?;
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill();
        Ok(())
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

fn backend(err: JsValue) -> RenderError {
    RenderError::Backend(format!("{err:?}"))
}
