use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{LINK_DISTANCE, LINK_OPACITY, PARTICLE_COUNT, VELOCITY_RANGE};
use crate::palette::Palette;
use crate::particle::{self, Link, Particle};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Tunables for the particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Number of particles seeded at startup.
    pub count: usize,
    /// Full per-axis velocity range.
    pub speed: f64,
    /// Pairs closer than this are linked.
    pub link_distance: f64,
    /// Link opacity at distance zero.
    pub link_opacity: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            speed: VELOCITY_RANGE,
            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY,
        }
    }
}

/// Particle field state, independent of the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    pub width: f64,
    pub height: f64,
}

impl EngineCore {
    /// Seed a field of `params.count` particles inside `width` × `height`.
    ///
    /// The same seed always yields the same field.
    #[must_use]
    pub fn seeded(params: FieldParams, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.count)
            .map(|_| Particle::random(&mut rng, width, height, params.speed))
            .collect();
        Self { particles, params, width, height }
    }

    /// Change the field bounds. Particles keep their positions and wrap on their next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(width, height);
        }
    }

    /// Links to draw for the current positions.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        particle::links(&self.particles, self.params.link_distance, self.params.link_opacity)
    }
}

/// The full particle engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`, sized to the element's layout box.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, params: FieldParams, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let (width, height) = layout_size(&canvas);
        let core = EngineCore::seeded(params, width, height, seed);
        let mut engine = Self { canvas, ctx, core };
        engine.fit_to_element();
        Ok(engine)
    }

    /// Match the backing store to the element's current layout size.
    ///
    /// Called once at startup and again on every viewport resize.
    pub fn fit_to_element(&mut self) {
        let (width, height) = layout_size(&self.canvas);
        self.canvas.set_width(px(width));
        self.canvas.set_height(px(height));
        self.core.resize(width, height);
    }

    /// Step the field and draw it with the given palette.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, palette: &Palette) -> Result<(), JsValue> {
        self.core.step();
        render::draw(&self.ctx, &self.core, palette)
    }
}

fn layout_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (f64::from(canvas.offset_width().max(0)), f64::from(canvas.offset_height().max(0)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn px(size: f64) -> u32 {
    size.max(0.0) as u32
}
