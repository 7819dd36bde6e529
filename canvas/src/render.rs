//! Rendering: draws one particle frame to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it never mutates it.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::LINK_WIDTH;
use crate::engine::EngineCore;
use crate::palette::{LINK_RGB, Palette};

/// Clear the canvas, fill every particle, then stroke every link.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    palette: &Palette,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, core.width, core.height);

    for p in &core.particles {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
        ctx.set_fill_style_str(&palette.fill(p.tint).rgba(p.opacity));
        ctx.fill();
    }

    ctx.set_line_width(LINK_WIDTH);
    for link in core.links() {
        let (p, q) = (&core.particles[link.a], &core.particles[link.b]);
        ctx.begin_path();
        ctx.move_to(p.x, p.y);
        ctx.line_to(q.x, q.y);
        ctx.set_stroke_style_str(&LINK_RGB.rgba(link.opacity));
        ctx.stroke();
    }

    Ok(())
}
