//! Particle background engine for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! particle field drawn behind the hero section: seeding the particles,
//! advancing them every animation frame with wrap-around at the canvas edges,
//! finding the pairs close enough to be joined by a line, and drawing the
//! result to a 2D context. The host layer only decides when a frame runs and
//! which palette the current theme selects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`particle`] | Particle type, motion, and pairwise link detection |
//! | [`palette`] | Theme-dependent colors for particles and links |
//! | [`render`] | Draws one frame to a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (field size, link distance, etc.) |

pub mod consts;
pub mod engine;
pub mod palette;
pub mod particle;
pub mod render;
