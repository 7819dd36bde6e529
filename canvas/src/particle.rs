//! Particle model: seeding, per-frame motion, and link detection.
//!
//! Particles move in a straight line at constant velocity and wrap to the
//! opposite edge when they leave the field. Every frame, each distinct pair
//! closer than the link distance is joined by a line whose opacity falls off
//! linearly with distance. The pair scan is O(n²); at the default field size
//! that is about 1,500 distance checks per frame.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::consts::{OPACITY_MIN, OPACITY_SPAN, RADIUS_MIN, RADIUS_SPAN};

/// Which of the two color classes a particle is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Accent,
    Cyan,
}

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub tint: Tint,
    pub opacity: f64,
}

impl Particle {
    /// Draw a particle uniformly placed inside a `width` × `height` field.
    ///
    /// `speed` is the full per-axis velocity range, centered on zero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, speed: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * speed,
            vy: (rng.random::<f64>() - 0.5) * speed,
            radius: rng.random::<f64>() * RADIUS_SPAN + RADIUS_MIN,
            tint: if rng.random_bool(0.5) { Tint::Accent } else { Tint::Cyan },
            opacity: rng.random::<f64>() * OPACITY_SPAN + OPACITY_MIN,
        }
    }

    /// Advance one frame and wrap around the field edges.
    ///
    /// Wrapping is per axis: leaving past the left edge re-enters at the right
    /// edge and vice versa. A particle sitting exactly on an edge stays put.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }
    }

    /// Euclidean distance to another particle.
    #[must_use]
    pub fn distance(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line to draw between particles `a` and `b` (indices, `a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

/// Opacity for a link of length `distance`, or `None` if the pair is too far apart.
///
/// Linear falloff: `max_opacity` at distance zero, approaching zero at `max_distance`.
#[must_use]
pub fn link_opacity(distance: f64, max_distance: f64, max_opacity: f64) -> Option<f64> {
    if distance < max_distance {
        Some((1.0 - distance / max_distance) * max_opacity)
    } else {
        None
    }
}

/// Every distinct pair closer than `max_distance`, in scan order.
#[must_use]
pub fn links(particles: &[Particle], max_distance: f64, max_opacity: f64) -> Vec<Link> {
    let mut out = Vec::new();
    for (a, p) in particles.iter().enumerate() {
        for (offset, q) in particles[a + 1..].iter().enumerate() {
            if let Some(opacity) = link_opacity(p.distance(q), max_distance, max_opacity) {
                out.push(Link { a, b: a + 1 + offset, opacity });
            }
        }
    }
    out
}
