//! Particle colors.
//!
//! The field has two color classes. Each theme picks its own shade of both;
//! the link color is fixed across themes.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::particle::Tint;

/// An opaque RGB triple; alpha is supplied per draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS `rgba(...)` string with the given alpha.
    #[must_use]
    pub fn rgba(self, alpha: f64) -> String {
        let Rgb(r, g, b) = self;
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

/// Stroke color for particle links.
pub const LINK_RGB: Rgb = Rgb(255, 107, 107);

/// Fill colors for both particle color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Rgb,
    pub cyan: Rgb,
}

impl Palette {
    /// Shades used on the dark theme.
    pub const DARK: Self = Self { accent: Rgb(255, 107, 107), cyan: Rgb(0, 212, 200) };

    /// Shades used on the light theme.
    pub const LIGHT: Self = Self { accent: Rgb(229, 85, 85), cyan: Rgb(0, 168, 158) };

    /// Fill color for a particle of the given class.
    #[must_use]
    pub fn fill(&self, tint: Tint) -> Rgb {
        match tint {
            Tint::Accent => self.accent,
            Tint::Cyan => self.cyan,
        }
    }
}
