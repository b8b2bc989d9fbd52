//! Random star generation
//!
//! Stars land on the XZ plane inside a `[-rx, rx) × [-ry, ry)` box measured
//! in AU, re-drawn until they are at least `min_distance` AU from the origin.
//! A `min_distance` the box cannot satisfy is clamped to 0.9 of the corner distance.

use bevy::color::Color;
use rand::Rng;

use super::params::AU;
use super::states::{Body, Mass};

/// Bounds for one random star, in AU
#[derive(Debug, Clone, Copy)]
pub struct SpawnBox {
    pub rx: f64,
    pub ry: f64,
    pub min_distance: f64,
}

impl SpawnBox {
    pub const fn new(rx: f64, ry: f64, min_distance: f64) -> Self {
        Self { rx, ry, min_distance }
    }
}

impl Default for SpawnBox {
    fn default() -> Self {
        Self::new(2.0, 2.0, 0.0)
    }
}

/// The two crossed bands the galaxy preset is drawn from
pub const GALAXY_BANDS: [SpawnBox; 2] = [SpawnBox::new(30.0, 5.0, 2.0), SpawnBox::new(5.0, 30.0, 2.0)];

pub fn random_star<R: Rng + ?Sized>(rng: &mut R, name: impl Into<String>, bounds: SpawnBox, scale: f64) -> Body {
    // Kept below the corner distance so some of the box is always reachable
    let min_distance = bounds.min_distance.min(0.9 * bounds.rx.hypot(bounds.ry));

    let (x, y) = loop {
        let x = rng.gen::<f64>() * bounds.rx * 2.0 - bounds.rx;
        let y = rng.gen::<f64>() * bounds.ry * 2.0 - bounds.ry;
        if x.hypot(y) >= min_distance {
            break (x, y);
        }
    };

    let radius = rng.gen::<f64>() * 5.0 + 2.0;
    let color = Color::hsl(rng.gen::<f32>() * 360.0, rng.gen::<f32>(), rng.gen::<f32>());
    let mass = Mass::new_unchecked(1.0, 30);

    Body::on_plane(name, x * AU, y * AU, scale, mass)
        .with_radius(radius)
        .with_color(color)
}

/// A galaxy star: a fair coin picks which band it comes from
pub fn random_galaxy_star<R: Rng + ?Sized>(rng: &mut R, name: impl Into<String>, scale: f64) -> Body {
    let band = if rng.gen::<f64>() > 0.5 { GALAXY_BANDS[0] } else { GALAXY_BANDS[1] };
    random_star(rng, name, band, scale)
}
