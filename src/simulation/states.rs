//! Core state types for the n-body simulation.
//!
//! - `Mass`      coefficient × 10^exponent, always positive and finite
//! - `Body`      one star or planet: physics state plus what the viewer draws
//! - `BodyStore` the ordered, owned list of bodies and the elapsed time `t`
//!
//! Positions live in scene units (what the viewer draws). Multiply by
//! `Parameters::scale` to get metres. Velocities are in metres per second.

use bevy::color::Color;
use nalgebra::Vector3;

use crate::error::{Result, StarsimError};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    coefficient: f64,
    exponent: i32,
}

impl Mass {
    pub fn new(coefficient: f64, exponent: i32) -> Result<Self> {
        let value = coefficient * 10f64.powi(exponent);
        if !(value.is_finite() && value > 0.0) {
            return Err(StarsimError::InvalidMass { coefficient, exponent });
        }
        Ok(Self { coefficient, exponent })
    }

    /// For literal preset masses that are known to be valid
    pub(crate) const fn new_unchecked(coefficient: f64, exponent: i32) -> Self {
        Self { coefficient, exponent }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Mass in kilograms
    pub fn value(&self) -> f64 {
        self.coefficient * 10f64.powi(self.exponent)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec3, // position, scene units
    pub v: NVec3, // velocity, m/s
    pub mass: Mass,
    pub anchor: bool, // skipped by the initial-velocity solver
    pub radius: f64, // display radius, scene units
    pub color: Color,
    pub emissive: bool,
    pub start: NVec3, // last position set by setup or a move
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec3, mass: Mass) -> Self {
        Self {
            name: name.into(),
            x,
            v: NVec3::zeros(),
            mass,
            anchor: false,
            radius: 1.0,
            color: Color::WHITE,
            emissive: true,
            start: x,
        }
    }

    /// Place a body on the XZ plane from coordinates given in metres
    pub fn on_plane(name: impl Into<String>, x_m: f64, z_m: f64, scale: f64, mass: Mass) -> Self {
        Self::new(name, NVec3::new(x_m / scale, 0.0, z_m / scale), mass)
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn anchored(mut self) -> Self {
        self.anchor = true;
        self
    }

    /// Mass in kilograms
    pub fn m(&self) -> f64 {
        self.mass.value()
    }

    /// Position in metres
    pub fn position_m(&self, scale: f64) -> NVec3 {
        self.x * scale
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    pub bodies: Vec<Body>,
    pub t: f64, // elapsed simulated seconds
}

impl BodyStore {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::m).sum()
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Body> {
        self.bodies.get_mut(index).ok_or(StarsimError::UnknownBody(index))
    }
}
