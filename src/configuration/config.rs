//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – mode, integrator and whether setup assigns orbital velocities
//! - [`ParametersConfig`] – timestep, physical constants, galaxy size and seed
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every parameter is optional. When `bodies` is empty the mode's preset
//! layout is used instead.
//!
//! ```yaml
//! engine:
//!   mode: custom            # solar_system | three_body | galaxy | custom
//!   integrator: euler       # or "verlet"
//!   auto_velocities: true
//!
//! parameters:
//!   dt_hours: 10.0          # simulated hours per frame
//!   g: 6.6743e-11           # gravitational constant
//!   scale: 2.0e9            # metres per scene unit
//!   softening: 10.0         # pairwise cutoff, scene units
//!   central_mass: 1.0e32    # galaxy mode only
//!   star_count: 500         # galaxy preset size
//!   seed: 42
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0, 0.0]
//!     mass_coefficient: 1.0
//!     mass_exponent: 33
//!     anchor: true
//!     radius: 15.0
//!     color: "#ffff00"
//!   - name: Rock
//!     x: [75.0, 0.0, 0.0]
//!     mass_coefficient: 6.0
//!     mass_exponent: 24
//!     emissive: false
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bevy::color::{Color, Srgba};
use serde::Deserialize;

use crate::error::{Result, StarsimError};
use crate::simulation::engine::Engine;
use crate::simulation::mode::Mode;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Mass, NVec3};

/// Which integrator the engine uses
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "euler")] // Semi-implicit Euler, one force evaluation per step
    Euler,

    #[serde(rename = "verlet")] // Velocity Verlet, two force evaluations, better long-term energy behavior
    Verlet,
}

fn default_true() -> bool {
    true
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub mode: Mode, // force law and preset
    #[serde(default)]
    pub integrator: IntegratorConfig,
    #[serde(default = "default_true")]
    pub auto_velocities: bool, // assign circular-orbit velocities after setup, edits and controllers
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            integrator: IntegratorConfig::default(),
            auto_velocities: true,
        }
    }
}

fn default_dt_hours() -> f64 {
    Parameters::DEFAULT_DT_HOURS
}

fn default_g() -> f64 {
    Parameters::DEFAULT_G
}

fn default_scale() -> f64 {
    Parameters::DEFAULT_SCALE
}

fn default_softening() -> f64 {
    Parameters::DEFAULT_SOFTENING
}

fn default_central_mass() -> f64 {
    Parameters::DEFAULT_CENTRAL_MASS
}

fn default_star_count() -> usize {
    Parameters::DEFAULT_STAR_COUNT
}

fn default_seed() -> u64 {
    Parameters::DEFAULT_SEED
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt_hours")]
    pub dt_hours: f64,
    #[serde(default = "default_g")]
    pub g: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_softening")]
    pub softening: f64,
    #[serde(default = "default_central_mass")]
    pub central_mass: f64,
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt_hours: default_dt_hours(),
            g: default_g(),
            scale: default_scale(),
            softening: default_softening(),
            central_mass: default_central_mass(),
            star_count: default_star_count(),
            seed: default_seed(),
        }
    }
}

fn default_radius() -> f64 {
    5.0
}

fn default_color() -> String {
    "#ffffff".to_string()
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // defaults to StarN
    pub x: Vec<f64>, // position in scene units
    #[serde(default)]
    pub v: Option<Vec<f64>>, // velocity in m/s
    pub mass_coefficient: f64,
    pub mass_exponent: i32,
    #[serde(default)]
    pub anchor: bool, // never given an orbital velocity
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_color")]
    pub color: String, // "#rrggbb"
    #[serde(default = "default_true")]
    pub emissive: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn vec3(field: &'static str, values: &[f64]) -> Result<NVec3> {
    match values {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(StarsimError::InvalidVector { field, len: values.len() }),
    }
}

fn positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(StarsimError::InvalidParameter(format!("{name} must be positive and finite, got {value}")))
    }
}

impl ScenarioConfig {
    /// Read and parse a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// A config with no bodies, so the mode's preset is used
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            engine: EngineConfig { mode, ..EngineConfig::default() },
            ..Self::default()
        }
    }

    pub fn engine(&self) -> Engine {
        Engine {
            mode: self.engine.mode,
            integrator: self.engine.integrator,
            auto_velocities: self.engine.auto_velocities,
        }
    }

    /// Validated runtime parameters
    pub fn parameters(&self) -> Result<Parameters> {
        let p = &self.parameters;
        if !(p.dt_hours.is_finite() && p.dt_hours >= 0.0) {
            return Err(StarsimError::InvalidParameter(format!(
                "dt_hours must be finite and non-negative, got {}",
                p.dt_hours
            )));
        }
        if !(p.softening.is_finite() && p.softening >= 0.0) {
            return Err(StarsimError::InvalidParameter(format!(
                "softening must be finite and non-negative, got {}",
                p.softening
            )));
        }
        Ok(Parameters {
            dt_hours: p.dt_hours,
            g: positive("g", p.g)?,
            scale: positive("scale", p.scale)?,
            softening: p.softening,
            central_mass: positive("central_mass", p.central_mass)?,
            star_count: p.star_count,
            seed: p.seed,
        })
    }

    /// Map `BodyConfig` -> runtime `Body` using nalgebra vectors
    pub fn bodies(&self) -> Result<Vec<Body>> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| {
                let x = vec3("x", &bc.x)?;
                let mass = Mass::new(bc.mass_coefficient, bc.mass_exponent)?;
                let color = Srgba::hex(&bc.color).map_err(|_| StarsimError::InvalidColor(bc.color.clone()))?;
                let name = bc.name.clone().unwrap_or_else(|| format!("Star{}", i + 1));

                let mut body = Body::new(name, x, mass)
                    .with_radius(bc.radius)
                    .with_color(Color::Srgba(color))
                    .with_emissive(bc.emissive);
                body.anchor = bc.anchor;
                if let Some(v) = &bc.v {
                    body.v = vec3("v", v)?;
                }
                Ok(body)
            })
            .collect()
    }
}
