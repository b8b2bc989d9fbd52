//! Simulation modes
//!
//! A mode picks the force law (pairwise or central), the divisor applied
//! to initial orbital speeds, and which preset layout a reset builds.

use std::fmt;

use serde::Deserialize;

/// Which gravitational model acts on the bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceLaw {
    /// Every body attracts every other body
    Pairwise,
    /// Every body is pulled toward a fixed, non-simulated mass at the origin
    Central,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    #[default]
    #[serde(rename = "solar_system")]
    SolarSystem,

    #[serde(rename = "three_body")]
    ThreeBody,

    #[serde(rename = "galaxy")]
    Galaxy,

    #[serde(rename = "custom")]
    Custom,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::SolarSystem, Mode::ThreeBody, Mode::Galaxy, Mode::Custom];

    pub fn force_law(self) -> ForceLaw {
        match self {
            Mode::Galaxy => ForceLaw::Central,
            Mode::SolarSystem | Mode::ThreeBody | Mode::Custom => ForceLaw::Pairwise,
        }
    }

    /// Divisor for the circular-orbit speed handed out by the initial-velocity solver
    pub fn division(self) -> f64 {
        match self {
            Mode::ThreeBody => 3.0,
            _ => 1.0,
        }
    }

    /// Galaxy stars leave no trails
    pub fn records_trails(self) -> bool {
        self != Mode::Galaxy
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::SolarSystem => "Solar System",
            Mode::ThreeBody => "3-body Problem",
            Mode::Galaxy => "Galaxy (n-body)",
            Mode::Custom => "Custom",
        };
        f.write_str(name)
    }
}
