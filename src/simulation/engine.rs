//! High-level runtime engine settings
//!
//! Selects the mode, the integrator, and whether setup assigns orbital
//! velocities, used when building and resetting a `Scenario`

use crate::configuration::config::IntegratorConfig;
use crate::simulation::mode::Mode;

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: Mode, // force law, speed divisor, preset
    pub integrator: IntegratorConfig, // euler or verlet
    pub auto_velocities: bool, // run the initial-velocity solver after setup, edits and controllers
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            integrator: IntegratorConfig::Euler,
            auto_velocities: true,
        }
    }
}
