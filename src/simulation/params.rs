//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - timestep in simulated hours per frame,
//! - gravitational constant and the fixed galaxy central mass,
//! - the metres-per-scene-unit scale and the pairwise cutoff distance,
//! - galaxy size and random seed

/// Metres in one astronomical unit, as used by the presets
pub const AU: f64 = 1.49e11;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt_hours: f64, // simulated hours advanced per step
    pub g: f64, // gravitational constant
    pub scale: f64, // metres per scene unit
    pub softening: f64, // pairs closer than this (scene units) exert no force
    pub central_mass: f64, // fixed mass at the origin in galaxy mode, kg
    pub star_count: usize, // bodies in the galaxy preset
    pub seed: u64, // seed for random stars
}

impl Parameters {
    pub const DEFAULT_DT_HOURS: f64 = 10.0;
    pub const DEFAULT_G: f64 = 6.67430e-11;
    pub const DEFAULT_SCALE: f64 = 2.0e9;
    pub const DEFAULT_SOFTENING: f64 = 10.0;
    pub const DEFAULT_CENTRAL_MASS: f64 = 1.0e32;
    pub const DEFAULT_STAR_COUNT: usize = 500;
    pub const DEFAULT_SEED: u64 = 42;

    /// Step length in seconds
    pub fn tdt(&self) -> f64 {
        self.dt_hours * 60.0 * 60.0
    }

    /// Cutoff distance in metres
    pub fn softening_m(&self) -> f64 {
        self.softening * self.scale
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt_hours: Self::DEFAULT_DT_HOURS,
            g: Self::DEFAULT_G,
            scale: Self::DEFAULT_SCALE,
            softening: Self::DEFAULT_SOFTENING,
            central_mass: Self::DEFAULT_CENTRAL_MASS,
            star_count: Self::DEFAULT_STAR_COUNT,
            seed: Self::DEFAULT_SEED,
        }
    }
}
