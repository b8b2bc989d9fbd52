//! Build fully-initialized simulation scenarios and drive them
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`BodyStore`)
//! - the active force set (`ForceSet`)
//! - per-body trails and the start/stop state
//!
//! Every control the viewer exposes (start, stop, reset, mode switch,
//! per-body edits, the per-mode controllers) is a method here,
//! so the same operations are available headless and in tests.

use bevy::color::Color;
use bevy::prelude::Resource;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::error::{Result, StarsimError};
use crate::simulation::engine::Engine;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::{euler_integrator, verlet_integrator};
use crate::simulation::mode::Mode;
use crate::simulation::params::Parameters;
use crate::simulation::presets::{custom_sun, preset_bodies};
use crate::simulation::spawn::{random_galaxy_star, random_star, SpawnBox};
use crate::simulation::states::{Body, BodyStore, Mass, NVec3};
use crate::simulation::trail::Trail;
use crate::simulation::velocities::set_initial_velocities;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`].
/// The viewer inserts it as a `Resource`, steps it once per frame and
/// reads body positions and trails back out of it.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: BodyStore,
    pub forces: ForceSet,
    trails: Vec<Trail>,
    template: Option<Vec<Body>>, // bodies from the config file, restored on reset
    rng: StdRng,
    running: bool,
    started: bool, // set by start, cleared by reset; stop keeps it
    generation: u64, // bumped whenever bodies are added, removed or replaced
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        let engine = cfg.engine();
        let parameters = cfg.parameters()?;
        let bodies = cfg.bodies()?;
        let template = (!bodies.is_empty()).then_some(bodies);

        let mut scenario = Self {
            forces: ForceSet::for_mode(engine.mode, &parameters),
            rng: StdRng::seed_from_u64(parameters.seed),
            engine,
            parameters,
            system: BodyStore::default(),
            trails: Vec::new(),
            template,
            running: false,
            started: false,
            generation: 0,
        };
        scenario.reset();
        Ok(scenario)
    }

    /// Preset scenario with default parameters
    pub fn for_mode(mode: Mode) -> Result<Self> {
        Self::build_scenario(&ScenarioConfig::for_mode(mode))
    }

    pub fn mode(&self) -> Mode {
        self.engine.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    // =========================================================================================
    // Run state
    // =========================================================================================

    pub fn start(&mut self) {
        self.running = true;
        self.started = true;
        info!("simulation started ({} bodies, {} h/frame)", self.system.len(), self.parameters.dt_hours);
    }

    pub fn stop(&mut self) {
        self.running = false;
        info!("simulation stopped at t = {:.0} s", self.system.t);
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stop, then rebuild the bodies from the config file or the mode preset
    pub fn reset(&mut self) {
        self.running = false;
        self.started = false;

        let bodies = match &self.template {
            Some(bodies) => bodies.clone(),
            None => preset_bodies(self.engine.mode, &self.parameters, &mut self.rng),
        };
        self.system = BodyStore::new(bodies);
        self.forces = ForceSet::for_mode(self.engine.mode, &self.parameters);
        self.trails = self.system.bodies.iter().map(|b| Trail::new(b.x)).collect();

        if self.engine.auto_velocities {
            self.refresh_velocities();
        }
        self.generation += 1;
        info!("{} scenario ready with {} bodies", self.engine.mode, self.system.len());
    }

    /// Switch mode and load its preset. Bodies from a config file are dropped.
    pub fn set_mode(&mut self, mode: Mode) {
        info!("mode changed to {mode}");
        self.engine.mode = mode;
        self.template = None;
        self.reset();
    }

    /// Advance one frame if running
    pub fn step(&mut self) {
        if self.running {
            self.advance();
        }
    }

    /// Advance one frame regardless of the run state
    pub fn advance(&mut self) {
        match self.engine.integrator {
            IntegratorConfig::Euler => euler_integrator(&mut self.system, &self.forces, &self.parameters),
            IntegratorConfig::Verlet => verlet_integrator(&mut self.system, &self.forces, &self.parameters),
        }

        if self.engine.mode.records_trails() {
            for (trail, b) in self.trails.iter_mut().zip(self.system.bodies.iter()) {
                trail.add_point(b.x);
            }
        }
    }

    pub fn refresh_velocities(&mut self) {
        set_initial_velocities(&mut self.system, self.engine.mode, &self.parameters);
    }

    // =========================================================================================
    // Edits
    // =========================================================================================

    pub fn set_dt_hours(&mut self, dt_hours: f64) -> Result<()> {
        if !(dt_hours.is_finite() && dt_hours >= 0.0) {
            return Err(StarsimError::InvalidParameter(format!(
                "dt_hours must be finite and non-negative, got {dt_hours}"
            )));
        }
        self.parameters.dt_hours = dt_hours;
        Ok(())
    }

    pub fn rename_body(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.system.get_mut(index)?.name = name.into();
        Ok(())
    }

    /// Change a body's mass. Before the first start, velocities follow the new mass.
    pub fn set_body_mass(&mut self, index: usize, coefficient: f64, exponent: i32) -> Result<()> {
        let mass = Mass::new(coefficient, exponent)?;
        self.system.get_mut(index)?.mass = mass;
        debug!("body {index} mass set to {coefficient}e{exponent} kg");
        if !self.started {
            self.follow_orbits();
        }
        Ok(())
    }

    /// Drop a body at a new position (scene units) and recompute orbits
    pub fn move_body(&mut self, index: usize, position: NVec3) -> Result<()> {
        self.set_body_position(index, position)?;
        self.follow_orbits();
        Ok(())
    }

    /// Place a body without touching any velocity
    pub fn set_body_position(&mut self, index: usize, position: NVec3) -> Result<()> {
        let body = self.system.get_mut(index)?;
        body.x = position;
        body.start = position;
        debug!("body {index} moved to {position:?}");
        Ok(())
    }

    /// Velocity in m/s
    pub fn set_body_velocity(&mut self, index: usize, velocity: NVec3) -> Result<()> {
        self.system.get_mut(index)?.v = velocity;
        Ok(())
    }

    pub fn set_body_radius(&mut self, index: usize, radius: f64) -> Result<()> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(StarsimError::InvalidParameter(format!(
                "radius must be finite and positive, got {radius}"
            )));
        }
        self.system.get_mut(index)?.radius = radius;
        self.generation += 1;
        Ok(())
    }

    pub fn set_body_color(&mut self, index: usize, color: Color) -> Result<()> {
        self.system.get_mut(index)?.color = color;
        self.generation += 1;
        Ok(())
    }

    pub fn set_body_emissive(&mut self, index: usize, emissive: bool) -> Result<()> {
        self.system.get_mut(index)?.emissive = emissive;
        self.generation += 1;
        Ok(())
    }

    // Edits and controllers leave hand-set velocities alone when auto_velocities is off
    fn follow_orbits(&mut self) {
        if self.engine.auto_velocities {
            self.refresh_velocities();
        }
    }

    fn require_mode(&self, mode: Mode, operation: &'static str) -> Result<()> {
        if self.engine.mode == mode {
            Ok(())
        } else {
            Err(StarsimError::WrongMode { operation, mode: self.engine.mode })
        }
    }

    fn push_body(&mut self, body: Body) {
        self.trails.push(Trail::new(body.x));
        self.system.bodies.push(body);
        self.generation += 1;
    }

    fn next_name(&self) -> String {
        format!("Star{}", self.system.len() + 1)
    }

    // =========================================================================================
    // Mode controllers
    // =========================================================================================

    /// Three-body: replace the layout with three random stars
    pub fn randomize_three_body(&mut self) -> Result<()> {
        self.require_mode(Mode::ThreeBody, "randomize")?;
        self.reset();
        self.system.bodies.clear();
        self.trails.clear();
        for _ in 0..3 {
            let name = self.next_name();
            let body = random_star(&mut self.rng, name, SpawnBox::default(), self.parameters.scale);
            self.push_body(body);
        }
        self.follow_orbits();
        Ok(())
    }

    /// Galaxy: grow or shrink to `count` stars
    pub fn set_star_count(&mut self, count: usize) -> Result<()> {
        self.require_mode(Mode::Galaxy, "set star count")?;
        self.parameters.star_count = count;

        if count < self.system.len() {
            self.system.bodies.truncate(count);
            self.trails.truncate(count);
            self.generation += 1;
        }
        while self.system.len() < count {
            let name = self.next_name();
            let body = random_galaxy_star(&mut self.rng, name, self.parameters.scale);
            self.push_body(body);
        }
        debug!("galaxy now has {count} stars");
        self.follow_orbits();
        Ok(())
    }

    /// Custom: add one random star in a 20 x 20 AU box
    pub fn add_random_star(&mut self) -> Result<()> {
        self.require_mode(Mode::Custom, "add star")?;
        let name = self.next_name();
        let body = random_star(&mut self.rng, name, SpawnBox::new(10.0, 10.0, 0.0), self.parameters.scale);
        self.push_body(body);
        self.follow_orbits();
        Ok(())
    }

    /// Custom: add the anchored sun at the origin. Returns false if one is already there.
    pub fn add_sun(&mut self) -> Result<bool> {
        self.require_mode(Mode::Custom, "add sun")?;
        if self.system.bodies.iter().any(|b| b.anchor) {
            warn!("custom scenario already has a sun");
            return Ok(false);
        }
        self.push_body(custom_sun(self.parameters.scale));
        self.follow_orbits();
        Ok(true)
    }
}
