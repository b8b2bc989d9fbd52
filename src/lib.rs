pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, StarsimError};

pub use simulation::states::{Body, BodyStore, Mass, NVec3};
pub use simulation::params::{Parameters, AU};
pub use simulation::mode::{ForceLaw, Mode};
pub use simulation::forces::{CentralGravity, Force, ForceSet, PairwiseGravity};
pub use simulation::integrator::{apply_forces, euler_integrator, verlet_integrator};
pub use simulation::velocities::{center_of_mass, set_initial_velocities};
pub use simulation::trail::Trail;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::viewer::run_3d;

pub use benchmark::benchmark::{bench_forces, bench_step_curve};
