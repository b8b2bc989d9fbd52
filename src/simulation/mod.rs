pub mod states;
pub mod params;
pub mod engine;
pub mod mode;
pub mod forces;
pub mod integrator;
pub mod velocities;
pub mod trail;
pub mod spawn;
pub mod presets;
pub mod scenario;
