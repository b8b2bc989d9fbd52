//! Fixed-step time integrators for the n-body system
//!
//! Provides semi-implicit Euler (one force evaluation per step) and
//! velocity-Verlet (two evaluations), both driven by a `ForceSet` and
//! `Parameters`. Velocities are in m/s, positions in scene units, so every
//! position update divides by `params.scale`.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{BodyStore, NVec3};

/// Advance the system by one step using semi-implicit Euler.
/// v_n+1 = v_n + (F_n / m) * dt, then x_n+1 = x_n + v_n+1 * dt
pub fn euler_integrator(sys: &mut BodyStore, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let mut f = vec![NVec3::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f);
    apply_forces(sys, &f, params);
}

/// Apply one Euler update from precomputed forces, one per body.
pub fn apply_forces(sys: &mut BodyStore, forces: &[NVec3], params: &Parameters) {
    let dt = params.tdt(); // seconds
    let inv_scale = params.scale.recip();

    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        let a = *f / b.m();
        b.v += a * dt;
        b.x += b.v * dt * inv_scale;
    }

    sys.t += dt;
}

/// Advance the system by one step using velocity-Verlet.
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place.
pub fn verlet_integrator(sys: &mut BodyStore, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }
    let dt = params.tdt(); // time step dt
    let half_dt = 0.5 * dt; // half step dt/2
    let inv_scale = params.scale.recip();

    // F_n from x_n
    let mut f_old = vec![NVec3::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f_old);

    // Kick: v_n+1/2 = v_n + (dt/2) * F_n / m
    for (b, f) in sys.bodies.iter_mut().zip(f_old.iter()) {
        b.v += half_dt * (*f / b.m());
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v * inv_scale;
    }

    sys.t += dt;

    // F_n+1 from x_n+1
    let mut f_new = vec![NVec3::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * F_n+1 / m
    for (b, f) in sys.bodies.iter_mut().zip(f_new.iter()) {
        b.v += half_dt * (*f / b.m());
    }
}
