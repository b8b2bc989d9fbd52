//! Initial-velocity solver
//!
//! Gives every non-anchor body the speed of a circular orbit around the
//! system's center of mass (the origin in galaxy mode), directed
//! tangentially in the XZ plane.

use super::mode::{ForceLaw, Mode};
use super::params::Parameters;
use super::states::{BodyStore, NVec3};

/// Mass-weighted mean position, in metres. Zero for an empty store.
pub fn center_of_mass(sys: &BodyStore, scale: f64) -> NVec3 {
    let total = sys.total_mass();
    if total <= 0.0 {
        return NVec3::zeros();
    }
    let weighted = sys
        .bodies
        .iter()
        .fold(NVec3::zeros(), |acc, b| acc + b.position_m(scale) * b.m());
    weighted / total
}

/// Overwrite the velocity of every non-anchor body with a circular-orbit
/// velocity. Bodies sitting exactly on the reference center are left alone.
pub fn set_initial_velocities(sys: &mut BodyStore, mode: Mode, params: &Parameters) {
    if sys.is_empty() {
        return;
    }

    let central = mode.force_law() == ForceLaw::Central;
    let center = if central {
        NVec3::zeros()
    } else {
        center_of_mass(sys, params.scale)
    };
    let total = sys.total_mass();
    let div = mode.division();

    for b in sys.bodies.iter_mut().filter(|b| !b.anchor) {
        let r = b.position_m(params.scale) - center;
        let distance = r.norm();
        if distance == 0.0 {
            continue;
        }

        // Everything except this body, or the fixed central mass
        let effective_mass = if central { params.central_mass } else { total - b.m() };
        let speed = (params.g * effective_mass / distance).sqrt();

        // Tangent in the orbital plane; zero when r is parallel to the vertical axis
        let direction = r
            .cross(&NVec3::y())
            .try_normalize(0.0)
            .unwrap_or_else(NVec3::zeros);

        b.v = direction * (speed / div);
    }
}
