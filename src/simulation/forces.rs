//! Force contributors for the n-body engine
//!
//! Defines the `Force` trait and two gravity strategies: direct pairwise
//! Newtonian gravity with a hard cutoff, and a central-mass pull toward
//! the origin used by galaxy mode. Outputs are forces in newtons, not
//! accelerations. The integrator divides by mass.

use crate::simulation::mode::{ForceLaw, Mode};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyStore, NVec3};

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// The single gravity strategy a mode calls for
    pub fn for_mode(mode: Mode, params: &Parameters) -> Self {
        match mode.force_law() {
            ForceLaw::Pairwise => Self::new().with(PairwiseGravity::from_params(params)),
            ForceLaw::Central => Self::new().with(CentralGravity::from_params(params)),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, sys: &BodyStore, out: &mut [NVec3]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        for term in &self.terms {
            term.force(sys, out);
        }
    }
}

/// Trait for force sources operating on a [`BodyStore`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, sys: &BodyStore, out: &mut [NVec3]);
}

/// Direct n^2 Newtonian gravity between every pair of bodies.
///
/// Pairs closer than `cutoff` metres are skipped outright rather than
/// softened, so two stars passing through each other feel nothing.
pub struct PairwiseGravity {
    pub g: f64, // gravitational constant
    pub scale: f64, // metres per scene unit
    pub cutoff: f64, // minimum separation in metres
}

impl PairwiseGravity {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            g: params.g,
            scale: params.scale,
            cutoff: params.softening_m(),
        }
    }
}

impl Force for PairwiseGravity {
    fn force(&self, sys: &BodyStore, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n < 2 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.position_m(self.scale);
            let mi = bi.m();

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j, in metres
                let r = bj.position_m(self.scale) - xi;
                let r2 = r.norm_squared();

                // Coincident or inside the cutoff: no force either way
                if r2 == 0.0 || r2.sqrt() < self.cutoff {
                    continue;
                }

                // |F| = G * mi * mj / |r|^2, along r_hat for i and -r_hat for j
                let magnitude = self.g * mi * bj.m() / r2;
                let f = r.normalize() * magnitude;

                out[i] += f;
                out[j] -= f;
            }
        }
    }
}

/// Pull toward a fixed mass at the origin. Bodies never attract each other.
pub struct CentralGravity {
    pub g: f64,
    pub scale: f64,
    pub central_mass: f64, // kg
}

impl CentralGravity {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            g: params.g,
            scale: params.scale,
            central_mass: params.central_mass,
        }
    }
}

impl Force for CentralGravity {
    fn force(&self, sys: &BodyStore, out: &mut [NVec3]) {
        for (b, f) in sys.bodies.iter().zip(out.iter_mut()) {
            // r is the body's offset from the origin
            let r = b.position_m(self.scale);
            let r2 = r.norm_squared();
            if r2 == 0.0 {
                continue;
            }

            let magnitude = self.g * self.central_mass * b.m() / r2;
            *f -= r.normalize() * magnitude;
        }
    }
}
