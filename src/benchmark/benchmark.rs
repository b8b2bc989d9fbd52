use std::time::Instant;

use crate::simulation::forces::{CentralGravity, Force, ForceSet, PairwiseGravity};
use crate::simulation::integrator::{euler_integrator, verlet_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyStore, Mass, NVec3};

/// Helper to build a deterministic store of size `n`, spread over a few
/// hundred scene units so the pairwise cutoff rarely triggers
fn make_store(n: usize) -> BodyStore {
    let mass = Mass::new_unchecked(1.0, 30);
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec3::new(
                (i_f * 0.37).sin() * 500.0,
                (i_f * 0.13).cos() * 50.0,
                (i_f * 0.07).sin() * 500.0,
            );
            Body::new(format!("Star{}", i + 1), x, mass)
        })
        .collect();
    BodyStore::new(bodies)
}

/// Time one evaluation of each force law for growing n
pub fn bench_forces() {
    let params = Parameters::default();
    let pairwise = PairwiseGravity::from_params(&params);
    let central = CentralGravity::from_params(&params);

    for n in [200, 400, 800, 1600, 3200, 6400] {
        let sys = make_store(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        pairwise.force(&sys, &mut out);
        central.force(&sys, &mut out);

        let t0 = Instant::now();
        pairwise.force(&sys, &mut out);
        let dt_pairwise = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        central.force(&sys, &mut out);
        let dt_central = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, pairwise = {dt_pairwise:8.6} s, central = {dt_central:8.6} s");
    }
}

/// Per-step cost of Euler and Verlet under pairwise gravity, as CSV
pub fn bench_step_curve() {
    println!("N,euler_ms,verlet_ms");

    let params = Parameters::default();
    let forces = ForceSet::new().with(PairwiseGravity::from_params(&params));

    for n in (200..=3200).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let template = make_store(n);

        let mut sys_euler = template.clone();
        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys_euler, &forces, &params);
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys_verlet = template.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys_verlet, &forces, &params);
        }
        let ms_verlet = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms_euler:.6},{ms_verlet:.6}");
    }
}
