use std::time::Instant;

use crate::simulation::forces::{ForceSet, MutualGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, World};

/// Deterministic synthetic world, no rand needed: bodies scattered on
/// sin/cos curves so no pair is coincident.
fn synthetic_world(n: usize) -> World {
    let mut world = World::new();
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 1500.0 + 2.0 * i_f,
            (i_f * 0.13).cos() * 900.0,
        );
        world.insert(Body::new(x, 10.0 + (i % 16) as f64, 0.005));
    }
    world
}

pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];

    let params = Parameters::default();
    let forces = ForceSet::new().with(MutualGravity { eps: params.eps });

    for n in ns {
        let world = synthetic_world(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        forces.accumulate_forces(&world, &mut out);

        let t0 = Instant::now();
        forces.accumulate_forces(&world, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
}

pub fn bench_step() {
    let ns = [50, 100, 200, 400];
    let steps = 1000;

    let params = Parameters::default();
    let forces = ForceSet::new().with(MutualGravity { eps: params.eps });

    for n in ns {
        let mut world = synthetic_world(n);

        // Warm up
        euler_step(&mut world, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut world, &forces, &params);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} steps = {:8.6} s ({:8.6} s/step)",
            elapsed,
            elapsed / steps as f64
        );
    }
}
