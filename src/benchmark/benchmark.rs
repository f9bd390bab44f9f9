//! Quick wall-clock checks for the pursuit core
//!
//! Times raw ring stepping and full recorded runs for growing problem
//! sizes. Reported via println, run manually from `main`.

use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::runner::SimulationRunner;
use crate::simulation::states::AntRing;

pub fn bench_step() {
    // Different ring sizes to test
    let ns = [8, 32, 128, 512, 2048];

    for n in ns {
        let mut ring = AntRing::new(n, 1.0, 1.0).expect("ring");
        let dt = 1e-4;

        // Warm up
        ring.step(dt).expect("step");

        let steps = 10_000;
        let t0 = Instant::now();
        for _ in 0..steps {
            ring.step(dt).expect("step");
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:.9} s");
    }
}

pub fn bench_run() {
    // Coarser alpha converges in fewer, larger steps
    let alphas = [0.1, 0.01, 0.001];

    for alpha in alphas {
        let params = Parameters {
            alpha,
            reduction_factor: 64,
            ..Parameters::default()
        };
        let ring = AntRing::new(params.ants, params.speed, params.radius).expect("ring");
        let mut runner = SimulationRunner::new(ring, &params).expect("runner");

        let t0 = Instant::now();
        let outcome = runner.run().expect("run");
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "alpha = {alpha:7}, outcome = {outcome:?}, frames kept = {:6}, run = {elapsed:8.6} s",
            runner.frames_used()
        );
    }
}
