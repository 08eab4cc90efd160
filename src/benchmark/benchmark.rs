use std::time::Instant;

use crate::simulation::engine::{break_apart_with, step, BreakMode};
use crate::simulation::states::{Body, NVec2};

/// Helper to build `n` deterministic bodies spread over a large square
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new((i_f * 0.37).sin() * 5000.0, (i_f * 0.13).cos() * 5000.0);
            Body::new(x, 0.5)
        })
        .collect()
}

/// Time `step` under attractive and repulsive gravity for growing `n`
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 5; // engine steps per measurement

    for n in ns {
        let template = make_bodies(n);

        // Attractive: glued bodies skip their drift
        let mut attract = template.clone();
        step(&mut attract, 100.0); // warm-up
        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut attract, 100.0);
        }
        let attract_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Repulsive: every body drifts
        let mut repel = template.clone();
        step(&mut repel, -1.0);
        let t1 = Instant::now();
        for _ in 0..steps {
            step(&mut repel, -1.0);
        }
        let repel_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        let glued = attract.iter().filter(|b| b.glued).count();
        println!(
            "N = {n:5}, attract step = {:8.6} s, repel step = {:8.6} s, glued = {glued}",
            attract_per_step, repel_per_step
        );
    }
}

/// Time both break-apart modes for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_break_curve() {
    println!("N,last_pair_ms,accumulate_ms");

    for n in (200..=6400).step_by(200) {
        let template = make_bodies(n);

        let mut last = template.clone();
        let t0 = Instant::now();
        break_apart_with(&mut last, -500.0, 10.0, BreakMode::LastPairWins);
        let ms_last = t0.elapsed().as_secs_f64() * 1000.0;

        let mut acc = template.clone();
        let t1 = Instant::now();
        break_apart_with(&mut acc, -500.0, 10.0, BreakMode::Accumulate);
        let ms_acc = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_last, ms_acc);
    }
}
