use std::time::{Duration, Instant};

use serde::Serialize;

use crate::bench::{DistanceCase, Operation, Sink};
use crate::config::RunConfig;

/// Average-time result of one (size, operation) case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub size: usize,
    pub operation: Operation,
    /// Mean wall time per call, in nanoseconds.
    pub avg_ns: f64,
    pub iterations: u32,
    pub invocations: u64,
    /// Distance returned by the operation.
    pub result: f64,
}

/// Time one operation of `case`.
///
/// Warmup iterations run untimed; every measured call goes through `sink`.
pub fn run_case<S: Sink + ?Sized>(
    case: &DistanceCase<'_>,
    op: Operation,
    config: &RunConfig,
    sink: &mut S,
) -> CaseReport {
    let per_iteration = config.invocations_per_iteration;

    for _ in 0..config.warmup_iterations {
        for _ in 0..per_iteration {
            case.run(op, sink);
        }
    }

    let mut elapsed = Duration::ZERO;
    for iteration in 0..config.measurement_iterations {
        let start = Instant::now();
        for _ in 0..per_iteration {
            case.run(op, sink);
        }
        let took = start.elapsed();
        log::debug!(
            "size {} {op} iteration {iteration}: {:.1} ns/op",
            case.size(),
            took.as_nanos() as f64 / per_iteration as f64
        );
        elapsed += took;
    }

    let invocations = per_iteration * u64::from(config.measurement_iterations);
    let result = match op {
        Operation::Arrays => case.euclidean_on_arrays(),
        Operation::Lists => case.euclidean_on_lists(),
    };

    CaseReport {
        size: case.size(),
        operation: op,
        avg_ns: elapsed.as_nanos() as f64 / invocations.max(1) as f64,
        iterations: config.measurement_iterations,
        invocations,
        result,
    }
}
