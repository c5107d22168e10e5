#[cfg(test)]
#[path = "../../tests/unit/sampling/monte_carlo_test.rs"]
mod monte_carlo_test;

use crate::utils::{Environment, Float, Timer};

/// An estimate of pi produced by random sampling.
pub struct PiEstimate {
    /// Amount of sampled points.
    pub samples: usize,
    /// Amount of points which landed inside the quarter circle.
    pub inside: usize,
    /// The estimate itself.
    pub estimate: Float,
    /// Absolute difference from the reference value.
    pub abs_error: Float,
    /// Difference from the reference value, relative to it.
    pub rel_error: Float,
}

/// Estimates pi by drawing point coordinates from the unit square and counting points which
/// land inside the quarter circle. The estimate converges probabilistically with the amount
/// of samples, there is no guaranteed error bound.
pub fn estimate_pi(samples: usize, environment: &Environment) -> PiEstimate {
    let random = environment.random.as_ref();

    let (report, duration) = Timer::measure_duration(|| {
        let inside = (0..samples)
            .filter(|_| {
                let x = random.uniform_real(0., 1.);
                let y = random.uniform_real(0., 1.);

                x * x + y * y <= 1.
            })
            .count();

        let estimate = if samples == 0 { 0. } else { 4. * inside as Float / samples as Float };
        let abs_error = (estimate - std::f64::consts::PI).abs();
        let rel_error = abs_error / std::f64::consts::PI;

        PiEstimate { samples, inside, estimate, abs_error, rel_error }
    });

    (environment.logger)(format!("estimated pi from {samples} samples in {}ms", duration.as_millis()).as_str());

    report
}
