#[cfg(test)]
#[path = "../../tests/unit/sampling/distribution_test.rs"]
mod distribution_test;

use crate::algorithms::math::{get_mean_slice, get_min_max, get_stdev, Histogram};
use crate::utils::{Environment, Float, Timer};

/// Amount of buckets used to describe the distribution.
const BUCKET_COUNT: usize = 10;

/// Describes a distribution of values drawn uniformly from the unit interval.
pub struct DistributionReport {
    /// Amount of drawn values.
    pub samples: usize,
    /// Minimum drawn value.
    pub min: Float,
    /// Maximum drawn value.
    pub max: Float,
    /// Mean of drawn values.
    pub mean: Float,
    /// Standard deviation of drawn values.
    pub stdev: Float,
    /// Bucket counts of drawn values.
    pub histogram: Histogram,
}

/// Draws given amount of values from the unit interval and describes their distribution.
pub fn analyze_distribution(samples: usize, environment: &Environment) -> DistributionReport {
    let random = environment.random.as_ref();

    let (report, duration) = Timer::measure_duration(|| {
        let values = (0..samples).map(|_| random.uniform_real(0., 1.)).collect::<Vec<_>>();

        let mut histogram = Histogram::new(BUCKET_COUNT);
        values.iter().for_each(|&value| histogram.observe(value));

        let (min, max) = get_min_max(values.as_slice()).unwrap_or((0., 0.));
        let (mean, stdev) =
            if values.is_empty() { (0., 0.) } else { (get_mean_slice(values.as_slice()), get_stdev(values.as_slice())) };

        DistributionReport { samples, min, max, mean, stdev, histogram }
    });

    (environment.logger)(format!("analyzed {samples} unit interval draws in {}ms", duration.as_millis()).as_str());

    report
}
