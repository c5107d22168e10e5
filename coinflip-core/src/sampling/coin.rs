#[cfg(test)]
#[path = "../../tests/unit/sampling/coin_test.rs"]
mod coin_test;

use crate::utils::{Environment, Timer};

/// Aggregated outcomes of repeated single coin flips.
pub struct FlipReport {
    /// Individual flip outcomes, true for heads.
    pub outcomes: Vec<bool>,
    /// Amount of flips which came up heads.
    pub heads: usize,
    /// Amount of flips which came up tails.
    pub tails: usize,
}

/// Aggregated outcomes of repeated paired heads/tails draws.
pub struct PairedFlipReport {
    /// Individual pair outcomes as (heads draw, tails draw).
    pub outcomes: Vec<(bool, bool)>,
    /// Amount of pairs where the tails draw is the negation of the heads draw.
    pub opposite: usize,
    /// Amount of pairs where both draws return the same value.
    pub matching: usize,
}

/// Flips a coin given amount of times and counts heads and tails.
pub fn run_flips(samples: usize, environment: &Environment) -> FlipReport {
    let random = environment.random.as_ref();

    let (report, duration) = Timer::measure_duration(|| {
        let mut report = FlipReport { outcomes: Vec::with_capacity(samples), heads: 0, tails: 0 };

        (0..samples).for_each(|_| {
            let is_heads = random.is_head_not_tails();

            report.outcomes.push(is_heads);
            if is_heads {
                report.heads += 1;
            } else {
                report.tails += 1;
            }
        });

        report
    });

    (environment.logger)(format!("flipped the coin {samples} times in {}ms", duration.as_millis()).as_str());

    report
}

/// Draws given amount of heads/tails pairs, each from an independent coin flip, and counts
/// how often the two draws contradict each other.
pub fn run_paired_flips(samples: usize, environment: &Environment) -> PairedFlipReport {
    let random = environment.random.as_ref();

    let (report, duration) = Timer::measure_duration(|| {
        let mut report = PairedFlipReport { outcomes: Vec::with_capacity(samples), opposite: 0, matching: 0 };

        (0..samples).for_each(|_| {
            let heads = random.is_head_not_tails();
            let tails = random.is_tail_not_heads();

            report.outcomes.push((heads, tails));
            if heads != tails {
                report.opposite += 1;
            } else {
                report.matching += 1;
            }
        });

        report
    });

    (environment.logger)(format!("drew {samples} coin pairs in {}ms", duration.as_millis()).as_str());

    report
}
