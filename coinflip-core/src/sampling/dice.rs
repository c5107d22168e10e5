#[cfg(test)]
#[path = "../../tests/unit/sampling/dice_test.rs"]
mod dice_test;

use crate::utils::{Environment, Float, Timer};

/// Amount of faces on the simulated dice.
pub const DICE_FACES: usize = 6;

/// Aggregated face counts of repeated dice rolls.
pub struct DiceReport {
    /// Amount of rolls.
    pub rolls: usize,
    /// Per face counts where index 0 corresponds to face 1.
    pub faces: [usize; DICE_FACES],
}

/// Maps given unit interval value to a dice face from 1 to 6.
pub fn get_face(value: Float) -> usize {
    (value * DICE_FACES as Float) as usize + 1
}

/// Rolls a six sided dice given amount of times and tallies per face counts.
pub fn roll_dice(samples: usize, environment: &Environment) -> DiceReport {
    let random = environment.random.as_ref();

    let (report, duration) = Timer::measure_duration(|| {
        let mut faces = [0_usize; DICE_FACES];

        (0..samples).for_each(|_| {
            let face = get_face(random.uniform_real(0., 1.));
            faces[face - 1] += 1;
        });

        DiceReport { rolls: samples, faces }
    });

    (environment.logger)(format!("rolled the dice {samples} times in {}ms", duration.as_millis()).as_str());

    report
}
