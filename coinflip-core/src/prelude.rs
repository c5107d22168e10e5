//! This module reimports a common used types.

pub use crate::algorithms::math::Histogram;

pub use crate::sampling::analyze_distribution;
pub use crate::sampling::estimate_pi;
pub use crate::sampling::roll_dice;
pub use crate::sampling::run_flips;
pub use crate::sampling::run_paired_flips;
pub use crate::sampling::{DiceReport, DistributionReport, FlipReport, PairedFlipReport, PiEstimate};

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
