//! This module contains some statistic related functionality.

mod histogram;
pub use self::histogram::Histogram;

mod statistics;
pub use self::statistics::*;
