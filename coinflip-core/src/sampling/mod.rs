//! This module contains demo runners which drive repeated draws from a random source and
//! aggregate the outcomes into printable reports.

mod coin;
pub use self::coin::*;

mod dice;
pub use self::dice::*;

mod distribution;
pub use self::distribution::*;

mod monte_carlo;
pub use self::monte_carlo::*;
