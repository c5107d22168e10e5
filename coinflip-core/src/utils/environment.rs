use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a type for logging info messages.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific settings shared by the demo runners.
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,
    /// A logger for info messages.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
