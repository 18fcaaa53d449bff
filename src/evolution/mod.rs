pub mod challenge;
pub mod diversity;
pub mod launcher;
pub mod options;
pub mod rates;

pub use challenge::{Challenge, TargetChallenge, DIVISION_PENALTY};
pub use diversity::diversity;
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use rates::{AdaptiveRates, RateBounds};
