use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error(
        "Size of reward probabilities ({probabilities}) does not match size of actual rewards ({rewards})"
    )]
    LengthMismatch { probabilities: usize, rewards: usize },

    #[error("All reward probabilities must be in the range [0, 1], but got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("Environment must have at least one arm")]
    NoArms,

    #[error("Arm index must be between 0 and {max}, but got {arm}")]
    ArmOutOfRange { arm: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}
