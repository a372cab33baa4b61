use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to sample from the action distribution: {0}")]
    Sampling(String),
}
