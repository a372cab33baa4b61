//! Simulation of the stochastic multi-armed bandit problem: an agent
//! repeatedly chooses among K arms with unknown reward distributions and
//! balances exploring arms against exploiting the best-known one.

pub mod config;
pub mod environment;
pub mod errors;
pub mod policies;
pub mod simulation;

pub use environment::Environment;
pub use errors::{EnvironmentError, SimulationError};
pub use policies::{Policy, PolicyType};
pub use simulation::{RunRecord, Simulation};
