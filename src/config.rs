use crate::errors::EnvironmentError;
use crate::policies::PolicyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct EnvironmentConfig {
    pub reward_probabilities: Vec<f64>,
    pub actual_rewards: Vec<f64>,
}

impl EnvironmentConfig {
    pub fn build(self) -> Result<crate::environment::Environment, EnvironmentError> {
        crate::environment::Environment::new(self.reward_probabilities, self.actual_rewards)
    }
}

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub iterations: u64,
    pub seed: Option<u64>,
}

/// Complete description of an experiment: the environment parameters, the
/// policy with its hyperparameters, and the run settings.
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub environment: EnvironmentConfig,
    pub policy: PolicyType,
    pub run: RunConfig,
}

impl SimulationConfig {
    /// Reads `simulation.{toml,yaml,json,...}` from the working directory,
    /// overlaid with `SIM__`-prefixed environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("simulation"))
            .add_source(Environment::with_prefix("SIM").separator("__"))
            .build()?;

        builder.try_deserialize()
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("SIM").separator("__"))
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> SimulationConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn parses_a_full_experiment() {
        let config = parse(
            r#"
            [environment]
            reward_probabilities = [0.6, 0.3]
            actual_rewards = [1.0, 1.0]

            [policy.epsilon_greedy]
            epsilon = 0.1

            [run]
            iterations = 500
            seed = 1234
            "#,
        );

        assert_eq!(config.policy, PolicyType::EpsilonGreedy { epsilon: 0.1 });
        assert_eq!(config.run.iterations, 500);
        assert_eq!(config.run.seed, Some(1234));

        let environment = config.environment.build().unwrap();
        assert_eq!(environment.k_arms(), 2);
    }

    #[test]
    fn parses_a_parameterless_policy() {
        let config = parse(
            r#"
            policy = "random"

            [environment]
            reward_probabilities = [0.5]
            actual_rewards = [1.0]

            [run]
            iterations = 10
            "#,
        );

        assert_eq!(config.policy, PolicyType::Random);
        assert_eq!(config.run.seed, None);
    }

    #[test]
    fn invalid_environment_fails_at_build() {
        let config = parse(
            r#"
            policy = "greedy"

            [environment]
            reward_probabilities = [1.5]
            actual_rewards = [1.0]

            [run]
            iterations = 10
            "#,
        );

        assert!(config.environment.build().is_err());
    }
}
