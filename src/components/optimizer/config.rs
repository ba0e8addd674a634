use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::components::aircraft::ConfigError;
use crate::utils::OptimizerError;

/// Which search drives the design optimizer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMethod {
    /// Population-based global search.
    #[default]
    DifferentialEvolution,
    /// Bounded quasi-Newton search from the midpoint of the bounds.
    LocalGradient,
}

impl SearchMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SearchMethod::DifferentialEvolution => "differential_evolution",
            SearchMethod::LocalGradient => "l-bfgs-b",
        }
    }
}

impl FromStr for SearchMethod {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "differential_evolution" | "de" => Ok(SearchMethod::DifferentialEvolution),
            "minimize" | "l-bfgs-b" | "lbfgs" => Ok(SearchMethod::LocalGradient),
            _ => Err(OptimizerError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for both search drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Maximum number of DE generations
    pub max_iterations: usize,
    /// Population members per design variable
    pub population_size: usize,
    /// Seed of the DE random stream
    pub seed: u64,
    /// Dither range of the mutation factor, redrawn every generation
    pub mutation: (f64, f64),
    /// Crossover probability
    pub recombination: f64,
    /// Relative spread of population energies at convergence
    pub tolerance: f64,
    /// Refine the best DE member with the local search
    pub polish: bool,
    /// Maximum number of L-BFGS iterations
    pub local_max_iterations: u64,
    /// Relative finite-difference step
    pub gradient_step: f64,
    /// Number of correction pairs kept by L-BFGS
    pub lbfgs_memory: usize,
    /// Projected gradient norm at which the local search has converged
    pub gradient_tolerance: f64,
    /// Relative cost reduction below which a local restart counts as stalled
    pub cost_tolerance: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            population_size: 15,
            seed: 42,
            mutation: (0.5, 1.0),
            recombination: 0.7,
            tolerance: 0.01,
            polish: true,
            local_max_iterations: 1000,
            gradient_step: 1e-6,
            lbfgs_memory: 10,
            gradient_tolerance: 1e-5,
            cost_tolerance: 1e7 * f64::EPSILON,
        }
    }
}

impl OptimizerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config: OptimizerConfig = serde_yaml::from_str(&file_contents)?;
        config.validate()?;
        info!("Loaded optimizer settings from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (f_min, f_max) = self.mutation;
        if !(0.0..=2.0).contains(&f_min) || !(0.0..=2.0).contains(&f_max) || f_min > f_max {
            return Err(ConfigError::ValidationError(format!(
                "mutation must lie within [0, 2], got ({}, {})",
                f_min, f_max
            )));
        }
        if !(0.0..=1.0).contains(&self.recombination) {
            return Err(ConfigError::ValidationError(format!(
                "recombination must lie within [0, 1], got {}",
                self.recombination
            )));
        }
        if self.population_size == 0 {
            return Err(ConfigError::ValidationError(
                "population_size must be positive".to_string(),
            ));
        }
        if self.max_iterations == 0 || self.local_max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "max_iterations and local_max_iterations must be positive".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        for (name, value) in [
            ("gradient_step", self.gradient_step),
            ("gradient_tolerance", self.gradient_tolerance),
            ("cost_tolerance", self.cost_tolerance),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.lbfgs_memory == 0 {
            return Err(ConfigError::ValidationError(
                "lbfgs_memory must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Population size for `dimensions` design variables. DE needs at least
    /// five members to draw distinct donors.
    pub fn population_for(&self, dimensions: usize) -> usize {
        (self.population_size * dimensions).max(5)
    }
}
