mod config;
mod state;
mod variables;

pub use config::{OptimizerConfig, SearchMethod};
pub use state::{OptimizationResult, SearchOutcome, CONVERGED_MESSAGE, MAX_ITERATIONS_MESSAGE};
pub use variables::{DesignSpace, DesignVariable, GeometryField, MassField, VariableBounds};
