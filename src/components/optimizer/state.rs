use serde::{Deserialize, Serialize};

use crate::components::aircraft::Aircraft;
use crate::components::optimizer::{DesignVariable, SearchMethod};

pub const CONVERGED_MESSAGE: &str = "Optimization terminated successfully.";
pub const MAX_ITERATIONS_MESSAGE: &str = "Maximum number of iterations has been exceeded.";

/// Raw output of a search driver, before it is mapped back to an aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub x: Vec<f64>,
    pub cost: f64,
    pub success: bool,
    pub message: String,
    pub iterations: u64,
    pub evaluations: u64,
}

/// Final report of a design optimization.
///
/// Objective and constraint values that could not be evaluated on the
/// optimized aircraft are stored as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub success: bool,
    pub message: String,
    pub method: SearchMethod,
    pub optimized_aircraft: Aircraft,
    /// Resolved value of every design variable, in configuration order.
    pub design_variables: Vec<(DesignVariable, f64)>,
    /// Combined penalised objective at the optimum.
    pub objective_value: f64,
    /// Raw (unweighted) value of each objective, by name.
    pub objectives: Vec<(String, f64)>,
    /// Violation of each constraint, by name. Zero when satisfied.
    pub constraints: Vec<(String, f64)>,
    pub iterations: u64,
    pub evaluations: u64,
}

impl OptimizationResult {
    pub fn design_variable(&self, name: &str) -> Option<f64> {
        self.design_variables
            .iter()
            .find(|(variable, _)| variable.name() == name)
            .map(|(_, value)| *value)
    }

    pub fn objective(&self, name: &str) -> Option<f64> {
        lookup(&self.objectives, name)
    }

    pub fn constraint(&self, name: &str) -> Option<f64> {
        lookup(&self.constraints, name)
    }

    /// True when every constraint evaluated to zero violation.
    pub fn is_feasible(&self) -> bool {
        self.constraints.iter().all(|(_, violation)| *violation == 0.0)
    }
}

fn lookup(entries: &[(String, f64)], name: &str) -> Option<f64> {
    entries
        .iter()
        .find(|(entry, _)| entry == name)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::optimizer::GeometryField;

    fn sample_result() -> OptimizationResult {
        OptimizationResult {
            success: true,
            message: CONVERGED_MESSAGE.to_string(),
            method: SearchMethod::DifferentialEvolution,
            optimized_aircraft: Aircraft::general_aviation(),
            design_variables: vec![(DesignVariable::Geometry(GeometryField::WingArea), 17.5)],
            objective_value: -12.0,
            objectives: vec![("Maximize L/D".to_string(), -12.0)],
            constraints: vec![("Wing Loading <= 800 N/m²".to_string(), 0.0)],
            iterations: 12,
            evaluations: 400,
        }
    }

    #[test]
    fn test_lookups() {
        let result = sample_result();
        assert_eq!(result.design_variable("wing_area"), Some(17.5));
        assert_eq!(result.design_variable("wing_span"), None);
        assert_eq!(result.objective("Maximize L/D"), Some(-12.0));
        assert!(result.is_feasible());
    }

    #[test]
    fn test_infeasible_with_nan_constraint() {
        let mut result = sample_result();
        result.constraints[0].1 = f64::NAN;
        assert!(!result.is_feasible());
    }
}
