use argmin::{
    core::{Error as ArgminError, Executor, State, TerminationReason},
    solver::{linesearch::MoreThuenteLineSearch, quasinewton::LBFGS},
};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

use crate::components::aircraft::Aircraft;
use crate::components::optimizer::{
    DesignSpace, OptimizationResult, OptimizerConfig, SearchMethod, SearchOutcome,
    CONVERGED_MESSAGE, MAX_ITERATIONS_MESSAGE,
};
use crate::systems::optimizer::{
    DesignConstraint, DesignObjective, DesignProblem, DifferentialEvolution,
};
use crate::utils::{EvaluationError, OptimizerError};

/// Constrained multi-objective search over aircraft design parameters.
///
/// Objectives are summed with their weights; constraint violations add a
/// quadratic penalty. Candidates that cannot be built or scored are given a
/// fixed large cost instead of aborting the search.
#[derive(Debug, Default)]
pub struct DesignOptimizer {
    objectives: Vec<Box<dyn DesignObjective>>,
    constraints: Vec<Box<dyn DesignConstraint>>,
    space: DesignSpace,
    config: OptimizerConfig,
}

impl DesignOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OptimizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: OptimizerConfig) {
        self.config = config;
    }

    pub fn add_objective<O: DesignObjective + 'static>(&mut self, objective: O) {
        self.objectives.push(Box::new(objective));
    }

    pub fn add_constraint<C: DesignConstraint + 'static>(&mut self, constraint: C) {
        self.constraints.push(Box::new(constraint));
    }

    pub fn objectives(&self) -> &[Box<dyn DesignObjective>] {
        &self.objectives
    }

    pub fn constraints(&self) -> &[Box<dyn DesignConstraint>] {
        &self.constraints
    }

    pub fn design_space(&self) -> &DesignSpace {
        &self.space
    }

    /// Replaces the design variables with `(name, (min, max))` pairs, kept in
    /// the given order. Names are resolved here; an unknown or repeated name
    /// or an empty interval leaves the previous variables untouched.
    pub fn set_design_variables<I, S>(&mut self, variables: I) -> Result<(), OptimizerError>
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: AsRef<str>,
    {
        self.space = DesignSpace::from_named(variables)?;
        Ok(())
    }

    pub fn set_design_space(&mut self, space: DesignSpace) {
        self.space = space;
    }

    pub fn create_aircraft_from_variables(
        &self,
        x: &[f64],
        base_aircraft: &Aircraft,
    ) -> Result<Aircraft, EvaluationError> {
        self.space.create_aircraft(x, base_aircraft)
    }

    /// Combined penalised objective at `x`.
    pub fn objective_function(&self, x: &[f64], base_aircraft: &Aircraft) -> f64 {
        let evaluations = AtomicU64::new(0);
        self.problem(base_aircraft, &evaluations).evaluate(x)
    }

    fn problem<'a>(
        &'a self,
        base_aircraft: &'a Aircraft,
        evaluations: &'a AtomicU64,
    ) -> DesignProblem<'a> {
        DesignProblem {
            space: &self.space,
            objectives: &self.objectives,
            constraints: &self.constraints,
            base_aircraft,
            gradient_step: self.config.gradient_step,
            evaluations,
        }
    }

    /// Runs the search and reports the best design found.
    ///
    /// Only configuration problems are errors. A search that stops without
    /// converging is reported through `success` and `message`.
    pub fn optimize(
        &self,
        base_aircraft: &Aircraft,
        method: SearchMethod,
    ) -> Result<OptimizationResult, OptimizerError> {
        if self.space.is_empty() {
            return Err(OptimizerError::NoDesignVariables);
        }
        info!(
            "Optimizing '{}' over {} design variables with {}",
            base_aircraft.name(),
            self.space.len(),
            method
        );

        let evaluations = AtomicU64::new(0);
        let problem = self.problem(base_aircraft, &evaluations);

        let outcome = match method {
            SearchMethod::DifferentialEvolution => self.run_differential_evolution(problem),
            SearchMethod::LocalGradient => {
                minimize_local(problem, self.space.midpoint(), &self.config)
            }
        };

        let x = self.space.project(&outcome.x);
        let (optimized_aircraft, success, message) =
            match self.space.create_aircraft(&x, base_aircraft) {
                Ok(aircraft) => (aircraft, outcome.success, outcome.message),
                Err(e) => {
                    warn!("Optimized design could not be built: {}", e);
                    (
                        base_aircraft.clone(),
                        false,
                        format!("Optimized design is invalid: {}", e),
                    )
                }
            };

        let objectives = self
            .objectives
            .iter()
            .map(|objective| {
                let value = objective.evaluate(&optimized_aircraft).unwrap_or_else(|e| {
                    warn!("Objective '{}' failed on optimized design: {}", objective.name(), e);
                    f64::NAN
                });
                (objective.name().to_string(), value)
            })
            .collect();

        let constraints = self
            .constraints
            .iter()
            .map(|constraint| {
                let value = constraint.evaluate(&optimized_aircraft).unwrap_or_else(|e| {
                    warn!("Constraint '{}' failed on optimized design: {}", constraint.name(), e);
                    f64::NAN
                });
                (constraint.name().to_string(), value)
            })
            .collect();

        let design_variables = self
            .space
            .bounds()
            .iter()
            .map(|bounds| bounds.variable)
            .zip(x)
            .collect();

        info!(
            "Optimization finished: success={}, objective={:.6}, iterations={}, evaluations={}",
            success,
            outcome.cost,
            outcome.iterations,
            evaluations.load(Ordering::Relaxed)
        );

        Ok(OptimizationResult {
            success,
            message,
            method,
            optimized_aircraft,
            design_variables,
            objective_value: outcome.cost,
            objectives,
            constraints,
            iterations: outcome.iterations,
            evaluations: evaluations.load(Ordering::Relaxed),
        })
    }

    fn run_differential_evolution(&self, problem: DesignProblem<'_>) -> SearchOutcome {
        let bounds: Vec<(f64, f64)> = self.space.bounds().iter().map(|b| (b.min, b.max)).collect();
        let mut outcome =
            DifferentialEvolution::new(&self.config).minimize(&bounds, |x| problem.evaluate(x));

        if self.config.polish {
            let polished = minimize_local(problem, outcome.x.clone(), &self.config);
            debug!(
                "Polishing: {:.6e} -> {:.6e} ({})",
                outcome.cost, polished.cost, polished.message
            );
            if polished.cost < outcome.cost {
                outcome.x = self.space.project(&polished.x);
                outcome.cost = polished.cost;
            }
        }
        outcome
    }
}

const LOCAL_RESTARTS: usize = 10;

/// One L-BFGS run from a given start.
struct LocalRun {
    x: Vec<f64>,
    cost: f64,
    iterations: u64,
    converged: bool,
    message: String,
}

/// Bounded L-BFGS from `x0`.
///
/// The quasi-Newton memory goes stale when a bound becomes active, so the
/// search restarts from its best point until the projected gradient falls
/// below `gradient_tolerance` or a run reduces the cost by no more than
/// `cost_tolerance` relative to its magnitude.
///
/// Solver errors are reported as an unsuccessful outcome at the best point
/// reached so far.
fn minimize_local(problem: DesignProblem<'_>, x0: Vec<f64>, config: &OptimizerConfig) -> SearchOutcome {
    let mut x = problem.space.project(&x0);
    let mut cost = problem.evaluate(&x);
    let mut iterations = 0;
    let mut message = MAX_ITERATIONS_MESSAGE.to_string();

    let outcome = |x: Vec<f64>, cost: f64, iterations: u64, success: bool, message: String| {
        SearchOutcome {
            x,
            cost,
            success,
            message,
            iterations,
            evaluations: problem.evaluations.load(Ordering::Relaxed),
        }
    };

    for restart in 0..LOCAL_RESTARTS {
        let budget = config.local_max_iterations.saturating_sub(iterations);
        if budget == 0 {
            return outcome(x, cost, iterations, false, MAX_ITERATIONS_MESSAGE.to_string());
        }

        let run = match run_lbfgs(problem, x.clone(), budget, config) {
            Ok(run) => run,
            Err(e) => {
                warn!("Local search failed: {}", e);
                return outcome(x, cost, iterations, false, e.to_string());
            }
        };
        iterations += run.iterations;

        let previous = cost;
        if run.cost < cost {
            x = run.x;
            cost = run.cost;
        }

        let scale = previous.abs().max(cost.abs()).max(1.0);
        let stalled = previous - cost <= config.cost_tolerance * scale;
        let gradient_norm = problem.projected_gradient_norm(&x);
        debug!(
            "L-BFGS run {}: cost {:.6e}, projected gradient {:.3e} ({})",
            restart, cost, gradient_norm, run.message
        );

        if stalled || gradient_norm <= config.gradient_tolerance {
            return outcome(x, cost, iterations, true, CONVERGED_MESSAGE.to_string());
        }
        if !run.converged {
            message = run.message;
        }
    }

    outcome(x, cost, iterations, false, message)
}

fn run_lbfgs(
    problem: DesignProblem<'_>,
    x0: Vec<f64>,
    max_iterations: u64,
    config: &OptimizerConfig,
) -> Result<LocalRun, ArgminError> {
    let linesearch = MoreThuenteLineSearch::new().with_c(1e-4, 0.9)?;
    let solver = LBFGS::new(linesearch, config.lbfgs_memory)
        .with_tolerance_grad(config.gradient_tolerance)?;

    let result = Executor::new(problem, solver)
        .configure(|state| state.param(x0.clone()).max_iters(max_iterations))
        .run()?;

    let state = result.state();
    let (x, cost) = match state.get_best_param() {
        Some(param) => (problem.space.project(param), state.get_best_cost()),
        None => (x0.clone(), problem.evaluate(&x0)),
    };

    let (converged, message) = match state.get_termination_reason() {
        Some(TerminationReason::SolverConverged) | Some(TerminationReason::TargetCostReached) => {
            (true, CONVERGED_MESSAGE.to_string())
        }
        Some(TerminationReason::MaxItersReached) => (false, MAX_ITERATIONS_MESSAGE.to_string()),
        Some(reason) => (false, reason.to_string()),
        None => (false, "Local search did not terminate".to_string()),
    };

    Ok(LocalRun {
        x,
        cost,
        iterations: state.get_iter(),
        converged,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::optimizer::{MaximizeLiftToDrag, WingLoadingConstraint};
    use pretty_assertions::assert_eq;

    fn small_config() -> OptimizerConfig {
        OptimizerConfig {
            max_iterations: 15,
            population_size: 5,
            polish: false,
            ..OptimizerConfig::default()
        }
    }

    #[test]
    fn test_optimize_without_variables_fails() {
        let mut optimizer = DesignOptimizer::new();
        optimizer.add_objective(MaximizeLiftToDrag::default());
        let result = optimizer.optimize(&Aircraft::general_aviation(), SearchMethod::DifferentialEvolution);
        assert_eq!(result, Err(OptimizerError::NoDesignVariables));
    }

    #[test]
    fn test_bad_variables_keep_previous_space() {
        let mut optimizer = DesignOptimizer::new();
        optimizer
            .set_design_variables([("wing_area", (12.0, 20.0))])
            .unwrap();
        let err = optimizer
            .set_design_variables([("wing_area", (12.0, 20.0)), ("engine_count", (1.0, 2.0))])
            .unwrap_err();
        assert_eq!(err, OptimizerError::UnknownVariable("engine_count".to_string()));
        assert_eq!(optimizer.design_space().len(), 1);
    }

    #[test]
    fn test_objective_function_penalises_invalid_designs() {
        let mut optimizer = DesignOptimizer::new();
        optimizer.add_objective(MaximizeLiftToDrag::default());
        optimizer
            .set_design_variables([("wing_span", (0.0, 12.0)), ("wing_area", (10.0, 20.0))])
            .unwrap();
        let base = Aircraft::general_aviation();
        assert_eq!(optimizer.objective_function(&[0.0, 16.0], &base), 1.0e6);
        assert!(optimizer.objective_function(&[11.0, 16.0], &base) < 0.0);
    }

    #[test]
    fn test_differential_evolution_report() {
        let mut optimizer = DesignOptimizer::with_config(small_config());
        optimizer.add_objective(MaximizeLiftToDrag::default());
        optimizer.add_constraint(WingLoadingConstraint::new(900.0));
        optimizer
            .set_design_variables([("wing_area", (12.0, 20.0))])
            .unwrap();

        let base = Aircraft::general_aviation();
        let result = optimizer
            .optimize(&base, SearchMethod::DifferentialEvolution)
            .unwrap();

        let area = result.design_variable("wing_area").unwrap();
        assert!((12.0..=20.0).contains(&area));
        assert_eq!(result.optimized_aircraft.geometry().wing_area, area);
        assert_eq!(result.optimized_aircraft.name(), "General Aviation_optimized");
        assert_eq!(result.objectives.len(), 1);
        assert_eq!(result.constraints.len(), 1);
        assert!(result.evaluations > 0);
        assert_eq!(result.method, SearchMethod::DifferentialEvolution);
    }

    #[test]
    fn test_local_search_starts_at_midpoint_and_stays_in_bounds() {
        let mut optimizer = DesignOptimizer::new();
        optimizer.add_constraint(WingLoadingConstraint::new(600.0));
        optimizer
            .set_design_variables([("wing_area", (12.0, 24.0))])
            .unwrap();

        let base = Aircraft::general_aviation();
        let result = optimizer.optimize(&base, SearchMethod::LocalGradient).unwrap();

        let area = result.design_variable("wing_area").unwrap();
        assert!((12.0..=24.0).contains(&area));
        // The search never reports a worse point than where it started.
        assert!(result.objective_value <= optimizer.objective_function(&[18.0], &base));
    }

    #[test]
    fn test_local_search_converges_on_active_bound() {
        let mut optimizer = DesignOptimizer::new();
        optimizer.add_objective(MaximizeLiftToDrag::default());
        optimizer
            .set_design_variables([("wing_span", (9.0, 13.0))])
            .unwrap();

        let base = Aircraft::general_aviation();
        let result = optimizer.optimize(&base, SearchMethod::LocalGradient).unwrap();

        // L/D grows with aspect ratio, so the optimum is the largest span.
        assert!(result.success, "{}", result.message);
        assert_eq!(result.message, CONVERGED_MESSAGE);
        assert_eq!(result.design_variable("wing_span"), Some(13.0));
    }
}
