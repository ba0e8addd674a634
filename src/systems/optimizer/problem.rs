use argmin::core::{CostFunction, Error as ArgminError, Gradient};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::components::aircraft::Aircraft;
use crate::components::optimizer::DesignSpace;
use crate::systems::optimizer::{DesignConstraint, DesignObjective};
use crate::utils::{ensure_finite, EvaluationError, CONSTRAINT_PENALTY_WEIGHT, INVALID_DESIGN_PENALTY};

/// Penalised design objective over a bounded parameter vector.
///
/// Parameters are projected onto the bounds before evaluation, so the
/// unconstrained quasi-Newton search behaves as a bounded one.
#[derive(Clone, Copy)]
pub struct DesignProblem<'a> {
    pub space: &'a DesignSpace,
    pub objectives: &'a [Box<dyn DesignObjective>],
    pub constraints: &'a [Box<dyn DesignConstraint>],
    pub base_aircraft: &'a Aircraft,
    pub gradient_step: f64,
    pub evaluations: &'a AtomicU64,
}

impl DesignProblem<'_> {
    /// Weighted objectives plus quadratic constraint penalties.
    ///
    /// Never fails: a candidate that cannot be built or scored costs the
    /// fixed invalid-design penalty.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        match self.try_evaluate(x) {
            Ok(value) => value,
            Err(e) => {
                debug!("Candidate {:?} penalised: {}", x, e);
                INVALID_DESIGN_PENALTY
            }
        }
    }

    pub fn try_evaluate(&self, x: &[f64]) -> Result<f64, EvaluationError> {
        let aircraft = self.space.create_aircraft(x, self.base_aircraft)?;

        let mut total = 0.0;
        for objective in self.objectives {
            total += objective.weight() * objective.evaluate(&aircraft)?;
        }

        let mut penalty = 0.0;
        for constraint in self.constraints {
            let violation = constraint.evaluate(&aircraft)?;
            penalty += CONSTRAINT_PENALTY_WEIGHT * violation.powi(2);
        }

        ensure_finite("objective", total + penalty)
    }

    /// Finite-difference gradient of the projected objective.
    ///
    /// Central differences with a step relative to the parameter size,
    /// falling back to one-sided differences at the bounds.
    pub fn finite_difference_gradient(&self, x: &[f64]) -> Vec<f64> {
        let x = self.space.project(x);
        let mut grad = vec![0.0; x.len()];

        for (i, bounds) in self.space.bounds().iter().enumerate() {
            let h = self.gradient_step * x[i].abs().max(1.0);
            let upper = (x[i] + h).min(bounds.max);
            let lower = (x[i] - h).max(bounds.min);
            if upper <= lower {
                continue;
            }

            let mut x_plus = x.clone();
            x_plus[i] = upper;
            let mut x_minus = x.clone();
            x_minus[i] = lower;

            grad[i] = (self.evaluate(&x_plus) - self.evaluate(&x_minus)) / (upper - lower);
        }
        grad
    }

    /// Finite-difference gradient without the components whose descent
    /// step would leave the box at an active bound.
    pub fn projected_gradient(&self, x: &[f64]) -> Vec<f64> {
        let x = self.space.project(x);
        let mut grad = self.finite_difference_gradient(&x);
        for ((g, value), bounds) in grad.iter_mut().zip(&x).zip(self.space.bounds()) {
            let leaves_lower = *value <= bounds.min && *g > 0.0;
            let leaves_upper = *value >= bounds.max && *g < 0.0;
            if leaves_lower || leaves_upper {
                *g = 0.0;
            }
        }
        grad
    }

    /// Euclidean norm of [`DesignProblem::projected_gradient`].
    pub fn projected_gradient_norm(&self, x: &[f64]) -> f64 {
        self.projected_gradient(x)
            .iter()
            .map(|g| g * g)
            .sum::<f64>()
            .sqrt()
    }
}

impl CostFunction for DesignProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, ArgminError> {
        if param.len() != self.space.len() {
            return Err(ArgminError::msg(format!(
                "Param vector must have length {}",
                self.space.len()
            )));
        }
        Ok(self.evaluate(&self.space.project(param)))
    }
}

impl Gradient for DesignProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, param: &Self::Param) -> Result<Self::Gradient, ArgminError> {
        if param.len() != self.space.len() {
            return Err(ArgminError::msg(format!(
                "Param vector must have length {}",
                self.space.len()
            )));
        }
        Ok(self.projected_gradient(param))
    }
}
