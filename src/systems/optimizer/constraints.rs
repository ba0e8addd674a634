use std::fmt::Debug;

use crate::components::aircraft::Aircraft;
use crate::systems::{FlightEnvelope, PerformanceAnalyzer};
use crate::utils::{ensure_finite, EvaluationError, DEFAULT_OBSTACLE_HEIGHT};

/// A requirement on the design. `evaluate` returns 0 when it holds and the
/// size of the violation otherwise.
pub trait DesignConstraint: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError>;
}

fn violation(quantity: &str, value: f64, limit: f64) -> Result<f64, EvaluationError> {
    ensure_finite(quantity, value).map(|value| (value - limit).max(0.0))
}

/// Stall speed at MTOW and `altitude` must not exceed `max_stall_speed`.
#[derive(Debug, Clone, PartialEq)]
pub struct StallSpeedConstraint {
    name: String,
    pub max_stall_speed: f64,
    pub altitude: f64,
}

impl StallSpeedConstraint {
    pub fn new(max_stall_speed: f64, altitude: f64) -> Self {
        Self {
            name: format!("Stall Speed <= {} m/s", max_stall_speed),
            max_stall_speed,
            altitude,
        }
    }
}

impl DesignConstraint for StallSpeedConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError> {
        let v_stall = FlightEnvelope::new(aircraft).calculate_stall_speed(
            self.altitude,
            aircraft.mass().max_takeoff_weight,
            1.0,
        );
        violation("stall speed", v_stall, self.max_stall_speed)
    }
}

/// Sea-level takeoff distance over a 50 ft obstacle must not exceed
/// `max_takeoff_distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct TakeoffDistanceConstraint {
    name: String,
    pub max_takeoff_distance: f64,
}

impl TakeoffDistanceConstraint {
    pub fn new(max_takeoff_distance: f64) -> Self {
        Self {
            name: format!("Takeoff Distance <= {} m", max_takeoff_distance),
            max_takeoff_distance,
        }
    }
}

impl DesignConstraint for TakeoffDistanceConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError> {
        // Runway length only feeds the adequacy flag, which is not used here.
        let takeoff = PerformanceAnalyzer::new(aircraft)
            .analyze_takeoff_performance(self.max_takeoff_distance * 2.0, DEFAULT_OBSTACLE_HEIGHT);
        violation(
            "takeoff distance",
            takeoff.total_distance,
            self.max_takeoff_distance,
        )
    }
}

/// MTOW wing loading must not exceed `max_wing_loading` (N/m²).
#[derive(Debug, Clone, PartialEq)]
pub struct WingLoadingConstraint {
    name: String,
    pub max_wing_loading: f64,
}

impl WingLoadingConstraint {
    pub fn new(max_wing_loading: f64) -> Self {
        Self {
            name: format!("Wing Loading <= {} N/m²", max_wing_loading),
            max_wing_loading,
        }
    }
}

impl DesignConstraint for WingLoadingConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError> {
        violation("wing loading", aircraft.wing_loading(), self.max_wing_loading)
    }
}
