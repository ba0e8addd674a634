use std::fmt::Debug;

use crate::components::aircraft::Aircraft;
use crate::systems::PerformanceAnalyzer;
use crate::utils::{ensure_finite, EvaluationError, DEFAULT_SFC};

/// Cruise speed assumed by the fuel-burn estimate (m/s).
const FUEL_ESTIMATE_CRUISE_SPEED: f64 = 200.0;

/// A weighted quantity to minimize.
///
/// Objectives that maximize something return its negation so the combined
/// objective always decreases as the design improves.
pub trait DesignObjective: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn weight(&self) -> f64;

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError>;
}

/// Breguet range with a fixed fraction of MTOW as fuel.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximizeRange {
    pub cruise_altitude: f64,
    pub cruise_speed: f64,
    pub fuel_fraction: f64,
    pub weight: f64,
}

impl Default for MaximizeRange {
    fn default() -> Self {
        Self {
            cruise_altitude: 10000.0,
            cruise_speed: 200.0,
            fuel_fraction: 0.3,
            weight: 1.0,
        }
    }
}

impl MaximizeRange {
    pub fn new(cruise_altitude: f64, cruise_speed: f64, fuel_fraction: f64, weight: f64) -> Self {
        Self {
            cruise_altitude,
            cruise_speed,
            fuel_fraction,
            weight,
        }
    }
}

impl DesignObjective for MaximizeRange {
    fn name(&self) -> &str {
        "Maximize Range"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError> {
        let fuel_weight = aircraft.mass().max_takeoff_weight * self.fuel_fraction;
        let range_km = PerformanceAnalyzer::new(aircraft).calculate_range(
            self.cruise_altitude,
            self.cruise_speed,
            fuel_weight,
            DEFAULT_SFC,
        );
        ensure_finite("range", range_km).map(|range| -range)
    }
}

/// Fuel mass (kg) needed to fly `mission_range` km at the best-L/D angle of
/// attack, from the inverted Breguet equation.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeFuelConsumption {
    pub mission_range: f64,
    pub cruise_altitude: f64,
    pub weight: f64,
}

impl Default for MinimizeFuelConsumption {
    fn default() -> Self {
        Self {
            mission_range: 1000.0,
            cruise_altitude: 10000.0,
            weight: 1.0,
        }
    }
}

impl MinimizeFuelConsumption {
    pub fn new(mission_range: f64, cruise_altitude: f64, weight: f64) -> Self {
        Self {
            mission_range,
            cruise_altitude,
            weight,
        }
    }
}

impl DesignObjective for MinimizeFuelConsumption {
    fn name(&self) -> &str {
        "Minimize Fuel Consumption"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError> {
        let ld_ratio = PerformanceAnalyzer::new(aircraft).max_lift_drag_ratio();
        let fuel_fraction = 1.0
            - (-self.mission_range * 1000.0 * DEFAULT_SFC / (FUEL_ESTIMATE_CRUISE_SPEED * ld_ratio))
                .exp();
        ensure_finite(
            "fuel weight",
            aircraft.mass().max_takeoff_weight * fuel_fraction,
        )
    }
}

/// Best L/D of the angle-of-attack scan.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximizeLiftToDrag {
    pub weight: f64,
}

impl Default for MaximizeLiftToDrag {
    fn default() -> Self {
        Self { weight: 1.0 }
    }
}

impl MaximizeLiftToDrag {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl DesignObjective for MaximizeLiftToDrag {
    fn name(&self) -> &str {
        "Maximize L/D"
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, aircraft: &Aircraft) -> Result<f64, EvaluationError> {
        let max_ld = PerformanceAnalyzer::new(aircraft).max_lift_drag_ratio();
        ensure_finite("lift-to-drag ratio", max_ld).map(|ld| -ld)
    }
}
