use serde::{Deserialize, Serialize};

use crate::utils::{EvaluationError, LANDING_WEIGHT_FRACTION};

/// Mass properties of the aircraft, all in kilograms.
///
/// Callers are expected to keep `empty + fuel + payload <= max_takeoff_weight`;
/// it is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftMass {
    /// Basic empty weight (kg).
    pub empty_weight: f64,
    /// Maximum usable fuel (kg).
    pub fuel_capacity: f64,
    /// Maximum payload (kg).
    pub payload_capacity: f64,
    /// Maximum takeoff weight (kg).
    pub max_takeoff_weight: f64,
}

impl AircraftMass {
    pub fn operating_empty_weight(&self) -> f64 {
        self.empty_weight
    }

    pub fn max_landing_weight(&self) -> f64 {
        self.max_takeoff_weight * LANDING_WEIGHT_FRACTION
    }

    pub fn fuel_fraction(&self) -> f64 {
        self.fuel_capacity / self.max_takeoff_weight
    }

    pub fn payload_fraction(&self) -> f64 {
        self.payload_capacity / self.max_takeoff_weight
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !self.max_takeoff_weight.is_finite() || self.max_takeoff_weight <= 0.0 {
            return Err(EvaluationError::InvalidMass(format!(
                "max_takeoff_weight must be positive and finite, got {}",
                self.max_takeoff_weight
            )));
        }
        Ok(())
    }

    pub fn commercial_airliner() -> Self {
        Self {
            empty_weight: 41000.0,
            fuel_capacity: 20000.0,
            payload_capacity: 18000.0,
            max_takeoff_weight: 79000.0,
        }
    }

    pub fn general_aviation() -> Self {
        Self {
            empty_weight: 760.0,
            fuel_capacity: 200.0,
            payload_capacity: 400.0,
            max_takeoff_weight: 1157.0,
        }
    }

    pub fn fighter_jet() -> Self {
        Self {
            empty_weight: 8570.0,
            fuel_capacity: 3200.0,
            payload_capacity: 2400.0,
            max_takeoff_weight: 19200.0,
        }
    }
}
