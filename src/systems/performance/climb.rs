use serde::{Deserialize, Serialize};

use super::PerformanceAnalyzer;
use crate::environment::AtmosphericState;
use crate::systems::envelope::stall_speed;
use crate::utils::{linspace, rad_to_deg, GRAVITY, MIN_CLIMB_RATE};

const CLIMB_SAMPLES: usize = 50;
const CLIMB_SPEED_FACTOR: f64 = 1.3;

/// Climb capability sampled over an altitude band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbPerformance {
    pub altitudes: Vec<f64>,
    /// Rate of climb (m/s), zero where thrust is insufficient.
    pub climb_rates: Vec<f64>,
    /// Flight path angle (deg).
    pub climb_angles: Vec<f64>,
    /// First sampled altitude where the climb rate falls to 100 ft/min,
    /// otherwise the top of the band.
    pub service_ceiling: f64,
}

impl ClimbPerformance {
    pub fn max_climb_rate(&self) -> f64 {
        self.climb_rates.iter().cloned().fold(0.0, f64::max)
    }
}

impl PerformanceAnalyzer<'_> {
    /// Climb rate and angle at 1.3·Vstall for 50 altitudes spanning
    /// `altitude_range`, given a constant `thrust_available` (N) and mass
    /// `weight` (kg).
    pub fn calculate_climb_performance(
        &self,
        altitude_range: (f64, f64),
        weight: f64,
        thrust_available: f64,
    ) -> ClimbPerformance {
        let (min_alt, max_alt) = altitude_range;
        let altitudes = linspace(min_alt, max_alt, CLIMB_SAMPLES);
        let weight_force = weight * GRAVITY;
        let wing_area = self.aircraft.geometry().wing_area;

        let mut climb_rates = Vec::with_capacity(altitudes.len());
        let mut climb_angles = Vec::with_capacity(altitudes.len());

        for &altitude in &altitudes {
            let atm = AtmosphericState::standard_atmosphere(altitude);

            let v_stall = stall_speed(atm.density, weight_force, wing_area, self.aircraft.cl_max());
            let v_climb = CLIMB_SPEED_FACTOR * v_stall;

            let q_s = 0.5 * atm.density * v_climb.powi(2) * wing_area;
            let cl = weight_force / q_s;
            let thrust_required = q_s * self.aircraft.calculate_drag_coefficient(cl);

            let excess_thrust = thrust_available - thrust_required;
            if excess_thrust > 0.0 {
                climb_rates.push(excess_thrust * v_climb / weight_force);
                // Excess thrust beyond the weight is a vertical climb.
                let sin_gamma = (excess_thrust / weight_force).min(1.0);
                climb_angles.push(rad_to_deg(sin_gamma.asin()));
            } else {
                climb_rates.push(0.0);
                climb_angles.push(0.0);
            }
        }

        let service_ceiling = altitudes
            .iter()
            .zip(&climb_rates)
            .find(|(_, rate)| **rate <= MIN_CLIMB_RATE)
            .map(|(altitude, _)| *altitude)
            .unwrap_or_else(|| altitudes.iter().cloned().fold(f64::MIN, f64::max));

        ClimbPerformance {
            altitudes,
            climb_rates,
            climb_angles,
            service_ceiling,
        }
    }
}
