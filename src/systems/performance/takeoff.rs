use serde::{Deserialize, Serialize};

use super::PerformanceAnalyzer;
use crate::environment::AtmosphericState;
use crate::systems::envelope::stall_speed;
use crate::utils::TAKEOFF_CLIMB_GRADIENT;

const TAKEOFF_SPEED_FACTOR: f64 = 1.2;
const LIGHT_WING_LOADING: f64 = 2000.0; // N/m^2

/// Sea-level takeoff at MTOW.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeoffPerformance {
    pub v_stall: f64,
    pub v_takeoff: f64,
    pub ground_roll: f64,
    /// Horizontal distance to clear the obstacle after lift-off.
    pub climb_distance: f64,
    pub total_distance: f64,
    pub runway_adequate: bool,
}

impl PerformanceAnalyzer<'_> {
    /// Takeoff distances against a runway of `runway_length` metres with an
    /// obstacle of `obstacle_height` metres.
    ///
    /// Ground roll is an empirical multiple of wing loading; the airborne
    /// segment assumes a constant 6% climb gradient.
    pub fn analyze_takeoff_performance(
        &self,
        runway_length: f64,
        obstacle_height: f64,
    ) -> TakeoffPerformance {
        let atm = AtmosphericState::sea_level();
        let weight = self.aircraft.max_takeoff_weight_force();
        let wing_area = self.aircraft.geometry().wing_area;

        let v_stall = stall_speed(atm.density, weight, wing_area, self.aircraft.cl_max());
        let v_takeoff = TAKEOFF_SPEED_FACTOR * v_stall;

        let wing_loading = weight / wing_area;
        let ground_roll = if wing_loading < LIGHT_WING_LOADING {
            wing_loading * 0.05
        } else {
            wing_loading * 0.08
        };

        let climb_distance = obstacle_height / TAKEOFF_CLIMB_GRADIENT;
        let total_distance = ground_roll + climb_distance;

        TakeoffPerformance {
            v_stall,
            v_takeoff,
            ground_roll,
            climb_distance,
            total_distance,
            runway_adequate: total_distance <= runway_length,
        }
    }
}
