use serde::{Deserialize, Serialize};

use crate::components::aircraft::Aircraft;
use crate::environment::AtmosphericState;
use crate::utils::{
    linspace, DIVE_SPEED_FACTOR, GRAVITY, MANEUVER_LOAD_FACTOR, NEGATIVE_LOAD_LIMIT,
    POSITIVE_LOAD_LIMIT,
};

const STALL_CURVE_SAMPLES: usize = 50;

/// Boundary of the V-n envelope as a closed polyline.
///
/// `velocities` and `load_factors` are parallel; the order traces the
/// boundary and must not be sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VnDiagram {
    pub velocities: Vec<f64>,
    pub load_factors: Vec<f64>,
    pub stall_speed: f64,
    pub maneuvering_speed: f64,
    pub dive_speed: f64,
}

impl VnDiagram {
    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.velocities
            .iter()
            .copied()
            .zip(self.load_factors.iter().copied())
    }
}

/// Speed and altitude limits of an aircraft.
#[derive(Debug, Clone, Copy)]
pub struct FlightEnvelope<'a> {
    aircraft: &'a Aircraft,
}

impl<'a> FlightEnvelope<'a> {
    pub fn new(aircraft: &'a Aircraft) -> Self {
        Self { aircraft }
    }

    pub fn aircraft(&self) -> &Aircraft {
        self.aircraft
    }

    /// Stall speed (m/s) at `altitude` for a mass of `weight` kg pulling
    /// `load_factor` g.
    pub fn calculate_stall_speed(&self, altitude: f64, weight: f64, load_factor: f64) -> f64 {
        let atm = AtmosphericState::standard_atmosphere(altitude);
        stall_speed(
            atm.density,
            weight * GRAVITY * load_factor,
            self.aircraft.geometry().wing_area,
            self.aircraft.cl_max(),
        )
    }

    /// Empirical service ceiling (m) from wing loading.
    ///
    /// Piecewise linear in wing loading with a floor of 1000 m. This is a
    /// rough estimate, not a climb-performance solve; see
    /// `PerformanceAnalyzer::calculate_climb_performance` for a
    /// thrust-based ceiling.
    pub fn calculate_service_ceiling(&self, weight: f64) -> f64 {
        let wing_loading = weight * GRAVITY / self.aircraft.geometry().wing_area;
        let ceiling = if wing_loading < 1000.0 {
            4000.0 + (1000.0 - wing_loading) * 10.0
        } else {
            4000.0 + (5000.0 - wing_loading) * 2.0
        };
        ceiling.max(1000.0)
    }

    /// Closed V-n boundary at `altitude`. `weight` defaults to MTOW.
    ///
    /// The polyline runs from the origin along the positive stall curve up
    /// to manoeuvring speed, along the positive structural limit to dive
    /// speed, down to the negative limit, back to negative stall speed and
    /// returns to the origin.
    pub fn generate_v_n_diagram(&self, altitude: f64, weight: Option<f64>) -> VnDiagram {
        let weight = weight.unwrap_or(self.aircraft.mass().max_takeoff_weight);
        let atm = AtmosphericState::standard_atmosphere(altitude);

        let v_stall = self.calculate_stall_speed(altitude, weight, 1.0);
        let v_a = v_stall * MANEUVER_LOAD_FACTOR.sqrt();
        let v_d = v_a * DIVE_SPEED_FACTOR;
        let wing_area = self.aircraft.geometry().wing_area;
        let cl_max = self.aircraft.cl_max();

        let mut velocities = vec![0.0];
        let mut load_factors = vec![0.0];

        // Positive stall curve
        for v in linspace(0.0, v_a, STALL_CURVE_SAMPLES) {
            if v >= v_stall {
                let n = 0.5 * atm.density * v.powi(2) * wing_area * cl_max / (weight * GRAVITY);
                velocities.push(v);
                load_factors.push(n.min(POSITIVE_LOAD_LIMIT));
            }
        }

        // Structural limits
        velocities.extend([v_a, v_d, v_d]);
        load_factors.extend([POSITIVE_LOAD_LIMIT, POSITIVE_LOAD_LIMIT, NEGATIVE_LOAD_LIMIT]);

        let v_stall_neg = v_stall * NEGATIVE_LOAD_LIMIT.abs().sqrt();
        velocities.extend([v_stall_neg, 0.0]);
        load_factors.extend([NEGATIVE_LOAD_LIMIT, 0.0]);

        VnDiagram {
            velocities,
            load_factors,
            stall_speed: v_stall,
            maneuvering_speed: v_a,
            dive_speed: v_d,
        }
    }
}

/// Speed at which `lift_force` newtons requires `cl_max`.
pub(crate) fn stall_speed(density: f64, lift_force: f64, wing_area: f64, cl_max: f64) -> f64 {
    (2.0 * lift_force / (density * wing_area * cl_max)).sqrt()
}
