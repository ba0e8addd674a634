use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::PerformanceAnalyzer;
use crate::environment::AtmosphericState;
use crate::systems::envelope::stall_speed;
use crate::utils::linspace;

const MAP_ALTITUDES: usize = 30;
const MAP_SPEEDS: usize = 50;
const MAP_MAX_ALTITUDE: f64 = 15000.0;
const MAP_SPEED_RANGE: (f64, f64) = (50.0, 300.0);

/// Level-flight performance over an altitude × speed grid at MTOW.
///
/// Grid rows follow `altitudes` and columns follow `speeds`. Cells below
/// stall or needing more than `cl_max` hold infinite power and zero L/D.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEnvelope {
    pub altitudes: Vec<f64>,
    pub speeds: Vec<f64>,
    /// Power required (W).
    pub power_required: DMatrix<f64>,
    pub ld_ratios: DMatrix<f64>,
    /// Stall speed (m/s) per altitude.
    pub stall_speeds: Vec<f64>,
}

impl PerformanceEnvelope {
    pub fn is_feasible(&self, altitude_index: usize, speed_index: usize) -> bool {
        self.power_required[(altitude_index, speed_index)].is_finite()
    }

    /// Speed with the lowest power required at each altitude, if any cell
    /// at that altitude is flyable.
    pub fn min_power_speeds(&self) -> Vec<Option<f64>> {
        self.power_required
            .row_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, power)| power.is_finite())
                    .min_by(|a, b| a.1.total_cmp(b.1))
                    .map(|(j, _)| self.speeds[j])
            })
            .collect()
    }
}

impl PerformanceAnalyzer<'_> {
    /// Power required and L/D over 30 altitudes in [0, 15000] m and 50
    /// speeds in [50, 300] m/s.
    pub fn generate_performance_envelope(&self) -> PerformanceEnvelope {
        let altitudes = linspace(0.0, MAP_MAX_ALTITUDE, MAP_ALTITUDES);
        let speeds = linspace(MAP_SPEED_RANGE.0, MAP_SPEED_RANGE.1, MAP_SPEEDS);

        let weight = self.aircraft.max_takeoff_weight_force();
        let wing_area = self.aircraft.geometry().wing_area;
        let cl_max = self.aircraft.cl_max();

        let mut power_required = DMatrix::from_element(altitudes.len(), speeds.len(), f64::INFINITY);
        let mut ld_ratios = DMatrix::zeros(altitudes.len(), speeds.len());
        let mut stall_speeds = Vec::with_capacity(altitudes.len());

        for (i, &altitude) in altitudes.iter().enumerate() {
            let atm = AtmosphericState::standard_atmosphere(altitude);
            let v_stall = stall_speed(atm.density, weight, wing_area, cl_max);
            stall_speeds.push(v_stall);

            for (j, &speed) in speeds.iter().enumerate() {
                if speed < v_stall {
                    continue;
                }
                let q_s = 0.5 * atm.density * speed.powi(2) * wing_area;
                let cl_required = weight / q_s;
                if cl_required > cl_max {
                    continue;
                }
                let cd = self.aircraft.calculate_drag_coefficient(cl_required);
                let drag = q_s * cd;

                ld_ratios[(i, j)] = cl_required / cd;
                power_required[(i, j)] = drag * speed;
            }
        }

        PerformanceEnvelope {
            altitudes,
            speeds,
            power_required,
            ld_ratios,
            stall_speeds,
        }
    }
}
