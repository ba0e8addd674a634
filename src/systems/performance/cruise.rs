use super::PerformanceAnalyzer;
use crate::environment::AtmosphericState;
use crate::utils::{
    linspace, AOA_SCAN_MAX, AOA_SCAN_MIN, AOA_SCAN_SAMPLES, ENGINE_EFFICIENCY, GRAVITY,
    JET_FUEL_ENERGY_DENSITY,
};

impl PerformanceAnalyzer<'_> {
    /// Breguet range (km) at the best-L/D angle of attack, starting from
    /// MTOW and burning `fuel_weight` kg.
    ///
    /// The scanned L/D does not depend on altitude, so `_cruise_altitude`
    /// does not enter the result. `fuel_weight` must stay below MTOW;
    /// otherwise the weight ratio is non-positive and the result is NaN or
    /// infinite.
    pub fn calculate_range(
        &self,
        _cruise_altitude: f64,
        cruise_speed: f64,
        fuel_weight: f64,
        sfc: f64,
    ) -> f64 {
        let w_initial = self.aircraft.max_takeoff_weight_force();
        let w_final = w_initial - fuel_weight * GRAVITY;

        let best_aoa = self.find_optimal_angle_of_attack();
        let cl = self.aircraft.calculate_lift_coefficient(best_aoa);
        let cd = self.aircraft.calculate_drag_coefficient(cl);
        let ld_ratio = cl / cd;

        let range_m = (cruise_speed / sfc) * ld_ratio * (w_initial / w_final).ln();
        range_m / 1000.0
    }

    /// Endurance (h) at the minimum-power lift coefficient.
    ///
    /// Fuel energy is converted at a fixed jet-fuel energy density and engine
    /// efficiency, so no SFC enters.
    pub fn calculate_endurance(&self, altitude: f64, fuel_weight: f64) -> f64 {
        let atm = AtmosphericState::standard_atmosphere(altitude);

        let cl = (3.0 * self.aircraft.cd0() / self.aircraft.k()).sqrt();
        let cd = self.aircraft.calculate_drag_coefficient(cl);

        let weight = self.aircraft.max_takeoff_weight_force();
        let v = (2.0 * weight / (atm.density * self.aircraft.geometry().wing_area * cl)).sqrt();
        let power_required = weight * cd / cl * v;

        let fuel_energy = fuel_weight * JET_FUEL_ENERGY_DENSITY;
        fuel_energy * ENGINE_EFFICIENCY / power_required / 3600.0
    }

    /// Angle of attack (deg) with the highest L/D among 100 evenly spaced
    /// samples of [-5°, 20°].
    ///
    /// Returns an exact sample. The first maximum wins and 0 is returned when
    /// no sample has positive L/D.
    pub fn find_optimal_angle_of_attack(&self) -> f64 {
        let mut best_ld = 0.0;
        let mut best_angle = 0.0;

        for angle in linspace(AOA_SCAN_MIN, AOA_SCAN_MAX, AOA_SCAN_SAMPLES) {
            let ld = self.aircraft.calculate_lift_drag_ratio(angle);
            if ld > best_ld {
                best_ld = ld;
                best_angle = angle;
            }
        }

        best_angle
    }

    /// Highest L/D found by the angle-of-attack scan.
    pub fn max_lift_drag_ratio(&self) -> f64 {
        let aoa = self.find_optimal_angle_of_attack();
        self.aircraft.calculate_lift_drag_ratio(aoa)
    }
}
