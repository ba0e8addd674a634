use serde::{Deserialize, Serialize};

use crate::environment::AtmosphericState;
use crate::utils::{ISA_SEA_LEVEL_DENSITY, SUTHERLAND_COEFFICIENT, SUTHERLAND_TEMPERATURE};

/// A single instantaneous flight state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightConditions {
    /// Ambient atmosphere.
    pub atmosphere: AtmosphericState,
    /// True airspeed (m/s).
    pub airspeed: f64,
    /// Angle of attack (deg).
    pub angle_of_attack: f64,
    /// Bank angle (deg).
    pub bank_angle: f64,
    /// Load factor (g).
    pub load_factor: f64,
}

impl FlightConditions {
    pub fn new(
        atmosphere: AtmosphericState,
        airspeed: f64,
        angle_of_attack: f64,
        bank_angle: f64,
        load_factor: f64,
    ) -> Self {
        Self {
            atmosphere,
            airspeed,
            angle_of_attack,
            bank_angle,
            load_factor,
        }
    }

    pub fn mach_number(&self) -> f64 {
        self.airspeed / self.atmosphere.speed_of_sound
    }

    /// Dynamic pressure (Pa).
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.atmosphere.density * self.airspeed.powi(2)
    }

    /// Equivalent airspeed (m/s).
    pub fn equivalent_airspeed(&self) -> f64 {
        self.airspeed * (self.atmosphere.density / ISA_SEA_LEVEL_DENSITY).sqrt()
    }

    /// Reynolds number over `characteristic_length` metres, with viscosity
    /// from Sutherland's law.
    pub fn reynolds_number(&self, characteristic_length: f64) -> f64 {
        let temperature = self.atmosphere.temperature;
        let mu = SUTHERLAND_COEFFICIENT * temperature.powf(1.5) / (temperature + SUTHERLAND_TEMPERATURE);
        self.atmosphere.density * self.airspeed * characteristic_length / mu
    }

    /// Reference conditions spanning sea level manoeuvres to high-altitude
    /// cruise.
    pub fn test_cases() -> Vec<FlightConditions> {
        let sea_level = AtmosphericState::standard_atmosphere(0.0);
        let high = AtmosphericState::standard_atmosphere(10000.0);
        let extreme = AtmosphericState::standard_atmosphere(15000.0);

        vec![
            Self::new(sea_level, 100.0, 5.0, 0.0, 1.0),  // Cruise
            Self::new(sea_level, 60.0, 15.0, 0.0, 1.0),  // Approach
            Self::new(sea_level, 150.0, 0.0, 30.0, 2.0), // Turn
            Self::new(high, 200.0, 2.0, 0.0, 1.0),       // High cruise
            Self::new(high, 80.0, 10.0, 0.0, 1.0),       // Climb
            Self::new(extreme, 250.0, 0.0, 0.0, 1.0),    // High speed
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_air_data_at_sea_level() {
        let conditions = FlightConditions::new(AtmosphericState::sea_level(), 100.0, 5.0, 0.0, 1.0);
        let atm = conditions.atmosphere;
        assert_relative_eq!(conditions.mach_number(), 100.0 / atm.speed_of_sound);
        assert_relative_eq!(conditions.dynamic_pressure(), 0.5 * atm.density * 10000.0);
        assert_relative_eq!(conditions.equivalent_airspeed(), 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_equivalent_airspeed_below_true_at_altitude() {
        let conditions = FlightConditions::new(
            AtmosphericState::standard_atmosphere(10000.0),
            200.0,
            2.0,
            0.0,
            1.0,
        );
        assert!(conditions.equivalent_airspeed() < conditions.airspeed);
    }

    #[test]
    fn test_reynolds_number_scales_with_length() {
        let conditions = FlightConditions::new(AtmosphericState::sea_level(), 50.0, 0.0, 0.0, 1.0);
        let re_1 = conditions.reynolds_number(1.0);
        assert_relative_eq!(conditions.reynolds_number(2.0), 2.0 * re_1, max_relative = 1e-12);
        // Sea level air, 50 m/s over a metre of chord.
        assert!(re_1 > 3.0e6 && re_1 < 4.0e6);
    }

    #[test]
    fn test_reference_cases() {
        let cases = FlightConditions::test_cases();
        assert_eq!(cases.len(), 6);
        assert_relative_eq!(cases[2].load_factor, 2.0);
        assert_relative_eq!(cases[5].atmosphere.altitude, 15000.0);
    }
}
