use serde::{Deserialize, Serialize};

use crate::utils::{
    AIR_GAS_CONSTANT, AIR_HEAT_CAPACITY_RATIO, ISA_GRAVITY, ISA_LAPSE_RATE,
    ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, TROPOPAUSE_ALTITUDE,
};

/// Snapshot of the standard atmosphere at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericState {
    /// Geometric altitude (m).
    pub altitude: f64,
    /// Static temperature (K).
    pub temperature: f64,
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Speed of sound (m/s).
    pub speed_of_sound: f64,
}

impl AtmosphericState {
    /// International Standard Atmosphere at `altitude` metres.
    ///
    /// Linear lapse below the tropopause, isothermal above it. Negative
    /// altitudes extrapolate the tropospheric relation.
    pub fn standard_atmosphere(altitude: f64) -> Self {
        let (temperature, pressure) = if altitude <= TROPOPAUSE_ALTITUDE {
            troposphere(altitude)
        } else {
            let (temp_11km, pressure_11km) = troposphere(TROPOPAUSE_ALTITUDE);
            let pressure = pressure_11km
                * (-ISA_GRAVITY * (altitude - TROPOPAUSE_ALTITUDE)
                    / (AIR_GAS_CONSTANT * temp_11km))
                    .exp();
            (temp_11km, pressure)
        };

        Self {
            altitude,
            temperature,
            pressure,
            density: pressure / (AIR_GAS_CONSTANT * temperature),
            speed_of_sound: (AIR_HEAT_CAPACITY_RATIO * AIR_GAS_CONSTANT * temperature).sqrt(),
        }
    }

    pub fn sea_level() -> Self {
        Self::standard_atmosphere(0.0)
    }
}

fn troposphere(altitude: f64) -> (f64, f64) {
    let temperature = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * altitude;
    let exponent = -ISA_GRAVITY / (AIR_GAS_CONSTANT * ISA_LAPSE_RATE);
    let pressure = ISA_SEA_LEVEL_PRESSURE * (temperature / ISA_SEA_LEVEL_TEMP).powf(exponent);
    (temperature, pressure)
}
