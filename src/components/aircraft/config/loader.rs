use serde::Deserialize;
use thiserror::Error;

use crate::components::aircraft::config::{AeroOverrides, AircraftGeometry, AircraftMass};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk layout of an aircraft definition.
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Geometry
    pub wing_span: f64,
    pub wing_area: f64,
    pub wing_chord: f64,
    pub aspect_ratio: f64,
    #[serde(default)]
    pub sweep_angle: f64,
    #[serde(default)]
    pub dihedral_angle: f64,
    pub taper_ratio: f64,
    pub thickness_ratio: f64,
    pub fuselage_length: f64,
    pub fuselage_diameter: f64,

    /// Mass properties
    pub empty_weight: f64,
    pub fuel_capacity: f64,
    pub payload_capacity: f64,
    pub max_takeoff_weight: f64,

    /// Optional aerodynamic overrides
    #[serde(default)]
    pub cd0: Option<f64>,
    #[serde(default)]
    pub k: Option<f64>,
    #[serde(default)]
    pub cl_max: Option<f64>,
    #[serde(default)]
    pub cl_alpha: Option<f64>,
}

impl RawAircraftConfig {
    pub fn geometry(&self) -> AircraftGeometry {
        AircraftGeometry {
            wing_span: self.wing_span,
            wing_area: self.wing_area,
            wing_chord: self.wing_chord,
            aspect_ratio: self.aspect_ratio,
            sweep_angle: self.sweep_angle,
            dihedral_angle: self.dihedral_angle,
            taper_ratio: self.taper_ratio,
            thickness_ratio: self.thickness_ratio,
            fuselage_length: self.fuselage_length,
            fuselage_diameter: self.fuselage_diameter,
        }
    }

    pub fn mass(&self) -> AircraftMass {
        AircraftMass {
            empty_weight: self.empty_weight,
            fuel_capacity: self.fuel_capacity,
            payload_capacity: self.payload_capacity,
            max_takeoff_weight: self.max_takeoff_weight,
        }
    }

    pub fn overrides(&self) -> AeroOverrides {
        AeroOverrides {
            cd0: self.cd0,
            k: self.k,
            cl_max: self.cl_max,
            cl_alpha: self.cl_alpha,
        }
    }

    /// Rejects definitions the aerodynamic model cannot evaluate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry()
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("{}: {}", self.name, e)))?;
        self.mass()
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("{}: {}", self.name, e)))?;
        if let Some(cl_max) = self.cl_max {
            if cl_max <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: cl_max must be positive, got {}",
                    self.name, cl_max
                )));
            }
        }
        Ok(())
    }
}
