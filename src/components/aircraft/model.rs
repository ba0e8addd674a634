use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::components::aircraft::config::{
    AeroOverrides, AircraftAeroCoefficients, AircraftGeometry, AircraftMass, AircraftSource,
    AircraftType, ConfigError, RawAircraftConfig,
};
use crate::utils::{deg_to_rad, EvaluationError, GRAVITY};

/// A fixed-wing design: geometry, mass and the aerodynamic coefficients
/// derived from them.
///
/// The coefficients are fixed at construction. Design variants that need
/// different values pass an [`AeroOverrides`] instead of mutating an
/// existing aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    name: String,
    geometry: AircraftGeometry,
    mass: AircraftMass,
    aero: AircraftAeroCoefficients,
}

/// Key design parameters and ratios of an aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub name: String,
    pub wing_span: f64,
    pub wing_area: f64,
    pub aspect_ratio: f64,
    pub max_takeoff_weight: f64,
    /// MTOW weight over wing area (N/m²).
    pub wing_loading: f64,
    pub cd0: f64,
    pub k_factor: f64,
}

impl Aircraft {
    /// Creates an aircraft with the baseline coefficients for its aspect ratio.
    pub fn new(name: impl Into<String>, geometry: AircraftGeometry, mass: AircraftMass) -> Self {
        Self::with_overrides(name, geometry, mass, AeroOverrides::default())
    }

    /// Creates an aircraft whose baseline coefficients are replaced by any
    /// value present in `overrides`.
    pub fn with_overrides(
        name: impl Into<String>,
        geometry: AircraftGeometry,
        mass: AircraftMass,
        overrides: AeroOverrides,
    ) -> Self {
        let aero =
            AircraftAeroCoefficients::from_aspect_ratio(geometry.aspect_ratio).with_overrides(&overrides);
        Self {
            name: name.into(),
            geometry,
            mass,
            aero,
        }
    }

    /// Like [`Aircraft::with_overrides`], but rejects geometry or mass that
    /// would make the aerodynamic model divide by zero.
    pub fn try_new(
        name: impl Into<String>,
        geometry: AircraftGeometry,
        mass: AircraftMass,
        overrides: AeroOverrides,
    ) -> Result<Self, EvaluationError> {
        geometry.validate()?;
        mass.validate()?;
        Ok(Self::with_overrides(name, geometry, mass, overrides))
    }

    pub fn from_source(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    pub fn from_programmed(aircraft_type: AircraftType) -> Self {
        Self::with_overrides(
            aircraft_type.display_name(),
            aircraft_type.geometry(),
            aircraft_type.mass(),
            aircraft_type.overrides(),
        )
    }

    /// Reads a flat YAML aircraft definition.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let raw: RawAircraftConfig = serde_yaml::from_str(&file_contents)?;
        raw.validate()?;
        info!(
            "Loaded aircraft '{}' from {}",
            raw.name,
            path.as_ref().display()
        );
        Ok(Self::with_overrides(
            raw.name.clone(),
            raw.geometry(),
            raw.mass(),
            raw.overrides(),
        ))
    }

    pub fn commercial_airliner() -> Self {
        Self::from_programmed(AircraftType::CommercialAirliner)
    }

    pub fn general_aviation() -> Self {
        Self::from_programmed(AircraftType::GeneralAviation)
    }

    pub fn fighter_jet() -> Self {
        Self::from_programmed(AircraftType::FighterJet)
    }

    /// One design of each reference category.
    pub fn sample_fleet() -> Vec<Aircraft> {
        AircraftType::all()
            .into_iter()
            .map(Self::from_programmed)
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &AircraftGeometry {
        &self.geometry
    }

    pub fn mass(&self) -> &AircraftMass {
        &self.mass
    }

    pub fn aero(&self) -> &AircraftAeroCoefficients {
        &self.aero
    }

    pub fn cd0(&self) -> f64 {
        self.aero.cd0
    }

    pub fn k(&self) -> f64 {
        self.aero.k
    }

    pub fn cl_max(&self) -> f64 {
        self.aero.cl_max
    }

    pub fn cl_alpha(&self) -> f64 {
        self.aero.cl_alpha
    }

    /// Weight at maximum takeoff mass (N).
    pub fn max_takeoff_weight_force(&self) -> f64 {
        self.mass.max_takeoff_weight * GRAVITY
    }

    /// Wing loading at maximum takeoff mass (N/m²).
    pub fn wing_loading(&self) -> f64 {
        self.max_takeoff_weight_force() / self.geometry.wing_area
    }

    /// Lift coefficient at `angle_of_attack` degrees.
    ///
    /// Linear in angle of attack and capped at `cl_max`. Only the positive
    /// stall is modelled; negative angles give unbounded negative lift.
    pub fn calculate_lift_coefficient(&self, angle_of_attack: f64) -> f64 {
        let cl = self.aero.cl_alpha * deg_to_rad(angle_of_attack);
        cl.min(self.aero.cl_max)
    }

    /// Parabolic drag polar.
    pub fn calculate_drag_coefficient(&self, lift_coefficient: f64) -> f64 {
        self.aero.cd0 + self.aero.k * lift_coefficient.powi(2)
    }

    pub fn calculate_lift_drag_ratio(&self, angle_of_attack: f64) -> f64 {
        let cl = self.calculate_lift_coefficient(angle_of_attack);
        let cd = self.calculate_drag_coefficient(cl);
        if cd > 0.0 {
            cl / cd
        } else {
            0.0
        }
    }

    /// Key parameters and ratios of the design.
    #[doc(alias = "get_design_summary")]
    pub fn design_summary(&self) -> DesignSummary {
        DesignSummary {
            name: self.name.clone(),
            wing_span: self.geometry.wing_span,
            wing_area: self.geometry.wing_area,
            aspect_ratio: self.geometry.aspect_ratio,
            max_takeoff_weight: self.mass.max_takeoff_weight,
            wing_loading: self.wing_loading(),
            cd0: self.aero.cd0,
            k_factor: self.aero.k,
        }
    }
}
