use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::components::aircraft::{AeroOverrides, Aircraft, AircraftGeometry, AircraftMass};
use crate::utils::{EvaluationError, OptimizerError};

/// Geometry parameters the optimizer may vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryField {
    WingSpan,
    WingArea,
    WingChord,
    AspectRatio,
    SweepAngle,
    DihedralAngle,
    TaperRatio,
    ThicknessRatio,
    FuselageLength,
    FuselageDiameter,
}

/// Mass parameters the optimizer may vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassField {
    EmptyWeight,
    FuelCapacity,
    PayloadCapacity,
    MaxTakeoffWeight,
}

/// A named design parameter, resolved to the struct it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignVariable {
    Geometry(GeometryField),
    Mass(MassField),
}

impl GeometryField {
    pub const ALL: [GeometryField; 10] = [
        GeometryField::WingSpan,
        GeometryField::WingArea,
        GeometryField::WingChord,
        GeometryField::AspectRatio,
        GeometryField::SweepAngle,
        GeometryField::DihedralAngle,
        GeometryField::TaperRatio,
        GeometryField::ThicknessRatio,
        GeometryField::FuselageLength,
        GeometryField::FuselageDiameter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GeometryField::WingSpan => "wing_span",
            GeometryField::WingArea => "wing_area",
            GeometryField::WingChord => "wing_chord",
            GeometryField::AspectRatio => "aspect_ratio",
            GeometryField::SweepAngle => "sweep_angle",
            GeometryField::DihedralAngle => "dihedral_angle",
            GeometryField::TaperRatio => "taper_ratio",
            GeometryField::ThicknessRatio => "thickness_ratio",
            GeometryField::FuselageLength => "fuselage_length",
            GeometryField::FuselageDiameter => "fuselage_diameter",
        }
    }

    pub fn get(&self, geometry: &AircraftGeometry) -> f64 {
        match self {
            GeometryField::WingSpan => geometry.wing_span,
            GeometryField::WingArea => geometry.wing_area,
            GeometryField::WingChord => geometry.wing_chord,
            GeometryField::AspectRatio => geometry.aspect_ratio,
            GeometryField::SweepAngle => geometry.sweep_angle,
            GeometryField::DihedralAngle => geometry.dihedral_angle,
            GeometryField::TaperRatio => geometry.taper_ratio,
            GeometryField::ThicknessRatio => geometry.thickness_ratio,
            GeometryField::FuselageLength => geometry.fuselage_length,
            GeometryField::FuselageDiameter => geometry.fuselage_diameter,
        }
    }

    pub fn set(&self, geometry: &mut AircraftGeometry, value: f64) {
        let field = match self {
            GeometryField::WingSpan => &mut geometry.wing_span,
            GeometryField::WingArea => &mut geometry.wing_area,
            GeometryField::WingChord => &mut geometry.wing_chord,
            GeometryField::AspectRatio => &mut geometry.aspect_ratio,
            GeometryField::SweepAngle => &mut geometry.sweep_angle,
            GeometryField::DihedralAngle => &mut geometry.dihedral_angle,
            GeometryField::TaperRatio => &mut geometry.taper_ratio,
            GeometryField::ThicknessRatio => &mut geometry.thickness_ratio,
            GeometryField::FuselageLength => &mut geometry.fuselage_length,
            GeometryField::FuselageDiameter => &mut geometry.fuselage_diameter,
        };
        *field = value;
    }
}

impl MassField {
    pub const ALL: [MassField; 4] = [
        MassField::EmptyWeight,
        MassField::FuelCapacity,
        MassField::PayloadCapacity,
        MassField::MaxTakeoffWeight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MassField::EmptyWeight => "empty_weight",
            MassField::FuelCapacity => "fuel_capacity",
            MassField::PayloadCapacity => "payload_capacity",
            MassField::MaxTakeoffWeight => "max_takeoff_weight",
        }
    }

    pub fn get(&self, mass: &AircraftMass) -> f64 {
        match self {
            MassField::EmptyWeight => mass.empty_weight,
            MassField::FuelCapacity => mass.fuel_capacity,
            MassField::PayloadCapacity => mass.payload_capacity,
            MassField::MaxTakeoffWeight => mass.max_takeoff_weight,
        }
    }

    pub fn set(&self, mass: &mut AircraftMass, value: f64) {
        let field = match self {
            MassField::EmptyWeight => &mut mass.empty_weight,
            MassField::FuelCapacity => &mut mass.fuel_capacity,
            MassField::PayloadCapacity => &mut mass.payload_capacity,
            MassField::MaxTakeoffWeight => &mut mass.max_takeoff_weight,
        };
        *field = value;
    }
}

impl DesignVariable {
    pub fn name(&self) -> &'static str {
        match self {
            DesignVariable::Geometry(field) => field.name(),
            DesignVariable::Mass(field) => field.name(),
        }
    }

    /// Current value of this parameter on `aircraft`.
    pub fn value_of(&self, aircraft: &Aircraft) -> f64 {
        match self {
            DesignVariable::Geometry(field) => field.get(aircraft.geometry()),
            DesignVariable::Mass(field) => field.get(aircraft.mass()),
        }
    }
}

impl FromStr for DesignVariable {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = GeometryField::ALL.iter().find(|f| f.name() == s) {
            return Ok(DesignVariable::Geometry(*field));
        }
        if let Some(field) = MassField::ALL.iter().find(|f| f.name() == s) {
            return Ok(DesignVariable::Mass(*field));
        }
        Err(OptimizerError::UnknownVariable(s.to_string()))
    }
}

impl fmt::Display for DesignVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A design variable with its search interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableBounds {
    pub variable: DesignVariable,
    pub min: f64,
    pub max: f64,
}

impl VariableBounds {
    pub fn new(variable: DesignVariable, min: f64, max: f64) -> Result<Self, OptimizerError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(OptimizerError::InvalidBounds {
                name: variable.name().to_string(),
                min,
                max,
            });
        }
        Ok(Self { variable, min, max })
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Maps a unit-interval coordinate onto the bounds.
    pub fn from_unit(&self, u: f64) -> f64 {
        self.min + u * self.span()
    }
}

/// Ordered set of design variables and the mapping from a parameter
/// vector to a candidate aircraft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSpace {
    variables: Vec<VariableBounds>,
}

impl DesignSpace {
    /// Resolves `(name, (min, max))` pairs, keeping their order.
    pub fn from_named<I, S>(variables: I) -> Result<Self, OptimizerError>
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: AsRef<str>,
    {
        let mut space = Self::default();
        for (name, (min, max)) in variables {
            let variable: DesignVariable = name.as_ref().parse()?;
            space.push(VariableBounds::new(variable, min, max)?)?;
        }
        Ok(space)
    }

    pub fn push(&mut self, bounds: VariableBounds) -> Result<(), OptimizerError> {
        if self.variables.iter().any(|b| b.variable == bounds.variable) {
            return Err(OptimizerError::DuplicateVariable(
                bounds.variable.name().to_string(),
            ));
        }
        self.variables.push(bounds);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn bounds(&self) -> &[VariableBounds] {
        &self.variables
    }

    pub fn midpoint(&self) -> Vec<f64> {
        self.variables.iter().map(VariableBounds::midpoint).collect()
    }

    /// Projects `x` onto the bounding box.
    pub fn project(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(&self.variables)
            .map(|(value, bounds)| bounds.clamp(*value))
            .collect()
    }

    pub fn contains(&self, variable: DesignVariable) -> bool {
        self.variables.iter().any(|b| b.variable == variable)
    }

    /// Builds the candidate aircraft for parameter vector `x`.
    ///
    /// Only the named parameters change. Aspect ratio and mean chord are
    /// always re-derived from span and area, and the candidate gets the
    /// baseline coefficients for its planform, exactly as a freshly defined
    /// aircraft would.
    pub fn create_aircraft(&self, x: &[f64], base: &Aircraft) -> Result<Aircraft, EvaluationError> {
        if x.len() != self.variables.len() {
            return Err(EvaluationError::DimensionMismatch {
                expected: self.variables.len(),
                actual: x.len(),
            });
        }

        let mut geometry = *base.geometry();
        let mut mass = *base.mass();

        for (bounds, value) in self.variables.iter().zip(x) {
            match bounds.variable {
                DesignVariable::Geometry(field) => field.set(&mut geometry, *value),
                DesignVariable::Mass(field) => field.set(&mut mass, *value),
            }
        }

        geometry.aspect_ratio = geometry.geometric_aspect_ratio();
        geometry.wing_chord = geometry.wing_area / geometry.wing_span;

        Aircraft::try_new(
            format!("{}_optimized", base.name()),
            geometry,
            mass,
            AeroOverrides::default(),
        )
    }
}
