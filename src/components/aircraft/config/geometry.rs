use serde::{Deserialize, Serialize};

use crate::utils::EvaluationError;

/// Configuration for the geometry of an aircraft.
///
/// `aspect_ratio` is stored rather than derived; callers keep it consistent
/// with `wing_span² / wing_area`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Tip-to-tip wingspan (m).
    pub wing_span: f64,
    /// Wing planform area (m²).
    pub wing_area: f64,
    /// Mean wing chord (m).
    pub wing_chord: f64,
    /// Wing aspect ratio (-).
    pub aspect_ratio: f64,
    /// Leading edge sweep (deg).
    pub sweep_angle: f64,
    /// Dihedral (deg).
    pub dihedral_angle: f64,
    /// Tip chord over root chord (-).
    pub taper_ratio: f64,
    /// Maximum thickness over chord (-).
    pub thickness_ratio: f64,
    /// Fuselage length (m).
    pub fuselage_length: f64,
    /// Maximum fuselage diameter (m).
    pub fuselage_diameter: f64,
}

impl AircraftGeometry {
    /// Aspect ratio implied by span and area.
    pub fn geometric_aspect_ratio(&self) -> f64 {
        self.wing_span.powi(2) / self.wing_area
    }

    /// Checks the fields the aerodynamic model divides by.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        let checks = [
            ("wing_span", self.wing_span),
            ("wing_area", self.wing_area),
            ("aspect_ratio", self.aspect_ratio),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(EvaluationError::DegenerateGeometry(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn commercial_airliner() -> Self {
        Self {
            wing_span: 35.8,
            wing_area: 125.0,
            wing_chord: 3.5,
            aspect_ratio: 10.2,
            sweep_angle: 25.0,
            dihedral_angle: 6.0,
            taper_ratio: 0.3,
            thickness_ratio: 0.12,
            fuselage_length: 39.5,
            fuselage_diameter: 3.8,
        }
    }

    pub fn general_aviation() -> Self {
        Self {
            wing_span: 11.0,
            wing_area: 16.2,
            wing_chord: 1.5,
            aspect_ratio: 7.5,
            sweep_angle: 0.0,
            dihedral_angle: 1.0,
            taper_ratio: 0.6,
            thickness_ratio: 0.15,
            fuselage_length: 8.3,
            fuselage_diameter: 1.2,
        }
    }

    pub fn fighter_jet() -> Self {
        Self {
            wing_span: 9.96,
            wing_area: 27.9,
            wing_chord: 3.2,
            aspect_ratio: 3.6,
            sweep_angle: 40.0,
            dihedral_angle: 0.0,
            taper_ratio: 0.2,
            thickness_ratio: 0.04,
            fuselage_length: 15.0,
            fuselage_diameter: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_presets_are_valid() {
        for geometry in [
            AircraftGeometry::commercial_airliner(),
            AircraftGeometry::general_aviation(),
            AircraftGeometry::fighter_jet(),
        ] {
            assert!(geometry.validate().is_ok());
        }
    }

    #[test]
    fn test_geometric_aspect_ratio() {
        let geometry = AircraftGeometry::commercial_airliner();
        assert_relative_eq!(geometry.geometric_aspect_ratio(), 35.8 * 35.8 / 125.0);
    }

    #[test]
    fn test_zero_area_is_degenerate() {
        let geometry = AircraftGeometry {
            wing_area: 0.0,
            ..AircraftGeometry::general_aviation()
        };
        assert!(matches!(
            geometry.validate(),
            Err(EvaluationError::DegenerateGeometry(_))
        ));
    }
}
