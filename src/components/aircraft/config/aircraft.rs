use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::aircraft::config::{AeroOverrides, AircraftGeometry, AircraftMass};

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of the reference designs shipped with the crate.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    /// Medium-haul twinjet, efficiency focused.
    CommercialAirliner,
    /// Four-seat piston single.
    GeneralAviation,
    /// Light multirole fighter with a clean, high-lift configuration.
    FighterJet,
}

impl AircraftType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AircraftType::CommercialAirliner => "Commercial Airliner",
            AircraftType::GeneralAviation => "General Aviation",
            AircraftType::FighterJet => "Fighter Jet",
        }
    }

    pub fn geometry(&self) -> AircraftGeometry {
        match self {
            AircraftType::CommercialAirliner => AircraftGeometry::commercial_airliner(),
            AircraftType::GeneralAviation => AircraftGeometry::general_aviation(),
            AircraftType::FighterJet => AircraftGeometry::fighter_jet(),
        }
    }

    pub fn mass(&self) -> AircraftMass {
        match self {
            AircraftType::CommercialAirliner => AircraftMass::commercial_airliner(),
            AircraftType::GeneralAviation => AircraftMass::general_aviation(),
            AircraftType::FighterJet => AircraftMass::fighter_jet(),
        }
    }

    pub fn overrides(&self) -> AeroOverrides {
        match self {
            AircraftType::FighterJet => AeroOverrides::fighter_jet(),
            _ => AeroOverrides::default(),
        }
    }

    pub fn all() -> [AircraftType; 3] {
        [
            AircraftType::CommercialAirliner,
            AircraftType::GeneralAviation,
            AircraftType::FighterJet,
        ]
    }
}
