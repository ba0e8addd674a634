mod air_data;
pub mod config;
mod model;

pub use air_data::FlightConditions;
pub use config::{
    AeroOverrides, AircraftAeroCoefficients, AircraftGeometry, AircraftMass, AircraftSource,
    AircraftType, ConfigError, RawAircraftConfig,
};
pub use model::{Aircraft, DesignSummary};
