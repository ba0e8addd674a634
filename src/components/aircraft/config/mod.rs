mod aero_coef;
mod aircraft;
mod geometry;
mod loader;
mod mass;

pub use aero_coef::{AeroOverrides, AircraftAeroCoefficients};
pub use aircraft::{AircraftSource, AircraftType};
pub use geometry::AircraftGeometry;
pub use loader::{ConfigError, RawAircraftConfig};
pub use mass::AircraftMass;
