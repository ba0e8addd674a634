pub mod aircraft;
pub mod optimizer;

pub use aircraft::{
    AeroOverrides, Aircraft, AircraftAeroCoefficients, AircraftGeometry, AircraftMass,
    AircraftSource, AircraftType, ConfigError, DesignSummary, FlightConditions,
    RawAircraftConfig,
};
pub use optimizer::{
    DesignSpace, DesignVariable, GeometryField, MassField, OptimizationResult, OptimizerConfig,
    SearchMethod, SearchOutcome, VariableBounds,
};
