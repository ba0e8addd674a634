//! Conceptual design toolkit for fixed-wing aircraft.
//!
//! Builds an aerodynamic model from geometry and mass, evaluates flight
//! envelope and mission performance in the standard atmosphere, and
//! searches design parameters against weighted objectives and constraints.

pub mod components;
pub mod environment;
pub mod systems;
pub mod utils;

pub use components::{
    AeroOverrides, Aircraft, AircraftGeometry, AircraftMass, AircraftSource, AircraftType,
    DesignSummary, FlightConditions, OptimizationResult, OptimizerConfig, SearchMethod,
};
pub use environment::AtmosphericState;
pub use systems::{
    DesignOptimizer, FlightEnvelope, MaximizeLiftToDrag, MaximizeRange, MinimizeFuelConsumption,
    PerformanceAnalyzer, StallSpeedConstraint, TakeoffDistanceConstraint, WingLoadingConstraint,
};
pub use utils::{EvaluationError, OptimizerError};
