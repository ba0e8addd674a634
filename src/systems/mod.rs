mod envelope;
pub mod optimizer;
mod performance;

pub use envelope::{FlightEnvelope, VnDiagram};
pub use optimizer::{
    DesignConstraint, DesignObjective, DesignOptimizer, DesignProblem, DifferentialEvolution,
    MaximizeLiftToDrag, MaximizeRange, MinimizeFuelConsumption, StallSpeedConstraint,
    TakeoffDistanceConstraint, WingLoadingConstraint,
};
pub use performance::{
    ClimbPerformance, PerformanceAnalyzer, PerformanceEnvelope, TakeoffPerformance,
};
