mod constraints;
mod evolution;
mod objectives;
mod problem;
mod solver;

pub use constraints::{
    DesignConstraint, StallSpeedConstraint, TakeoffDistanceConstraint, WingLoadingConstraint,
};
pub use evolution::DifferentialEvolution;
pub use objectives::{DesignObjective, MaximizeLiftToDrag, MaximizeRange, MinimizeFuelConsumption};
pub use problem::DesignProblem;
pub use solver::DesignOptimizer;
