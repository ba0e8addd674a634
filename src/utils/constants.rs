// Weight conversion used throughout the performance model (kg -> N).
pub const GRAVITY: f64 = 9.81; // m/s^2

// International Standard Atmosphere
pub const ISA_GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.0; // J/(kg·K)
pub const AIR_HEAT_CAPACITY_RATIO: f64 = 1.4;
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const TROPOPAUSE_ALTITUDE: f64 = 11000.0; // m

// Sutherland's law for air
pub const SUTHERLAND_COEFFICIENT: f64 = 1.458e-6; // kg/(m·s·K^0.5)
pub const SUTHERLAND_TEMPERATURE: f64 = 110.4; // K

// Baseline aerodynamic model
pub const OSWALD_EFFICIENCY: f64 = 0.8;
pub const BASELINE_CD0: f64 = 0.025;
pub const BASELINE_CL_MAX: f64 = 1.6;

// Performance defaults
pub const DEFAULT_SFC: f64 = 0.5e-4; // kg/(N·s)
pub const JET_FUEL_ENERGY_DENSITY: f64 = 43.0e6; // J/kg
pub const ENGINE_EFFICIENCY: f64 = 0.35;
pub const MIN_CLIMB_RATE: f64 = 0.508; // m/s (100 ft/min)
pub const DEFAULT_OBSTACLE_HEIGHT: f64 = 15.24; // m (50 ft)
pub const TAKEOFF_CLIMB_GRADIENT: f64 = 0.06;
pub const LANDING_WEIGHT_FRACTION: f64 = 0.85;

// Angle of attack scan used for best L/D
pub const AOA_SCAN_MIN: f64 = -5.0; // deg
pub const AOA_SCAN_MAX: f64 = 20.0; // deg
pub const AOA_SCAN_SAMPLES: usize = 100;

// Structural limits used by the V-n diagram
pub const POSITIVE_LOAD_LIMIT: f64 = 2.5;
pub const NEGATIVE_LOAD_LIMIT: f64 = -1.0;
pub const MANEUVER_LOAD_FACTOR: f64 = 6.0;
pub const DIVE_SPEED_FACTOR: f64 = 1.4;

// Optimizer penalties
pub const CONSTRAINT_PENALTY_WEIGHT: f64 = 1000.0;
pub const INVALID_DESIGN_PENALTY: f64 = 1.0e6;
