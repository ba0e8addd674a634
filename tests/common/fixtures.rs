use aerodesign::{
    components::{AircraftGeometry, AircraftMass},
    Aircraft, OptimizerConfig,
};

/// Flat YAML definition of a two-seat trainer.
pub const TRAINER_YAML: &str = r#"
name: Trainer
wing_span: 10.0
wing_area: 12.5
wing_chord: 1.25
aspect_ratio: 8.0
sweep_angle: 0.0
dihedral_angle: 3.0
taper_ratio: 0.7
thickness_ratio: 0.15
fuselage_length: 7.0
fuselage_diameter: 1.1
empty_weight: 600.0
fuel_capacity: 120.0
payload_capacity: 200.0
max_takeoff_weight: 920.0
cl_max: 1.8
"#;

/// Same trainer as `TRAINER_YAML`, built in code without overrides.
pub fn trainer() -> Aircraft {
    Aircraft::new(
        "Trainer",
        AircraftGeometry {
            wing_span: 10.0,
            wing_area: 12.5,
            wing_chord: 1.25,
            aspect_ratio: 8.0,
            sweep_angle: 0.0,
            dihedral_angle: 3.0,
            taper_ratio: 0.7,
            thickness_ratio: 0.15,
            fuselage_length: 7.0,
            fuselage_diameter: 1.1,
        },
        AircraftMass {
            empty_weight: 600.0,
            fuel_capacity: 120.0,
            payload_capacity: 200.0,
            max_takeoff_weight: 920.0,
        },
    )
}

/// Optimizer settings small enough for a test run.
pub fn quick_config(seed: u64) -> OptimizerConfig {
    OptimizerConfig {
        max_iterations: 30,
        population_size: 8,
        seed,
        polish: false,
        ..OptimizerConfig::default()
    }
}

/// Planform variables around the general aviation preset.
pub fn planform_variables() -> [(&'static str, (f64, f64)); 2] {
    [("wing_span", (9.0, 13.0)), ("wing_area", (14.0, 20.0))]
}
