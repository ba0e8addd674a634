mod common;

use aerodesign::{
    components::ConfigError, AeroOverrides, Aircraft, AircraftSource, AircraftType,
    AtmosphericState,
};
use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use common::{trainer, TRAINER_YAML};

fn write_yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_aircraft_from_yaml() {
    let file = write_yaml(TRAINER_YAML);
    let loaded = Aircraft::from_file(file.path()).unwrap();
    let expected = trainer();

    assert_eq!(loaded.name(), "Trainer");
    assert_eq!(loaded.geometry(), expected.geometry());
    assert_eq!(loaded.mass(), expected.mass());
    assert_eq!(loaded.cl_max(), 1.8);
    assert_eq!(loaded.cd0(), expected.cd0());
    assert_eq!(loaded.k(), expected.k());
}

#[test]
fn test_load_aircraft_from_source() {
    let file = write_yaml(TRAINER_YAML);
    let from_file = Aircraft::from_source(AircraftSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(from_file.name(), "Trainer");

    let programmed =
        Aircraft::from_source(AircraftSource::Programmed(AircraftType::FighterJet)).unwrap();
    assert_eq!(programmed, Aircraft::fighter_jet());
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let result = Aircraft::from_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_malformed_yaml_is_reported() {
    let file = write_yaml("name: Broken\nwing_span: [1.0, 2.0\n");
    assert!(matches!(
        Aircraft::from_file(file.path()),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_degenerate_definition_is_rejected() {
    let yaml = TRAINER_YAML.replace("wing_area: 12.5", "wing_area: 0.0");
    let file = write_yaml(&yaml);
    assert!(matches!(
        Aircraft::from_file(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_sample_fleet_covers_every_type() {
    let fleet = Aircraft::sample_fleet();
    let names: Vec<&str> = fleet.iter().map(|aircraft| aircraft.name()).collect();
    assert_eq!(names, vec!["Commercial Airliner", "General Aviation", "Fighter Jet"]);
}

#[test]
fn test_overrides_replace_only_named_coefficients() {
    let base = trainer();
    let overridden = Aircraft::with_overrides(
        "Trainer",
        *base.geometry(),
        *base.mass(),
        AeroOverrides::new().cd0(0.03),
    );
    assert_eq!(overridden.cd0(), 0.03);
    assert_eq!(overridden.k(), base.k());
    assert_eq!(overridden.cl_max(), base.cl_max());
    assert_eq!(overridden.cl_alpha(), base.cl_alpha());
}

#[test]
fn test_drag_polar_minimum_at_zero_lift() {
    for aircraft in Aircraft::sample_fleet() {
        let cd_zero = aircraft.calculate_drag_coefficient(0.0);
        assert_eq!(cd_zero, aircraft.cd0());
        assert!(aircraft.calculate_drag_coefficient(0.5) > cd_zero);
        assert_relative_eq!(
            aircraft.calculate_drag_coefficient(0.5),
            aircraft.calculate_drag_coefficient(-0.5)
        );
    }
}

#[test]
fn test_atmosphere_is_continuous_at_tropopause() {
    let below = AtmosphericState::standard_atmosphere(11000.0 - 1e-6);
    let above = AtmosphericState::standard_atmosphere(11000.0 + 1e-6);
    assert_relative_eq!(below.temperature, above.temperature, max_relative = 1e-9);
    assert_relative_eq!(below.pressure, above.pressure, max_relative = 1e-9);
    assert_relative_eq!(below.density, above.density, max_relative = 1e-9);
}

#[test]
fn test_atmosphere_density_decreases_with_altitude() {
    let densities: Vec<f64> = (0..20)
        .map(|i| AtmosphericState::standard_atmosphere(i as f64 * 1000.0).density)
        .collect();
    assert!(densities.windows(2).all(|pair| pair[1] < pair[0]));
}
