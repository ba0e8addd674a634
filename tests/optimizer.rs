mod common;

use aerodesign::{
    components::{optimizer::CONVERGED_MESSAGE, ConfigError, DesignVariable, GeometryField},
    systems::DesignObjective,
    Aircraft, DesignOptimizer, MaximizeLiftToDrag, OptimizerConfig, OptimizerError,
    SearchMethod, StallSpeedConstraint, TakeoffDistanceConstraint, WingLoadingConstraint,
};
use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use common::{assert_within_bounds, planform_variables, quick_config};

fn planform_optimizer(config: OptimizerConfig) -> DesignOptimizer {
    let mut optimizer = DesignOptimizer::with_config(config);
    optimizer.add_objective(MaximizeLiftToDrag::default());
    optimizer.add_constraint(WingLoadingConstraint::new(800.0));
    optimizer.set_design_variables(planform_variables()).unwrap();
    optimizer
}

fn values(result: &aerodesign::OptimizationResult) -> Vec<f64> {
    result.design_variables.iter().map(|(_, value)| *value).collect()
}

#[test]
fn test_same_seed_reproduces_design() {
    let base = Aircraft::general_aviation();
    let first = planform_optimizer(quick_config(7))
        .optimize(&base, SearchMethod::DifferentialEvolution)
        .unwrap();
    let second = planform_optimizer(quick_config(7))
        .optimize(&base, SearchMethod::DifferentialEvolution)
        .unwrap();

    assert_eq!(first.design_variables, second.design_variables);
    assert_eq!(first.objective_value, second.objective_value);
    assert_eq!(first.iterations, second.iterations);
}

#[test]
fn test_evolution_improves_lift_to_drag() {
    let base = Aircraft::general_aviation();
    let optimizer = planform_optimizer(OptimizerConfig {
        polish: true,
        ..quick_config(42)
    });
    let result = optimizer
        .optimize(&base, SearchMethod::DifferentialEvolution)
        .unwrap();

    assert_within_bounds(optimizer.design_space(), &values(&result));
    assert_eq!(result.method, SearchMethod::DifferentialEvolution);
    assert_eq!(result.optimized_aircraft.name(), "General Aviation_optimized");

    let base_ld = -MaximizeLiftToDrag::default().evaluate(&base).unwrap();
    let optimized_ld = -result.objective("Maximize L/D").unwrap();
    assert!(optimized_ld > base_ld, "L/D {} vs base {}", optimized_ld, base_ld);
    assert!(result.constraint("Wing Loading <= 800 N/m²").unwrap() < 1.0);

    // Planform stays consistent with the chosen span and area.
    let span = result.design_variable("wing_span").unwrap();
    let area = result.design_variable("wing_area").unwrap();
    let geometry = result.optimized_aircraft.geometry();
    assert_eq!(geometry.wing_span, span);
    assert_eq!(geometry.wing_area, area);
    assert_relative_eq!(geometry.aspect_ratio, span * span / area);
    assert_relative_eq!(geometry.wing_chord, area / span);
}

#[test]
fn test_reported_objective_matches_design() {
    let base = Aircraft::general_aviation();
    let optimizer = planform_optimizer(quick_config(3));
    let result = optimizer
        .optimize(&base, SearchMethod::DifferentialEvolution)
        .unwrap();

    assert_relative_eq!(
        result.objective_value,
        optimizer.objective_function(&values(&result), &base),
        max_relative = 1e-9
    );
    assert!(result.evaluations > 0);
}

#[test]
fn test_local_search_stays_in_bounds() {
    let base = Aircraft::general_aviation();
    let optimizer = planform_optimizer(quick_config(0));
    let start = optimizer.design_space().midpoint();
    let result = optimizer.optimize(&base, SearchMethod::LocalGradient).unwrap();

    assert_eq!(result.method, SearchMethod::LocalGradient);
    assert_within_bounds(optimizer.design_space(), &values(&result));
    assert!(result.objective_value <= optimizer.objective_function(&start, &base));
}

#[test]
fn test_local_search_reaches_planform_corner() {
    let base = Aircraft::general_aviation();
    let optimizer = planform_optimizer(quick_config(0));
    let start = optimizer.design_space().midpoint();
    let result = optimizer.optimize(&base, SearchMethod::LocalGradient).unwrap();

    assert!(result.success, "{}", result.message);
    assert_eq!(result.message, CONVERGED_MESSAGE);

    // Largest span, smallest area the wing loading limit allows.
    let area_limit = base.max_takeoff_weight_force() / 800.0;
    assert_eq!(result.design_variable("wing_span"), Some(13.0));
    assert_relative_eq!(
        result.design_variable("wing_area").unwrap(),
        area_limit,
        max_relative = 1e-2
    );
    assert!(result.constraint("Wing Loading <= 800 N/m²").unwrap() < 1.0);
    assert!(result.objective_value < optimizer.objective_function(&start, &base));
}

#[test]
fn test_satisfied_constraints_add_no_penalty() {
    let base = Aircraft::general_aviation();
    let mut optimizer = DesignOptimizer::new();
    optimizer.add_objective(MaximizeLiftToDrag::default());
    optimizer.add_constraint(StallSpeedConstraint::new(60.0, 0.0));
    optimizer.add_constraint(TakeoffDistanceConstraint::new(2000.0));
    optimizer.set_design_variables([("wing_area", (14.0, 20.0))]).unwrap();

    let x = [16.2];
    let candidate = optimizer.create_aircraft_from_variables(&x, &base).unwrap();
    let expected = MaximizeLiftToDrag::default().evaluate(&candidate).unwrap();
    assert_eq!(optimizer.objective_function(&x, &base), expected);
}

#[test]
fn test_optimize_requires_design_variables() {
    let mut optimizer = DesignOptimizer::new();
    optimizer.add_objective(MaximizeLiftToDrag::default());
    let result = optimizer.optimize(&Aircraft::general_aviation(), SearchMethod::LocalGradient);
    assert_eq!(result, Err(OptimizerError::NoDesignVariables));
}

#[test]
fn test_unknown_method_name() {
    assert_eq!("L-BFGS-B".parse::<SearchMethod>(), Ok(SearchMethod::LocalGradient));
    assert_eq!(
        "nelder-mead".parse::<SearchMethod>(),
        Err(OptimizerError::UnknownMethod("nelder-mead".to_string()))
    );
}

#[test]
fn test_design_variable_names() {
    assert_eq!(
        "wing_span".parse::<DesignVariable>(),
        Ok(DesignVariable::Geometry(GeometryField::WingSpan))
    );
    assert!("wingspan".parse::<DesignVariable>().is_err());
}

#[test]
fn test_load_optimizer_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_iterations: 25\nseed: 9\nmutation: [0.4, 0.9]\npolish: false").unwrap();

    let config = OptimizerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_iterations, 25);
    assert_eq!(config.seed, 9);
    assert_eq!(config.mutation, (0.4, 0.9));
    assert!(!config.polish);
    assert_eq!(config.population_size, OptimizerConfig::default().population_size);
}

#[test]
fn test_invalid_optimizer_config_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "recombination: 1.5").unwrap();
    assert!(matches!(
        OptimizerConfig::from_file(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}
