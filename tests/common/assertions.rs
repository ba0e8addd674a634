use aerodesign::{components::DesignSpace, systems::VnDiagram};

/// Assert that every value is finite
#[track_caller]
pub fn assert_all_finite(label: &str, values: &[f64]) {
    for (i, value) in values.iter().enumerate() {
        assert!(value.is_finite(), "{}[{}] is not finite: {}", label, i, value);
    }
}

/// Assert that a V-n boundary starts and ends at the origin
#[track_caller]
pub fn assert_vn_closed(diagram: &VnDiagram) {
    assert_eq!(diagram.velocities.len(), diagram.load_factors.len());
    let first = diagram.points().next().expect("diagram is empty");
    let last = diagram.points().last().expect("diagram is empty");
    assert_eq!(first, (0.0, 0.0), "V-n boundary does not start at the origin");
    assert_eq!(last, (0.0, 0.0), "V-n boundary does not end at the origin");
}

/// Assert that a parameter vector lies inside the design space
#[track_caller]
pub fn assert_within_bounds(space: &DesignSpace, x: &[f64]) {
    assert_eq!(space.len(), x.len(), "Parameter vector has the wrong length");
    for (bounds, value) in space.bounds().iter().zip(x) {
        assert!(
            *value >= bounds.min && *value <= bounds.max,
            "{} = {} outside [{}, {}]",
            bounds.variable,
            value,
            bounds.min,
            bounds.max
        );
    }
}
