mod climb;
mod cruise;
mod map;
mod takeoff;

pub use climb::ClimbPerformance;
pub use map::PerformanceEnvelope;
pub use takeoff::TakeoffPerformance;

use crate::components::aircraft::Aircraft;
use crate::systems::FlightEnvelope;

/// Point and mission performance of an aircraft.
///
/// Stateless; every method recomputes from the aircraft's geometry, mass and
/// coefficients.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceAnalyzer<'a> {
    aircraft: &'a Aircraft,
}

impl<'a> PerformanceAnalyzer<'a> {
    pub fn new(aircraft: &'a Aircraft) -> Self {
        Self { aircraft }
    }

    pub fn aircraft(&self) -> &Aircraft {
        self.aircraft
    }

    pub fn envelope(&self) -> FlightEnvelope<'a> {
        FlightEnvelope::new(self.aircraft)
    }
}
