use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::{BASELINE_CD0, BASELINE_CL_MAX, OSWALD_EFFICIENCY};

/// Coefficients of the parabolic drag polar and linear lift curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftAeroCoefficients {
    /// Zero-lift drag coefficient.
    pub cd0: f64,
    /// Induced drag factor, `CD = cd0 + k·CL²`.
    pub k: f64,
    /// Maximum lift coefficient.
    pub cl_max: f64,
    /// Lift curve slope (1/rad).
    pub cl_alpha: f64,
}

impl AircraftAeroCoefficients {
    /// Baseline coefficients estimated from the wing aspect ratio.
    ///
    /// `k` uses a fixed Oswald efficiency and `cl_alpha` the finite-wing
    /// correction of the thin-airfoil slope.
    pub fn from_aspect_ratio(aspect_ratio: f64) -> Self {
        Self {
            cd0: BASELINE_CD0,
            k: 1.0 / (PI * aspect_ratio * OSWALD_EFFICIENCY),
            cl_max: BASELINE_CL_MAX,
            cl_alpha: 2.0 * PI / (1.0 + 2.0 / aspect_ratio),
        }
    }

    pub fn with_overrides(self, overrides: &AeroOverrides) -> Self {
        Self {
            cd0: overrides.cd0.unwrap_or(self.cd0),
            k: overrides.k.unwrap_or(self.k),
            cl_max: overrides.cl_max.unwrap_or(self.cl_max),
            cl_alpha: overrides.cl_alpha.unwrap_or(self.cl_alpha),
        }
    }
}

/// Per-design replacements for the baseline coefficients, fixed at
/// construction time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroOverrides {
    #[serde(default)]
    pub cd0: Option<f64>,
    #[serde(default)]
    pub k: Option<f64>,
    #[serde(default)]
    pub cl_max: Option<f64>,
    #[serde(default)]
    pub cl_alpha: Option<f64>,
}

impl AeroOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cd0(mut self, cd0: f64) -> Self {
        self.cd0 = Some(cd0);
        self
    }

    pub fn k(mut self, k: f64) -> Self {
        self.k = Some(k);
        self
    }

    pub fn cl_max(mut self, cl_max: f64) -> Self {
        self.cl_max = Some(cl_max);
        self
    }

    pub fn cl_alpha(mut self, cl_alpha: f64) -> Self {
        self.cl_alpha = Some(cl_alpha);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cd0.is_none() && self.k.is_none() && self.cl_max.is_none() && self.cl_alpha.is_none()
    }

    /// Clean, high-lift configuration used by the fighter preset.
    pub fn fighter_jet() -> Self {
        Self::new().cd0(0.018).cl_max(1.8)
    }
}
