#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_all_finite, assert_vn_closed, assert_within_bounds};
pub use fixtures::*;
