//! # Totals
//!
//! Sums a parts list into the totals carried by a
//! [`CalculationResult`](crate::part::CalculationResult).
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::aggregate::aggregate;
//! use cutlist_core::part::{EdgeDistribution, Part};
//!
//! let parts = vec![
//!     Part::new("side_panel", 30.0, 72.0, 2, EdgeDistribution::ALL),
//!     Part::new("back_panel", 59.6, 71.6, 1, EdgeDistribution::NONE),
//! ];
//! let totals = aggregate(&parts);
//! assert!((totals.total_area_m2 - 0.8587).abs() < 1e-9);
//! assert_eq!(totals.material_usage["area"], 0.8587);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::part::Part;
use crate::units::round_to;

/// Usage key for sheet area, in square meters
pub const AREA_KEY: &str = "area";

/// Usage key for edge banding, in meters
pub const EDGE_BAND_KEY: &str = "edge_band";

/// Aggregated quantities of a parts list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_area_m2: f64,
    pub total_edge_band_m: f64,
    pub material_usage: BTreeMap<String, f64>,
}

/// Sum areas and edge banding. Usage is rounded to 4 decimals for area and
/// 2 for edge band.
pub fn aggregate(parts: &[Part]) -> Totals {
    let total_area_m2 = parts.iter().map(|p| p.area_m2).sum();
    let total_edge_band_m = parts.iter().map(|p| p.edge_band_m).sum();
    Totals::from_sums(total_area_m2, total_edge_band_m)
}

impl Totals {
    /// Add another set of totals, re-deriving the rounded usage
    pub fn merge(&self, other: &Totals) -> Totals {
        Totals::from_sums(
            self.total_area_m2 + other.total_area_m2,
            self.total_edge_band_m + other.total_edge_band_m,
        )
    }

    fn from_sums(total_area_m2: f64, total_edge_band_m: f64) -> Totals {
        let mut material_usage = BTreeMap::new();
        material_usage.insert(AREA_KEY.to_string(), round_to(total_area_m2, 4));
        material_usage.insert(EDGE_BAND_KEY.to_string(), round_to(total_edge_band_m, 2));

        Totals {
            total_area_m2,
            total_edge_band_m,
            material_usage,
        }
    }
}

impl Default for Totals {
    fn default() -> Self {
        aggregate(&[])
    }
}
