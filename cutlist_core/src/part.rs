//! # Parts and Results
//!
//! A [`Part`] is one line of the cutting list: a named panel with its two
//! cut dimensions, quantity and banded edges. Area and edge-band length are
//! derived once, in [`Part::new`], from those four values, so they can always
//! be reproduced from the part itself.
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::part::{EdgeDistribution, Part};
//!
//! let shelf = Part::new("shelf", 28.0, 56.4, 2, EdgeDistribution::SHELF);
//! assert!((shelf.area_m2 - 0.3158).abs() < 1e-9);
//! // front edge (28.0) plus both ends (2 x 56.4), for two shelves
//! assert!((shelf.edge_band_m - 2.816).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::units::{round_to, Centimeters, Meters, SquareMeters};
use crate::unit::UnitType;

/// Decimal places kept on cut dimensions
pub const DIMENSION_PLACES: u32 = 2;

/// Decimal places kept on areas and per-part edge banding
pub const AREA_PLACES: u32 = 4;

// ============================================================================
// Edge Distribution
// ============================================================================

/// Which edges of a panel get edge-banding tape.
///
/// `top`/`bottom` run along the part width, `left`/`right` along its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeDistribution {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Default for EdgeDistribution {
    fn default() -> Self {
        EdgeDistribution::ALL
    }
}

impl EdgeDistribution {
    /// All four edges banded
    pub const ALL: EdgeDistribution = EdgeDistribution {
        top: true,
        left: true,
        right: true,
        bottom: true,
    };

    /// No banding (back panels, drawer bottoms)
    pub const NONE: EdgeDistribution = EdgeDistribution {
        top: false,
        left: false,
        right: false,
        bottom: false,
    };

    /// Shelf banding: front and both ends, back edge left raw
    pub const SHELF: EdgeDistribution = EdgeDistribution {
        top: true,
        left: true,
        right: true,
        bottom: false,
    };

    /// Banded length of one piece of size `width` x `height`
    pub fn banded_length(&self, width: Centimeters, height: Centimeters) -> Centimeters {
        let along_width = u32::from(self.top) + u32::from(self.bottom);
        let along_height = u32::from(self.left) + u32::from(self.right);
        width * f64::from(along_width) + height * f64::from(along_height)
    }
}

// ============================================================================
// Part
// ============================================================================

/// One cutting-list line. All lengths in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Semantic role (e.g. "side_panel", "drawer_bottom", "top_door_flip")
    pub name: String,

    /// Short cut axis
    pub width_cm: f64,

    /// Long cut axis
    pub height_cm: f64,

    /// Nominal thickness, only for pieces that carry one (back panels)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_cm: Option<f64>,

    pub qty: u32,

    pub edge_distribution: EdgeDistribution,

    /// `width * height * qty / 10000`, 4 decimals
    pub area_m2: f64,

    /// Banded edge length times qty, in meters, 4 decimals
    pub edge_band_m: f64,
}

impl Part {
    /// Create a part, rounding cut dimensions to 0.01 cm and deriving its
    /// area and edge banding.
    pub fn new(name: impl Into<String>, width_cm: f64, height_cm: f64, qty: u32, edges: EdgeDistribution) -> Self {
        let width_cm = round_to(width_cm, DIMENSION_PLACES);
        let height_cm = round_to(height_cm, DIMENSION_PLACES);
        Part {
            name: name.into(),
            width_cm,
            height_cm,
            depth_cm: None,
            qty,
            edge_distribution: edges,
            area_m2: Self::area_for(width_cm, height_cm, qty).0,
            edge_band_m: Self::edge_band_for(width_cm, height_cm, qty, edges).0,
        }
    }

    /// Attach a nominal thickness
    pub fn with_depth(mut self, depth_cm: Option<f64>) -> Self {
        self.depth_cm = depth_cm.map(|d| round_to(d, DIMENSION_PLACES));
        self
    }

    /// Area of `qty` pieces, rounded to 4 decimals
    pub fn area_for(width_cm: f64, height_cm: f64, qty: u32) -> SquareMeters {
        let area: SquareMeters = (Centimeters(width_cm) * Centimeters(height_cm) * f64::from(qty)).into();
        area.rounded(AREA_PLACES)
    }

    /// Edge banding of `qty` pieces, rounded to 4 decimals
    pub fn edge_band_for(width_cm: f64, height_cm: f64, qty: u32, edges: EdgeDistribution) -> Meters {
        let per_piece = edges.banded_length(Centimeters(width_cm), Centimeters(height_cm));
        let total: Meters = (per_piece * f64::from(qty)).into();
        total.rounded(AREA_PLACES)
    }

    /// True when the stored area and banding match the part's own
    /// dimensions.
    pub fn is_consistent(&self) -> bool {
        let area = Self::area_for(self.width_cm, self.height_cm, self.qty).0;
        let band = Self::edge_band_for(self.width_cm, self.height_cm, self.qty, self.edge_distribution).0;
        (area - self.area_m2).abs() < 1e-9 && (band - self.edge_band_m).abs() < 1e-9
    }
}

// ============================================================================
// Calculation Result
// ============================================================================

/// Output of one unit calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub shelf_count: u32,

    /// Parts in display order
    pub parts: Vec<Part>,

    pub total_area_m2: f64,
    pub total_edge_band_m: f64,

    /// `"area"` (m², 4 decimals) and `"edge_band"` (m, 2 decimals)
    pub material_usage: BTreeMap<String, f64>,

    /// Filled in by [`crate::pricing::estimate`]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cost_breakdown: BTreeMap<String, f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl CalculationResult {
    /// First part with the given role
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Total number of pieces to cut, saturating at `u32::MAX`
    pub fn piece_count(&self) -> u32 {
        self.parts.iter().fold(0u32, |acc, p| acc.saturating_add(p.qty))
    }
}
