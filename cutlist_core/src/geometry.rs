//! # Geometry Primitives
//!
//! Pure panel-sizing functions shared by every recipe. Each takes plain
//! centimeter values and returns a cut length; none of them reads settings
//! or mutates anything.
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::geometry::{inset_by_thickness, split_by_count};
//!
//! // Shelf between two 1.8 cm sides of a 60 cm unit
//! assert!((inset_by_thickness(60.0, 2, 1.8) - 56.4).abs() < 1e-9);
//!
//! // Two doors sharing 80 cm with 0.4 cm off each
//! assert!((split_by_count(80.0, 2, 0.4).unwrap() - 39.6).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::AssemblyMethod;

/// `length - n * board_thickness`: a panel sitting between `n` carcass members.
pub fn inset_by_thickness(length: f64, n: u32, board_thickness: f64) -> f64 {
    length - f64::from(n) * board_thickness
}

/// `length - deduction`
pub fn inset_by_deduction(length: f64, deduction: f64) -> f64 {
    length - deduction
}

/// Share `total` between `count` equal pieces, taking `per_unit_deduction`
/// off each.
///
/// Fails on `count == 0`; recipes skip the step before getting here.
pub fn split_by_count(total: f64, count: u32, per_unit_deduction: f64) -> CalcResult<f64> {
    if count == 0 {
        return Err(CalcError::invalid_input(
            "count",
            "0",
            "Cannot split a span between zero pieces",
        ));
    }
    Ok(total / f64::from(count) - per_unit_deduction)
}

// ============================================================================
// Assembly-method branching
// ============================================================================

/// Length of a base or top panel spanning the unit width.
///
/// Full-base assembly runs it the whole width; full-side assembly fits it
/// between the two sides.
pub fn carcass_span(width: f64, method: AssemblyMethod, board_thickness: f64) -> f64 {
    if method.is_full_base() {
        width
    } else {
        inset_by_thickness(width, 2, board_thickness)
    }
}

/// Height of a side panel that sits on `members` horizontal members
/// (1 = base only, 2 = base and top) under full-base assembly. Full-side
/// assembly always returns the outer height.
pub fn side_height(height: f64, members: u32, method: AssemblyMethod, board_thickness: f64) -> f64 {
    if method.is_full_base() {
        inset_by_thickness(height, members, board_thickness)
    } else {
        height
    }
}

// ============================================================================
// Corner units
// ============================================================================

/// Resolved width/depth pairs of a two-axis corner unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerGeometry {
    pub w1: f64,
    pub w2: f64,
    pub d1: f64,
    pub d2: f64,
    pub board_thickness: f64,
}

/// Resolve a corner unit's two axes. A secondary width or depth of 0 (or
/// less) takes the primary value.
pub fn corner_dual_axis(w1: f64, w2: f64, d1: f64, d2: f64, board_thickness: f64) -> CornerGeometry {
    CornerGeometry {
        w1,
        w2: if w2 > 0.0 { w2 } else { w1 },
        d1,
        d2: if d2 > 0.0 { d2 } else { d1 },
        board_thickness,
    }
}

impl CornerGeometry {
    /// Base/top cut width: first run, less one side
    pub fn base_width(&self) -> f64 {
        inset_by_thickness(self.w1, 1, self.board_thickness)
    }

    /// Base/top cut length: second depth, less one side
    pub fn base_length(&self) -> f64 {
        inset_by_thickness(self.d2, 1, self.board_thickness)
    }

    /// Shelf cut, one side and the routed back off each axis
    pub fn shelf(&self, routed_back_offset: f64) -> (f64, f64) {
        (
            inset_by_deduction(self.base_width(), routed_back_offset),
            inset_by_deduction(inset_by_thickness(self.w2, 1, self.board_thickness), routed_back_offset),
        )
    }

    /// Open front along the first run (door 1), less an allowance
    pub fn first_opening(&self, allowance: f64) -> f64 {
        self.w1 - self.d1 - allowance
    }

    /// Open front along the second run (door 2), less an allowance
    pub fn second_opening(&self, allowance: f64) -> f64 {
        self.w2 - self.d2 - allowance
    }

    /// Width of the single diagonal front of a 45-degree corner unit
    pub fn diagonal_opening(&self) -> f64 {
        (self.w1 - self.d1).hypot(self.w2 - self.d2)
    }
}
