//! Carcass fragments shared across families: base, rails, sides, shelves,
//! back panel, fixed-part group and the loose side panels.

use super::{Qty, Recipe, Step};
use crate::part::EdgeDistribution;

/// Base panel, following the assembly method
pub fn base() -> Step {
    Step::new("base", |c| Ok(c.d()), |c| Ok(c.carcass_span()))
}

/// `qty` front rails between the sides
pub fn front_mirror(qty: u32) -> Step {
    Step::new("front_mirror", |c| Ok(c.mirror()), |c| Ok(c.inner_width())).qty(Qty::Fixed(qty))
}

/// Back rail between the sides
pub fn back_mirror() -> Step {
    Step::new("back_mirror", |c| Ok(c.mirror()), |c| Ok(c.inner_width()))
}

/// Pair of sides standing on the base
pub fn ground_sides() -> Step {
    Step::new("side_panel", |c| Ok(c.d()), |c| Ok(c.ground_side_height())).qty(Qty::Fixed(2))
}

/// Pair of full-height sides
pub fn full_sides() -> Step {
    Step::new("side_panel", |c| Ok(c.d()), |c| Ok(c.h())).qty(Qty::Fixed(2))
}

/// `shelf_count` regular shelves
pub fn shelves() -> Step {
    Step::new("shelf", |c| Ok(c.shelf_depth()), |c| Ok(c.inner_width()))
        .qty(Qty::Shelves)
        .edges(EdgeDistribution::SHELF)
}

/// Routed back panel, carrying the groove depth as its thickness
pub fn back_panel() -> Step {
    Step::new("back_panel", |c| Ok(c.back_width()), |c| Ok(c.back_height()))
        .edges(EdgeDistribution::NONE)
        .depth(|c| Ok(c.settings.router_thickness_cm))
}

/// Base panel, front rail(s), back rail and standing sides
pub fn ground_carcass(front_rails: u32, back_rail: bool) -> Vec<Step> {
    let mut steps = vec![base(), front_mirror(front_rails)];
    if back_rail {
        steps.push(back_mirror());
    }
    steps.push(ground_sides());
    steps
}

// ============================================================================
// Fixed-part group
// ============================================================================

/// Installation rail, fixed panel
pub fn fixed_part() -> [Step; 2] {
    [
        Step::new("detailed_installation_mirror", |c| Ok(c.mirror()), |c| {
            Ok(c.h() - 2.0 * c.t())
        }),
        Step::new("fixed_part", |c| Ok(c.fixed_panel_width()), |c| Ok(c.h())),
    ]
}

/// Doors sharing the span beside the fixed part
pub fn fixed_doors() -> Step {
    Step::new("door", |c| c.fixed_door_width(), |c| Ok(c.h() - c.handle())).qty(Qty::Doors)
}

/// Pair of filler strips
pub fn fillers() -> Step {
    Step::new("filler", |c| Ok(c.mirror()), |c| Ok(c.h())).qty(Qty::Fixed(2))
}

// ============================================================================
// Loose panels
// ============================================================================

/// Finished side panel added to `*_side_panel` units
pub fn decorative_side_panel() -> Step {
    Step::new("decorative_side_panel", |c| Ok(c.d()), |c| Ok(c.h()))
}

/// A single flush side panel
pub fn side_flush() -> Recipe {
    Recipe::new([Step::new("side_panel", |c| Ok(c.d()), |c| Ok(c.h()))])
}
