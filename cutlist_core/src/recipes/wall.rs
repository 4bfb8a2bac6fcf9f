//! Wall-hung cabinets.
//!
//! Wall carcasses always use full-height sides; base and top sit between
//! them regardless of the assembly method. The top loses the chassis handle
//! drop on units with a handle channel.

use super::common::{back_panel, fillers, fixed_doors, fixed_part, full_sides, shelves};
use super::{Qty, Recipe, Step};
use crate::part::EdgeDistribution;

/// Base, top and full sides. `handle_drop` takes the handle channel off the
/// top's depth.
pub fn wall_carcass(handle_drop: bool) -> Vec<Step> {
    let top = if handle_drop {
        Step::new("top_ceiling", |c| Ok(c.d() - c.settings.chassis_handle_drop_cm), |c| {
            Ok(c.inner_width())
        })
    } else {
        Step::new("top_ceiling", |c| Ok(c.d()), |c| Ok(c.inner_width()))
    };
    vec![
        Step::new("base", |c| Ok(c.d()), |c| Ok(c.inner_width())),
        top,
        full_sides(),
    ]
}

/// Hinged doors side by side, or flip doors stacked, by door type
pub fn wall_doors() -> [Step; 2] {
    [
        Step::new("door_hinged", |c| c.door_width(), |c| Ok(c.h() - c.handle()))
            .qty(Qty::Doors)
            .when(|c| c.is_hinged()),
        Step::new("door_flip", |c| Ok(c.full_front_width()), |c| {
            c.stacked_door_height(c.h(), c.clearances().flip_gap_cm)
        })
        .qty(Qty::Doors)
        .when(|c| c.is_flip()),
    ]
}

/// Shelf in front of the routed back
pub fn extra_shelf() -> Step {
    Step::new("extra_shelf", |c| Ok(c.routed_depth() - c.clearances().shelf_clearance_cm), |c| {
        Ok(c.inner_width())
    })
    .edges(EdgeDistribution::SHELF)
}

pub fn wall() -> Recipe {
    Recipe::new(wall_carcass(true))
        .then([shelves(), back_panel()])
        .then(wall_doors())
}

pub fn wall_fixed() -> Recipe {
    Recipe::new(wall_carcass(false))
        .then([shelves()])
        .then(fixed_part())
        .then([back_panel(), fixed_doors(), fillers()])
}

/// Doors below, one lift-up door of `flip_door_height_cm` on top
pub fn wall_flip_top_doors_bottom() -> Recipe {
    Recipe::new(wall_carcass(true)).then([
        shelves(),
        extra_shelf(),
        back_panel(),
        Step::new("bottom_door", |c| c.door_width(), |c| {
            Ok(c.h() - c.handle() - c.spec.flip_door_height_cm - c.clearances().flip_gap_cm)
        })
        .qty(Qty::Doors),
        Step::new("flip_door", |c| Ok(c.full_front_width()), |c| {
            Ok(c.spec.flip_door_height_cm - c.handle() - c.clearances().appliance_gap_cm)
        }),
    ])
}

/// Open-backed wall unit over the sink
pub fn dish_rack() -> Recipe {
    Recipe::new(wall_carcass(true)).then([shelves()]).then(wall_doors())
}

/// Wall unit with a microwave bay at the bottom
pub fn wall_microwave() -> Recipe {
    Recipe::new([
        Step::new("base", |c| Ok(c.d()), |c| Ok(c.inner_width())),
        Step::new("top_panel", |c| Ok(c.d()), |c| Ok(c.inner_width())),
        full_sides(),
        Step::new("shelf", |c| Ok(c.shelf_depth()), |c| Ok(c.inner_width())).qty(Qty::ShelvesLess(1)),
        Step::new(
            "microwave_shelf",
            |c| Ok(c.routed_depth() - c.clearances().microwave_shelf_clearance_cm),
            |c| Ok(c.inner_width()),
        ),
        back_panel(),
        Step::new("flip_door", |c| Ok(c.full_front_width()), |c| {
            c.stacked_door_height(c.h() - c.spec.microwave_height_cm, c.clearances().flip_gap_cm)
        })
        .qty(Qty::Doors)
        .when(|c| c.is_flip()),
        Step::new("door", |c| c.door_width(), |c| {
            Ok(c.h() - c.handle() - c.spec.microwave_height_cm - c.clearances().flip_gap_cm)
        })
        .qty(Qty::Doors)
        .when(|c| c.is_hinged()),
    ])
}
