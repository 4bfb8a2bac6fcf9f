//! Full-height cabinets.
//!
//! Tall units split into a lower zone of `bottom_door_height_cm` (doors or
//! drawers) and an upper zone (doors, optionally above an appliance stack).
//! Most follow the assembly method with a base and top between or under the
//! sides; the bottom-rail and side-drawer appliance units always stand on
//! full-height sides.

use super::common::{back_panel, shelves};
use super::drawers::{box_floor_depth, drawer_boxes, floor_depth, Rail};
use super::wall::extra_shelf;
use super::{Ctx, Measure, Qty, Recipe, Step};
use crate::geometry;
use crate::part::EdgeDistribution;

/// Base, top and sides following the assembly method
fn carcass() -> [Step; 3] {
    [
        Step::new("base", |c| Ok(c.d()), |c| Ok(c.carcass_span())),
        Step::new("top_ceiling", |c| Ok(c.d()), |c| Ok(c.carcass_span())),
        Step::new("side_panel", |c| Ok(c.d()), |c| Ok(c.tall_side_height())).qty(Qty::Fixed(2)),
    ]
}

/// Base and top between full-height sides
fn full_side_carcass() -> [Step; 3] {
    [
        Step::new("base", |c| Ok(c.d()), |c| Ok(c.inner_width())),
        Step::new("top_ceiling", |c| Ok(c.d()), |c| Ok(c.inner_width())),
        Step::new("side_panel", |c| Ok(c.d()), |c| Ok(c.h())).qty(Qty::Fixed(2)),
    ]
}

fn appliance_shelves() -> Step {
    Step::new("appliance_shelf", |c| Ok(c.routed_depth()), |c| Ok(c.inner_width()))
        .qty(Qty::Fixed(3))
        .edges(EdgeDistribution::SHELF)
}

/// Lower door zone with floor clearance
fn bottom_doors() -> Step {
    Step::new("bottom_door", |c| c.door_width(), |c| {
        Ok(c.spec.bottom_door_height_cm - c.settings.ground_door_height_deduction_no_edge_cm - c.handle())
    })
    .qty(Qty::Doors)
}

/// `drawer_count` fronts sharing the lower zone
fn lower_drawer_fronts(role: &'static str) -> Step {
    Step::new(role, |c| Ok(c.full_front_width()), |c| {
        c.drawer_front_height(c.spec.bottom_door_height_cm)
    })
    .qty(Qty::Drawers)
}

/// Flip doors stacked in the upper zone
fn upper_flip_doors() -> Step {
    Step::new("top_door_flip", |c| Ok(c.full_front_width()), |c| {
        c.stacked_door_height(c.upper_zone(), c.clearances().front_gap_cm)
    })
    .qty(Qty::Doors)
    .when(|c| c.is_flip())
}

pub fn tall_doors() -> Recipe {
    Recipe::new(carcass()).then([
        shelves(),
        extra_shelf(),
        back_panel(),
        bottom_doors(),
        Step::new("top_door", |c| c.door_width(), |c| Ok(c.upper_zone() - c.handle())).qty(Qty::Doors),
    ])
}

// ============================================================================
// Appliance stacks
// ============================================================================

/// Upper-zone height left over the oven, microwave and vent in a tall door
/// unit
fn stacked_appliance_zone(c: &Ctx<'_>) -> f64 {
    let gap = c.clearances().appliance_gap_cm;
    let appliances = c.spec.oven_height_cm + c.spec.microwave_height_cm + gap;
    c.upper_zone() - appliances - c.handle() - (c.spec.vent_height_cm + gap)
}

/// Upper-zone height over the oven and microwave in a tall drawer unit
fn drawer_appliance_zone(c: &Ctx<'_>) -> f64 {
    c.upper_zone() - (c.spec.oven_height_cm + c.clearances().appliance_gap_cm) - c.spec.microwave_height_cm
}

fn vent_panel() -> Step {
    Step::new("vent_panel", |c| Ok(c.full_front_width()), |c| {
        Ok(c.spec.vent_height_cm - c.clearances().vent_panel_gap_cm)
    })
}

/// Tall door unit housing an oven and a microwave
pub fn tall_doors_appliances() -> Recipe {
    let [base, top, _] = carcass();
    Recipe::new([
        base,
        top,
        Step::new("side_1", |c| Ok(c.d()), |c| Ok(c.tall_side_height())),
        Step::new("side_2", |c| Ok(c.d()), |c| Ok(c.tall_side_height())),
        shelves(),
        appliance_shelves(),
        back_panel(),
        Step::new("vent", |c| Ok(c.full_front_width()), |c| {
            Ok(c.spec.vent_height_cm - c.clearances().appliance_gap_cm)
        }),
        bottom_doors(),
        Step::new("top_door_hinged", |c| c.door_width(), |c| {
            Ok(stacked_appliance_zone(c) - c.clearances().appliance_door_gap_cm)
        })
        .qty(Qty::Doors)
        .when(|c| c.is_hinged()),
        Step::new("top_door_flip", |c| Ok(c.full_front_width()), |c| {
            let span = stacked_appliance_zone(c) - c.clearances().flip_gap_cm;
            geometry::split_by_count(span, c.doors(), 0.0)
        })
        .qty(Qty::Doors)
        .when(|c| c.is_flip()),
    ])
}

// ============================================================================
// Drawers below, doors above
// ============================================================================

fn side_rail_floor_depth(rail: Rail) -> Measure {
    match rail {
        Rail::Side => box_floor_depth,
        Rail::Bottom => floor_depth,
    }
}

/// Drawers in the lower zone, doors above; shared by both slide styles
fn tall_drawers_doors_top(rail: Rail) -> Recipe {
    let [width, depth, bottom] = drawer_boxes(rail, side_rail_floor_depth(rail));
    Recipe::new(carcass()).then([
        shelves(),
        back_panel(),
        width.renamed("drawer_width_part"),
        depth.renamed("drawer_depth_part"),
        bottom,
        lower_drawer_fronts("drawer_face"),
        Step::new("top_door_hinged", |c| c.door_width(), |c| {
            Ok(c.upper_zone() - c.handle() - c.clearances().hinged_top_gap_cm)
        })
        .qty(Qty::Doors)
        .when(|c| c.is_hinged()),
        upper_flip_doors(),
    ])
}

pub fn tall_drawers_side_doors_top() -> Recipe {
    tall_drawers_doors_top(Rail::Side)
}

pub fn tall_drawers_bottom_doors_top() -> Recipe {
    tall_drawers_doors_top(Rail::Bottom)
}

/// Bottom-rail drawers under an intermediate shelf, doors above
pub fn tall_drawers_bottom_rail_top_doors() -> Recipe {
    Recipe::new(full_side_carcass())
        .then([
            shelves(),
            Step::new("intermediate_shelf", |c| Ok(c.routed_depth()), |c| Ok(c.inner_width()))
                .edges(EdgeDistribution::SHELF),
        ])
        .then(drawer_boxes(Rail::Bottom, floor_depth))
        .then([
            lower_drawer_fronts("drawer_front"),
            back_panel(),
            Step::new("top_door_hinged", |c| c.door_width(), |c| Ok(c.upper_zone() - c.handle()))
                .qty(Qty::Doors)
                .when(|c| c.is_hinged()),
            upper_flip_doors(),
        ])
}

/// Side-slide drawers, appliance bay and doors on top
pub fn tall_drawers_side_appliances_doors() -> Recipe {
    Recipe::new(full_side_carcass())
        .then([shelves().qty(Qty::ShelvesLess(3)), appliance_shelves()])
        .then(drawer_boxes(Rail::Side, floor_depth))
        .then([
            lower_drawer_fronts("drawer_front"),
            back_panel(),
            vent_panel(),
            // no handle deduction on this unit's hinged top doors
            Step::new("top_door_hinged", |c| c.door_width(), |c| Ok(drawer_appliance_zone(c)))
                .qty(Qty::Doors)
                .when(|c| c.is_hinged()),
            appliance_top_flip_doors(),
        ])
}

/// Bottom-rail drawers, appliance bay and doors on top
pub fn tall_drawers_bottom_appliances_doors_top() -> Recipe {
    Recipe::new(carcass())
        .then([shelves().qty(Qty::ShelvesLess(3)), appliance_shelves()])
        .then(drawer_boxes(Rail::Bottom, floor_depth))
        .then([
            lower_drawer_fronts("drawer_front"),
            back_panel(),
            vent_panel(),
            Step::new("top_door_hinged", |c| c.door_width(), |c| {
                Ok(drawer_appliance_zone(c) - c.handle())
            })
            .qty(Qty::Doors)
            .when(|c| c.is_hinged()),
            appliance_top_flip_doors(),
        ])
}

fn appliance_top_flip_doors() -> Step {
    Step::new("top_door_flip", |c| Ok(c.full_front_width()), |c| {
        c.stacked_door_height(drawer_appliance_zone(c), c.clearances().front_gap_cm)
    })
    .qty(Qty::Doors)
    .when(|c| c.is_flip())
}

// ============================================================================
// Wooden base
// ============================================================================

/// Tall unit on a wooden plinth; also used for wardrobes
pub fn tall_wooden_base() -> Recipe {
    Recipe::new([
        Step::new("base", |c| Ok(c.d()), |c| Ok(c.w() - c.clearances().wooden_base_inset_cm)),
        Step::new("top_panel", |c| Ok(c.d()), |c| Ok(c.inner_width())),
        Step::new("side_panel", |c| Ok(c.d()), |c| Ok(c.h() - c.t())).qty(Qty::Fixed(2)),
        Step::new("shelf", |c| Ok(c.shelf_depth()), |c| Ok(c.inner_width())).qty(Qty::Shelves),
        back_panel(),
        Step::new("door", |c| c.door_width(), |c| {
            Ok(c.h() - c.handle() - c.clearances().flip_gap_cm)
        })
        .qty(Qty::Doors),
    ])
}
