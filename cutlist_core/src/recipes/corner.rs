//! Two-axis corner cabinets.
//!
//! Every dimension comes from [`CornerGeometry`](crate::geometry::CornerGeometry):
//! the secondary width and depth fall back to the primary ones when unset.
//! L units have one door per run; 45-degree units have a single diagonal
//! front.

use super::{Qty, Recipe, Step};
use crate::part::EdgeDistribution;

fn corner_base(role: &'static str) -> Step {
    Step::new(role, |c| Ok(c.corner().base_width()), |c| Ok(c.corner().base_length()))
}

fn corner_sides() -> [Step; 2] {
    [
        Step::new("side_1", |c| Ok(c.corner().d1), |c| Ok(c.h())),
        Step::new("side_2", |c| Ok(c.corner().d2), |c| Ok(c.h())),
    ]
}

fn corner_ground_sides() -> [Step; 2] {
    [
        Step::new("side_1", |c| Ok(c.corner().d1), |c| Ok(c.ground_side_height())),
        Step::new("side_2", |c| Ok(c.corner().d2), |c| Ok(c.ground_side_height())),
    ]
}

fn corner_shelf() -> Step {
    Step::new(
        "shelf",
        |c| Ok(c.corner().shelf(c.settings.routed_back_offset_cm()).0),
        |c| Ok(c.corner().shelf(c.settings.routed_back_offset_cm()).1),
    )
    .qty(Qty::Shelves)
    .edges(EdgeDistribution::SHELF)
}

fn corner_backs() -> [Step; 2] {
    [
        Step::new("back_1", |c| Ok(c.corner().w1 - c.settings.back_deduction_cm), |c| {
            Ok(c.back_height())
        })
        .edges(EdgeDistribution::NONE)
        .depth(|c| Ok(c.settings.router_thickness_cm)),
        Step::new(
            "back_2",
            |c| {
                Ok(c.corner().w2
                    - c.settings.routed_back_offset_cm()
                    - c.clearances().corner_back_allowance_cm)
            },
            |c| Ok(c.back_height()),
        )
        .edges(EdgeDistribution::NONE)
        .depth(|c| Ok(c.settings.router_thickness_cm)),
    ]
}

/// Front rail along each run
fn corner_rails() -> [Step; 2] {
    [
        Step::new("front_mirror", |c| Ok(c.mirror()), |c| Ok(c.corner().base_width())),
        Step::new("front_mirror_2", |c| Ok(c.mirror()), |c| {
            Ok(c.corner().w2 - c.t())
        }),
    ]
}

/// Wall corner with one door per run (second one lift-up)
pub fn corner_l_wall() -> Recipe {
    Recipe::new([corner_base("base"), corner_base("top_ceiling")])
        .then(corner_sides())
        .then([corner_shelf()])
        .then(corner_backs())
        .then([
            Step::new(
                "door_1",
                |c| Ok(c.corner().first_opening(c.clearances().corner_door_allowance_cm)),
                |c| Ok(c.h() - c.handle()),
            ),
            Step::new(
                "flip_door",
                |c| Ok(c.corner().second_opening(c.clearances().corner_flip_allowance_cm)),
                |c| Ok(c.h() - c.handle()),
            ),
        ])
}

/// Wall corner with a single diagonal door
pub fn corner_45_wall() -> Recipe {
    Recipe::new([corner_base("base"), corner_base("top_ceiling")])
        .then(corner_sides())
        .then([corner_shelf()])
        .then(corner_backs())
        .then([Step::new(
            "door",
            |c| Ok(c.corner().diagonal_opening() - c.settings.door_width_deduction_no_edge_cm),
            |c| Ok(c.h() - c.handle()),
        )])
}

fn ground_corner_door_height(c: &super::Ctx<'_>) -> crate::errors::CalcResult<f64> {
    Ok(c.h() - c.handle() - c.settings.ground_door_height_deduction_no_edge_cm)
}

/// Floor corner with one door per run
pub fn corner_90_ground() -> Recipe {
    Recipe::new([corner_base("base")])
        .then(corner_rails())
        .then(corner_ground_sides())
        .then([corner_shelf()])
        .then(corner_backs())
        .then([
            Step::new(
                "door_1",
                |c| Ok(c.corner().first_opening(c.clearances().corner_door_allowance_cm)),
                ground_corner_door_height,
            ),
            Step::new(
                "door_2",
                |c| Ok(c.corner().second_opening(c.clearances().corner_flip_allowance_cm)),
                ground_corner_door_height,
            ),
        ])
}

/// Floor corner with a single diagonal door
pub fn corner_45_ground() -> Recipe {
    Recipe::new([corner_base("base")])
        .then(corner_rails())
        .then(corner_ground_sides())
        .then([corner_shelf()])
        .then(corner_backs())
        .then([Step::new(
            "door",
            |c| Ok(c.corner().diagonal_opening() - c.settings.door_width_deduction_no_edge_cm),
            ground_corner_door_height,
        )])
}
