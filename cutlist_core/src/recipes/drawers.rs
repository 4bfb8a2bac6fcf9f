//! Floor-standing drawer cabinets.
//!
//! Drawer boxes come in two mounting styles ([`Rail`]): side-mounted slides
//! eat into the box width on both sides, a bottom rail only takes a fixed
//! allowance. The fixed-layout units (three turbo, built-in oven, the
//! small/large combinations) always carry exactly the drawers their name
//! says, whatever `drawer_count` is.

use super::common::{back_mirror, back_panel, front_mirror, ground_carcass, ground_sides};
use super::{Ctx, Measure, Qty, Recipe, Step};
use crate::errors::CalcResult;
use crate::geometry;
use crate::part::EdgeDistribution;

/// Drawer slide mounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rail {
    Side,
    Bottom,
}

fn side_box_width(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.side_box_width())
}

fn bottom_rail_box_width(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.bottom_rail_box_width())
}

fn side_floor_width(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.side_floor_width())
}

fn bottom_rail_floor_width(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.bottom_rail_floor_width())
}

fn inner_width(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.inner_width())
}

/// Floor depth behind a full-depth box
pub fn box_floor_depth(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.box_floor_depth())
}

/// Floor depth with the multi-drawer allowance
pub fn floor_depth(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.floor_depth())
}

impl Rail {
    /// Box strip length
    pub fn box_width(self) -> Measure {
        match self {
            Rail::Side => side_box_width,
            Rail::Bottom => bottom_rail_box_width,
        }
    }

    /// Drawer floor width
    pub fn floor_width(self) -> Measure {
        match self {
            Rail::Side => side_floor_width,
            Rail::Bottom => bottom_rail_floor_width,
        }
    }
}

/// Base, renamed rails and sides of the fixed-layout drawer units
fn rail_carcass() -> [Step; 4] {
    [
        super::common::base(),
        front_mirror(1).renamed("front_rail_mirror"),
        back_mirror().renamed("back_rail_mirror"),
        ground_sides(),
    ]
}

/// Box sides, box fronts/backs and floors for `drawer_count` drawers of
/// `drawer_height_cm`
pub fn drawer_boxes(rail: Rail, floor_depth: Measure) -> [Step; 3] {
    [
        Step::new("drawer_width", |c| Ok(c.spec.drawer_height_cm), rail.box_width()).qty(Qty::DrawersTimes(2)),
        Step::new("drawer_depth", |c| Ok(c.spec.drawer_height_cm), |c| Ok(c.box_depth()))
            .qty(Qty::DrawersTimes(2)),
        Step::new("drawer_bottom", rail.floor_width(), floor_depth)
            .qty(Qty::Drawers)
            .edges(EdgeDistribution::NONE),
    ]
}

/// `drawer_count` full-width fronts sharing the unit height
fn drawer_fronts() -> Step {
    Step::new("drawer_front", |c| Ok(c.full_front_width()), |c| c.drawer_front_height(c.h())).qty(Qty::Drawers)
}

pub fn drawers(rail: Rail) -> Recipe {
    Recipe::new(ground_carcass(1, true))
        .then(drawer_boxes(rail, box_floor_depth))
        .then([back_panel(), drawer_fronts()])
}

/// Three equal drawers built from rail-width strips
pub fn three_turbo() -> Recipe {
    Recipe::new(rail_carcass()).then([
        Step::new("drawer_width_strip", |c| Ok(c.mirror()), |c| Ok(c.side_box_width())).qty(Qty::Fixed(6)),
        Step::new("drawer_depth_strip", |c| Ok(c.mirror()), |c| Ok(c.box_depth())).qty(Qty::Fixed(6)),
        back_panel(),
        Step::new("drawer_front", |c| Ok(c.full_front_width()), |c| {
            geometry::split_by_count(c.h(), 3, c.handle() + c.clearances().front_gap_cm)
        })
        .qty(Qty::Fixed(3)),
    ])
}

/// One shallow drawer below a built-in oven; open back for ventilation
pub fn drawer_built_in_oven(rail: Rail) -> Recipe {
    Recipe::new(rail_carcass()).then([
        Step::new("drawer_width_strip", |c| Ok(c.mirror()), rail.box_width()).qty(Qty::Fixed(2)),
        Step::new("drawer_depth_strip", |c| Ok(c.mirror()), |c| {
            Ok(c.clearances().built_in_oven_box_depth_cm)
        })
        .qty(Qty::Fixed(2)),
        Step::new("drawer_bottom", rail.floor_width(), |c| {
            Ok(c.clearances().built_in_oven_box_depth_cm - c.settings.back_deduction_cm)
        })
        .edges(EdgeDistribution::NONE),
        Step::new("drawer_front", |c| Ok(c.full_front_width()), |c| {
            Ok(c.h() - c.spec.oven_height_cm - c.handle() - c.clearances().flip_gap_cm)
        }),
    ])
}

// ============================================================================
// Small/large combinations
// ============================================================================

/// Box sides of the combination units: side slides, or a box between the
/// carcass sides on a bottom rail
fn combo_box_width(rail: Rail) -> Measure {
    match rail {
        Rail::Side => side_box_width,
        Rail::Bottom => inner_width,
    }
}

fn small_box_height(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.clearances().small_drawer_box_height_cm)
}

fn large_box_height(c: &Ctx<'_>) -> CalcResult<f64> {
    Ok(c.h() - c.clearances().large_drawer_reserve_cm)
}

/// Width and depth strips for `small` small and `large` large drawers
fn combo_boxes(rail: Rail, small: u32, large: u32) -> [Step; 4] {
    let (small_name, large_name) = match rail {
        Rail::Side => ("small_drawer_width_side", "large_drawer_width_side"),
        Rail::Bottom => ("small_drawer_width_box", "large_drawer_width_box"),
    };
    [
        Step::new(small_name, small_box_height, combo_box_width(rail)).qty(Qty::Fixed(small * 2)),
        Step::new("small_drawer_depth", small_box_height, |c| Ok(c.box_depth())).qty(Qty::Fixed(small * 2)),
        Step::new(large_name, large_box_height, combo_box_width(rail)).qty(Qty::Fixed(large * 2)),
        Step::new("large_drawer_depth", large_box_height, |c| Ok(c.box_depth())).qty(Qty::Fixed(large * 2)),
    ]
}

fn combo_bottoms(rail: Rail) -> Step {
    Step::new("drawer_bottom", rail.floor_width(), |c| Ok(c.floor_depth()))
        .qty(Qty::Fixed(3))
        .edges(EdgeDistribution::NONE)
}

fn small_front(qty: u32) -> Step {
    Step::new("small_drawer_front", |c| Ok(c.full_front_width()), |c| {
        Ok(c.clearances().small_front_height_cm - c.handle())
    })
    .qty(Qty::Fixed(qty))
}

/// One small drawer over two large ones
pub fn one_small_16_two_large(rail: Rail) -> Recipe {
    Recipe::new(rail_carcass())
        .then(combo_boxes(rail, 1, 2))
        .then([
            back_panel(),
            combo_bottoms(rail),
            small_front(1),
            Step::new("large_drawer_front", |c| Ok(c.full_front_width()), |c| {
                let zone = c.h() - c.clearances().small_front_zone_cm;
                geometry::split_by_count(zone, 2, c.handle() + c.clearances().flip_gap_cm)
            })
            .qty(Qty::Fixed(2)),
        ])
}

/// Two small drawers over one large one
pub fn two_small_20_one_large(rail: Rail) -> Recipe {
    Recipe::new(rail_carcass())
        .then(combo_boxes(rail, 2, 1))
        .then([
            back_panel(),
            combo_bottoms(rail),
            small_front(2),
            Step::new("large_drawer_front", |c| Ok(c.full_front_width()), |c| {
                Ok(c.h() - c.clearances().two_small_zone_cm - c.handle() - c.clearances().flip_gap_cm)
            }),
        ])
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::settings::CuttingSettings;
    use crate::unit::UnitRequest;

    fn three_drawers(tag: &str) -> UnitRequest {
        UnitRequest {
            drawer_count: 3,
            drawer_height_cm: 20.0,
            ..UnitRequest::new(tag, 60.0, 72.0, 56.0)
        }
    }

    #[test]
    fn test_drawer_quantities() {
        let parts = run(drawers(Rail::Side), three_drawers("drawers"), &CuttingSettings::default());

        let sides = find(&parts, "drawer_width");
        assert_eq!(sides.qty, 6);
        assert_eq!(sides.width_cm, 20.0);
        // 60 - 4 * 1.8 - 2.6
        approx(sides.height_cm, 50.2);
        assert_eq!(find(&parts, "drawer_depth").qty, 6);
        approx(find(&parts, "drawer_depth").height_cm, 48.0);

        let bottom = find(&parts, "drawer_bottom");
        assert_eq!(bottom.qty, 3);
        approx(bottom.width_cm, 53.4);
        approx(bottom.height_cm, 47.6);
        assert_eq!(bottom.edge_distribution, EdgeDistribution::NONE);
    }

    #[test]
    fn test_drawer_fronts_share_height() {
        let parts = run(drawers(Rail::Side), three_drawers("drawers"), &CuttingSettings::default());
        let front = find(&parts, "drawer_front");
        assert_eq!(front.qty, 3);
        approx(front.width_cm, 59.6);
        // 72 / 3 - 0.5
        approx(front.height_cm, 23.5);
    }

    #[test]
    fn test_bottom_rail_boxes() {
        let parts = run(
            drawers(Rail::Bottom),
            three_drawers("drawers_bottom_rail"),
            &CuttingSettings::default(),
        );
        approx(find(&parts, "drawer_width").height_cm, 51.6);
        approx(find(&parts, "drawer_bottom").width_cm, 53.6);
    }

    #[test]
    fn test_no_drawers_leaves_carcass() {
        let parts = run(
            drawers(Rail::Side),
            UnitRequest::new("drawers", 60.0, 72.0, 56.0),
            &CuttingSettings::default(),
        );
        assert!(parts.iter().all(|p| !p.name.starts_with("drawer_")));
        assert!(parts.iter().any(|p| p.name == "back_panel"));
    }

    #[test]
    fn test_three_turbo_ignores_drawer_count() {
        let parts = run(three_turbo(), three_drawers("three_turbo"), &CuttingSettings::default());
        assert_eq!(find(&parts, "drawer_width_strip").qty, 6);
        assert_eq!(find(&parts, "drawer_width_strip").width_cm, 10.0);
        assert_eq!(find(&parts, "drawer_depth_strip").qty, 6);
        let front = find(&parts, "drawer_front");
        assert_eq!(front.qty, 3);
        // 72 / 3 - 0.4
        approx(front.height_cm, 23.6);
        assert!(parts.iter().any(|p| p.name == "front_rail_mirror"));
        assert!(parts.iter().all(|p| p.name != "front_mirror"));
    }

    #[test]
    fn test_built_in_oven_drawer() {
        let parts = run(
            drawer_built_in_oven(Rail::Side),
            UnitRequest::new("drawer_built_in_oven", 60.0, 72.0, 56.0),
            &CuttingSettings::default(),
        );
        assert_eq!(find(&parts, "drawer_depth_strip").height_cm, 40.0);
        approx(find(&parts, "drawer_bottom").height_cm, 39.6);
        // 72 - 60 - 0.5
        approx(find(&parts, "drawer_front").height_cm, 11.5);
        assert!(parts.iter().all(|p| p.name != "back_panel"));
    }

    #[test]
    fn test_one_small_two_large_side() {
        let parts = run(
            one_small_16_two_large(Rail::Side),
            UnitRequest::new("one_small_16_two_large_side", 60.0, 72.0, 56.0),
            &CuttingSettings::default(),
        );
        let small = find(&parts, "small_drawer_width_side");
        assert_eq!(small.qty, 2);
        assert_eq!(small.width_cm, 12.0);
        approx(small.height_cm, 50.2);

        let large = find(&parts, "large_drawer_width_side");
        assert_eq!(large.qty, 4);
        approx(large.width_cm, 26.0);

        approx(find(&parts, "small_drawer_front").height_cm, 19.6);
        let large_front = find(&parts, "large_drawer_front");
        assert_eq!(large_front.qty, 2);
        // (72 - 20) / 2 - 0.5
        approx(large_front.height_cm, 25.5);
    }

    #[test]
    fn test_two_small_one_large_bottom() {
        let parts = run(
            two_small_20_one_large(Rail::Bottom),
            UnitRequest::new("two_small_20_one_large_bottom", 60.0, 72.0, 56.0),
            &CuttingSettings::default(),
        );
        let small = find(&parts, "small_drawer_width_box");
        assert_eq!(small.qty, 4);
        approx(small.height_cm, 56.4);
        assert_eq!(find(&parts, "large_drawer_width_box").qty, 2);

        let bottom = find(&parts, "drawer_bottom");
        assert_eq!(bottom.qty, 3);
        approx(bottom.width_cm, 53.6);
        approx(bottom.height_cm, 46.0);

        assert_eq!(find(&parts, "small_drawer_front").qty, 2);
        // 72 - 40 - 0.5
        approx(find(&parts, "large_drawer_front").height_cm, 31.5);
    }
}
