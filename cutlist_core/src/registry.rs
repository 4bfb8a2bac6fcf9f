//! # Unit Registry
//!
//! Maps every [`UnitType`] to its [`Recipe`] and runs complete calculations.
//! The match in [`recipe_for`] is exhaustive, so a new unit type does not
//! compile until it has a recipe; unknown tags never get this far because
//! they fail to parse into a `UnitType`.
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::registry::compute_request;
//! use cutlist_core::settings::CuttingSettings;
//! use cutlist_core::unit::UnitRequest;
//!
//! let request = UnitRequest { door_count: 1, ..UnitRequest::new("ground", 60.0, 72.0, 56.0) };
//! let result = compute_request(&request, &CuttingSettings::default()).unwrap();
//!
//! assert_eq!(result.part("side_panel").unwrap().qty, 2);
//! assert!(result.total_area_m2 > 0.0);
//! ```

use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::errors::CalcResult;
use crate::part::{CalculationResult, Part};
use crate::recipes::drawers::Rail;
use crate::recipes::{common, corner, drawers, ground, tall, wall, Ctx, Recipe};
use crate::settings::CuttingSettings;
use crate::unit::{UnitRequest, UnitSpec, UnitType};

/// Step list for a unit type
pub fn recipe_for(unit_type: UnitType) -> Recipe {
    match unit_type {
        UnitType::Ground => ground::ground(),
        UnitType::GroundSidePanel => ground::ground().with_side_panel(),
        UnitType::GroundFixed => ground::ground_fixed(),
        UnitType::GroundFixedSidePanel => ground::ground_fixed().with_side_panel(),
        UnitType::Sink => ground::sink(),
        UnitType::SinkSidePanel => ground::sink().with_side_panel(),
        UnitType::SinkFixed => ground::sink_fixed(),
        UnitType::SinkFixedSidePanel => ground::sink_fixed().with_side_panel(),

        UnitType::Drawers => drawers::drawers(Rail::Side),
        UnitType::DrawersSidePanel => drawers::drawers(Rail::Side).with_side_panel(),
        UnitType::DrawersBottomRail => drawers::drawers(Rail::Bottom),
        UnitType::DrawersBottomRailSidePanel => drawers::drawers(Rail::Bottom).with_side_panel(),
        UnitType::ThreeTurbo => drawers::three_turbo(),
        UnitType::DrawerBuiltInOven => drawers::drawer_built_in_oven(Rail::Side),
        UnitType::DrawerBottomRailBuiltInOven => drawers::drawer_built_in_oven(Rail::Bottom),
        UnitType::TwoSmall20OneLargeSide => drawers::two_small_20_one_large(Rail::Side),
        UnitType::TwoSmall20OneLargeBottom => drawers::two_small_20_one_large(Rail::Bottom),
        UnitType::OneSmall16TwoLargeSide => drawers::one_small_16_two_large(Rail::Side),
        UnitType::OneSmall16TwoLargeBottom => drawers::one_small_16_two_large(Rail::Bottom),

        UnitType::Corner90Ground => corner::corner_90_ground(),
        UnitType::Corner45Ground => corner::corner_45_ground(),
        UnitType::CornerLWall => corner::corner_l_wall(),
        UnitType::Corner45Wall => corner::corner_45_wall(),

        UnitType::Wall => wall::wall(),
        UnitType::WallSidePanel => wall::wall().with_side_panel(),
        UnitType::WallFixed => wall::wall_fixed(),
        UnitType::WallFixedSidePanel => wall::wall_fixed().with_side_panel(),
        UnitType::WallFlipTopDoorsBottom => wall::wall_flip_top_doors_bottom(),
        UnitType::DishRack => wall::dish_rack(),
        UnitType::DishRackSidePanel => wall::dish_rack().with_side_panel(),
        UnitType::WallMicrowave => wall::wall_microwave(),
        UnitType::WallMicrowaveSidePanel => wall::wall_microwave().with_side_panel(),

        UnitType::TallDoors => tall::tall_doors(),
        UnitType::TallDoorsSidePanel => tall::tall_doors().with_side_panel(),
        UnitType::TallDoorsAppliances => tall::tall_doors_appliances(),
        UnitType::TallDoorsAppliancesSidePanel => tall::tall_doors_appliances().with_side_panel(),
        UnitType::TallDrawersSideDoorsTop => tall::tall_drawers_side_doors_top(),
        UnitType::TallDrawersSideDoorsTopSidePanel => tall::tall_drawers_side_doors_top().with_side_panel(),
        UnitType::TallDrawersBottomDoorsTop => tall::tall_drawers_bottom_doors_top(),
        UnitType::TallDrawersBottomDoorsTopSidePanel => tall::tall_drawers_bottom_doors_top().with_side_panel(),
        UnitType::TallDrawersSideAppliancesDoors => tall::tall_drawers_side_appliances_doors(),
        UnitType::TallDrawersSideAppliancesDoorsSidePanel => {
            tall::tall_drawers_side_appliances_doors().with_side_panel()
        }
        UnitType::TallDrawersBottomAppliancesDoorsTop => tall::tall_drawers_bottom_appliances_doors_top(),
        UnitType::TallDrawersBottomAppliancesDoorsTopSidePanel => {
            tall::tall_drawers_bottom_appliances_doors_top().with_side_panel()
        }
        UnitType::TallDrawersBottomRailTopDoors => tall::tall_drawers_bottom_rail_top_doors(),
        UnitType::TallWoodenBase | UnitType::WardrobeWoodenBase => tall::tall_wooden_base(),

        UnitType::SideFlush => common::side_flush(),
    }
}

/// Ordered parts list for a validated unit.
///
/// Settings are validated first; a degenerate part fails the whole unit.
pub fn compute_parts(spec: &UnitSpec, settings: &CuttingSettings) -> CalcResult<Vec<Part>> {
    settings.validate()?;

    let recipe = recipe_for(spec.unit_type);
    let parts = recipe.run(&Ctx::new(spec, settings))?;

    debug!(
        unit_type = %spec.unit_type,
        steps = recipe.steps().len(),
        parts = parts.len(),
        "computed parts"
    );
    Ok(parts)
}

/// Parts plus aggregated totals for a validated unit
pub fn compute(spec: &UnitSpec, settings: &CuttingSettings) -> CalcResult<CalculationResult> {
    let parts = compute_parts(spec, settings)?;
    let totals = aggregate(&parts);

    Ok(CalculationResult {
        unit_type: spec.unit_type,
        width_cm: spec.width_cm,
        height_cm: spec.height_cm,
        depth_cm: spec.depth_cm,
        shelf_count: spec.shelf_count,
        parts,
        total_area_m2: totals.total_area_m2,
        total_edge_band_m: totals.total_edge_band_m,
        material_usage: totals.material_usage,
        cost_breakdown: Default::default(),
        total_cost: None,
    })
}

/// Validate a raw request, then [`compute`] it
pub fn compute_request(request: &UnitRequest, settings: &CuttingSettings) -> CalcResult<CalculationResult> {
    let spec = request.validate().inspect_err(|e| {
        warn!(unit_type = %request.unit_type, code = e.error_code(), "rejected unit request");
    })?;
    compute(&spec, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::settings::AssemblyMethod;
    use crate::unit::{DoorType, UnitFamily};

    /// A request every unit type can be computed from
    fn workable_request(unit_type: UnitType) -> UnitRequest {
        let (w, h, d) = match unit_type.family() {
            UnitFamily::Tall => (60.0, 220.0, 58.0),
            UnitFamily::Wall => (80.0, 90.0, 32.0),
            _ => (90.0, 82.0, 58.0),
        };
        UnitRequest {
            drawer_count: 2,
            fixed_part_cm: 20.0,
            flip_door_height_cm: 35.0,
            bottom_door_height_cm: 80.0,
            ..UnitRequest::new(unit_type.tag(), w, h, d)
        }
    }

    #[test]
    fn test_every_unit_type_has_a_recipe() {
        let settings = CuttingSettings::default();
        for unit_type in UnitType::ALL {
            let result = compute_request(&workable_request(unit_type), &settings)
                .unwrap_or_else(|e| panic!("{unit_type}: {e}"));
            assert!(!result.parts.is_empty(), "{unit_type} produced no parts");
            assert!(
                result.parts.iter().all(|p| p.width_cm > 0.0 && p.height_cm > 0.0),
                "{unit_type} produced a degenerate part"
            );
        }
    }

    #[test]
    fn test_every_unit_type_under_full_base() {
        let settings = CuttingSettings {
            assembly_method: AssemblyMethod::BaseFullTopSidesBackRouted,
            ..Default::default()
        };
        for unit_type in UnitType::ALL {
            let request = UnitRequest {
                door_type: DoorType::Flip,
                ..workable_request(unit_type)
            };
            assert!(compute_request(&request, &settings).is_ok(), "{unit_type}");
        }
    }

    #[test]
    fn test_area_total_matches_parts() {
        let settings = CuttingSettings::default();
        for unit_type in UnitType::ALL {
            let result = compute_request(&workable_request(unit_type), &settings).unwrap();
            let sum: f64 = result.parts.iter().map(|p| p.area_m2).sum();
            assert!((sum - result.total_area_m2).abs() < 1e-9, "{unit_type}");
            assert!(result.parts.iter().all(Part::is_consistent), "{unit_type}");
        }
    }

    #[test]
    fn test_side_height_follows_assembly_method() {
        let full_base = CuttingSettings {
            assembly_method: AssemblyMethod::BaseFullTopSidesBackRouted,
            ..Default::default()
        };
        let cases = [
            (UnitType::Ground, 82.0 - 1.8),
            (UnitType::Drawers, 82.0 - 1.8),
            (UnitType::TallDoors, 220.0 - 3.6),
        ];
        for (unit_type, expected) in cases {
            let request = workable_request(unit_type);

            let sides = compute_request(&request, &CuttingSettings::default()).unwrap();
            assert_eq!(sides.part("side_panel").unwrap().height_cm, request.height_cm);

            let inset = compute_request(&request, &full_base).unwrap();
            assert!((inset.part("side_panel").unwrap().height_cm - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_side_panel_variants_append_one_panel() {
        let settings = CuttingSettings::default();
        for unit_type in UnitType::ALL.into_iter().filter(|t| t.has_side_panel()) {
            let with = compute_request(&workable_request(unit_type), &settings).unwrap();
            let without = compute_request(&workable_request(unit_type.base_type()), &settings).unwrap();
            assert_eq!(with.parts.len(), without.parts.len() + 1, "{unit_type}");
            let last = with.parts.last().unwrap();
            assert_eq!(last.name, "decorative_side_panel");
            assert_eq!(last.qty, 1);
        }
    }

    #[test]
    fn test_corner_l_wall_secondary_axis_defaults() {
        let request = UnitRequest {
            width_2_cm: 0.0,
            depth_2_cm: 35.0,
            ..UnitRequest::new("corner_l_wall", 60.0, 70.0, 30.0)
        };
        let result = compute_request(&request, &CuttingSettings::default()).unwrap();
        let base = result.part("base").unwrap();
        assert!((base.width_cm - 58.2).abs() < 1e-6);
        assert!((base.height_cm - 33.2).abs() < 1e-6);
    }

    #[test]
    fn test_wardrobe_matches_tall_wooden_base() {
        let settings = CuttingSettings::default();
        let tall = compute_request(&workable_request(UnitType::TallWoodenBase), &settings).unwrap();
        let wardrobe = compute_request(&workable_request(UnitType::WardrobeWoodenBase), &settings).unwrap();
        assert_eq!(tall.parts, wardrobe.parts);
        assert_eq!(wardrobe.unit_type, UnitType::WardrobeWoodenBase);
    }

    #[test]
    fn test_unsupported_unit_type() {
        let request = UnitRequest::new("corner_135_wall", 60.0, 70.0, 30.0);
        let err = compute_request(&request, &CuttingSettings::default()).unwrap_err();
        assert_eq!(err, CalcError::unsupported_unit_type("corner_135_wall"));
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = CuttingSettings {
            board_thickness_cm: 0.0,
            ..Default::default()
        };
        let err = compute_request(&UnitRequest::new("wall", 60.0, 70.0, 30.0), &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_undersized_unit_is_degenerate() {
        let request = UnitRequest {
            drawer_count: 3,
            ..UnitRequest::new("drawers", 60.0, 1.0, 56.0)
        };
        let err = compute_request(&request, &CuttingSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_PART");
    }

    #[test]
    fn test_result_echoes_request() {
        let request = UnitRequest {
            shelf_count: 3,
            ..UnitRequest::new("wall", 80.0, 70.0, 30.0)
        };
        let result = compute_request(&request, &CuttingSettings::default()).unwrap();
        assert_eq!(result.unit_type, UnitType::Wall);
        assert_eq!(result.width_cm, 80.0);
        assert_eq!(result.shelf_count, 3);
        assert!(result.total_cost.is_none());
        assert_eq!(result.material_usage.len(), 2);
    }
}
