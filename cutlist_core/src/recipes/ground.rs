//! Floor-standing door cabinets: ground, sink and their fixed-part variants.
//!
//! A sink unit is a ground unit with a triple front rail and no back rail or
//! back panel (the plumbing needs the opening).

use super::common::{back_panel, fillers, fixed_doors, fixed_part, ground_carcass, shelves};
use super::{Qty, Recipe, Step};

/// Doors sized to the unit height less handle and floor clearance
pub fn ground_doors() -> Step {
    Step::new("door", |c| c.door_width(), |c| {
        Ok(c.h() - c.handle() - c.settings.ground_door_height_deduction_no_edge_cm)
    })
    .qty(Qty::Doors)
}

pub fn ground() -> Recipe {
    Recipe::new(ground_carcass(1, true)).then([shelves(), back_panel(), ground_doors()])
}

pub fn sink() -> Recipe {
    Recipe::new(ground_carcass(3, false)).then([shelves(), ground_doors()])
}

pub fn ground_fixed() -> Recipe {
    Recipe::new(ground_carcass(1, true))
        .then([shelves()])
        .then(fixed_part())
        .then([back_panel(), fixed_doors(), fillers()])
}

pub fn sink_fixed() -> Recipe {
    Recipe::new(ground_carcass(3, false))
        .then([shelves()])
        .then(fixed_part())
        .then([fixed_doors(), fillers()])
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::settings::{AssemblyMethod, CuttingSettings};
    use crate::unit::UnitRequest;

    fn scenario_a() -> UnitRequest {
        UnitRequest {
            shelf_count: 1,
            door_count: 1,
            ..UnitRequest::new("ground", 60.0, 72.0, 30.0)
        }
    }

    #[test]
    fn test_ground_full_sides() {
        let parts = run(ground(), scenario_a(), &CuttingSettings::default());

        let base = find(&parts, "base");
        assert_eq!(base.width_cm, 30.0);
        approx(base.height_cm, 56.4);

        let sides = find(&parts, "side_panel");
        assert_eq!(sides.qty, 2);
        assert_eq!(sides.width_cm, 30.0);
        assert_eq!(sides.height_cm, 72.0);

        let door = find(&parts, "door");
        assert_eq!(door.qty, 1);
        approx(door.width_cm, 59.6);
        approx(door.height_cm, 71.6);

        let shelf = find(&parts, "shelf");
        approx(shelf.width_cm, 28.0);
        approx(shelf.height_cm, 56.4);
    }

    #[test]
    fn test_ground_full_base() {
        let settings = CuttingSettings {
            assembly_method: AssemblyMethod::BaseFullTopSidesBackRouted,
            ..Default::default()
        };
        let parts = run(ground(), scenario_a(), &settings);

        assert_eq!(find(&parts, "base").height_cm, 60.0);
        approx(find(&parts, "side_panel").height_cm, 70.2);
        // rails always sit between the sides
        approx(find(&parts, "front_mirror").height_cm, 56.4);
    }

    #[test]
    fn test_ground_part_order() {
        assert_eq!(
            ground().roles(),
            vec!["base", "front_mirror", "back_mirror", "side_panel", "shelf", "back_panel", "door"]
        );
    }

    #[test]
    fn test_sink_has_no_back() {
        let parts = run(sink(), UnitRequest::new("sink", 80.0, 72.0, 56.0), &CuttingSettings::default());
        assert!(parts.iter().all(|p| p.name != "back_panel" && p.name != "back_mirror"));
        assert_eq!(find(&parts, "front_mirror").qty, 3);
        assert_eq!(find(&parts, "door").qty, 2);
    }

    #[test]
    fn test_hinged_widths_cover_unit() {
        let settings = CuttingSettings::default();
        for doors in 1..=4 {
            let request = UnitRequest {
                door_count: doors,
                ..UnitRequest::new("ground", 90.0, 72.0, 56.0)
            };
            let parts = run(ground(), request, &settings);
            let door = find(&parts, "door");
            let covered = (door.width_cm + settings.door_width_deduction_no_edge_cm) * door.qty as f64;
            assert!((covered - 90.0).abs() < 0.01 * doors as f64);
        }
    }

    #[test]
    fn test_no_doors_no_door_part() {
        let request = UnitRequest {
            door_count: 0,
            shelf_count: 0,
            ..UnitRequest::new("ground", 60.0, 72.0, 56.0)
        };
        let parts = run(ground(), request, &CuttingSettings::default());
        assert!(parts.iter().all(|p| p.name != "door" && p.name != "shelf"));
    }

    #[test]
    fn test_ground_fixed() {
        let request = UnitRequest {
            fixed_part_cm: 15.0,
            door_count: 1,
            ..UnitRequest::new("ground_fixed", 60.0, 72.0, 56.0)
        };
        let parts = run(ground_fixed(), request, &CuttingSettings::default());

        approx(find(&parts, "fixed_part").width_cm, 10.5);
        approx(find(&parts, "detailed_installation_mirror").height_cm, 68.4);
        // (60 - 15 - 3) / 1 - 0.4
        approx(find(&parts, "door").width_cm, 41.6);
        approx(find(&parts, "door").height_cm, 72.0);
        assert_eq!(find(&parts, "filler").qty, 2);
        assert!(parts.iter().any(|p| p.name == "back_panel"));
    }

    #[test]
    fn test_sink_fixed_has_no_back() {
        let request = UnitRequest {
            fixed_part_cm: 15.0,
            ..UnitRequest::new("sink_fixed", 90.0, 72.0, 56.0)
        };
        let parts = run(sink_fixed(), request, &CuttingSettings::default());
        assert!(parts.iter().all(|p| p.name != "back_panel"));
        assert_eq!(find(&parts, "front_mirror").qty, 3);
    }
}
