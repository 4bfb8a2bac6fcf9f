//! # Cutting Settings
//!
//! A shop's cutting settings: board thickness, rail width, router geometry
//! and every deduction a recipe subtracts from a raw dimension. A settings
//! value is loaded once (see [`crate::file_io::load_settings`]) and passed by
//! reference into each calculation; nothing in the engine mutates it.
//!
//! Every field has a documented default, so a partial JSON file is valid:
//!
//! ```rust
//! use cutlist_core::settings::{AssemblyMethod, CuttingSettings};
//!
//! let settings: CuttingSettings =
//!     serde_json::from_str(r#"{ "assembly_method": "base_full_top_sides_back_routed" }"#).unwrap();
//!
//! assert_eq!(settings.assembly_method, AssemblyMethod::BaseFullTopSidesBackRouted);
//! assert_eq!(settings.board_thickness_cm, 1.8);
//! assert_eq!(settings.mirror_width_cm, 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default thickness of the carcass board in centimeters
pub const DEFAULT_BOARD_THICKNESS_CM: f64 = 1.8;

/// Default width of front/back rails in centimeters
pub const DEFAULT_MIRROR_WIDTH_CM: f64 = 10.0;

// ============================================================================
// Assembly Method
// ============================================================================

/// How the carcass members meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyMethod {
    /// Base and top run the full outer width; sides sit between them.
    BaseFullTopSidesBackRouted,
    /// Sides run the full outer height; base and top sit between them.
    #[default]
    FullSides,
}

impl AssemblyMethod {
    /// All assembly methods
    pub const ALL: [AssemblyMethod; 2] = [
        AssemblyMethod::BaseFullTopSidesBackRouted,
        AssemblyMethod::FullSides,
    ];

    /// True when base/top panels span the full outer width
    pub fn is_full_base(&self) -> bool {
        matches!(self, AssemblyMethod::BaseFullTopSidesBackRouted)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AssemblyMethod::BaseFullTopSidesBackRouted => "Full base, routed back",
            AssemblyMethod::FullSides => "Full-height sides",
        }
    }
}

impl std::fmt::Display for AssemblyMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Cutting Settings
// ============================================================================

/// Shop-wide cutting settings. All lengths in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuttingSettings {
    /// Nominal thickness of the carcass board
    pub board_thickness_cm: f64,

    pub assembly_method: AssemblyMethod,

    /// Width of the front/back rail strips ("mirrors")
    pub mirror_width_cm: f64,

    /// Distance from the back edge to the routed groove
    pub router_distance_cm: f64,

    /// Groove depth; also the nominal thickness of back panels
    pub router_thickness_cm: f64,

    /// Subtracted from width and height of back panels and drawer bottoms
    pub back_deduction_cm: f64,

    /// Subtracted from the depth of regular shelves
    pub shelf_depth_deduction_cm: f64,

    /// Subtracted from each door/front width (unbanded door stock)
    pub door_width_deduction_no_edge_cm: f64,

    /// Subtracted from the height of floor-standing doors
    pub ground_door_height_deduction_no_edge_cm: f64,

    /// Height of the handle profile cut off every front
    pub handle_profile_height_cm: f64,

    /// Depth lost by the wall-unit top to the handle channel
    pub chassis_handle_drop_cm: f64,

    /// Fixed shop clearances used by individual recipes
    pub clearances: Clearances,
}

impl Default for CuttingSettings {
    fn default() -> Self {
        CuttingSettings {
            board_thickness_cm: DEFAULT_BOARD_THICKNESS_CM,
            assembly_method: AssemblyMethod::default(),
            mirror_width_cm: DEFAULT_MIRROR_WIDTH_CM,
            router_distance_cm: 1.6,
            router_thickness_cm: 0.3,
            back_deduction_cm: 0.4,
            shelf_depth_deduction_cm: 2.0,
            door_width_deduction_no_edge_cm: 0.4,
            ground_door_height_deduction_no_edge_cm: 0.4,
            handle_profile_height_cm: 0.0,
            chassis_handle_drop_cm: 2.0,
            clearances: Clearances::default(),
        }
    }
}

impl CuttingSettings {
    /// Validate settings.
    ///
    /// Board thickness and rail width must be positive; every deduction must
    /// be a finite, non-negative number.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("board_thickness_cm", self.board_thickness_cm)?;
        require_positive("mirror_width_cm", self.mirror_width_cm)?;

        for (field, value) in self.deductions() {
            require_non_negative(field, value)?;
        }

        self.clearances.validate()
    }

    /// Router distance plus groove depth: how far a routed back sits in
    /// from the carcass back edge.
    pub fn routed_back_offset_cm(&self) -> f64 {
        self.router_distance_cm + self.router_thickness_cm
    }

    fn deductions(&self) -> [(&'static str, f64); 8] {
        [
            ("router_distance_cm", self.router_distance_cm),
            ("router_thickness_cm", self.router_thickness_cm),
            ("back_deduction_cm", self.back_deduction_cm),
            ("shelf_depth_deduction_cm", self.shelf_depth_deduction_cm),
            ("door_width_deduction_no_edge_cm", self.door_width_deduction_no_edge_cm),
            (
                "ground_door_height_deduction_no_edge_cm",
                self.ground_door_height_deduction_no_edge_cm,
            ),
            ("handle_profile_height_cm", self.handle_profile_height_cm),
            ("chassis_handle_drop_cm", self.chassis_handle_drop_cm),
        ]
    }
}

// ============================================================================
// Clearances
// ============================================================================

/// Shop constants baked into individual recipes.
///
/// Each one is its own field so a shop can override a single gap without
/// touching the others. Defaults reproduce the standard workshop values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clearances {
    /// Gap under flip doors and stacked drawer fronts
    pub flip_gap_cm: f64,
    /// Gap under three-drawer fronts and tall-unit flip top doors
    pub front_gap_cm: f64,
    /// Gap above hinged top doors of side-drawer tall units
    pub hinged_top_gap_cm: f64,
    /// Gap above hinged top doors of appliance tall units
    pub appliance_door_gap_cm: f64,
    /// Extra depth taken off shelves that sit in front of a routed back
    pub shelf_clearance_cm: f64,
    /// Extra depth taken off the microwave shelf
    pub microwave_shelf_clearance_cm: f64,
    /// Width lost to side-mounted drawer slides
    pub drawer_slide_allowance_cm: f64,
    /// Depth lost between drawer box and carcass
    pub drawer_depth_allowance_cm: f64,
    /// Width lost by a bottom-rail drawer box strip
    pub bottom_rail_box_allowance_cm: f64,
    /// Width lost by a bottom-rail drawer floor
    pub bottom_rail_floor_allowance_cm: f64,
    /// Depth lost by drawer floors on multi-drawer units
    pub drawer_floor_depth_allowance_cm: f64,
    /// Taken off the fixed part to size the fixed panel
    pub fixed_part_allowance_cm: f64,
    /// Taken off the door span beside a fixed part
    pub fixed_door_allowance_cm: f64,
    /// Taken off the first corner door
    pub corner_door_allowance_cm: f64,
    /// Taken off the second (flip) corner door
    pub corner_flip_allowance_cm: f64,
    /// Taken off the second corner back panel
    pub corner_back_allowance_cm: f64,
    /// Appliance clearance; also the vent-door and wall-flip deduction
    pub appliance_gap_cm: f64,
    /// Taken off vent panels on drawer/appliance tall units
    pub vent_panel_gap_cm: f64,
    /// Depth of the drawer box under a built-in oven
    pub built_in_oven_box_depth_cm: f64,
    /// Height of small drawer box strips
    pub small_drawer_box_height_cm: f64,
    /// Unit height not available to large drawer boxes
    pub large_drawer_reserve_cm: f64,
    /// Height of a small drawer front before the handle profile
    pub small_front_height_cm: f64,
    /// Front zone taken by one small drawer
    pub small_front_zone_cm: f64,
    /// Front zone taken by two small drawers
    pub two_small_zone_cm: f64,
    /// Width taken off the base of wooden-base units
    pub wooden_base_inset_cm: f64,
}

impl Default for Clearances {
    fn default() -> Self {
        Clearances {
            flip_gap_cm: 0.5,
            front_gap_cm: 0.4,
            hinged_top_gap_cm: 0.3,
            appliance_door_gap_cm: 0.2,
            shelf_clearance_cm: 0.2,
            microwave_shelf_clearance_cm: 0.1,
            drawer_slide_allowance_cm: 2.6,
            drawer_depth_allowance_cm: 8.0,
            bottom_rail_box_allowance_cm: 8.4,
            bottom_rail_floor_allowance_cm: 6.4,
            drawer_floor_depth_allowance_cm: 10.0,
            fixed_part_allowance_cm: 4.5,
            fixed_door_allowance_cm: 3.0,
            corner_door_allowance_cm: 2.3,
            corner_flip_allowance_cm: 1.2,
            corner_back_allowance_cm: 5.0,
            appliance_gap_cm: 2.0,
            vent_panel_gap_cm: 0.2,
            built_in_oven_box_depth_cm: 40.0,
            small_drawer_box_height_cm: 12.0,
            large_drawer_reserve_cm: 46.0,
            small_front_height_cm: 19.6,
            small_front_zone_cm: 20.0,
            two_small_zone_cm: 40.0,
            wooden_base_inset_cm: 0.2,
        }
    }
}

impl Clearances {
    /// Every clearance must be finite and non-negative; the oven box depth
    /// and small box height must be positive.
    pub fn validate(&self) -> CalcResult<()> {
        let values = [
            ("flip_gap_cm", self.flip_gap_cm),
            ("front_gap_cm", self.front_gap_cm),
            ("hinged_top_gap_cm", self.hinged_top_gap_cm),
            ("appliance_door_gap_cm", self.appliance_door_gap_cm),
            ("shelf_clearance_cm", self.shelf_clearance_cm),
            ("microwave_shelf_clearance_cm", self.microwave_shelf_clearance_cm),
            ("drawer_slide_allowance_cm", self.drawer_slide_allowance_cm),
            ("drawer_depth_allowance_cm", self.drawer_depth_allowance_cm),
            ("bottom_rail_box_allowance_cm", self.bottom_rail_box_allowance_cm),
            ("bottom_rail_floor_allowance_cm", self.bottom_rail_floor_allowance_cm),
            ("drawer_floor_depth_allowance_cm", self.drawer_floor_depth_allowance_cm),
            ("fixed_part_allowance_cm", self.fixed_part_allowance_cm),
            ("fixed_door_allowance_cm", self.fixed_door_allowance_cm),
            ("corner_door_allowance_cm", self.corner_door_allowance_cm),
            ("corner_flip_allowance_cm", self.corner_flip_allowance_cm),
            ("corner_back_allowance_cm", self.corner_back_allowance_cm),
            ("appliance_gap_cm", self.appliance_gap_cm),
            ("vent_panel_gap_cm", self.vent_panel_gap_cm),
            ("large_drawer_reserve_cm", self.large_drawer_reserve_cm),
            ("small_front_height_cm", self.small_front_height_cm),
            ("small_front_zone_cm", self.small_front_zone_cm),
            ("two_small_zone_cm", self.two_small_zone_cm),
            ("wooden_base_inset_cm", self.wooden_base_inset_cm),
        ];
        for (field, value) in values {
            require_non_negative(field, value)?;
        }
        require_positive("built_in_oven_box_depth_cm", self.built_in_oven_box_depth_cm)?;
        require_positive("small_drawer_box_height_cm", self.small_drawer_box_height_cm)
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive length"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Deduction must not be negative"));
    }
    Ok(())
}
