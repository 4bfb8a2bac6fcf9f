//! # Unit Specification
//!
//! The input side of a calculation. A [`UnitRequest`] is the raw,
//! JSON-friendly request a caller sends (unit type as a string tag, counts as
//! plain integers, every optional length defaulted). [`UnitRequest::validate`]
//! turns it into a [`UnitSpec`]: a closed [`UnitType`], non-negative counts and
//! the per-type required lengths checked once, before any recipe runs.
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::unit::{DoorType, UnitRequest, UnitType};
//!
//! let request = UnitRequest {
//!     door_count: 2,
//!     door_type: DoorType::Flip,
//!     ..UnitRequest::new("wall", 80.0, 70.0, 30.0)
//! };
//!
//! let spec = request.validate().unwrap();
//! assert_eq!(spec.unit_type, UnitType::Wall);
//! assert_eq!(spec.door_count, 2);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{corner_dual_axis, CornerGeometry};

// ============================================================================
// Unit Type
// ============================================================================

/// Every cabinet type the engine can cut.
///
/// Serialized as its snake_case tag (see [`UnitType::tag`]); an unknown tag
/// fails with [`CalcError::UnsupportedUnitType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum UnitType {
    Ground,
    GroundSidePanel,
    GroundFixed,
    GroundFixedSidePanel,
    Sink,
    SinkSidePanel,
    SinkFixed,
    SinkFixedSidePanel,
    Drawers,
    DrawersSidePanel,
    DrawersBottomRail,
    DrawersBottomRailSidePanel,
    Corner90Ground,
    Corner45Ground,
    Wall,
    WallSidePanel,
    WallFixed,
    WallFixedSidePanel,
    WallFlipTopDoorsBottom,
    DishRack,
    DishRackSidePanel,
    CornerLWall,
    Corner45Wall,
    WallMicrowave,
    WallMicrowaveSidePanel,
    TallDoors,
    TallDoorsSidePanel,
    TallDoorsAppliances,
    TallDoorsAppliancesSidePanel,
    TallDrawersSideDoorsTop,
    TallDrawersSideDoorsTopSidePanel,
    TallDrawersBottomDoorsTop,
    TallDrawersBottomDoorsTopSidePanel,
    TallDrawersSideAppliancesDoors,
    TallDrawersSideAppliancesDoorsSidePanel,
    TallDrawersBottomAppliancesDoorsTop,
    TallDrawersBottomAppliancesDoorsTopSidePanel,
    TallWoodenBase,
    TallDrawersBottomRailTopDoors,
    ThreeTurbo,
    DrawerBuiltInOven,
    DrawerBottomRailBuiltInOven,
    TwoSmall20OneLargeSide,
    TwoSmall20OneLargeBottom,
    OneSmall16TwoLargeSide,
    OneSmall16TwoLargeBottom,
    SideFlush,
    WardrobeWoodenBase,
}

/// Coarse grouping of unit types, used for listings and carcass rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    /// Floor-standing cabinets with doors (ground, sink, fixed variants)
    Ground,
    /// Floor-standing drawer cabinets
    Drawer,
    /// Wall-hung cabinets
    Wall,
    /// Two-axis corner cabinets
    Corner,
    /// Full-height cabinets
    Tall,
    /// Loose panels
    Panel,
}

static TAG_LOOKUP: Lazy<HashMap<&'static str, UnitType>> =
    Lazy::new(|| UnitType::ALL.iter().map(|t| (t.tag(), *t)).collect());

impl UnitType {
    /// All unit types, in catalogue order
    pub const ALL: [UnitType; 48] = [
        UnitType::Ground,
        UnitType::GroundSidePanel,
        UnitType::GroundFixed,
        UnitType::GroundFixedSidePanel,
        UnitType::Sink,
        UnitType::SinkSidePanel,
        UnitType::SinkFixed,
        UnitType::SinkFixedSidePanel,
        UnitType::Drawers,
        UnitType::DrawersSidePanel,
        UnitType::DrawersBottomRail,
        UnitType::DrawersBottomRailSidePanel,
        UnitType::Corner90Ground,
        UnitType::Corner45Ground,
        UnitType::Wall,
        UnitType::WallSidePanel,
        UnitType::WallFixed,
        UnitType::WallFixedSidePanel,
        UnitType::WallFlipTopDoorsBottom,
        UnitType::DishRack,
        UnitType::DishRackSidePanel,
        UnitType::CornerLWall,
        UnitType::Corner45Wall,
        UnitType::WallMicrowave,
        UnitType::WallMicrowaveSidePanel,
        UnitType::TallDoors,
        UnitType::TallDoorsSidePanel,
        UnitType::TallDoorsAppliances,
        UnitType::TallDoorsAppliancesSidePanel,
        UnitType::TallDrawersSideDoorsTop,
        UnitType::TallDrawersSideDoorsTopSidePanel,
        UnitType::TallDrawersBottomDoorsTop,
        UnitType::TallDrawersBottomDoorsTopSidePanel,
        UnitType::TallDrawersSideAppliancesDoors,
        UnitType::TallDrawersSideAppliancesDoorsSidePanel,
        UnitType::TallDrawersBottomAppliancesDoorsTop,
        UnitType::TallDrawersBottomAppliancesDoorsTopSidePanel,
        UnitType::TallWoodenBase,
        UnitType::TallDrawersBottomRailTopDoors,
        UnitType::ThreeTurbo,
        UnitType::DrawerBuiltInOven,
        UnitType::DrawerBottomRailBuiltInOven,
        UnitType::TwoSmall20OneLargeSide,
        UnitType::TwoSmall20OneLargeBottom,
        UnitType::OneSmall16TwoLargeSide,
        UnitType::OneSmall16TwoLargeBottom,
        UnitType::SideFlush,
        UnitType::WardrobeWoodenBase,
    ];

    /// Wire tag (e.g. `"tall_doors_appliances"`)
    pub fn tag(&self) -> &'static str {
        match self {
            UnitType::Ground => "ground",
            UnitType::GroundSidePanel => "ground_side_panel",
            UnitType::GroundFixed => "ground_fixed",
            UnitType::GroundFixedSidePanel => "ground_fixed_side_panel",
            UnitType::Sink => "sink",
            UnitType::SinkSidePanel => "sink_side_panel",
            UnitType::SinkFixed => "sink_fixed",
            UnitType::SinkFixedSidePanel => "sink_fixed_side_panel",
            UnitType::Drawers => "drawers",
            UnitType::DrawersSidePanel => "drawers_side_panel",
            UnitType::DrawersBottomRail => "drawers_bottom_rail",
            UnitType::DrawersBottomRailSidePanel => "drawers_bottom_rail_side_panel",
            UnitType::Corner90Ground => "corner_90_ground",
            UnitType::Corner45Ground => "corner_45_ground",
            UnitType::Wall => "wall",
            UnitType::WallSidePanel => "wall_side_panel",
            UnitType::WallFixed => "wall_fixed",
            UnitType::WallFixedSidePanel => "wall_fixed_side_panel",
            UnitType::WallFlipTopDoorsBottom => "wall_flip_top_doors_bottom",
            UnitType::DishRack => "dish_rack",
            UnitType::DishRackSidePanel => "dish_rack_side_panel",
            UnitType::CornerLWall => "corner_l_wall",
            UnitType::Corner45Wall => "corner_45_wall",
            UnitType::WallMicrowave => "wall_microwave",
            UnitType::WallMicrowaveSidePanel => "wall_microwave_side_panel",
            UnitType::TallDoors => "tall_doors",
            UnitType::TallDoorsSidePanel => "tall_doors_side_panel",
            UnitType::TallDoorsAppliances => "tall_doors_appliances",
            UnitType::TallDoorsAppliancesSidePanel => "tall_doors_appliances_side_panel",
            UnitType::TallDrawersSideDoorsTop => "tall_drawers_side_doors_top",
            UnitType::TallDrawersSideDoorsTopSidePanel => "tall_drawers_side_doors_top_side_panel",
            UnitType::TallDrawersBottomDoorsTop => "tall_drawers_bottom_doors_top",
            UnitType::TallDrawersBottomDoorsTopSidePanel => "tall_drawers_bottom_doors_top_side_panel",
            UnitType::TallDrawersSideAppliancesDoors => "tall_drawers_side_appliances_doors",
            UnitType::TallDrawersSideAppliancesDoorsSidePanel => {
                "tall_drawers_side_appliances_doors_side_panel"
            }
            UnitType::TallDrawersBottomAppliancesDoorsTop => "tall_drawers_bottom_appliances_doors_top",
            UnitType::TallDrawersBottomAppliancesDoorsTopSidePanel => {
                "tall_drawers_bottom_appliances_doors_top_side_panel"
            }
            UnitType::TallWoodenBase => "tall_wooden_base",
            UnitType::TallDrawersBottomRailTopDoors => "tall_drawers_bottom_rail_top_doors",
            UnitType::ThreeTurbo => "three_turbo",
            UnitType::DrawerBuiltInOven => "drawer_built_in_oven",
            UnitType::DrawerBottomRailBuiltInOven => "drawer_bottom_rail_built_in_oven",
            UnitType::TwoSmall20OneLargeSide => "two_small_20_one_large_side",
            UnitType::TwoSmall20OneLargeBottom => "two_small_20_one_large_bottom",
            UnitType::OneSmall16TwoLargeSide => "one_small_16_two_large_side",
            UnitType::OneSmall16TwoLargeBottom => "one_small_16_two_large_bottom",
            UnitType::SideFlush => "side_flush",
            UnitType::WardrobeWoodenBase => "wardrobe_wooden_base",
        }
    }

    /// Parse a wire tag. Matching is exact: no trimming or case folding.
    ///
    /// ```rust
    /// use cutlist_core::unit::UnitType;
    ///
    /// assert_eq!(UnitType::from_tag("corner_l_wall").unwrap(), UnitType::CornerLWall);
    /// assert!(UnitType::from_tag("pantry").is_err());
    /// assert!(UnitType::from_tag(" wall ").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> CalcResult<UnitType> {
        TAG_LOOKUP
            .get(tag)
            .copied()
            .ok_or_else(|| CalcError::unsupported_unit_type(tag))
    }

    /// The same cabinet without the decorative side panel.
    ///
    /// Returns `self` for types that have no side-panel variant.
    pub fn base_type(&self) -> UnitType {
        match self {
            UnitType::GroundSidePanel => UnitType::Ground,
            UnitType::GroundFixedSidePanel => UnitType::GroundFixed,
            UnitType::SinkSidePanel => UnitType::Sink,
            UnitType::SinkFixedSidePanel => UnitType::SinkFixed,
            UnitType::DrawersSidePanel => UnitType::Drawers,
            UnitType::DrawersBottomRailSidePanel => UnitType::DrawersBottomRail,
            UnitType::WallSidePanel => UnitType::Wall,
            UnitType::WallFixedSidePanel => UnitType::WallFixed,
            UnitType::DishRackSidePanel => UnitType::DishRack,
            UnitType::WallMicrowaveSidePanel => UnitType::WallMicrowave,
            UnitType::TallDoorsSidePanel => UnitType::TallDoors,
            UnitType::TallDoorsAppliancesSidePanel => UnitType::TallDoorsAppliances,
            UnitType::TallDrawersSideDoorsTopSidePanel => UnitType::TallDrawersSideDoorsTop,
            UnitType::TallDrawersBottomDoorsTopSidePanel => UnitType::TallDrawersBottomDoorsTop,
            UnitType::TallDrawersSideAppliancesDoorsSidePanel => UnitType::TallDrawersSideAppliancesDoors,
            UnitType::TallDrawersBottomAppliancesDoorsTopSidePanel => {
                UnitType::TallDrawersBottomAppliancesDoorsTop
            }
            other => *other,
        }
    }

    /// True for the `*_side_panel` variants
    pub fn has_side_panel(&self) -> bool {
        self.base_type() != *self
    }

    /// Family this type belongs to
    pub fn family(&self) -> UnitFamily {
        match self.base_type() {
            UnitType::Ground | UnitType::GroundFixed | UnitType::Sink | UnitType::SinkFixed => UnitFamily::Ground,
            UnitType::Drawers
            | UnitType::DrawersBottomRail
            | UnitType::ThreeTurbo
            | UnitType::DrawerBuiltInOven
            | UnitType::DrawerBottomRailBuiltInOven
            | UnitType::TwoSmall20OneLargeSide
            | UnitType::TwoSmall20OneLargeBottom
            | UnitType::OneSmall16TwoLargeSide
            | UnitType::OneSmall16TwoLargeBottom => UnitFamily::Drawer,
            UnitType::Wall
            | UnitType::WallFixed
            | UnitType::WallFlipTopDoorsBottom
            | UnitType::DishRack
            | UnitType::WallMicrowave => UnitFamily::Wall,
            UnitType::Corner90Ground | UnitType::Corner45Ground | UnitType::CornerLWall | UnitType::Corner45Wall => {
                UnitFamily::Corner
            }
            UnitType::SideFlush => UnitFamily::Panel,
            _ => UnitFamily::Tall,
        }
    }

    /// Fixed-part units need `fixed_part_cm`
    pub fn requires_fixed_part(&self) -> bool {
        matches!(
            self.base_type(),
            UnitType::GroundFixed | UnitType::SinkFixed | UnitType::WallFixed
        )
    }

    /// Units whose lower door or drawer zone is sized by `bottom_door_height_cm`
    pub fn requires_bottom_door_height(&self) -> bool {
        self.family() == UnitFamily::Tall
            && !matches!(self.base_type(), UnitType::TallWoodenBase | UnitType::WardrobeWoodenBase)
    }

    /// Units with a lift-up door sized by `flip_door_height_cm`
    pub fn requires_flip_door_height(&self) -> bool {
        matches!(self, UnitType::WallFlipTopDoorsBottom)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitType::Ground => "Ground unit",
            UnitType::GroundSidePanel => "Ground unit with side panel",
            UnitType::GroundFixed => "Ground unit with fixed part",
            UnitType::GroundFixedSidePanel => "Ground unit with fixed part and side panel",
            UnitType::Sink => "Sink unit",
            UnitType::SinkSidePanel => "Sink unit with side panel",
            UnitType::SinkFixed => "Sink unit with fixed part",
            UnitType::SinkFixedSidePanel => "Sink unit with fixed part and side panel",
            UnitType::Drawers => "Drawer unit",
            UnitType::DrawersSidePanel => "Drawer unit with side panel",
            UnitType::DrawersBottomRail => "Drawer unit, bottom rail",
            UnitType::DrawersBottomRailSidePanel => "Drawer unit, bottom rail, with side panel",
            UnitType::Corner90Ground => "Corner ground unit 90",
            UnitType::Corner45Ground => "Corner ground unit 45",
            UnitType::Wall => "Wall unit",
            UnitType::WallSidePanel => "Wall unit with side panel",
            UnitType::WallFixed => "Wall unit with fixed part",
            UnitType::WallFixedSidePanel => "Wall unit with fixed part and side panel",
            UnitType::WallFlipTopDoorsBottom => "Wall unit, flip top, doors bottom",
            UnitType::DishRack => "Dish rack unit",
            UnitType::DishRackSidePanel => "Dish rack unit with side panel",
            UnitType::CornerLWall => "Corner wall unit L",
            UnitType::Corner45Wall => "Corner wall unit 45",
            UnitType::WallMicrowave => "Wall microwave unit",
            UnitType::WallMicrowaveSidePanel => "Wall microwave unit with side panel",
            UnitType::TallDoors => "Tall unit, doors",
            UnitType::TallDoorsSidePanel => "Tall unit, doors, with side panel",
            UnitType::TallDoorsAppliances => "Tall unit, doors and appliances",
            UnitType::TallDoorsAppliancesSidePanel => "Tall unit, doors and appliances, with side panel",
            UnitType::TallDrawersSideDoorsTop => "Tall unit, side drawers, top doors",
            UnitType::TallDrawersSideDoorsTopSidePanel => "Tall unit, side drawers, top doors, with side panel",
            UnitType::TallDrawersBottomDoorsTop => "Tall unit, bottom drawers, top doors",
            UnitType::TallDrawersBottomDoorsTopSidePanel => "Tall unit, bottom drawers, top doors, with side panel",
            UnitType::TallDrawersSideAppliancesDoors => "Tall unit, side drawers, appliances, doors",
            UnitType::TallDrawersSideAppliancesDoorsSidePanel => {
                "Tall unit, side drawers, appliances, doors, with side panel"
            }
            UnitType::TallDrawersBottomAppliancesDoorsTop => "Tall unit, bottom drawers, appliances, top doors",
            UnitType::TallDrawersBottomAppliancesDoorsTopSidePanel => {
                "Tall unit, bottom drawers, appliances, top doors, with side panel"
            }
            UnitType::TallWoodenBase => "Tall unit on wooden base",
            UnitType::TallDrawersBottomRailTopDoors => "Tall unit, bottom-rail drawers, top doors",
            UnitType::ThreeTurbo => "Three-drawer turbo unit",
            UnitType::DrawerBuiltInOven => "Built-in oven unit with drawer",
            UnitType::DrawerBottomRailBuiltInOven => "Built-in oven unit with bottom-rail drawer",
            UnitType::TwoSmall20OneLargeSide => "Two small (20) and one large drawer, side rail",
            UnitType::TwoSmall20OneLargeBottom => "Two small (20) and one large drawer, bottom rail",
            UnitType::OneSmall16TwoLargeSide => "One small (16) and two large drawers, side rail",
            UnitType::OneSmall16TwoLargeBottom => "One small (16) and two large drawers, bottom rail",
            UnitType::SideFlush => "Flush side panel",
            UnitType::WardrobeWoodenBase => "Wardrobe on wooden base",
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for UnitType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitType::from_tag(s)
    }
}

impl TryFrom<String> for UnitType {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UnitType::from_tag(&value)
    }
}

impl From<UnitType> for &'static str {
    fn from(value: UnitType) -> Self {
        value.tag()
    }
}

// ============================================================================
// Door Type
// ============================================================================

/// Side-hinged swing door or top-hinged lift-up door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorType {
    #[default]
    Hinged,
    Flip,
}

impl DoorType {
    pub const ALL: [DoorType; 2] = [DoorType::Hinged, DoorType::Flip];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DoorType::Hinged => "Hinged",
            DoorType::Flip => "Flip",
        }
    }
}

impl std::fmt::Display for DoorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for DoorType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hinged" => Ok(DoorType::Hinged),
            "flip" => Ok(DoorType::Flip),
            other => Err(CalcError::invalid_input("door_type", other, "Expected 'hinged' or 'flip'")),
        }
    }
}

// ============================================================================
// Unit Request (raw input)
// ============================================================================

fn default_shelf_count() -> i64 {
    2
}

fn default_door_count() -> i64 {
    2
}

fn default_oven_height() -> f64 {
    60.0
}

fn default_microwave_height() -> f64 {
    35.0
}

fn default_vent_height() -> f64 {
    10.0
}

fn default_drawer_height() -> f64 {
    20.0
}

/// Raw calculation request. All lengths in centimeters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "tall_doors_appliances",
///   "width_cm": 60.0,
///   "height_cm": 220.0,
///   "depth_cm": 58.0,
///   "door_type": "flip",
///   "bottom_door_height_cm": 78.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRequest {
    /// Unit type tag, parsed during validation
    #[serde(rename = "type")]
    pub unit_type: String,

    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,

    /// Secondary width for corner units (0 = same as `width_cm`)
    #[serde(default)]
    pub width_2_cm: f64,

    /// Secondary depth for corner units (0 = same as `depth_cm`)
    #[serde(default)]
    pub depth_2_cm: f64,

    #[serde(default = "default_shelf_count")]
    pub shelf_count: i64,

    #[serde(default = "default_door_count")]
    pub door_count: i64,

    #[serde(default)]
    pub door_type: DoorType,

    #[serde(default, alias = "flip_door_height")]
    pub flip_door_height_cm: f64,

    #[serde(default, alias = "bottom_door_height")]
    pub bottom_door_height_cm: f64,

    #[serde(default = "default_oven_height", alias = "oven_height")]
    pub oven_height_cm: f64,

    #[serde(default = "default_microwave_height", alias = "microwave_height")]
    pub microwave_height_cm: f64,

    #[serde(default = "default_vent_height", alias = "vent_height")]
    pub vent_height_cm: f64,

    #[serde(default)]
    pub drawer_count: i64,

    #[serde(default = "default_drawer_height")]
    pub drawer_height_cm: f64,

    #[serde(default)]
    pub fixed_part_cm: f64,
}

impl UnitRequest {
    /// Request with the given type and outer dimensions, everything else at
    /// its default.
    pub fn new(unit_type: impl Into<String>, width_cm: f64, height_cm: f64, depth_cm: f64) -> Self {
        UnitRequest {
            unit_type: unit_type.into(),
            width_cm,
            height_cm,
            depth_cm,
            width_2_cm: 0.0,
            depth_2_cm: 0.0,
            shelf_count: default_shelf_count(),
            door_count: default_door_count(),
            door_type: DoorType::default(),
            flip_door_height_cm: 0.0,
            bottom_door_height_cm: 0.0,
            oven_height_cm: default_oven_height(),
            microwave_height_cm: default_microwave_height(),
            vent_height_cm: default_vent_height(),
            drawer_count: 0,
            drawer_height_cm: default_drawer_height(),
            fixed_part_cm: 0.0,
        }
    }

    /// Validate the request and resolve it into a [`UnitSpec`].
    ///
    /// Checks, in order: outer dimensions, optional lengths, counts, the
    /// unit-type tag, then the lengths the selected type cannot do without.
    pub fn validate(&self) -> CalcResult<UnitSpec> {
        require_positive("width_cm", self.width_cm)?;
        require_positive("height_cm", self.height_cm)?;
        require_positive("depth_cm", self.depth_cm)?;
        require_positive("drawer_height_cm", self.drawer_height_cm)?;

        for (field, value) in [
            ("width_2_cm", self.width_2_cm),
            ("depth_2_cm", self.depth_2_cm),
            ("flip_door_height_cm", self.flip_door_height_cm),
            ("bottom_door_height_cm", self.bottom_door_height_cm),
            ("oven_height_cm", self.oven_height_cm),
            ("microwave_height_cm", self.microwave_height_cm),
            ("vent_height_cm", self.vent_height_cm),
            ("fixed_part_cm", self.fixed_part_cm),
        ] {
            require_non_negative(field, value)?;
        }

        let shelf_count = count("shelf_count", self.shelf_count)?;
        let door_count = count("door_count", self.door_count)?;
        let drawer_count = count("drawer_count", self.drawer_count)?;

        let unit_type = UnitType::from_tag(&self.unit_type)?;

        if unit_type.requires_fixed_part() {
            if self.fixed_part_cm == 0.0 {
                return Err(CalcError::missing_field("fixed_part_cm"));
            }
            if self.fixed_part_cm >= self.width_cm {
                return Err(CalcError::invalid_input(
                    "fixed_part_cm",
                    self.fixed_part_cm.to_string(),
                    "Fixed part must be narrower than the unit",
                ));
            }
        }
        if unit_type.requires_bottom_door_height() && self.bottom_door_height_cm == 0.0 {
            return Err(CalcError::missing_field("bottom_door_height_cm"));
        }
        if unit_type.requires_flip_door_height() && self.flip_door_height_cm == 0.0 {
            return Err(CalcError::missing_field("flip_door_height_cm"));
        }

        Ok(UnitSpec {
            unit_type,
            width_cm: self.width_cm,
            height_cm: self.height_cm,
            depth_cm: self.depth_cm,
            width_2_cm: self.width_2_cm,
            depth_2_cm: self.depth_2_cm,
            shelf_count,
            door_count,
            door_type: self.door_type,
            flip_door_height_cm: self.flip_door_height_cm,
            bottom_door_height_cm: self.bottom_door_height_cm,
            oven_height_cm: self.oven_height_cm,
            microwave_height_cm: self.microwave_height_cm,
            vent_height_cm: self.vent_height_cm,
            drawer_count,
            drawer_height_cm: self.drawer_height_cm,
            fixed_part_cm: self.fixed_part_cm,
        })
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must not be negative"));
    }
    Ok(())
}

fn count(field: &str, value: i64) -> CalcResult<u32> {
    u32::try_from(value)
        .map_err(|_| CalcError::invalid_input(field, value.to_string(), "Count must be a non-negative integer"))
}

// ============================================================================
// Unit Spec (validated input)
// ============================================================================

/// Validated unit specification, consumed read-only by one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub width_2_cm: f64,
    pub depth_2_cm: f64,
    pub shelf_count: u32,
    pub door_count: u32,
    pub door_type: DoorType,
    pub flip_door_height_cm: f64,
    pub bottom_door_height_cm: f64,
    pub oven_height_cm: f64,
    pub microwave_height_cm: f64,
    pub vent_height_cm: f64,
    pub drawer_count: u32,
    pub drawer_height_cm: f64,
    pub fixed_part_cm: f64,
}

impl UnitSpec {
    /// Both width/depth pairs of a corner unit, secondary pair defaulted
    /// to the primary one.
    pub fn corner(&self, board_thickness_cm: f64) -> CornerGeometry {
        corner_dual_axis(
            self.width_cm,
            self.width_2_cm,
            self.depth_cm,
            self.depth_2_cm,
            board_thickness_cm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tags_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for unit_type in UnitType::ALL {
            assert!(seen.insert(unit_type.tag()), "duplicate tag {}", unit_type.tag());
            assert_eq!(UnitType::from_tag(unit_type.tag()).unwrap(), unit_type);
        }
        assert_eq!(seen.len(), 48);
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = UnitType::from_tag("pantry").unwrap_err();
        assert_eq!(err, CalcError::unsupported_unit_type("pantry"));
    }

    #[test]
    fn test_tag_match_is_exact() {
        assert_eq!(UnitType::from_tag("wall").unwrap(), UnitType::Wall);
        for tag in [" wall", "wall ", "\twall\n", "Wall", "WALL"] {
            let err = UnitType::from_tag(tag).unwrap_err();
            assert_eq!(err, CalcError::unsupported_unit_type(tag));
        }

        let request = UnitRequest::new(" wall ", 80.0, 70.0, 30.0);
        assert_eq!(request.validate().unwrap_err().error_code(), "UNSUPPORTED_UNIT_TYPE");
    }

    #[test]
    fn test_unit_type_serializes_as_tag() {
        let json = serde_json::to_string(&UnitType::OneSmall16TwoLargeBottom).unwrap();
        assert_eq!(json, "\"one_small_16_two_large_bottom\"");
        let parsed: UnitType = serde_json::from_str("\"corner_l_wall\"").unwrap();
        assert_eq!(parsed, UnitType::CornerLWall);
        assert!(serde_json::from_str::<UnitType>("\"pantry\"").is_err());
    }

    #[test]
    fn test_side_panel_variants() {
        assert_eq!(UnitType::WallMicrowaveSidePanel.base_type(), UnitType::WallMicrowave);
        assert!(UnitType::TallDoorsSidePanel.has_side_panel());
        assert!(!UnitType::TallDoors.has_side_panel());
        let count = UnitType::ALL.iter().filter(|t| t.has_side_panel()).count();
        assert_eq!(count, 16);
    }

    #[test]
    fn test_families() {
        assert_eq!(UnitType::SinkFixedSidePanel.family(), UnitFamily::Ground);
        assert_eq!(UnitType::ThreeTurbo.family(), UnitFamily::Drawer);
        assert_eq!(UnitType::CornerLWall.family(), UnitFamily::Corner);
        assert_eq!(UnitType::WardrobeWoodenBase.family(), UnitFamily::Tall);
        assert_eq!(UnitType::SideFlush.family(), UnitFamily::Panel);
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: UnitRequest =
            serde_json::from_str(r#"{ "type": "ground", "width_cm": 60, "height_cm": 72, "depth_cm": 30 }"#).unwrap();
        assert_eq!(request, UnitRequest::new("ground", 60.0, 72.0, 30.0));
        assert_eq!(request.shelf_count, 2);
        assert_eq!(request.door_count, 2);
        assert_eq!(request.oven_height_cm, 60.0);
    }

    #[test]
    fn test_request_accepts_short_field_names() {
        let request: UnitRequest = serde_json::from_str(
            r#"{ "type": "tall_doors", "width_cm": 60, "height_cm": 220, "depth_cm": 58, "bottom_door_height": 78 }"#,
        )
        .unwrap();
        assert_eq!(request.bottom_door_height_cm, 78.0);
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let request = UnitRequest::new("ground", 0.0, 72.0, 30.0);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "width_cm"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let request = UnitRequest {
            door_count: -1,
            ..UnitRequest::new("ground", 60.0, 72.0, 30.0)
        };
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "door_count"));
    }

    #[test]
    fn test_invalid_input_checked_before_type() {
        let request = UnitRequest::new("pantry", -5.0, 72.0, 30.0);
        assert_eq!(request.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_fixed_part_required() {
        let request = UnitRequest::new("ground_fixed", 90.0, 72.0, 56.0);
        assert_eq!(request.validate().unwrap_err(), CalcError::missing_field("fixed_part_cm"));

        let too_wide = UnitRequest {
            fixed_part_cm: 90.0,
            ..request
        };
        assert_eq!(too_wide.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_bottom_door_height_required_for_tall_units() {
        let request = UnitRequest::new("tall_drawers_side_doors_top_side_panel", 60.0, 220.0, 58.0);
        assert_eq!(
            request.validate().unwrap_err(),
            CalcError::missing_field("bottom_door_height_cm")
        );
        assert!(UnitRequest::new("tall_wooden_base", 60.0, 220.0, 58.0).validate().is_ok());
    }

    #[test]
    fn test_flip_height_required_for_wall_flip() {
        let request = UnitRequest::new("wall_flip_top_doors_bottom", 80.0, 90.0, 30.0);
        assert_eq!(request.validate().unwrap_err(), CalcError::missing_field("flip_door_height_cm"));
    }

    #[test]
    fn test_corner_defaults_to_primary_axis() {
        let spec = UnitRequest {
            depth_2_cm: 35.0,
            ..UnitRequest::new("corner_l_wall", 60.0, 70.0, 30.0)
        }
        .validate()
        .unwrap();
        let corner = spec.corner(1.8);
        assert_eq!(corner.w2, 60.0);
        assert_eq!(corner.d2, 35.0);
    }

    #[test]
    fn test_door_type_from_str() {
        assert_eq!("FLIP".parse::<DoorType>().unwrap(), DoorType::Flip);
        assert!("sliding".parse::<DoorType>().is_err());
    }
}
