//! # Part Recipes
//!
//! Every unit type is described by a [`Recipe`]: an ordered list of
//! [`Step`]s, each naming one part and the formulas for its two cut
//! dimensions. One interpreter ([`Recipe::run`]) evaluates any recipe against
//! a [`Ctx`] (validated unit spec plus settings), so the per-type numeric
//! quirks live in data while skipping, quantity resolution and degenerate-part
//! checks live in one place.
//!
//! Recipes are grouped by cabinet family:
//!
//! - [`ground`] - base cabinets with doors (ground, sink, fixed-part variants)
//! - [`wall`] - wall-hung cabinets
//! - [`corner`] - two-axis corner cabinets
//! - [`drawers`] - floor-standing drawer cabinets and drawer-box fragments
//! - [`tall`] - full-height cabinets
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::recipes::{ground, Ctx};
//! use cutlist_core::settings::CuttingSettings;
//! use cutlist_core::unit::UnitRequest;
//!
//! let spec = UnitRequest { shelf_count: 1, door_count: 1, ..UnitRequest::new("ground", 60.0, 72.0, 30.0) }
//!     .validate()
//!     .unwrap();
//! let settings = CuttingSettings::default();
//!
//! let parts = ground::ground().run(&Ctx::new(&spec, &settings)).unwrap();
//! assert_eq!(parts[0].name, "base");
//! assert_eq!(parts[0].width_cm, 30.0);
//! assert_eq!(parts[0].height_cm, 56.4);
//! ```

pub mod common;
pub mod corner;
pub mod drawers;
pub mod ground;
pub mod tall;
pub mod wall;

use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{self, CornerGeometry};
use crate::part::{EdgeDistribution, Part};
use crate::settings::{Clearances, CuttingSettings};
use crate::unit::{DoorType, UnitSpec};

/// A cut-dimension formula
pub type Measure = fn(&Ctx<'_>) -> CalcResult<f64>;

/// A step precondition
pub type Guard = fn(&Ctx<'_>) -> bool;

// ============================================================================
// Evaluation context
// ============================================================================

/// Inputs a recipe is evaluated against, with the short-hand accessors the
/// formulas are written in.
#[derive(Debug, Clone, Copy)]
pub struct Ctx<'a> {
    pub spec: &'a UnitSpec,
    pub settings: &'a CuttingSettings,
}

impl<'a> Ctx<'a> {
    pub fn new(spec: &'a UnitSpec, settings: &'a CuttingSettings) -> Self {
        Ctx { spec, settings }
    }

    pub fn w(&self) -> f64 {
        self.spec.width_cm
    }

    pub fn h(&self) -> f64 {
        self.spec.height_cm
    }

    pub fn d(&self) -> f64 {
        self.spec.depth_cm
    }

    /// Board thickness
    pub fn t(&self) -> f64 {
        self.settings.board_thickness_cm
    }

    /// Rail ("mirror") width
    pub fn mirror(&self) -> f64 {
        self.settings.mirror_width_cm
    }

    /// Handle profile height
    pub fn handle(&self) -> f64 {
        self.settings.handle_profile_height_cm
    }

    pub fn clearances(&self) -> &Clearances {
        &self.settings.clearances
    }

    pub fn shelves(&self) -> u32 {
        self.spec.shelf_count
    }

    pub fn doors(&self) -> u32 {
        self.spec.door_count
    }

    pub fn drawers(&self) -> u32 {
        self.spec.drawer_count
    }

    pub fn is_hinged(&self) -> bool {
        self.spec.door_type == DoorType::Hinged
    }

    pub fn is_flip(&self) -> bool {
        self.spec.door_type == DoorType::Flip
    }

    // --- carcass -----------------------------------------------------------

    /// Unit width less both sides
    pub fn inner_width(&self) -> f64 {
        geometry::inset_by_thickness(self.w(), 2, self.t())
    }

    /// Base/top length under the configured assembly method
    pub fn carcass_span(&self) -> f64 {
        geometry::carcass_span(self.w(), self.settings.assembly_method, self.t())
    }

    /// Side height of a unit whose sides stand on the base only
    pub fn ground_side_height(&self) -> f64 {
        geometry::side_height(self.h(), 1, self.settings.assembly_method, self.t())
    }

    /// Side height of a unit whose sides sit between base and top
    pub fn tall_side_height(&self) -> f64 {
        geometry::side_height(self.h(), 2, self.settings.assembly_method, self.t())
    }

    /// Regular shelf depth
    pub fn shelf_depth(&self) -> f64 {
        geometry::inset_by_deduction(self.d(), self.settings.shelf_depth_deduction_cm)
    }

    /// Depth in front of a routed back
    pub fn routed_depth(&self) -> f64 {
        geometry::inset_by_deduction(self.d(), self.settings.routed_back_offset_cm())
    }

    pub fn back_width(&self) -> f64 {
        geometry::inset_by_deduction(self.w(), self.settings.back_deduction_cm)
    }

    pub fn back_height(&self) -> f64 {
        geometry::inset_by_deduction(self.h(), self.settings.back_deduction_cm)
    }

    pub fn corner(&self) -> CornerGeometry {
        self.spec.corner(self.t())
    }

    // --- fronts ------------------------------------------------------------

    /// Width of one of `door_count` side-by-side doors
    pub fn door_width(&self) -> CalcResult<f64> {
        geometry::split_by_count(self.w(), self.doors(), self.settings.door_width_deduction_no_edge_cm)
    }

    /// Width of a front spanning the whole unit
    pub fn full_front_width(&self) -> f64 {
        geometry::inset_by_deduction(self.w(), self.settings.door_width_deduction_no_edge_cm)
    }

    /// Height of one of `door_count` stacked doors sharing `span`, less the
    /// handle profile and `gap`
    pub fn stacked_door_height(&self, span: f64, gap: f64) -> CalcResult<f64> {
        geometry::split_by_count(span, self.doors(), self.handle() + gap)
    }

    /// Height of one of `drawer_count` fronts sharing `zone`, less the
    /// handle profile and the stacked-front gap
    pub fn drawer_front_height(&self, zone: f64) -> CalcResult<f64> {
        geometry::split_by_count(zone, self.drawers(), self.handle() + self.clearances().flip_gap_cm)
    }

    /// Height left above the lower door or drawer zone of a tall unit
    pub fn upper_zone(&self) -> f64 {
        self.h() - self.spec.bottom_door_height_cm
    }

    /// Fixed-part width with the panel allowance taken off
    pub fn fixed_panel_width(&self) -> f64 {
        self.spec.fixed_part_cm - self.clearances().fixed_part_allowance_cm
    }

    /// Width of one door beside a fixed part
    pub fn fixed_door_width(&self) -> CalcResult<f64> {
        let span = self.w() - self.spec.fixed_part_cm - self.clearances().fixed_door_allowance_cm;
        geometry::split_by_count(span, self.doors(), self.settings.door_width_deduction_no_edge_cm)
    }

    // --- drawer boxes ------------------------------------------------------

    /// Box strip length with side-mounted slides
    pub fn side_box_width(&self) -> f64 {
        geometry::inset_by_thickness(self.w(), 4, self.t()) - self.clearances().drawer_slide_allowance_cm
    }

    /// Box strip length on a bottom rail
    pub fn bottom_rail_box_width(&self) -> f64 {
        self.w() - self.clearances().bottom_rail_box_allowance_cm
    }

    /// Box depth strip length
    pub fn box_depth(&self) -> f64 {
        self.d() - self.clearances().drawer_depth_allowance_cm
    }

    /// Drawer floor width with side-mounted slides
    pub fn side_floor_width(&self) -> f64 {
        self.inner_width() - self.clearances().drawer_slide_allowance_cm - self.settings.back_deduction_cm
    }

    /// Drawer floor width on a bottom rail
    pub fn bottom_rail_floor_width(&self) -> f64 {
        self.w() - self.clearances().bottom_rail_floor_allowance_cm
    }

    /// Drawer floor depth on multi-drawer units
    pub fn floor_depth(&self) -> f64 {
        self.d() - self.clearances().drawer_floor_depth_allowance_cm
    }

    /// Drawer floor depth behind a full box depth, less the back deduction
    pub fn box_floor_depth(&self) -> f64 {
        self.box_depth() - self.settings.back_deduction_cm
    }
}

// ============================================================================
// Steps
// ============================================================================

/// How many pieces a step produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qty {
    Fixed(u32),
    /// `shelf_count`
    Shelves,
    /// `shelf_count - n`, floored at zero
    ShelvesLess(u32),
    /// `door_count`
    Doors,
    /// `drawer_count`
    Drawers,
    /// `drawer_count * n`
    DrawersTimes(u32),
}

impl Qty {
    pub fn resolve(&self, ctx: &Ctx<'_>) -> u32 {
        match *self {
            Qty::Fixed(n) => n,
            Qty::Shelves => ctx.shelves(),
            Qty::ShelvesLess(n) => ctx.shelves().saturating_sub(n),
            Qty::Doors => ctx.doors(),
            Qty::Drawers => ctx.drawers(),
            Qty::DrawersTimes(n) => ctx.drawers().saturating_mul(n),
        }
    }
}

/// One part of a recipe
#[derive(Clone, Copy)]
pub struct Step {
    pub role: &'static str,
    pub width: Measure,
    pub height: Measure,
    pub depth: Option<Measure>,
    pub qty: Qty,
    pub edges: EdgeDistribution,
    pub guard: Option<Guard>,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("role", &self.role)
            .field("qty", &self.qty)
            .field("edges", &self.edges)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

impl Step {
    /// A single, fully banded part
    pub fn new(role: &'static str, width: Measure, height: Measure) -> Self {
        Step {
            role,
            width,
            height,
            depth: None,
            qty: Qty::Fixed(1),
            edges: EdgeDistribution::ALL,
            guard: None,
        }
    }

    pub fn qty(mut self, qty: Qty) -> Self {
        self.qty = qty;
        self
    }

    pub fn edges(mut self, edges: EdgeDistribution) -> Self {
        self.edges = edges;
        self
    }

    pub fn depth(mut self, depth: Measure) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Only emit the part when `guard` holds
    pub fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn renamed(mut self, role: &'static str) -> Self {
        self.role = role;
        self
    }
}

// ============================================================================
// Recipe
// ============================================================================

/// Ordered step list for one unit type
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    steps: Vec<Step>,
}

impl Recipe {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Recipe {
            steps: steps.into_iter().collect(),
        }
    }

    /// Append steps
    pub fn then(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// The same recipe followed by a decorative side panel
    pub fn with_side_panel(self) -> Self {
        self.then([common::decorative_side_panel()])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Roles in order, for diagnostics and tests
    pub fn roles(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.role).collect()
    }

    /// Evaluate every step in order.
    ///
    /// A step whose guard fails or whose quantity resolves to zero is
    /// skipped before its formulas run, so a zero door or drawer count never
    /// reaches a division. A part with a non-positive cut dimension fails the
    /// whole recipe with [`CalcError::DegeneratePart`]; nothing is emitted
    /// partially.
    pub fn run(&self, ctx: &Ctx<'_>) -> CalcResult<Vec<Part>> {
        let mut parts = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            if let Some(guard) = step.guard {
                if !guard(ctx) {
                    continue;
                }
            }

            let qty = step.qty.resolve(ctx);
            if qty == 0 {
                continue;
            }

            let width = (step.width)(ctx)?;
            let height = (step.height)(ctx)?;
            let part = Part::new(step.role, width, height, qty, step.edges);

            if !is_positive(part.width_cm) || !is_positive(part.height_cm) {
                warn!(
                    unit_type = %ctx.spec.unit_type,
                    part = step.role,
                    width_cm = part.width_cm,
                    height_cm = part.height_cm,
                    "deductions exceed raw dimension"
                );
                return Err(CalcError::degenerate_part(
                    ctx.spec.unit_type.tag(),
                    step.role,
                    part.width_cm,
                    part.height_cm,
                ));
            }

            let depth = match step.depth {
                Some(measure) => Some(measure(ctx)?),
                None => None,
            };
            parts.push(part.with_depth(depth));
        }

        Ok(parts)
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0
}
