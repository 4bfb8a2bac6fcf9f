//! # cutlist_core - Cabinet Cutting-List Engine
//!
//! `cutlist_core` turns a kitchen cabinet order (unit type, outer dimensions,
//! shelf/door/drawer counts) into the bill of panels a workshop cuts: every
//! part with its finished size, quantity, edge-banding pattern, area and
//! banding length, plus unit totals. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: A calculation is a pure function of request and settings
//! - **Table-Driven**: Each unit type is a declarative recipe of part steps
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use cutlist_core::{compute_request, CuttingSettings, UnitRequest};
//!
//! let request = UnitRequest { shelf_count: 1, door_count: 1, ..UnitRequest::new("ground", 60.0, 72.0, 30.0) };
//! let result = compute_request(&request, &CuttingSettings::default()).unwrap();
//!
//! let base = result.part("base").unwrap();
//! assert_eq!((base.width_cm, base.height_cm), (30.0, 56.4));
//! ```
//!
//! ## Modules
//!
//! - [`unit`] - Unit types, raw requests and validated specs
//! - [`settings`] - Shop cutting settings and clearances
//! - [`recipes`] - Per-family part recipes and the recipe runner
//! - [`registry`] - Unit type to recipe dispatch and full calculations
//! - [`part`] - Parts, edge distributions and calculation results
//! - [`aggregate`] - Area and edge-band totals
//! - [`pricing`] - Cost estimates from a price table
//! - [`project`] - Job container with many units
//! - [`geometry`] - Shared carcass and corner arithmetic
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON files with atomic saves

pub mod aggregate;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod part;
pub mod pricing;
pub mod project;
pub mod recipes;
pub mod registry;
pub mod settings;
pub mod unit;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use aggregate::{aggregate, Totals};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_prices, load_project, load_settings, save_project, save_settings};
pub use part::{CalculationResult, EdgeDistribution, Part};
pub use pricing::{estimate, Estimate, PriceTable};
pub use project::{Project, ProjectMetadata, UnitRecord};
pub use registry::{compute, compute_parts, compute_request, recipe_for};
pub use settings::{AssemblyMethod, Clearances, CuttingSettings};
pub use unit::{DoorType, UnitFamily, UnitRequest, UnitSpec, UnitType};
