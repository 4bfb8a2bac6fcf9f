//! # Job Files
//!
//! A `Project` is one customer job: the shop settings it is cut with and
//! every cabinet unit ordered, each with its last calculation. Projects
//! serialize to `.cut.json` files as human-readable JSON (see
//! [`file_io`](crate::file_io) for atomic saves).
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, customer, job id, timestamps)
//! ├── settings: CuttingSettings (board, deductions, clearances)
//! └── units: HashMap<Uuid, UnitRecord> (request + last result per unit)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::project::Project;
//! use cutlist_core::unit::UnitRequest;
//!
//! let mut project = Project::new("Nour Kitchens", "K-118");
//! let id = project.add_unit("sink run", UnitRequest::new("sink", 80.0, 72.0, 56.0));
//!
//! let failures = project.recalculate_all();
//! assert!(failures.is_empty());
//! assert!(project.get_unit(&id).unwrap().result.is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::aggregate::{aggregate, Totals};
use crate::errors::CalcError;
use crate::part::CalculationResult;
use crate::pricing::{estimate, PriceTable};
use crate::registry::compute_request;
use crate::settings::CuttingSettings;
use crate::unit::UnitRequest;

/// Current schema version for job files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root job container.
///
/// Units live in a flat UUID-keyed map so they can be edited or removed
/// without renumbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    /// Settings every unit of the job is cut with
    #[serde(default)]
    pub settings: CuttingSettings,

    #[serde(default)]
    pub units: HashMap<Uuid, UnitRecord>,
}

impl Project {
    /// Create an empty job with default settings.
    ///
    /// ```rust
    /// use cutlist_core::project::Project;
    ///
    /// let project = Project::new("Nour Kitchens", "K-118");
    /// assert_eq!(project.meta.customer, "Nour Kitchens");
    /// assert_eq!(project.unit_count(), 0);
    /// ```
    pub fn new(customer: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                customer: customer.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            settings: CuttingSettings::default(),
            units: HashMap::new(),
        }
    }

    /// Add a unit (not yet calculated). Returns its id.
    pub fn add_unit(&mut self, label: impl Into<String>, request: UnitRequest) -> Uuid {
        let id = Uuid::new_v4();
        self.units.insert(id, UnitRecord::new(label, request));
        self.touch();
        id
    }

    pub fn remove_unit(&mut self, id: &Uuid) -> Option<UnitRecord> {
        let unit = self.units.remove(id);
        if unit.is_some() {
            self.touch();
        }
        unit
    }

    pub fn get_unit(&self, id: &Uuid) -> Option<&UnitRecord> {
        self.units.get(id)
    }

    /// Mutable access; marks the project as modified when the unit exists.
    pub fn get_unit_mut(&mut self, id: &Uuid) -> Option<&mut UnitRecord> {
        if self.units.contains_key(id) {
            self.touch();
            self.units.get_mut(id)
        } else {
            None
        }
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Units in the order they were added. Ties on creation time fall back
    /// to label, then id.
    pub fn units_in_order(&self) -> Vec<(&Uuid, &UnitRecord)> {
        let mut units: Vec<_> = self.units.iter().collect();
        units.sort_by(|a, b| {
            a.1.created_at
                .cmp(&b.1.created_at)
                .then_with(|| a.1.label.cmp(&b.1.label))
                .then_with(|| a.0.cmp(b.0))
        });
        units
    }

    fn ids_in_order(&self) -> Vec<Uuid> {
        self.units_in_order().into_iter().map(|(id, _)| *id).collect()
    }

    /// Recalculate every unit against the project settings.
    ///
    /// A unit that fails keeps no result and its error is returned; the
    /// others are still calculated. Units are visited, and failures
    /// reported, in [`units_in_order`](Self::units_in_order) order.
    pub fn recalculate_all(&mut self) -> Vec<(Uuid, CalcError)> {
        let mut failures = Vec::new();
        let now = Utc::now();

        for id in self.ids_in_order() {
            let Some(unit) = self.units.get_mut(&id) else {
                continue;
            };
            match compute_request(&unit.request, &self.settings) {
                Ok(result) => unit.result = Some(result),
                Err(e) => {
                    warn!(unit = %unit.label, code = e.error_code(), "unit calculation failed");
                    unit.result = None;
                    failures.push((id, e));
                }
            }
            unit.price_estimate = None;
            unit.updated_at = now;
        }

        self.touch();
        failures
    }

    /// Price every calculated unit in insertion order. Units without a
    /// result are skipped.
    pub fn price_all(&mut self, table: &PriceTable) -> Vec<(Uuid, CalcError)> {
        let mut failures = Vec::new();

        for id in self.ids_in_order() {
            let Some(unit) = self.units.get_mut(&id) else {
                continue;
            };
            let Some(result) = unit.result.as_mut() else {
                continue;
            };
            match estimate(result, table) {
                Ok(priced) => {
                    priced.apply_to(result);
                    unit.price_estimate = Some(priced.total_cost);
                }
                Err(e) => failures.push((id, e)),
            }
        }

        self.touch();
        failures
    }

    /// Totals over every calculated unit
    pub fn totals(&self) -> Totals {
        self.units
            .values()
            .filter_map(|u| u.result.as_ref())
            .map(|r| aggregate(&r.parts))
            .fold(Totals::default(), |acc, t| acc.merge(&t))
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub customer: String,

    /// Job/order number
    pub job_id: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// One ordered unit: what was asked for and what it came out as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Shop label (e.g. "sink run", "U3")
    pub label: String,

    pub request: UnitRequest,

    /// Last successful calculation, cleared when it fails
    #[serde(default)]
    pub result: Option<CalculationResult>,

    #[serde(default)]
    pub price_estimate: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UnitRecord {
    pub fn new(label: impl Into<String>, request: UnitRequest) -> Self {
        let now = Utc::now();
        UnitRecord {
            label: label.into(),
            request,
            result: None,
            price_estimate: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("Nour Kitchens", "K-118");
        assert_eq!(project.meta.customer, "Nour Kitchens");
        assert_eq!(project.meta.job_id, "K-118");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings, CuttingSettings::default());
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Nour Kitchens", "K-118");
        project.add_unit("U1", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Nour Kitchens"));
        assert!(json.contains("\"type\": \"wall\""));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.unit_count(), 1);
        assert_eq!(roundtrip.meta.job_id, "K-118");
    }

    #[test]
    fn test_add_remove_unit() {
        let mut project = Project::new("Customer", "K-1");
        let id = project.add_unit("U1", UnitRequest::new("ground", 60.0, 72.0, 56.0));
        assert_eq!(project.unit_count(), 1);
        assert!(project.get_unit(&id).is_some());

        let removed = project.remove_unit(&id);
        assert_eq!(removed.unwrap().label, "U1");
        assert_eq!(project.unit_count(), 0);
        assert!(project.remove_unit(&id).is_none());
    }

    #[test]
    fn test_failing_unit_does_not_stop_others() {
        let mut project = Project::new("Customer", "K-2");
        let good = project.add_unit("U1", UnitRequest::new("ground", 60.0, 72.0, 56.0));
        let bad = project.add_unit("U2", UnitRequest::new("pantry", 60.0, 72.0, 56.0));

        let failures = project.recalculate_all();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, bad);
        assert_eq!(failures[0].1.error_code(), "UNSUPPORTED_UNIT_TYPE");

        assert!(project.get_unit(&good).unwrap().result.is_some());
        assert!(project.get_unit(&bad).unwrap().result.is_none());
    }

    #[test]
    fn test_recalculate_uses_project_settings() {
        let mut project = Project::new("Customer", "K-3");
        let id = project.add_unit("U1", UnitRequest::new("ground", 60.0, 72.0, 56.0));

        project.recalculate_all();
        let before = project.get_unit(&id).unwrap().result.clone().unwrap();
        assert_eq!(before.part("base").unwrap().height_cm, 56.4);

        project.settings.board_thickness_cm = 1.6;
        project.recalculate_all();
        let after = project.get_unit(&id).unwrap().result.clone().unwrap();
        assert_eq!(after.part("base").unwrap().height_cm, 56.8);
    }

    #[test]
    fn test_totals_across_units() {
        let mut project = Project::new("Customer", "K-4");
        project.add_unit("U1", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        project.add_unit("U2", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        project.recalculate_all();

        let single = project.units.values().next().unwrap().result.clone().unwrap();
        let totals = project.totals();
        assert!((totals.total_area_m2 - 2.0 * single.total_area_m2).abs() < 1e-9);
    }

    #[test]
    fn test_price_all() {
        let mut project = Project::new("Customer", "K-5");
        let id = project.add_unit("U1", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        project.add_unit("U2", UnitRequest::new("pantry", 80.0, 70.0, 30.0));
        project.recalculate_all();

        let table = PriceTable::new("EGP").with_price("area", 400.0).with_price("edge_band", 10.0);
        let failures = project.price_all(&table);
        assert!(failures.is_empty());

        let unit = project.get_unit(&id).unwrap();
        let result = unit.result.as_ref().unwrap();
        assert_eq!(unit.price_estimate, result.total_cost);
        assert_eq!(result.cost_breakdown.len(), 2);
    }

    #[test]
    fn test_units_in_order() {
        let mut project = Project::new("Customer", "K-6");
        project.add_unit("first", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        project.add_unit("second", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        let units = project.units_in_order();
        let labels: Vec<_> = units.iter().map(|(_, u)| u.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn test_units_in_order_ties_are_stable() {
        let mut project = Project::new("Customer", "K-7");
        let a = project.add_unit("same", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        let b = project.add_unit("same", UnitRequest::new("wall", 80.0, 70.0, 30.0));
        let stamp = project.get_unit(&a).unwrap().created_at;
        project.units.get_mut(&b).unwrap().created_at = stamp;

        let mut expected = vec![a, b];
        expected.sort();
        for _ in 0..3 {
            let ids: Vec<Uuid> = project.units_in_order().into_iter().map(|(id, _)| *id).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_recalculate_failures_in_insertion_order() {
        let mut project = Project::new("Customer", "K-8");
        let mut bad = Vec::new();
        for i in 1..=6 {
            let label = format!("U{i}");
            if i % 2 == 0 {
                project.add_unit(label, UnitRequest::new("wall", 80.0, 70.0, 30.0));
            } else {
                bad.push(project.add_unit(label, UnitRequest::new("pantry", 80.0, 70.0, 30.0)));
            }
        }

        let failures = project.recalculate_all();
        let failed: Vec<Uuid> = failures.iter().map(|(id, _)| *id).collect();
        assert_eq!(failed, bad);
    }

    #[test]
    fn test_price_failures_in_insertion_order() {
        let mut project = Project::new("Customer", "K-9");
        let ids: Vec<Uuid> = (1..=5)
            .map(|i| project.add_unit(format!("U{i}"), UnitRequest::new("wall", 80.0, 70.0, 30.0)))
            .collect();
        project.recalculate_all();

        // No edge_band price, so every unit fails to price
        let table = PriceTable::new("EGP").with_price("area", 400.0);
        let failures = project.price_all(&table);
        let failed: Vec<Uuid> = failures.iter().map(|(id, _)| *id).collect();
        assert_eq!(failed, ids);
        assert!(failures.iter().all(|(_, e)| e.error_code() == "PRICE_NOT_FOUND"));
    }

    #[test]
    fn test_get_unit_mut_touches_project() {
        let mut project = Project::new("Customer", "K-10");
        let id = project.add_unit("U1", UnitRequest::new("wall", 80.0, 70.0, 30.0));

        let stale = project.meta.created - chrono::Duration::days(1);
        project.meta.modified = stale;
        assert!(project.get_unit_mut(&Uuid::new_v4()).is_none());
        assert_eq!(project.meta.modified, stale);

        project.get_unit_mut(&id).unwrap().label = "sink run".to_string();
        assert!(project.meta.modified > stale);
        assert_eq!(project.get_unit(&id).unwrap().label, "sink run");
    }
}
