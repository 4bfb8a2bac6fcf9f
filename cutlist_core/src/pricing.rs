//! # Cost Estimates
//!
//! Multiplies a calculation's material usage by a caller-supplied price
//! table. Prices are per usage unit: per square meter for `"area"`, per
//! meter for `"edge_band"`. Maintaining the catalog is up to the caller; this
//! module only does the arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::pricing::{estimate, PriceTable};
//! use cutlist_core::registry::compute_request;
//! use cutlist_core::settings::CuttingSettings;
//! use cutlist_core::unit::UnitRequest;
//!
//! let result = compute_request(&UnitRequest::new("wall", 80.0, 70.0, 30.0), &CuttingSettings::default()).unwrap();
//! let table = PriceTable::new("EGP").with_price("area", 450.0).with_price("edge_band", 12.0);
//!
//! let estimate = estimate(&result, &table).unwrap();
//! assert_eq!(estimate.cost_breakdown.len(), 2);
//! assert!(estimate.total_cost > 0.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::part::CalculationResult;
use crate::units::round_to;

/// Money is rounded to 2 decimals
const MONEY_PLACES: u32 = 2;

/// Unit prices keyed by material usage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceTable {
    /// Display currency, free text
    #[serde(default)]
    pub currency: String,

    pub prices: BTreeMap<String, f64>,

    /// Leave usage without a price out of the estimate instead of failing
    #[serde(default)]
    pub skip_missing: bool,
}

impl PriceTable {
    pub fn new(currency: impl Into<String>) -> Self {
        PriceTable {
            currency: currency.into(),
            prices: BTreeMap::new(),
            skip_missing: false,
        }
    }

    pub fn with_price(mut self, material: impl Into<String>, price: f64) -> Self {
        self.prices.insert(material.into(), price);
        self
    }

    /// Every price must be finite and non-negative
    pub fn validate(&self) -> CalcResult<()> {
        for (material, price) in &self.prices {
            if !price.is_finite() || *price < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("prices.{material}"),
                    price.to_string(),
                    "Price must be a non-negative number",
                ));
            }
        }
        Ok(())
    }
}

/// Priced usage of one calculation (or of a whole job)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub currency: String,
    pub cost_breakdown: BTreeMap<String, f64>,
    pub total_cost: f64,
}

impl Estimate {
    /// Copy the breakdown and total onto a calculation result
    pub fn apply_to(&self, result: &mut CalculationResult) {
        result.cost_breakdown = self.cost_breakdown.clone();
        result.total_cost = Some(self.total_cost);
    }
}

/// Price the material usage of a calculation result
pub fn estimate(result: &CalculationResult, table: &PriceTable) -> CalcResult<Estimate> {
    estimate_usage(&result.material_usage, table)
}

/// Price a usage map.
///
/// Each line is `quantity * price` rounded to 2 decimals; the total is the
/// rounded sum of the lines. A usage key with no price fails with
/// [`CalcError::PriceNotFound`] unless the table sets `skip_missing`.
pub fn estimate_usage(usage: &BTreeMap<String, f64>, table: &PriceTable) -> CalcResult<Estimate> {
    table.validate()?;

    let mut cost_breakdown = BTreeMap::new();
    for (material, quantity) in usage {
        match table.prices.get(material) {
            Some(price) => {
                cost_breakdown.insert(material.clone(), round_to(quantity * price, MONEY_PLACES));
            }
            None if table.skip_missing => {
                warn!(material = %material, "no price, left out of estimate");
            }
            None => return Err(CalcError::price_not_found(material.as_str())),
        }
    }

    let total_cost = round_to(cost_breakdown.values().sum::<f64>(), MONEY_PLACES);

    Ok(Estimate {
        currency: table.currency.clone(),
        cost_breakdown,
        total_cost,
    })
}
