//! # Unit Types
//!
//! Type-safe wrappers for the lengths and areas a cutting list deals in.
//! Every cut dimension is carried in centimeters; aggregates are reported in
//! meters (edge banding) and square meters (board area).
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::units::{Centimeters, Meters, SquareCentimeters, SquareMeters};
//!
//! let band: Meters = Centimeters(250.0).into();
//! assert_eq!(band.0, 2.5);
//!
//! let area: SquareMeters = SquareCentimeters(30.0 * 56.4).into();
//! assert!((area.0 - 0.1692).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareCentimeters> for SquareMeters {
    fn from(sqcm: SquareCentimeters) -> Self {
        SquareMeters(sqcm.0 / 10_000.0)
    }
}

impl From<SquareMeters> for SquareCentimeters {
    fn from(sqm: SquareMeters) -> Self {
        SquareCentimeters(sqm.0 * 10_000.0)
    }
}

impl Mul for Centimeters {
    type Output = SquareCentimeters;
    fn mul(self, rhs: Self) -> Self::Output {
        SquareCentimeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|v| v.0).sum())
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Round to a fixed number of decimal places
            pub fn rounded(self, places: u32) -> Self {
                Self(round_to(self.0, places))
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SquareCentimeters);
impl_arithmetic!(SquareMeters);

/// Round half away from zero to `places` decimals.
///
/// Reported areas use 4 places, edge-band lengths and money 2.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
