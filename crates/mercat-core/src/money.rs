//! # Money Module
//!
//! Provides the `Price` type for base prices entered at the register.
//!
//! ## Float Prices, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The category adjustment formulas are specified over real numbers:      │
//! │                                                                         │
//! │    perishable:  base - base/(days+1) + base*0.1                         │
//! │    electronic:  base + base*(days/365)*0.1                              │
//! │                                                                         │
//! │  Billing follows these formulas verbatim in f64, so Price wraps an f64  │
//! │  rather than integer cents. What Price adds is the construction-time    │
//! │  invariant: a price is never negative and never NaN.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mercat_core::money::Price;
//!
//! let price = Price::checked(10.99).unwrap();
//! assert_eq!(price.value(), 10.99);
//! assert_eq!(price.to_string(), "10.99");
//!
//! // Negative amounts are not prices
//! assert!(Price::checked(-1.0).is_none());
//! ```

use serde::Serialize;
use std::fmt;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative monetary amount.
///
/// ## Invariant
/// `value >= 0.0` and not NaN, established at construction. Every `Price`
/// in the system went through [`Price::checked`]; there is no way to hold a
/// negative price - which is also why this type serializes but does not
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Price(f64);

impl Price {
    /// Validates and wraps an amount. Returns `None` for negative or NaN
    /// input; zero is a valid price (free items).
    ///
    /// ## Example
    /// ```rust
    /// use mercat_core::money::Price;
    ///
    /// assert!(Price::checked(0.0).is_some());
    /// assert!(Price::checked(19.99).is_some());
    /// assert!(Price::checked(-0.01).is_none());
    /// assert!(Price::checked(f64::NAN).is_none());
    /// ```
    pub fn checked(value: f64) -> Option<Self> {
        // NaN fails the comparison too, so a single guard covers both cases
        if value >= 0.0 {
            Some(Price(value))
        } else {
            None
        }
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Checks if the price is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

/// Display implementation shows the amount with two decimal places, the way
/// every price on the receipt is printed.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
