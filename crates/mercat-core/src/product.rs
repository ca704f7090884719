//! # Product Types
//!
//! Products scanned at the register, and their per-category pricing.
//!
//! ## Category Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product = triple + Category                         │
//! │                                                                         │
//! │  ┌───────────────────┐        ┌──────────────────────────────────────┐  │
//! │  │     Product       │        │            Category                  │  │
//! │  │  ───────────────  │        │  ──────────────────────────────────  │  │
//! │  │  name             │  has   │  Perishable { expiry_days }          │  │
//! │  │  base_price       │ ─────► │  Textile    { composition }          │  │
//! │  │  barcode          │        │  Electronic { warranty_days }        │  │
//! │  └───────────────────┘        └──────────────────────────────────────┘  │
//! │                                                                         │
//! │  unit_price() and details() are exhaustive matches over Category, so    │
//! │  adding a category is a compiler-checked exercise.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Formulas
//! | Category   | Adjusted unit price                        |
//! |------------|--------------------------------------------|
//! | Perishable | `base - base/(days + 1) + base * 0.1`      |
//! | Textile    | `base` (unchanged)                         |
//! | Electronic | `base + base * (days / 365.0) * 0.1`       |

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Price;

// =============================================================================
// Category
// =============================================================================

/// Product category, carrying the category-specific attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Perishable food with an expiry horizon in days.
    Perishable { expiry_days: u32 },

    /// Textile with a composition description (display-only, no price effect).
    Textile { composition: String },

    /// Electronics with a warranty horizon in days.
    Electronic { warranty_days: u32 },
}

// =============================================================================
// Product
// =============================================================================

/// A product scanned at the register.
///
/// Identified by its barcode; the name and base price are whatever the
/// operator typed in for this scan. Construction enforces the non-negative
/// price invariant; a `Product` with a negative price cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    base_price: Price,
    barcode: String,
    category: Category,
}

impl Product {
    /// Creates a product, validating the base price.
    ///
    /// ## Errors
    /// Returns [`CoreError::NegativePrice`] when `base_price` is negative
    /// (or NaN), naming the offending product. Nothing is created in that
    /// case.
    ///
    /// ## Example
    /// ```rust
    /// use mercat_core::product::{Category, Product};
    ///
    /// let milk = Product::new("Milk", 2.00, "B1", Category::Perishable { expiry_days: 9 });
    /// assert!(milk.is_ok());
    ///
    /// let bad = Product::new("Milk", -2.00, "B1", Category::Perishable { expiry_days: 9 });
    /// assert!(bad.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        base_price: f64,
        barcode: impl Into<String>,
        category: Category,
    ) -> CoreResult<Self> {
        let name = name.into();
        let base_price = Price::checked(base_price).ok_or(CoreError::NegativePrice {
            product: name.clone(),
            price: base_price,
        })?;

        Ok(Product {
            name,
            base_price,
            barcode: barcode.into(),
            category,
        })
    }

    /// Creates a perishable product with an expiry horizon in days.
    pub fn perishable(
        name: impl Into<String>,
        base_price: f64,
        barcode: impl Into<String>,
        expiry_days: u32,
    ) -> CoreResult<Self> {
        Product::new(name, base_price, barcode, Category::Perishable { expiry_days })
    }

    /// Creates a textile product with a composition description.
    pub fn textile(
        name: impl Into<String>,
        base_price: f64,
        barcode: impl Into<String>,
        composition: impl Into<String>,
    ) -> CoreResult<Self> {
        Product::new(
            name,
            base_price,
            barcode,
            Category::Textile {
                composition: composition.into(),
            },
        )
    }

    /// Creates an electronic product with a warranty horizon in days.
    pub fn electronic(
        name: impl Into<String>,
        base_price: f64,
        barcode: impl Into<String>,
        warranty_days: u32,
    ) -> CoreResult<Self> {
        Product::new(name, base_price, barcode, Category::Electronic { warranty_days })
    }

    /// Display name shown in the cart and on the receipt.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Barcode - the identity scans are grouped under.
    #[inline]
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// Base price as entered, before the category adjustment.
    #[inline]
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    /// The product category.
    #[inline]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Computes the adjusted unit price used for billing.
    ///
    /// Pure function of the product's own fields; the formulas are evaluated
    /// verbatim in `f64`.
    ///
    /// ## Edge Case
    /// A perishable with `expiry_days = 0` yields `base * 0.1` - the
    /// denominator is `days + 1`, so there is no division by zero.
    ///
    /// ## Example
    /// ```rust
    /// use mercat_core::product::Product;
    ///
    /// // 2.00 - 2.00/10 + 0.20 = 2.00
    /// let milk = Product::perishable("Milk", 2.00, "B1", 9).unwrap();
    /// assert!((milk.unit_price() - 2.00).abs() < 1e-9);
    ///
    /// // 50 + 50*(365/365)*0.1 = 55.00
    /// let radio = Product::electronic("Radio", 50.00, "B2", 365).unwrap();
    /// assert!((radio.unit_price() - 55.00).abs() < 1e-9);
    /// ```
    pub fn unit_price(&self) -> f64 {
        let base = self.base_price.value();
        match self.category {
            Category::Perishable { expiry_days } => {
                base - base / (f64::from(expiry_days) + 1.0) + base * 0.1
            }
            Category::Textile { .. } => base,
            Category::Electronic { warranty_days } => {
                base + base * (f64::from(warranty_days) / 365.0) * 0.1
            }
        }
    }

    /// One-line description of the category-specific attribute.
    pub fn details(&self) -> String {
        match &self.category {
            Category::Perishable { expiry_days } => format!("Expiry (days): {expiry_days}"),
            Category::Textile { composition } => format!("Composition: {composition}"),
            Category::Electronic { warranty_days } => format!("Warranty (days): {warranty_days}"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
