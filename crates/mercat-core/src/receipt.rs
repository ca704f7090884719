//! # Receipt
//!
//! The checkout artifact: line items, grand total, and the fixed-width text
//! rendering printed at the register and persisted to disk.
//!
//! ## Rendered Shape
//! ```text
//! SAPAMERCAT
//! -------------------------------
//! Date: 2026-08-06 09:30:00
//! -------------------------------
//! Name         Qty      Price      Total
//! --------------------------------
//! Milk           2       2.00       4.00
//! --------------------------------
//! Total:       4.00
//! ```
//!
//! Column widths: name left-aligned 10, quantity right-aligned 5, price and
//! total right-aligned 10, two decimal places. An empty cart still renders
//! the headers and a zero total.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator under the store name and date.
const HEADER_RULE: &str = "-------------------------------";

/// Separator framing the line-item table.
const TABLE_RULE: &str = "--------------------------------";

/// Timestamp format on the rendered receipt.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Receipt Line
// =============================================================================

/// A line item on the receipt.
///
/// The name is frozen from the canonical (first-scanned) product instance;
/// the unit price is the category-adjusted price, computed once per barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

// =============================================================================
// Receipt
// =============================================================================

/// A checkout receipt.
///
/// Produced by [`Cart::checkout`](crate::Cart::checkout); the cart is already
/// cleared by the time the caller holds one of these. Rendering is the
/// `Display` impl, so `to_string()` yields the full text artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Store name printed at the top.
    pub store_name: String,

    /// When the checkout happened (the caller reads the clock).
    pub issued_at: DateTime<Local>,

    /// Receipt number, derived from the timestamp. Used for the persisted
    /// artifact's file name; not part of the rendered text.
    pub number: String,

    /// Line items, one per distinct barcode, in first-scan order.
    pub lines: Vec<ReceiptLine>,

    /// Grand total across all lines.
    pub total: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.store_name)?;
        writeln!(f, "{HEADER_RULE}")?;
        writeln!(f, "Date: {}", self.issued_at.format(DATE_FORMAT))?;
        writeln!(f, "{HEADER_RULE}")?;
        writeln!(f, "{:<10} {:>5} {:>10} {:>10}", "Name", "Qty", "Price", "Total")?;
        writeln!(f, "{TABLE_RULE}")?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<10} {:>5} {:>10.2} {:>10.2}",
                line.name, line.quantity, line.unit_price, line.line_total
            )?;
        }
        writeln!(f, "{TABLE_RULE}")?;
        write!(f, "Total: {:>10.2}", self.total)
    }
}

/// Derives a receipt number from the checkout timestamp.
///
/// Format: `YYMMDD-HHMMSS-NNNN`, where the trailing discriminator comes from
/// the timestamp's sub-second component. Deterministic given the timestamp.
pub fn receipt_number(issued_at: DateTime<Local>) -> String {
    let discriminator = issued_at.timestamp_subsec_nanos() % 10000;
    format!("{}-{:04}", issued_at.format("%y%m%d-%H%M%S"), discriminator)
}

// =============================================================================
// Unit Tests
// =============================================================================
