//! # Cart
//!
//! The shopping cart: scan aggregation by barcode, capacity enforcement,
//! and checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                                  │
//! │                                                                         │
//! │  Menu Action              Cart Call              State Change           │
//! │  ───────────              ─────────              ────────────           │
//! │                                                                         │
//! │  Add product ───────────► add(product) ────────► line found: count + 1  │
//! │                                                  else: push new line    │
//! │                                                                         │
//! │  Show cart ─────────────► lines() ─────────────► (read only)            │
//! │                                                                         │
//! │  Checkout ──────────────► checkout() ──────────► lines priced, cart     │
//! │                                                  cleared, Receipt out   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by barcode; scanning the same barcode again only
//!   increments that line's count.
//! - The product instance stored on a line is the FIRST one scanned under
//!   that barcode. Later scans never replace it, even if the operator typed
//!   different attributes - the first scan is canonical for the name, the
//!   detail string, and the unit price.
//! - Total scan count never exceeds the capacity; a failed add leaves the
//!   cart untouched.

use chrono::{DateTime, Local};

use crate::error::{CoreError, CoreResult};
use crate::product::Product;
use crate::receipt::{receipt_number, Receipt, ReceiptLine};
use crate::MAX_CART_SCANS;

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct barcode in the cart: the canonical product instance plus the
/// running scan count.
#[derive(Debug, Clone)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// The canonical product instance (first scanned under this barcode).
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// How many times this barcode has been scanned.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Created empty at session start and after every checkout. Mutated only by
/// [`Cart::add`]; read by the cart display and by checkout.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    capacity: u32,
}

impl Cart {
    /// Creates an empty cart with the default capacity of
    /// [`MAX_CART_SCANS`] scans.
    pub fn new() -> Self {
        Cart::with_capacity(MAX_CART_SCANS)
    }

    /// Creates an empty cart with an explicit scan capacity.
    pub fn with_capacity(capacity: u32) -> Self {
        Cart {
            lines: Vec::new(),
            capacity,
        }
    }

    /// The scan capacity of this cart.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Adds one scan of a product.
    ///
    /// ## Behavior
    /// - Cart already holds `capacity` scans: fails with
    ///   [`CoreError::CapacityExceeded`], state unchanged.
    /// - Barcode already in the cart: increments that line's count. The
    ///   stored instance keeps the first scan's attributes.
    /// - New barcode: appends a line with count 1.
    ///
    /// ## Example
    /// ```rust
    /// use mercat_core::{Cart, Product};
    ///
    /// let mut cart = Cart::new();
    /// cart.add(Product::textile("Shirt", 19.99, "B3", "cotton").unwrap()).unwrap();
    /// cart.add(Product::textile("Shirt", 19.99, "B3", "cotton").unwrap()).unwrap();
    ///
    /// assert_eq!(cart.distinct_count(), 1);
    /// assert_eq!(cart.total_scans(), 2);
    /// ```
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        if self.total_scans() >= self.capacity {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.barcode() == product.barcode())
        {
            // First scan stays canonical; only the count moves
            line.quantity += 1;
            return Ok(());
        }

        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
        Ok(())
    }

    /// Distinct products in add-order of first appearance, with scan counts.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total scans across all lines (the quantity the capacity bounds).
    pub fn total_scans(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Number of distinct barcodes in the cart.
    #[inline]
    pub fn distinct_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks out the cart: prices every line, clears the cart, and returns
    /// the receipt data.
    ///
    /// For each distinct barcode, the adjusted unit price is computed ONCE
    /// from the canonical instance's category formula and multiplied by the
    /// scan count for the line total; line totals accumulate into the grand
    /// total. Iteration is in first-scan order - deterministic and
    /// exhaustive.
    ///
    /// Checkout is terminal: the cart is empty by the time this returns,
    /// whether or not the caller manages to persist the rendered text. An
    /// empty cart checks out to a receipt with no lines and a zero total.
    pub fn checkout(&mut self, store_name: &str, issued_at: DateTime<Local>) -> Receipt {
        let mut lines = Vec::with_capacity(self.lines.len());
        let mut total = 0.0;

        for line in &self.lines {
            let unit_price = line.product.unit_price();
            let line_total = unit_price * f64::from(line.quantity);
            total += line_total;
            lines.push(ReceiptLine {
                name: line.product.name().to_string(),
                quantity: line.quantity,
                unit_price,
                line_total,
            });
        }

        self.lines.clear();

        Receipt {
            store_name: store_name.to_string(),
            issued_at,
            number: receipt_number(issued_at),
            lines,
            total,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TOLERANCE: f64 = 1e-9;

    fn checkout_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap()
    }

    fn milk() -> Product {
        Product::perishable("Milk", 2.00, "B1", 9).unwrap()
    }

    fn radio() -> Product {
        Product::electronic("Radio", 50.00, "B2", 365).unwrap()
    }

    fn shirt() -> Product {
        Product::textile("Shirt", 19.99, "B3", "cotton").unwrap()
    }

    #[test]
    fn test_add_groups_scans_by_barcode() {
        let mut cart = Cart::new();
        cart.add(milk()).unwrap();
        cart.add(shirt()).unwrap();
        cart.add(milk()).unwrap();

        assert_eq!(cart.distinct_count(), 2);
        assert_eq!(cart.total_scans(), 3);
        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.lines()[1].quantity(), 1);
    }

    #[test]
    fn test_lines_keep_first_scan_order() {
        let mut cart = Cart::new();
        cart.add(shirt()).unwrap();
        cart.add(milk()).unwrap();
        cart.add(shirt()).unwrap();

        let names: Vec<&str> = cart.lines().iter().map(|l| l.product().name()).collect();
        assert_eq!(names, ["Shirt", "Milk"]);
    }

    #[test]
    fn test_eleventh_scan_is_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        for _ in 0..10 {
            cart.add(milk()).unwrap();
        }

        let err = cart.add(radio()).unwrap_err();
        assert!(matches!(err, CoreError::CapacityExceeded { capacity: 10 }));
        assert_eq!(cart.total_scans(), 10);
        assert_eq!(cart.distinct_count(), 1);
    }

    #[test]
    fn test_capacity_counts_scans_not_barcodes() {
        // Ten scans of one barcode fill the cart just as ten distinct ones do
        let mut cart = Cart::new();
        for _ in 0..10 {
            cart.add(shirt()).unwrap();
        }
        assert!(cart.add(shirt()).is_err());
    }

    #[test]
    fn test_first_scan_is_canonical_for_name_and_details() {
        let mut cart = Cart::new();
        cart.add(Product::perishable("Milk", 2.00, "B1", 9).unwrap()).unwrap();
        // Same barcode, different attributes: only the count may change
        cart.add(Product::perishable("Whole Milk", 3.50, "B1", 2).unwrap())
            .unwrap();

        assert_eq!(cart.distinct_count(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.product().name(), "Milk");
        assert_eq!(line.product().details(), "Expiry (days): 9");

        // Checkout prices with the first instance too: 2 × 2.00, not 2 × adjusted(3.50)
        let receipt = cart.checkout("SAPAMERCAT", checkout_at());
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].quantity, 2);
        assert_eq!(receipt.lines[0].name, "Milk");
        assert!((receipt.lines[0].unit_price - 2.00).abs() < TOLERANCE);
    }

    #[test]
    fn test_checkout_totals_one_of_each() {
        let mut cart = Cart::new();
        cart.add(milk()).unwrap();
        cart.add(radio()).unwrap();

        let receipt = cart.checkout("SAPAMERCAT", checkout_at());
        assert_eq!(receipt.lines.len(), 2);
        assert!((receipt.total - 57.00).abs() < TOLERANCE);
    }

    #[test]
    fn test_checkout_line_total_is_unit_times_quantity() {
        let mut cart = Cart::new();
        cart.add(shirt()).unwrap();
        cart.add(shirt()).unwrap();

        let receipt = cart.checkout("SAPAMERCAT", checkout_at());
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].quantity, 2);
        assert!((receipt.lines[0].unit_price - 19.99).abs() < TOLERANCE);
        assert!((receipt.lines[0].line_total - 39.98).abs() < TOLERANCE);
        assert!((receipt.total - 39.98).abs() < TOLERANCE);
    }

    #[test]
    fn test_checkout_clears_the_cart() {
        let mut cart = Cart::new();
        cart.add(milk()).unwrap();
        cart.add(radio()).unwrap();

        let _receipt = cart.checkout("SAPAMERCAT", checkout_at());
        assert!(cart.is_empty());
        assert_eq!(cart.total_scans(), 0);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_yields_zero_total() {
        let mut cart = Cart::new();
        let receipt = cart.checkout("SAPAMERCAT", checkout_at());
        assert!(receipt.lines.is_empty());
        assert_eq!(receipt.total, 0.0);
    }

    #[test]
    fn test_with_capacity_overrides_default() {
        let mut cart = Cart::with_capacity(1);
        cart.add(milk()).unwrap();
        assert!(cart.add(milk()).is_err());

        cart.clear();
        assert!(cart.add(milk()).is_ok());
    }
}
