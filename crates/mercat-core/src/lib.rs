//! # mercat-core: Pure Business Logic for the Mercat Checkout Console
//!
//! This crate is the **heart** of the checkout simulator. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mercat Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CLI (apps/cli)                               │   │
//! │  │    Menu Loop ──► Input Reader ──► Receipt Writer                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mercat-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  product  │  │   money   │  │   cart    │  │  receipt  │   │   │
//! │  │   │  Category │  │   Price   │  │   Cart    │  │  Receipt  │   │   │
//! │  │   │  pricing  │  │ invariant │  │ CartLine  │  │  render   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product categories and per-category pricing
//! - [`money`] - Non-negative `Price` newtype
//! - [`cart`] - Cart aggregation by barcode and checkout
//! - [`receipt`] - Receipt data and fixed-width text rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system, and clock access is FORBIDDEN here
//! 3. **Explicit Errors**: All failures are typed results, never panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod product;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mercat_core::Cart` instead of
// `use mercat_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult};
pub use money::Price;
pub use product::{Category, Product};
pub use receipt::{Receipt, ReceiptLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum scans (add operations) allowed in a single cart.
///
/// The count is over scans, not distinct barcodes: ten scans of one barcode
/// fill the cart. The CLI can override this per session via
/// `Cart::with_capacity`.
pub const MAX_CART_SCANS: u32 = 10;
