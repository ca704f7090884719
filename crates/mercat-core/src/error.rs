//! # Error Types
//!
//! Domain-specific error types for mercat-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mercat-core errors (this file)                                         │
//! │  └── CoreError        - Business rule violations                        │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                  │
//! │  └── CliError         - Input and receipt-persistence failures          │
//! │                                                                         │
//! │  Flow: CoreError → CliError → reported at the menu loop, never fatal    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, capacity, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They are reported to the
/// operator and the menu loop continues; none of them terminate the session.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product was constructed with a negative base price.
    ///
    /// ## When This Occurs
    /// - Operator enters a price below zero during the add-product flow
    ///
    /// The offending product is never created and the cart is untouched.
    #[error("Cannot create product '{product}': price {price} is negative")]
    NegativePrice { product: String, price: f64 },

    /// The cart has reached its scan capacity.
    ///
    /// ## When This Occurs
    /// - An add would push the total scan count past the capacity
    ///
    /// The add is rejected and the cart state is unchanged.
    #[error("Cart is full: capacity of {capacity} scans reached")]
    CapacityExceeded { capacity: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
