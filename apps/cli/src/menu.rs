//! # Menu Loop
//!
//! The interactive surface: top menu, add-product submenu, cart display,
//! checkout.
//!
//! ## Menu Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MAIN MENU                        PRODUCT SUBMENU                       │
//! │  1) Add product ────────────────► 1) Perishable                         │
//! │  2) Checkout                      2) Textile                            │
//! │  3) Show shopping cart            3) Electronics                        │
//! │  0) Exit                          0) Back (cancels, nothing added)      │
//! │                                                                         │
//! │  Prompts after a category is chosen, in order:                          │
//! │    name → price → barcode → category field (days / composition / days)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recovered here: business rule violations and malformed
//! input are reported and the loop returns to the top menu. Only terminal
//! I/O failures end the session.

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::{debug, info, warn};

use mercat_core::{Cart, Product};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::input::Console;
use crate::receipt::ReceiptWriter;

const MENU_RULE: &str = "----------------------";
const CART_RULE: &str = "------------------";

/// What the add-product flow did.
enum AddOutcome {
    /// A product was added; carries its display name.
    Added(String),
    /// The operator backed out of the submenu.
    Cancelled,
}

/// Runs the menu loop until the operator exits or input runs out.
pub fn run_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &mut Cart,
    config: &Config,
    writer: &ReceiptWriter,
) -> CliResult<()> {
    console.say(&format!("\nWELCOME TO {}", config.store_name))?;

    loop {
        show_main_menu(console)?;
        let choice = match console.prompt("Choose an option") {
            Ok(choice) => choice,
            Err(CliError::Eof) => break,
            Err(err) => return Err(err),
        };

        match choice.parse::<u32>() {
            Ok(1) => match add_product(console, cart) {
                Ok(AddOutcome::Added(name)) => {
                    info!(product = %name, scans = cart.total_scans(), "product added");
                    console.say(&format!("Added '{name}' to the cart."))?;
                }
                Ok(AddOutcome::Cancelled) => {}
                Err(CliError::Eof) => break,
                Err(CliError::Core(err)) => {
                    warn!(error = %err, "add rejected");
                    console.say(&format!("Error: {err}"))?;
                }
                Err(err) => return Err(err),
            },
            Ok(2) => checkout(console, cart, config, writer)?,
            Ok(3) => show_cart(console, cart)?,
            Ok(0) => break,
            Ok(_) => console.say("Invalid option.")?,
            Err(_) => {
                let err = CliError::MalformedInput {
                    expected: "a menu number",
                    input: choice,
                };
                warn!(error = %err, "rejected menu input");
                console.say(&format!("Error: {err}"))?;
            }
        }
    }

    console.say("Goodbye.")?;
    Ok(())
}

fn show_main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    console.say("")?;
    console.say(MENU_RULE)?;
    console.say("--- MAIN MENU ---")?;
    console.say(MENU_RULE)?;
    console.say("1) Add product")?;
    console.say("2) Checkout")?;
    console.say("3) Show shopping cart")?;
    console.say("0) Exit")?;
    Ok(())
}

fn show_product_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<()> {
    console.say(MENU_RULE)?;
    console.say("--- PRODUCT ---")?;
    console.say(MENU_RULE)?;
    console.say("1) Perishable")?;
    console.say("2) Textile")?;
    console.say("3) Electronics")?;
    console.say("0) Back")?;
    Ok(())
}

/// The add-product flow: pick a category, collect the shared triple, collect
/// the category field, construct, and add to the cart.
///
/// Construction and cart failures propagate as [`CliError::Core`] for the
/// caller to report; the failed product is never added and the cart is left
/// as it was.
fn add_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &mut Cart,
) -> CliResult<AddOutcome> {
    debug!("add product flow");

    let category = loop {
        show_product_menu(console)?;
        let choice = console.prompt("Select a product type")?;
        match choice.parse::<u32>() {
            Ok(0) => return Ok(AddOutcome::Cancelled),
            Ok(option @ 1..=3) => break option,
            Ok(_) => console.say("Invalid option.")?,
            Err(_) => {
                let err = CliError::MalformedInput {
                    expected: "a menu number",
                    input: choice,
                };
                warn!(error = %err, "rejected menu input");
                console.say(&format!("Error: {err}"))?;
            }
        }
    };

    let name = console.prompt("Product name")?;
    let price: f64 = console.prompt_parsed("Price", "a decimal price")?;
    let barcode = console.prompt("Barcode")?;

    let product = match category {
        1 => {
            let expiry_days: u32 = console.prompt_parsed("Expiry (days)", "a whole number of days")?;
            Product::perishable(name, price, barcode, expiry_days)?
        }
        2 => {
            let composition = console.prompt("Composition")?;
            Product::textile(name, price, barcode, composition)?
        }
        _ => {
            let warranty_days: u32 =
                console.prompt_parsed("Warranty (days)", "a whole number of days")?;
            Product::electronic(name, price, barcode, warranty_days)?
        }
    };

    let display_name = product.name().to_string();
    cart.add(product)?;
    Ok(AddOutcome::Added(display_name))
}

/// Framed cart display: one block per distinct product, in first-scan order.
/// Shows name, scan count, and the category detail - never a price.
fn show_cart<R: BufRead, W: Write>(console: &mut Console<R, W>, cart: &Cart) -> CliResult<()> {
    debug!(lines = cart.distinct_count(), "show cart");

    console.say("")?;
    console.say(CART_RULE)?;
    console.say("-- SHOPPING CART --")?;
    console.say(CART_RULE)?;
    for line in cart.lines() {
        console.say(&format!("Name: {}", line.product().name()))?;
        console.say(&format!("Quantity: {}", line.quantity()))?;
        console.say(&line.product().details())?;
        console.say(CART_RULE)?;
    }
    Ok(())
}

/// Checkout: price the cart, print the receipt, then try to persist it.
///
/// The cart is cleared inside `Cart::checkout`, before the write is
/// attempted - a failed write is reported but does not bring the cart back.
fn checkout<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cart: &mut Cart,
    config: &Config,
    writer: &ReceiptWriter,
) -> CliResult<()> {
    let receipt = cart.checkout(&config.store_name, Local::now());
    info!(
        number = %receipt.number,
        lines = receipt.lines.len(),
        total = receipt.total,
        "checkout complete"
    );

    console.say("")?;
    console.say(&receipt.to_string())?;

    match writer.persist(&receipt) {
        Ok(path) => console.say(&format!("Receipt saved to {}", path.display()))?,
        Err(err) => {
            warn!(error = %err, "receipt not persisted");
            console.say(&format!("Error: {err}"))?;
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn test_config(test: &str) -> Config {
        Config {
            store_name: "SAPAMERCAT".to_string(),
            receipt_dir: std::env::temp_dir().join(format!("mercat-menu-{test}")),
            capacity: 10,
        }
    }

    /// Runs a scripted session and returns everything printed to the console.
    fn run_session(script: &str, config: &Config) -> (String, Cart) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::<u8>::new());
        let mut cart = Cart::with_capacity(config.capacity);
        let writer = ReceiptWriter::new(config.receipt_dir.clone());

        run_loop(&mut console, &mut cart, config, &writer).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        (output, cart)
    }

    fn cleanup(dir: &PathBuf) {
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_add_and_checkout_prints_receipt() {
        let config = test_config("add-checkout");
        let script = "1\n1\nMilk\n2.00\nB1\n9\n1\n3\nRadio\n50\nB2\n365\n2\n0\n";

        let (output, cart) = run_session(script, &config);

        assert!(output.contains("WELCOME TO SAPAMERCAT"));
        assert!(output.contains("Added 'Milk' to the cart."));
        assert!(output.contains("Milk           1       2.00       2.00"));
        assert!(output.contains("Radio          1      55.00      55.00"));
        assert!(output.contains("Total:      57.00"));
        assert!(output.contains("Receipt saved to "));
        assert!(cart.is_empty());
        assert!(output.trim_end().ends_with("Goodbye."));

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_repeated_barcode_collapses_to_one_line() {
        let config = test_config("repeat-barcode");
        let script = "1\n2\nShirt\n19.99\nB3\ncotton\n1\n2\nShirt\n19.99\nB3\ncotton\n2\n0\n";

        let (output, _cart) = run_session(script, &config);

        assert!(output.contains("Shirt          2      19.99      39.98"));
        assert!(output.contains("Total:      39.98"));

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_invalid_and_malformed_menu_options_recover() {
        let config = test_config("bad-options");
        let script = "7\nbanana\n0\n";

        let (output, _cart) = run_session(script, &config);

        assert!(output.contains("Invalid option."));
        assert!(output.contains("Expected a menu number, got 'banana'"));
        assert!(output.trim_end().ends_with("Goodbye."));

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_malformed_price_restarts_the_prompt() {
        let config = test_config("bad-price");
        let script = "1\n2\nShirt\nfree\n19.99\nB3\ncotton\n3\n0\n";

        let (output, cart) = run_session(script, &config);

        assert!(output.contains("Expected a decimal price, got 'free'"));
        assert!(output.contains("Name: Shirt"));
        assert_eq!(cart.total_scans(), 1);

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_negative_price_aborts_the_add() {
        let config = test_config("negative-price");
        let script = "1\n1\nMilk\n-2.00\nB1\n9\n3\n0\n";

        let (output, cart) = run_session(script, &config);

        assert!(output.contains("Cannot create product 'Milk': price -2 is negative"));
        assert!(cart.is_empty());

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_cancelling_the_submenu_adds_nothing() {
        let config = test_config("cancel");
        let script = "1\n0\n3\n0\n";

        let (output, cart) = run_session(script, &config);

        assert!(cart.is_empty());
        assert!(!output.contains("Added '"));

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_capacity_error_is_reported_and_cart_keeps_ten() {
        let config = test_config("capacity");
        let mut script = String::new();
        for _ in 0..11 {
            script.push_str("1\n2\nShirt\n19.99\nB3\ncotton\n");
        }
        script.push_str("0\n");

        let (output, cart) = run_session(&script, &config);

        assert!(output.contains("Cart is full: capacity of 10 scans reached"));
        assert_eq!(cart.total_scans(), 10);

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_checkout_clears_even_when_the_write_fails() {
        let config = test_config("write-fails");
        // Block the receipt directory with a regular file
        fs::remove_dir_all(&config.receipt_dir).ok();
        fs::write(&config.receipt_dir, b"not a directory").unwrap();

        let script = "1\n2\nShirt\n19.99\nB3\ncotton\n2\n3\n0\n";
        let (output, cart) = run_session(script, &config);

        assert!(output.contains("Failed to write receipt to "));
        // The receipt itself still printed, and the cart is gone regardless
        assert!(output.contains("Total:      19.99"));
        assert!(cart.is_empty());

        fs::remove_file(&config.receipt_dir).ok();
    }

    #[test]
    fn test_checkout_on_empty_cart_prints_zero_total() {
        let config = test_config("empty-checkout");
        let script = "2\n0\n";

        let (output, _cart) = run_session(script, &config);

        assert!(output.contains("Total:       0.00"));

        cleanup(&config.receipt_dir);
    }

    #[test]
    fn test_eof_ends_the_session() {
        let config = test_config("eof");
        let (output, _cart) = run_session("", &config);

        assert!(output.trim_end().ends_with("Goodbye."));

        cleanup(&config.receipt_dir);
    }
}
