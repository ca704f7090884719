//! # Mercat Checkout Console
//!
//! Library for the interactive checkout console. `main.rs` is a thin entry
//! point; session setup and the loop live here.
//!
//! ## Module Organization
//! ```text
//! mercat_cli/
//! ├── lib.rs          ◄─── You are here (session setup & run)
//! ├── config.rs       ◄─── Store name, receipt directory, capacity
//! ├── input.rs        ◄─── Console: explicit reader/writer for the loop
//! ├── menu.rs         ◄─── Menu loop and the add/list/checkout flows
//! ├── receipt.rs      ◄─── Receipt artifact writer
//! └── error.rs        ◄─── CliError
//! ```
//!
//! The session is single-threaded and strictly synchronous: the loop blocks
//! on input, and each operation runs to completion before the next prompt.

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod receipt;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mercat_core::Cart;

use crate::config::Config;
use crate::error::CliResult;
use crate::input::Console;
use crate::receipt::ReceiptWriter;

/// Runs the checkout console over stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, so the interactive stream stays clean)
/// 2. Load configuration (defaults + `MERCAT_*` overrides)
/// 3. Create the cart and the receipt writer
/// 4. Hand everything to the menu loop
pub fn run() -> CliResult<()> {
    init_tracing();

    let config = Config::from_env();
    info!(
        store = %config.store_name,
        capacity = config.capacity,
        receipts = %config.receipt_dir.display(),
        "starting checkout console"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut cart = Cart::with_capacity(config.capacity);
    let writer = ReceiptWriter::new(config.receipt_dir.clone());

    menu::run_loop(&mut console, &mut cart, &config, &writer)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=mercat_cli=trace` - Show trace for the console only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mercat_core=debug,mercat_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
