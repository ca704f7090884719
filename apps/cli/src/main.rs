//! # Mercat Checkout Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration (defaults + `MERCAT_*` environment overrides)
//! 3. Create the cart and the receipt writer
//! 4. Run the menu loop over locked stdin/stdout

fn main() {
    // Run the console session
    // The actual setup is in lib.rs for better testability
    if let Err(err) = mercat_cli::run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
