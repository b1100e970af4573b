//! # Stocklist Console Entry Point
//!
//! Seeds an in-memory inventory store with synthetic records and walks a
//! scripted session through the command surface: filter, sort, paginate,
//! select, bulk delete.
//!
//! ```bash
//! # Default: 500 records, 10 per page
//! cargo run -p stocklist-console
//!
//! # Custom sizes
//! cargo run -p stocklist-console -- --count 2000 --per-page 25
//! ```

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match stocklist_console::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
