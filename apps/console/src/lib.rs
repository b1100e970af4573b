//! # Stocklist Console Library
//!
//! Application shell for the Stocklist inventory manager.
//!
//! ## Module Organization
//! ```text
//! stocklist_console/
//! ├── lib.rs          ◄─── You are here (startup & demo driver)
//! ├── state.rs        ◄─── Shared inventory handle (Arc<Mutex<_>>)
//! ├── commands.rs     ◄─── Mutation dispatch surface + view DTOs
//! ├── seed.rs         ◄─── Synthetic record generator
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Parse Arguments ──────────────────────────────────────────────────► │
//! │     • --count: number of records to generate                            │
//! │     • --per-page: page size                                             │
//! │                                                                         │
//! │  3. Seed the Store ───────────────────────────────────────────────────► │
//! │     • Generate synthetic records, validate, bulk-load                   │
//! │                                                                         │
//! │  4. Run the Scripted Session ─────────────────────────────────────────► │
//! │     • Filter, sort, paginate, select, bulk delete                       │
//! │     • Print each page view (the presentation layer, reduced to          │
//! │       println)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::PageView;
use error::ApiError;
use state::InventoryHandle;
use stocklist_core::{ItemField, Money, SortDirection};

/// Parsed command line options.
struct Options {
    count: usize,
    per_page: usize,
    help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            count: 500,
            per_page: 10,
            help: false,
        }
    }
}

/// Parses command line arguments (skipping the program name).
fn parse_args(args: &[String]) -> Options {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    opts.count = args[i + 1].parse().unwrap_or(opts.count);
                    i += 1;
                }
            }
            "--per-page" | "-p" => {
                if i + 1 < args.len() {
                    opts.per_page = args[i + 1].parse().unwrap_or(opts.per_page);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                opts.help = true;
            }
            _ => {}
        }
        i += 1;
    }

    opts
}

fn print_usage() {
    println!("Stocklist Inventory Console");
    println!();
    println!("Usage: stocklist [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>       Number of records to generate (default: 500)");
    println!("  -p, --per-page <N>    Page size (default: 10)");
    println!("  -h, --help            Show this help message");
}

/// Renders a page view as a plain text table.
fn print_page(title: &str, view: &PageView) {
    println!();
    println!("── {} ──", title);
    println!(
        "{:<38} {:<28} {:<12} {:>10} {:>7}",
        "id", "name", "category", "price", "stock"
    );
    for row in &view.rows {
        let marker = match (row.selected, row.low_stock) {
            (true, true) => " [x][low]",
            (true, false) => " [x]",
            (false, true) => " [low]",
            (false, false) => "",
        };
        println!(
            "{:<38} {:<28} {:<12} {:>10} {:>7}{}",
            row.item.id,
            row.item.name,
            row.item.category,
            Money::from_cents(row.item.price_cents).to_string(),
            row.item.quantity_in_stock,
            marker,
        );
    }
    let sort = match view.sort_by {
        Some(field) => format!(
            "{} {}",
            field.as_str(),
            match view.sort_direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            }
        ),
        None => "none".to_string(),
    };
    println!(
        "page {}/{} · {} matching · sort: {} · selected: {}",
        view.current_page, view.total_pages, view.total_filtered, sort, view.selected_count,
    );
}

/// Runs the console application.
pub fn run(args: &[String]) -> Result<(), ApiError> {
    init_tracing();

    let opts = parse_args(args);
    if opts.help {
        print_usage();
        return Ok(());
    }

    info!(count = opts.count, per_page = opts.per_page, "Starting Stocklist console");

    // Seed the store
    let handle = InventoryHandle::new();
    let loaded = commands::load_inventory(&handle, seed::generate(opts.count))?;
    commands::set_items_per_page(&handle, opts.per_page)?;
    info!(loaded, "Inventory seeded");

    println!("Categories: {}", commands::get_categories(&handle).join(", "));
    print_page("Initial inventory", &commands::get_page(&handle));

    // Filter to one category, in-stock only
    commands::set_filter(&handle, ItemField::Category, "Electronics", true);
    let view = commands::set_in_stock_only(&handle, true);
    print_page("Electronics, in stock", &view);

    // Sort by price, cheapest first, then flip
    commands::set_sort(&handle, ItemField::Price);
    print_page("Sorted by price ↑", &commands::get_page(&handle));
    let view = commands::set_sort(&handle, ItemField::Price);
    print_page("Sorted by price ↓", &view);

    // Walk to the second page
    let view = commands::set_page(&handle, 2)?;
    print_page("Page 2", &view);

    // Select the first two rows on this page and bulk delete them
    let targets: Vec<String> = view.rows.iter().take(2).map(|r| r.item.id.clone()).collect();
    for id in &targets {
        commands::toggle_selection(&handle, id);
    }
    print_page("Two rows selected", &commands::get_page(&handle));
    let view = commands::delete_selected(&handle);
    print_page("After bulk delete", &view);

    // Back to the full list
    commands::clear_all_filters(&handle);
    commands::set_in_stock_only(&handle, false);
    let view = commands::set_page(&handle, 1)?;
    print_page("All products", &view);

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Respects RUST_LOG if set, otherwise defaults to info.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stocklist=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
