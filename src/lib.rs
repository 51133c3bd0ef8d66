// Fórmula Mágica Dashboard - Core Library
// Exposes all modules for use in the TUI, report mode, and tests

pub mod allocation;
pub mod br_number;
pub mod company;
pub mod live_input;
pub mod loader;
pub mod ranking;

// Only compile the UI module when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use allocation::{
    allocate, AllocationReport, AllocationSummary, PurchaseLot, DEFAULT_INVESTMENT_TEXT,
};
pub use br_number::{
    format_br_auto, format_br_float, format_br_int, format_thousands, parse_br_number,
};
pub use company::{render_execution_date, Column, Company};
pub use live_input::{
    format_input_live, FieldKind, FieldRegistry, FormatOutcome, MIN_VOLUME_INPUT,
    TOTAL_INVESTMENT_INPUT,
};
pub use loader::{execution_date, load_companies, DEFAULT_CSV_PATH};
pub use ranking::{
    rank_companies, RankingParams, DEFAULT_MIN_VOLUME_TEXT, MAX_TOP_N, MIN_TOP_N,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
