use anyhow::Result;
use std::env;
use std::path::Path;

use formula_magica::{
    allocate, execution_date, load_companies, parse_br_number, rank_companies, AllocationReport,
    AllocationSummary, PurchaseLot, RankingParams, DEFAULT_CSV_PATH, DEFAULT_INVESTMENT_TEXT,
    DEFAULT_MIN_VOLUME_TEXT,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "report" {
        // Report mode: JSON allocation report on stdout
        run_report(args.get(2).map(String::as_str))?;
    } else {
        // Dashboard mode (default)
        run_ui_mode(args.get(1).map(String::as_str))?;
    }

    Ok(())
}

fn run_report(csv_arg: Option<&str>) -> Result<()> {
    let csv_path = Path::new(csv_arg.unwrap_or(DEFAULT_CSV_PATH));

    // Status on stderr; stdout carries only the JSON
    eprintln!("🧮 Fórmula Mágica - Relatório de Alocação");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    eprintln!("\n📂 Loading CSV...");
    let companies = load_companies(csv_path)?;
    eprintln!("✓ Loaded {} companies from CSV", companies.len());

    // Panel defaults, parsed from their BR-formatted seed texts
    let params = RankingParams {
        min_volume: parse_br_number(DEFAULT_MIN_VOLUME_TEXT).unwrap_or(0.0),
        ..RankingParams::default()
    };
    let total_investment = parse_br_number(DEFAULT_INVESTMENT_TEXT).unwrap_or(0.0);
    let purchase_lot = PurchaseLot::Fractional;

    let mut ranked = rank_companies(&companies, &params);
    allocate(&mut ranked, total_investment, purchase_lot);

    let report = AllocationReport {
        execution_date: execution_date(&companies),
        params,
        purchase_lot,
        summary: AllocationSummary::compute(&ranked, total_investment),
        companies: ranked,
    };

    eprintln!("✓ Ranked {} companies\n", report.companies.len());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(csv_arg: Option<&str>) -> Result<()> {
    use formula_magica::ui;

    let csv_path = Path::new(csv_arg.unwrap_or(DEFAULT_CSV_PATH));

    if !csv_path.exists() {
        eprintln!("❌ CSV export not found: {}", csv_path.display());
        eprintln!("   Coloque o fundamentus_data.csv ao lado do binário,");
        eprintln!("   ou passe o caminho: formula-magica <arquivo.csv>");
        std::process::exit(1);
    }

    println!("🧮 Loading Fórmula Mágica dashboard...\n");

    println!("📂 Loading companies...");
    let companies = load_companies(csv_path)?;
    println!("✓ Loaded {} companies\n", companies.len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(companies);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_csv_arg: Option<&str>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or produce a JSON report: formula-magica report");
    std::process::exit(1);
}
