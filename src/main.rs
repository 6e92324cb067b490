use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use portfolio_valuation::{
    app::{
        Cli, Config,
        logging::init_tracing,
        report,
        utils::{parse_as_of, parse_investor_id, prompt_stdin},
    },
    db::load_snapshot,
    services::ValuationService,
};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = Config::from_cli(&cli)?;

    let investor_id = match &cli.investor_id {
        Some(investor_id) => investor_id.clone(),
        None => prompt_stdin("Enter Investor ID: ")?,
    };
    let investor_id = parse_investor_id(&investor_id)?;

    let date = match &cli.date {
        Some(date) => date.clone(),
        None => prompt_stdin("Enter Reference Date (yyyy-MM-dd): ")?,
    };
    let as_of = parse_as_of(&date)?;

    info!("Using data directory {}", config.data_dir().display());
    let store = load_snapshot(
        config.investments_file(),
        config.transactions_file(),
        config.quotes_file(),
        *config.delimiter(),
    )?;
    let service = ValuationService::from_store(Arc::new(store));

    info!(
        "Calculating portfolio value for Investor {} on {}",
        investor_id,
        as_of.format("%Y-%m-%d")
    );
    let valuation = service.value_portfolio(&investor_id, as_of);

    if valuation.failed_count() > 0 {
        info!(
            "{} of {} holdings could not be valued and were counted as zero",
            valuation.failed_count(),
            valuation.holdings().len()
        );
    }

    println!(
        "{}",
        report::render(
            &valuation,
            *config.format(),
            config.currency(),
            *config.breakdown()
        )?
    );

    Ok(())
}
