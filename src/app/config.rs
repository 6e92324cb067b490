use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Values an investor's portfolio as of a reference date.
///
/// Every option can also be set through the environment (or a `.env` file).
/// Missing investor id or date are asked for interactively.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Investor whose portfolio is valued.
    pub investor_id: Option<String>,

    /// Reference date (yyyy-MM-dd).
    #[arg(long)]
    pub date: Option<String>,

    /// Directory containing the data files. Relative file paths resolve against it.
    #[arg(long, env = "PORTFOLIO_DATA_DIR", default_value = "CsvData")]
    pub data_dir: String,

    #[arg(long, env = "PORTFOLIO_INVESTMENTS_FILE", default_value = "Investments.csv")]
    pub investments: String,

    #[arg(long, env = "PORTFOLIO_TRANSACTIONS_FILE", default_value = "Transactions.csv")]
    pub transactions: String,

    #[arg(long, env = "PORTFOLIO_QUOTES_FILE", default_value = "Quotes.csv")]
    pub quotes: String,

    /// Field separator of the data files.
    #[arg(long, env = "PORTFOLIO_DELIMITER", default_value_t = ';')]
    pub delimiter: char,

    /// Reporting currency label.
    #[arg(long, env = "PORTFOLIO_CURRENCY", default_value = "EUR")]
    pub currency: String,

    #[arg(long, env = "PORTFOLIO_OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the value of every top-level holding as well.
    #[arg(long)]
    pub breakdown: bool,

    #[arg(long, env = "PORTFOLIO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Debug, Getters)]
pub struct Config {
    data_dir: PathBuf,
    investments_file: PathBuf,
    transactions_file: PathBuf,
    quotes_file: PathBuf,
    delimiter: u8,
    currency: String,
    format: OutputFormat,
    breakdown: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !cli.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", cli.delimiter);
        }

        let data_dir = expand_path(&cli.data_dir);

        Ok(Self {
            investments_file: resolve_path(&data_dir, &cli.investments),
            transactions_file: resolve_path(&data_dir, &cli.transactions),
            quotes_file: resolve_path(&data_dir, &cli.quotes),
            data_dir,
            delimiter: cli.delimiter as u8,
            currency: cli.currency.trim().to_string(),
            format: cli.format,
            breakdown: cli.breakdown,
        })
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn resolve_path(data_dir: &Path, file: &str) -> PathBuf {
    let path = expand_path(file);
    if path.is_absolute() {
        path
    } else {
        data_dir.join(path)
    }
}
