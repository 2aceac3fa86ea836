use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zugdienst_scanner::batch::run_batch;
use zugdienst_scanner::config::BatchConfig;
use zugdienst_scanner::store::ServiceStore;

/// Scan Zusi timetable directories and write the reconciled service rows
/// to a SQLite database.
#[derive(Parser)]
#[command(name = "zugdienst-scanner", version)]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(default_value = "config.json")]
    config: PathBuf,

    /// Override the result database path from the configuration.
    #[arg(long)]
    database: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match BatchConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    // Validated during load, so this cannot fail here
    let overrides = match config.overrides() {
        Ok(overrides) => overrides,
        Err(e) => {
            error!(error = %e, "cannot build override table");
            return ExitCode::FAILURE;
        }
    };

    let (records, summary) = run_batch(&config, &overrides);

    let database = cli.database.unwrap_or_else(|| config.database.clone());
    let mut store = match ServiceStore::open(&database) {
        Ok(store) => store,
        Err(e) => {
            error!(db = %database.display(), error = %e, "cannot open result database");
            return ExitCode::FAILURE;
        }
    };

    let today = chrono::Local::now().date_naive();
    if let Err(e) = store.write_all(&records, today) {
        error!(db = %database.display(), error = %e, "cannot write result tables");
        return ExitCode::FAILURE;
    }

    info!(db = %database.display(), rows = records.len(), "done");
    ExitCode::SUCCESS
}
