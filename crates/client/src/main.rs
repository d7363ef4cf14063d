//! Character sheet builder binary.
//!
//! ```bash
//! # Embedded tables, random seed
//! cargo run -p sheet-client
//!
//! # Custom tables and a fixed seed
//! CHARSHEET_DATA_DIR=./tables CHARSHEET_SEED=42 cargo run -p sheet-client
//! ```

use anyhow::Result;
use sheet_client::{ClientConfig, ShellBuilder, logging};
use sheet_content::ContentFactory;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting charsheet");

    let content = match &config.data_dir {
        Some(dir) => {
            tracing::info!("Loading tables from {}", dir.display());
            ContentFactory::new(dir)
        }
        None => ContentFactory::embedded(),
    };

    let mut shell = ShellBuilder::new()
        .content(content)
        .seed(config.seed)
        .build()?;

    let stdin = std::io::stdin();
    shell.run(stdin.lock(), std::io::stdout())?;

    tracing::info!("Shutdown complete");
    Ok(())
}
