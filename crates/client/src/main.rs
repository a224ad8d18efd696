//! Pity calculator binary.
//!
//! ```bash
//! # Reproducible session with a custom save location
//! PITY_SEED=42 PITY_STATE_PATH=./state.json cargo run -p pity-client
//! ```

use std::io;

use anyhow::{Context, Result};
use pity_client::{ClientConfig, Console, Menu, logging, rng};
use pity_core::Rules;
use pity_runtime::{FileStateRepository, PullService};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(&config.log_dir)?;

    tracing::info!("Starting pity calculator");
    tracing::info!("State file: {}", config.state_path.display());

    // 3. Check the built-in rule set
    let rules = Rules::default();
    rules.validate().context("built-in rules are inconsistent")?;

    // 4. Open persistence
    let repository = FileStateRepository::new(&config.state_path, rules).with_context(|| {
        format!(
            "failed to open state file at {}",
            config.state_path.display()
        )
    })?;

    // 5. Run the menu
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut menu = Menu::new(
        PullService::new(rules, repository),
        console,
        rng::select_source(config.seed),
        config.table_rows,
    );

    menu.run()
}
