//! Runs every principle demonstration in order and prints their output to stdout.

use demo_framework::tracing::setup_tracing;
use demo_framework::{Console, DemoError};
use solid_sample::lifecycle::DemoCatalog;
use tracing::{error, info};

fn main() -> Result<(), DemoError> {
    setup_tracing();

    let catalog = DemoCatalog::new()?;
    match catalog.run_all(&Console::stdout()) {
        Ok(count) => {
            info!(count, "All demos completed");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Demo run aborted");
            Err(e)
        }
    }
}
