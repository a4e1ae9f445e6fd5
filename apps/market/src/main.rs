//! # FarmLink Market Entry Point
//!
//! Headless smoke run of the client stores.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `FARMLINK_*` variables
//! 3. Start a session and walk the buyer flow (see `farmlink_market::run`)

use farmlink_market::state::ConfigState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    farmlink_market::init_tracing();

    let config = ConfigState::from_env();
    farmlink_market::run(config).await?;

    Ok(())
}
