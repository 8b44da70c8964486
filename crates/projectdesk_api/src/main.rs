//! API server entry point.
//!
//! Usage: `projectdesk-api [config.toml]`; `PROJECTDESK_CONFIG` is used when
//! no argument is given.

use log::error;
use projectdesk_api::{serve, ApiConfig, AppState};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const CONFIG_ENV: &str = "PROJECTDESK_CONFIG";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=api status=error error={err}");
            eprintln!("projectdesk-api: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);

    let config = ApiConfig::load(config_path.as_deref())?;
    config.init_logging()?;

    let store = config.secret_store()?;
    let target = config.resolve_database(store.as_ref())?;
    let conn = target.open()?;
    let addr = config.bind_addr()?;

    serve(addr, AppState::new(conn)).await?;
    Ok(())
}
