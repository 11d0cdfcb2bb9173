// Composition root.
//
// - Read config from the environment (and `.env` when present).
// - Wire Storage, the StorageDao and the RegistrationService.
// - Register one JSON user per stdin line and answer with one JSON outcome per stdout line.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, fmt};

use user_registration::adapters::in_memory::in_memory_storage_dao::StorageDaoImpl;
use user_registration::adapters::in_memory::storage::Storage;
use user_registration::application::registration_service::RegistrationServiceImpl;
use user_registration::shell::config::AppConfig;
use user_registration::shell::stdio::handle_line;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    tracing::info!(rules = ?config.rules, "starting user registration");

    let storage = Rc::new(Storage::new());
    let storage_dao = Rc::new(StorageDaoImpl::new(storage.clone()));
    let service = RegistrationServiceImpl::with_rules(config.rules, storage_dao);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let Some(outcome) = handle_line(&service, &line) else {
            continue;
        };
        writeln!(stdout, "{outcome}").context("writing stdout")?;
    }

    tracing::info!(stored = storage.len(), "done");
    Ok(())
}
