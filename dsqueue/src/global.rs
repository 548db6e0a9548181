use super::*;

use std::sync::OnceLock;
use tracing::info;

static DEFAULT_QUEUE: OnceLock<QueryQueue> = OnceLock::new();

/// Install the process-wide default queue for `client`.
/// The default queue lives until the process exits and can be installed only once.
pub fn install(client: Client) -> Result<&'static QueryQueue> {
    install_with_config(client, RunnerConfig::default())
}

pub fn install_with_config(client: Client, config: RunnerConfig) -> Result<&'static QueryQueue> {
    let mut installed = false;
    let q = DEFAULT_QUEUE.get_or_init(|| {
        installed = true;
        QueryQueue::with_config(client, config)
    });
    ensure!(installed, Error::AlreadyInstalled);
    info!("installed the default query queue (client={})", q.client().id());
    Ok(q)
}

/// The process-wide default queue.
pub fn global() -> Result<&'static QueryQueue> {
    match DEFAULT_QUEUE.get() {
        Some(q) => Ok(q),
        None => bail!(Error::NotInstalled),
    }
}
