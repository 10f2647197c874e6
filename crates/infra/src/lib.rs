mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, IEventRepo, IInterestRepo, IReminderRepo, Repos};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

/// Everything a use case needs from the outside world. It is created once
/// and handed to each request and job explicitly.
#[derive(Clone)]
pub struct MoyeoraContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl MoyeoraContext {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<MoyeoraContext> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => MoyeoraContext::create_postgres(&connection_string).await,
        Err(_) => {
            warn!(
                "{} env var is not set, using inmemory repos. Nothing will be persisted.",
                PSQL_CONNECTION_STRING
            );
            Ok(MoyeoraContext::create_inmemory())
        }
    }
}
