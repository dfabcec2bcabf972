use std::fmt;
use std::sync::Arc;
use std::time::Duration;

mod domain;
mod infrastructure;
mod interfaces;
pub mod client;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, limiter};
pub use interfaces::{handlers, repositories, routes};

use limiter::rate_limiter::SubmissionLimiter;
use repositories::{
    contact_me::ContactMessageRepository,
    memory::MemoryStore,
    projects::ProjectRepository,
    sqlx_repo::{SqlxContactMessageRepo, SqlxProjectRepo},
};
use settings::AppConfig;
use use_cases::{contact::ContactHandler, projects::ProjectHandler};

pub type SharedProjectRepo = Arc<dyn ProjectRepository>;
pub type SharedContactRepo = Arc<dyn ContactMessageRepository>;
pub type AppProjectHandler = ProjectHandler<SharedProjectRepo>;
pub type AppContactHandler = ContactHandler<SharedContactRepo>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::Memory => "memory",
        };
        write!(f, "{s}")
    }
}

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub contact_limiter: SubmissionLimiter,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn with_postgres(config: &AppConfig, pool: sqlx::PgPool) -> Self {
        let project_repo: SharedProjectRepo = Arc::new(SqlxProjectRepo::new(pool.clone()));
        let contact_repo: SharedContactRepo = Arc::new(SqlxContactMessageRepo::new(pool));

        AppState::assemble(config, project_repo, contact_repo, StorageBackend::Postgres)
    }

    pub fn with_memory(config: &AppConfig, store: MemoryStore) -> Self {
        let project_repo: SharedProjectRepo = Arc::new(store.clone());
        let contact_repo: SharedContactRepo = Arc::new(store);

        AppState::assemble(config, project_repo, contact_repo, StorageBackend::Memory)
    }

    fn assemble(
        config: &AppConfig,
        project_repo: SharedProjectRepo,
        contact_repo: SharedContactRepo,
        storage: StorageBackend,
    ) -> Self {
        AppState {
            project_handler: ProjectHandler::new(project_repo),
            contact_handler: ContactHandler::new(contact_repo),
            contact_limiter: SubmissionLimiter::new(
                config.contact_rate_limit,
                Duration::from_secs(config.contact_rate_window_secs),
            ),
            storage,
        }
    }
}
