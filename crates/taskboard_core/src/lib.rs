//! Core domain logic for taskboard: a local, single-user project and task
//! tracker.
//!
//! State lives in an [`AppStore`] that persists one snapshot per mutation
//! through a [`SnapshotRepository`]; credentials live in a separate account
//! list behind an [`AccountRepository`].

pub mod config;
pub mod crypto;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::account::{Account, AccountId, SessionUser};
pub use model::project::{NewProject, Project, ProjectId, ProjectPatch};
pub use model::snapshot::{Snapshot, Theme};
pub use model::task::{NewTask, Task, TaskId, TaskPatch, TaskPriority, TaskStatus};
pub use model::validation::ValidationError;
pub use query::dashboard::{DashboardStats, ProjectProgress};
pub use query::filter::{filter_tasks, search_projects, sort_for_display, TaskQuery};
pub use repo::account_repo::{AccountRepository, KvAccountRepository, ACCOUNTS_KEY};
pub use repo::snapshot_repo::{KvSnapshotRepository, SnapshotRepository, SNAPSHOT_KEY};
pub use repo::{RepoError, RepoResult};
pub use service::app_store::{AppStore, StoreError, StoreResult};
pub use service::auth_service::{AuthError, AuthResult, AuthService, PendingRegistration};
pub use service::workspace::{open_sqlite_workspace, SqliteWorkspace, Workspace, WorkspaceError};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
