//! Session facade over the credential store and the application store.
//!
//! # Responsibility
//! - Turn successful register/login into a persisted session user.
//! - Clear the session on logout.
//!
//! # Invariants
//! - A failed register/login leaves the current session untouched.
//! - The session user is not re-validated against the account list later.

use crate::model::account::SessionUser;
use crate::repo::account_repo::{AccountRepository, KvAccountRepository};
use crate::repo::snapshot_repo::{KvSnapshotRepository, SnapshotRepository};
use crate::service::app_store::{AppStore, StoreError, StoreResult};
use crate::service::auth_service::{AuthError, AuthService};
use crate::storage::SqliteKeyValueStore;
use log::error;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum WorkspaceError {
    Auth(AuthError),
    Store(StoreError),
}

impl Display for WorkspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<AuthError> for WorkspaceError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<StoreError> for WorkspaceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Workspace with both documents stored in one SQLite connection.
pub type SqliteWorkspace<'conn> = Workspace<
    KvAccountRepository<SqliteKeyValueStore<'conn>>,
    KvSnapshotRepository<SqliteKeyValueStore<'conn>>,
>;

/// Opens a workspace over a connection from `db::open_db*`.
pub fn open_sqlite_workspace(conn: &Connection) -> StoreResult<SqliteWorkspace<'_>> {
    let auth = AuthService::new(KvAccountRepository::new(SqliteKeyValueStore::new(conn)));
    let store = AppStore::open(KvSnapshotRepository::new(SqliteKeyValueStore::new(conn)))?;
    Ok(Workspace::new(auth, store))
}

pub struct Workspace<A: AccountRepository, S: SnapshotRepository> {
    auth: AuthService<A>,
    store: AppStore<S>,
}

impl<A: AccountRepository, S: SnapshotRepository> Workspace<A, S> {
    pub fn new(auth: AuthService<A>, store: AppStore<S>) -> Self {
        Self { auth, store }
    }

    /// Registers an account and makes it the session user.
    ///
    /// The session is saved first and the account list second. If the
    /// account list cannot be saved the previous session is restored, so a
    /// failed register leaves neither an orphan account nor a half session.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, WorkspaceError> {
        let pending = self.auth.prepare_registration(name, email, password)?;
        let previous = self.store.user().cloned();
        self.store.set_user(pending.session_user())?;

        match self.auth.commit_registration(pending) {
            Ok(user) => Ok(user),
            Err(err) => {
                let restored = match previous {
                    Some(user) => self.store.set_user(user),
                    None => self.store.clear_user(),
                };
                if let Err(restore_err) = restored {
                    error!(
                        "event=register module=workspace status=error error_code=session_restore_failed error={}",
                        restore_err
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Logs in and makes the matching account the session user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionUser, WorkspaceError> {
        let user = self.auth.login(email, password)?;
        self.store.set_user(user.clone())?;
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), WorkspaceError> {
        self.store.clear_user()?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.store.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.user().is_some()
    }

    pub fn store(&self) -> &AppStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AppStore<S> {
        &mut self.store
    }
}
