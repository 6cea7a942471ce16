//! Credential store use-cases: register and login.
//!
//! # Responsibility
//! - Own the registered account list through [`AccountRepository`].
//! - Hash passwords on register and verify them on login.
//!
//! # Invariants
//! - Email uniqueness is checked against the stored list at registration.
//! - Accounts are never updated or deleted.
//! - Login failures do not reveal whether the email or the password was wrong.
//! - Log events carry account ids only, never emails or passwords.

use crate::crypto::{hash_password, verify_password, HashError};
use crate::model::account::{Account, Registration, SessionUser};
use crate::model::validation::{normalize_email, ValidationError};
use crate::repo::account_repo::AccountRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug)]
pub enum AuthError {
    /// An account with this email is already registered.
    DuplicateEmail,
    /// No account matches the email/password pair.
    InvalidCredentials,
    Validation(ValidationError),
    Hash(HashError),
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail => write!(f, "an account with this email already exists"),
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Hash(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Hash(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::DuplicateEmail | Self::InvalidCredentials => None,
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<HashError> for AuthError {
    fn from(value: HashError) -> Self {
        Self::Hash(value)
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Validated account that is not yet stored.
#[derive(Debug)]
pub struct PendingRegistration {
    accounts: Vec<Account>,
    account: Account,
}

impl PendingRegistration {
    pub fn session_user(&self) -> SessionUser {
        self.account.session_user()
    }
}

pub struct AuthService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account and returns its session projection.
    ///
    /// # Errors
    /// - `Validation` for blank name, malformed email or short password.
    /// - `DuplicateEmail` when the normalized email is taken; the stored
    ///   list is left untouched.
    pub fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<SessionUser> {
        let pending = self.prepare_registration(name, email, password)?;
        self.commit_registration(pending)
    }

    /// Validates a registration and builds the new account without
    /// persisting anything.
    ///
    /// Callers that must establish other state first (the session) finish
    /// with [`AuthService::commit_registration`].
    pub fn prepare_registration(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<PendingRegistration> {
        let registration = Registration::parse(name, email, password)?;
        let accounts = self.repo.load_accounts()?;

        if accounts
            .iter()
            .any(|account| account.email == registration.email)
        {
            warn!("event=register module=auth status=error error_code=duplicate_email");
            return Err(AuthError::DuplicateEmail);
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: registration.name,
            email: registration.email,
            password_hash: hash_password(&registration.password)?,
        };
        Ok(PendingRegistration { accounts, account })
    }

    /// Appends the pending account to the stored list.
    ///
    /// The list is written as it was read in `prepare_registration` plus the
    /// new account; nothing else can write it in between on this
    /// single-threaded path.
    pub fn commit_registration(&self, pending: PendingRegistration) -> AuthResult<SessionUser> {
        let PendingRegistration {
            mut accounts,
            account,
        } = pending;
        let session = account.session_user();
        accounts.push(account);
        self.repo.save_accounts(&accounts)?;

        info!(
            "event=register module=auth status=ok account_id={} account_count={}",
            session.id,
            accounts.len()
        );
        Ok(session)
    }

    /// Verifies credentials and returns the matching session projection.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<SessionUser> {
        let email = normalize_email(email);
        let accounts = self.repo.load_accounts()?;

        let matched = accounts.iter().find(|account| {
            account.email == email && verify_password(password, &account.password_hash)
        });

        match matched {
            Some(account) => {
                info!(
                    "event=login module=auth status=ok account_id={}",
                    account.id
                );
                Ok(account.session_user())
            }
            None => {
                warn!("event=login module=auth status=error error_code=invalid_credentials");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Returns the number of registered accounts.
    pub fn account_count(&self) -> AuthResult<usize> {
        Ok(self.repo.load_accounts()?.len())
    }
}
