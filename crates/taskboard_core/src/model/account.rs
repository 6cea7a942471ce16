//! Account (credential record) and session user models.
//!
//! # Invariants
//! - `email` is stored normalized (trimmed, ASCII lowercase).
//! - `password_hash` is an Argon2 PHC string; plaintext is never stored.
//! - `SessionUser` never carries credential material.

use crate::model::validation::{
    normalize_email, require_text, validate_email, validate_password, ValidationError,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type AccountId = Uuid;

/// Registered credential record persisted in the account list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl Account {
    /// Returns the public projection held as the current session.
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public subset of an account that lives in the application snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: AccountId,
    pub name: String,
    pub email: String,
}

/// Registration input after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Normalizes raw form input and validates it.
    ///
    /// The password is kept verbatim; whitespace in passwords is significant.
    pub fn parse(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let name = require_text("name", name)?;
        let email = normalize_email(email);
        validate_email(&email)?;
        validate_password(password)?;
        Ok(Self {
            name,
            email,
            password: password.to_string(),
        })
    }
}
