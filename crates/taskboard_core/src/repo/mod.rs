//! Repository layer: typed JSON documents over a [`KeyValueStore`].
//!
//! # Responsibility
//! - Define the persistence contracts the store and auth service depend on.
//! - Keep key names and JSON encoding inside the persistence boundary.
//!
//! # Invariants
//! - Each document lives under one fixed key and is rewritten wholesale.
//! - Read paths reject undecodable documents instead of masking them.
//!
//! [`KeyValueStore`]: crate::storage::KeyValueStore

use crate::storage::{KeyValueStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod account_repo;
pub mod snapshot_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    /// Document exists but could not be decoded.
    InvalidData {
        key: &'static str,
        source: serde_json::Error,
    },
    /// Document could not be encoded.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData { key, source } => {
                write!(f, "invalid persisted data under `{key}`: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode document: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidData { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

fn read_document<T, S>(store: &S, key: &'static str) -> RepoResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| RepoError::InvalidData { key, source })
}

fn write_document<T, S>(store: &S, key: &'static str, value: &T) -> RepoResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(RepoError::Encode)?;
    store.set_item(key, &raw)?;
    Ok(())
}
