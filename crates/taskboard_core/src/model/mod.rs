//! Domain model for accounts, projects, tasks and the persisted snapshot.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and services.
//! - Normalize and validate user input before it reaches persistence.
//!
//! # Invariants
//! - Every project, task and account is identified by a UUID v4.
//! - Tasks reference projects by id only; the store owns the cascade rule.

pub mod account;
pub mod project;
pub mod snapshot;
pub mod task;
pub mod validation;
