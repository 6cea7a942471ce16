//! Read-side helpers over in-memory collections.
//!
//! # Responsibility
//! - Filter and order tasks/projects for list views.
//! - Aggregate dashboard statistics.
//!
//! # Invariants
//! - Helpers never mutate or persist; they borrow store slices.

pub mod dashboard;
pub mod filter;
