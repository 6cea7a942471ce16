//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage keys and encoding.

pub mod app_store;
pub mod auth_service;
pub mod workspace;
