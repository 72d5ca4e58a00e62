//! Domain layer for the Contact Manager backend.
//!
//! This crate contains:
//! - Domain models (User, Contact)
//! - Request/response DTOs shared between routes and repositories

pub mod models;
