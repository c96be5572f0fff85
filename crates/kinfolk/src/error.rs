//! Error types for Kinfolk operations.
//!
//! This module provides the main error type [`KinfolkError`] which wraps the
//! error conditions of every stage: reading snapshots, checking the graph
//! structure, talking to a [`FamilyStore`](crate::store::FamilyStore),
//! looking people up and interpreting configuration.

use std::io;

use thiserror::Error;

use kinfolk_core::identifier::Id;

use crate::{store::StoreError, structure::StructureError};

/// The main error type for Kinfolk operations.
#[derive(Debug, Error)]
pub enum KinfolkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Unknown person `{0}`")]
    UnknownPerson(Id),

    #[error("Configuration error: {0}")]
    Config(String),
}
