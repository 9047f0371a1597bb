//! Theorem file ingestion
//!
//! Parses theorem files from JSON format and hands the converter a populated
//! construction protocol, auxiliary object table, and statement command list.

pub mod theorem_json;

use crate::model::{AuxiliaryObjects, ConstructionProtocol, StatementCommand};
use thiserror::Error;

/// A fully ingested theorem, ready for conversion
#[derive(Debug, Clone)]
pub struct LoadedTheorem {
    /// Primary construction record
    pub protocol: ConstructionProtocol,

    /// Statement-ready typed views of re-represented objects
    pub auxiliaries: AuxiliaryObjects,

    /// Statement commands in source order
    pub commands: Vec<StatementCommand>,
}

/// Theorem loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Theorem loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// File not found or unreadable
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// JSON parsing error
    #[error("parse error: {0}")]
    Parse(String),

    /// An object name is bound twice within one namespace
    #[error("duplicate object name `{0}`")]
    DuplicateObject(String),
}
