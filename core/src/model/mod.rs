//! Data model for statement conversion
//!
//! This module provides the core data structures of the conversion stage:
//! - **objects**: the closed set of geometric object variants, identified by name
//! - **protocol**: the construction protocol (primary symbol table, ordered steps,
//!   theorem metadata) and the auxiliary object table
//! - **command**: the external, untyped statement commands
//! - **statement**: the typed theorem statements handed to proof engines

mod command;
mod objects;
mod protocol;
mod statement;

// Re-export all public items for convenient access
pub use command::{CommandKind, StatementCommand, UnknownCommand};
pub use objects::{Angle, Circle, GeoObject, Line, ObjectKind, Point, Segment};
pub use protocol::{AuxiliaryObjects, ConstructionProtocol, ConstructionStep};
pub use statement::{StatementKind, ThmStatement};
