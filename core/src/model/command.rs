//! Statement commands
//!
//! The external, untyped representation of a theorem statement: a command
//! kind plus an ordered list of argument names, produced by the command
//! source and immutable from then on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of a statement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Collinear,
    Concurrent,
    Equal,
    Parallel,
    Perpendicular,
}

impl CommandKind {
    /// Required number of arguments for this command
    pub fn arity(&self) -> usize {
        match self {
            CommandKind::Collinear => 3,
            CommandKind::Concurrent => 3,
            CommandKind::Equal => 2,
            CommandKind::Parallel => 2,
            CommandKind::Perpendicular => 2,
        }
    }

    /// Command name as written by the command source
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Collinear => "Collinear",
            CommandKind::Concurrent => "Concurrent",
            CommandKind::Equal => "Equal",
            CommandKind::Parallel => "Parallel",
            CommandKind::Perpendicular => "Perpendicular",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized command name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown statement command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for CommandKind {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Collinear" => Ok(CommandKind::Collinear),
            "Concurrent" => Ok(CommandKind::Concurrent),
            "Equal" => Ok(CommandKind::Equal),
            "Parallel" => Ok(CommandKind::Parallel),
            "Perpendicular" => Ok(CommandKind::Perpendicular),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// An untyped statement command: kind plus ordered argument names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementCommand {
    kind: CommandKind,
    args: Vec<String>,
}

impl StatementCommand {
    /// Create a command from its kind and argument names
    pub fn new(kind: CommandKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    /// Command kind
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Argument names, in the order given by the command source
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
