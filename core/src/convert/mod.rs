//! Statement converter
//!
//! Lowers untyped statement commands into typed theorem statements against a
//! read-only construction protocol and auxiliary object table. Each command
//! kind has one conversion operation: arity check, then resolution of every
//! argument name, then an exhaustive dispatch on the variant of the first
//! resolved object, then typed construction.
//!
//! Conversion is pure and synchronous over borrowed immutable inputs; a
//! converter may be used from multiple threads for the duration of a batch.
//!
//! # Example
//!
//! ```rust
//! use geothm_core::model::*;
//! use geothm_core::convert::Converter;
//!
//! // A construction with three named points
//! let mut protocol = ConstructionProtocol::new();
//! for name in ["A", "B", "C"] {
//!     protocol.add_object(GeoObject::Point(Point::new(name)));
//! }
//! let auxiliaries = AuxiliaryObjects::new();
//!
//! // Lower an external command into a typed statement
//! let command = StatementCommand::new(
//!     CommandKind::Collinear,
//!     vec!["A".into(), "B".into(), "C".into()],
//! );
//! let converter = Converter::new(&protocol, &auxiliaries);
//! let statement = converter.convert(&command).unwrap();
//!
//! assert_eq!(statement.object_names(), vec!["A", "B", "C"]);
//! ```

mod resolve;

pub use resolve::{resolve_args, Namespace};

use crate::model::{
    Angle, AuxiliaryObjects, Circle, CommandKind, ConstructionProtocol, GeoObject, Line,
    ObjectKind, Point, Segment, StatementCommand, ThmStatement,
};
use thiserror::Error;
use tracing::error;

/// Errors that can occur while converting a single statement command
///
/// All variants are local and non-fatal: a failed conversion yields no
/// statement and never aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Wrong number of arguments; nothing was resolved
    #[error("{command} statement requires {expected} arguments, got {found}")]
    Arity {
        command: CommandKind,
        expected: usize,
        found: usize,
    },

    /// A named argument has no bound object in the applicable namespaces
    #[error("{command} statement references unknown object `{name}`")]
    UnresolvedSymbol { command: CommandKind, name: String },

    /// The variant of the first resolved object has no statement for this command
    #[error("{command} statement does not support {kind} arguments")]
    UnsupportedType {
        command: CommandKind,
        kind: ObjectKind,
    },

    /// A later argument's variant disagrees with the one used for dispatch
    #[error("{command} statement expected `{name}` to be a {expected}, found {found}")]
    TypeMismatch {
        command: CommandKind,
        name: String,
        expected: ObjectKind,
        found: ObjectKind,
    },
}

/// Result type for conversion operations
pub type ConvertResult<T = ThmStatement> = Result<T, ConvertError>;

/// Converter from statement commands to typed theorem statements
///
/// Borrows the protocol and the auxiliary table for the duration of a batch;
/// both are read-only here.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    protocol: &'a ConstructionProtocol,
    auxiliaries: &'a AuxiliaryObjects,
}

impl<'a> Converter<'a> {
    /// Create a converter over a populated protocol and auxiliary table
    pub fn new(protocol: &'a ConstructionProtocol, auxiliaries: &'a AuxiliaryObjects) -> Self {
        Self {
            protocol,
            auxiliaries,
        }
    }

    /// Convert one statement command into a typed theorem statement
    pub fn convert(&self, command: &StatementCommand) -> ConvertResult {
        match command.kind() {
            CommandKind::Collinear => self.convert_collinear(command),
            CommandKind::Concurrent => self.convert_concurrent(command),
            CommandKind::Equal => self.convert_equal(command),
            CommandKind::Parallel => self.convert_parallel(command),
            CommandKind::Perpendicular => self.convert_perpendicular(command),
        }
    }

    /// Convert a batch of commands, skipping failures
    ///
    /// Each failure is reported once to the error sink; the produced
    /// statements keep the relative order of the succeeding commands.
    pub fn convert_batch(&self, commands: &[StatementCommand]) -> Vec<ThmStatement> {
        let mut statements = Vec::with_capacity(commands.len());
        for command in commands {
            match self.convert(command) {
                Ok(statement) => statements.push(statement),
                Err(err) => error!("failed to convert statement: {err}"),
            }
        }
        statements
    }

    /// Collinear: three points from the primary namespace
    fn convert_collinear(&self, command: &StatementCommand) -> ConvertResult {
        let objects = self.resolved(command, &[self.protocol as &dyn Namespace])?;

        let mut points = Vec::with_capacity(objects.len());
        for (name, object) in command.args().iter().zip(objects) {
            points.push(expect_point(command.kind(), name, object)?);
        }
        Ok(ThmStatement::CollinearPoints(points))
    }

    /// Concurrent: three lines or three circles from the primary namespace
    fn convert_concurrent(&self, command: &StatementCommand) -> ConvertResult {
        let objects = self.resolved(command, &[self.protocol as &dyn Namespace])?;

        match objects[0].kind() {
            ObjectKind::Line => {
                let mut lines = Vec::with_capacity(objects.len());
                for (name, object) in command.args().iter().zip(objects) {
                    lines.push(expect_line(command.kind(), name, object)?);
                }
                Ok(ThmStatement::ConcurrentLines(lines))
            }
            ObjectKind::Circle => {
                let mut circles = Vec::with_capacity(objects.len());
                for (name, object) in command.args().iter().zip(objects) {
                    circles.push(expect_circle(command.kind(), name, object)?);
                }
                Ok(ThmStatement::ConcurrentCircles(circles))
            }
            kind @ (ObjectKind::Point | ObjectKind::Segment | ObjectKind::Angle) => {
                Err(ConvertError::UnsupportedType {
                    command: command.kind(),
                    kind,
                })
            }
        }
    }

    /// Equal: two points, segments, or angles
    ///
    /// Segments and angles live in the primary namespace under a different
    /// representation, so the auxiliary tier is consulted first and the
    /// primary tier only when the auxiliary one misses an argument.
    fn convert_equal(&self, command: &StatementCommand) -> ConvertResult {
        let objects = self.resolved(
            command,
            &[self.auxiliaries as &dyn Namespace, self.protocol as &dyn Namespace],
        )?;
        let args = command.args();

        match objects[0].kind() {
            ObjectKind::Point => {
                let p1 = expect_point(command.kind(), &args[0], objects[0].clone())?;
                let p2 = expect_point(command.kind(), &args[1], objects[1].clone())?;
                Ok(ThmStatement::IdenticalPoints(p1, p2))
            }
            ObjectKind::Segment => {
                let s1 = expect_segment(command.kind(), &args[0], objects[0].clone())?;
                let s2 = expect_segment(command.kind(), &args[1], objects[1].clone())?;
                Ok(ThmStatement::SegmentsOfEqualLengths(s1, s2))
            }
            ObjectKind::Angle => {
                let a1 = expect_angle(command.kind(), &args[0], objects[0].clone())?;
                let a2 = expect_angle(command.kind(), &args[1], objects[1].clone())?;
                Ok(ThmStatement::EqualAngles(a1, a2))
            }
            kind @ (ObjectKind::Line | ObjectKind::Circle) => {
                Err(ConvertError::UnsupportedType {
                    command: command.kind(),
                    kind,
                })
            }
        }
    }

    /// Parallel: two lines from the primary namespace
    fn convert_parallel(&self, command: &StatementCommand) -> ConvertResult {
        let objects = self.resolved(command, &[self.protocol as &dyn Namespace])?;
        let args = command.args();

        let l1 = expect_line(command.kind(), &args[0], objects[0].clone())?;
        let l2 = expect_line(command.kind(), &args[1], objects[1].clone())?;
        Ok(ThmStatement::TwoParallelLines(l1, l2))
    }

    /// Perpendicular: two lines from the primary namespace
    fn convert_perpendicular(&self, command: &StatementCommand) -> ConvertResult {
        let objects = self.resolved(command, &[self.protocol as &dyn Namespace])?;
        let args = command.args();

        let l1 = expect_line(command.kind(), &args[0], objects[0].clone())?;
        let l2 = expect_line(command.kind(), &args[1], objects[1].clone())?;
        Ok(ThmStatement::TwoPerpendicularLines(l1, l2))
    }

    /// Check arity, then resolve every argument through the given tiers
    fn resolved(
        &self,
        command: &StatementCommand,
        tiers: &[&dyn Namespace],
    ) -> ConvertResult<Vec<GeoObject>> {
        let expected = command.kind().arity();
        let found = command.args().len();
        if found != expected {
            return Err(ConvertError::Arity {
                command: command.kind(),
                expected,
                found,
            });
        }

        resolve_args(command.args(), tiers).map_err(|name| ConvertError::UnresolvedSymbol {
            command: command.kind(),
            name,
        })
    }
}

fn expect_point(command: CommandKind, name: &str, object: GeoObject) -> ConvertResult<Point> {
    let found = object.kind();
    object.into_point().ok_or_else(|| ConvertError::TypeMismatch {
        command,
        name: name.to_string(),
        expected: ObjectKind::Point,
        found,
    })
}

fn expect_line(command: CommandKind, name: &str, object: GeoObject) -> ConvertResult<Line> {
    let found = object.kind();
    object.into_line().ok_or_else(|| ConvertError::TypeMismatch {
        command,
        name: name.to_string(),
        expected: ObjectKind::Line,
        found,
    })
}

fn expect_circle(command: CommandKind, name: &str, object: GeoObject) -> ConvertResult<Circle> {
    let found = object.kind();
    object.into_circle().ok_or_else(|| ConvertError::TypeMismatch {
        command,
        name: name.to_string(),
        expected: ObjectKind::Circle,
        found,
    })
}

fn expect_segment(command: CommandKind, name: &str, object: GeoObject) -> ConvertResult<Segment> {
    let found = object.kind();
    object.into_segment().ok_or_else(|| ConvertError::TypeMismatch {
        command,
        name: name.to_string(),
        expected: ObjectKind::Segment,
        found,
    })
}

fn expect_angle(command: CommandKind, name: &str, object: GeoObject) -> ConvertResult<Angle> {
    let found = object.kind();
    object.into_angle().ok_or_else(|| ConvertError::TypeMismatch {
        command,
        name: name.to_string(),
        expected: ObjectKind::Angle,
        found,
    })
}
