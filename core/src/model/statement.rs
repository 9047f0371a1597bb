//! Theorem statement model
//!
//! Typed assertions about named geometric objects, ready for a proof engine.
//! Statements are created exclusively by the converter and own clones of the
//! immutable object descriptors they were built from.

use super::objects::{Angle, Circle, Line, Point, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed theorem statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThmStatement {
    /// Three points lie on the same line
    CollinearPoints(Vec<Point>),

    /// Three lines pass through a common point
    ConcurrentLines(Vec<Line>),

    /// Three circles pass through a common point
    ConcurrentCircles(Vec<Circle>),

    /// Two points coincide
    IdenticalPoints(Point, Point),

    /// Two segments have equal length
    SegmentsOfEqualLengths(Segment, Segment),

    /// Two angles have equal measure
    EqualAngles(Angle, Angle),

    /// Two lines are parallel
    TwoParallelLines(Line, Line),

    /// Two lines are perpendicular
    TwoPerpendicularLines(Line, Line),
}

/// Statement variant discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    CollinearPoints,
    ConcurrentLines,
    ConcurrentCircles,
    IdenticalPoints,
    SegmentsOfEqualLengths,
    EqualAngles,
    TwoParallelLines,
    TwoPerpendicularLines,
}

impl ThmStatement {
    /// Get the variant of this statement
    pub fn kind(&self) -> StatementKind {
        match self {
            ThmStatement::CollinearPoints(_) => StatementKind::CollinearPoints,
            ThmStatement::ConcurrentLines(_) => StatementKind::ConcurrentLines,
            ThmStatement::ConcurrentCircles(_) => StatementKind::ConcurrentCircles,
            ThmStatement::IdenticalPoints(_, _) => StatementKind::IdenticalPoints,
            ThmStatement::SegmentsOfEqualLengths(_, _) => StatementKind::SegmentsOfEqualLengths,
            ThmStatement::EqualAngles(_, _) => StatementKind::EqualAngles,
            ThmStatement::TwoParallelLines(_, _) => StatementKind::TwoParallelLines,
            ThmStatement::TwoPerpendicularLines(_, _) => StatementKind::TwoPerpendicularLines,
        }
    }

    /// Names of the referenced objects, in statement argument order
    pub fn object_names(&self) -> Vec<&str> {
        match self {
            ThmStatement::CollinearPoints(points) => {
                points.iter().map(|p| p.name.as_str()).collect()
            }
            ThmStatement::ConcurrentLines(lines) => {
                lines.iter().map(|l| l.name.as_str()).collect()
            }
            ThmStatement::ConcurrentCircles(circles) => {
                circles.iter().map(|c| c.name.as_str()).collect()
            }
            ThmStatement::IdenticalPoints(a, b) => vec![&a.name, &b.name],
            ThmStatement::SegmentsOfEqualLengths(a, b) => vec![&a.name, &b.name],
            ThmStatement::EqualAngles(a, b) => vec![&a.name, &b.name],
            ThmStatement::TwoParallelLines(a, b) => vec![&a.name, &b.name],
            ThmStatement::TwoPerpendicularLines(a, b) => vec![&a.name, &b.name],
        }
    }
}

impl fmt::Display for ThmStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.object_names();
        match self {
            ThmStatement::CollinearPoints(_) => {
                write!(f, "points {} are collinear", names.join(", "))
            }
            ThmStatement::ConcurrentLines(_) => {
                write!(f, "lines {} are concurrent", names.join(", "))
            }
            ThmStatement::ConcurrentCircles(_) => {
                write!(f, "circles {} are concurrent", names.join(", "))
            }
            ThmStatement::IdenticalPoints(a, b) => {
                write!(f, "points {} and {} are identical", a.name, b.name)
            }
            ThmStatement::SegmentsOfEqualLengths(a, b) => {
                write!(f, "segments {} and {} have equal lengths", a.name, b.name)
            }
            ThmStatement::EqualAngles(a, b) => {
                write!(f, "angles {} and {} are equal", a.name, b.name)
            }
            ThmStatement::TwoParallelLines(a, b) => {
                write!(f, "lines {} and {} are parallel", a.name, b.name)
            }
            ThmStatement::TwoPerpendicularLines(a, b) => {
                write!(f, "lines {} and {} are perpendicular", a.name, b.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminator() {
        let statement = ThmStatement::TwoParallelLines(
            Line::new("p", vec![]),
            Line::new("q", vec![]),
        );

        assert_eq!(statement.kind(), StatementKind::TwoParallelLines);
    }

    #[test]
    fn test_object_names_order() {
        let statement = ThmStatement::CollinearPoints(vec![
            Point::new("B"),
            Point::new("A"),
            Point::new("C"),
        ]);

        assert_eq!(statement.object_names(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_display() {
        let statement = ThmStatement::SegmentsOfEqualLengths(
            Segment::new("AB", "A", "B"),
            Segment::new("CD", "C", "D"),
        );

        assert_eq!(statement.to_string(), "segments AB and CD have equal lengths");
    }

    #[test]
    fn test_json_round_trip() {
        let statement = ThmStatement::EqualAngles(
            Angle::new("ABC", "B", "A", "C"),
            Angle::new("DEF", "E", "D", "F"),
        );

        let json = serde_json::to_string(&statement).unwrap();
        let restored: ThmStatement = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, statement);
    }
}
