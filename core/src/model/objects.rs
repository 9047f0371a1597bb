//! Geometric object model
//!
//! The closed set of geometric object variants the converter dispatches over.
//! Each object carries a unique name plus variant-specific descriptor data;
//! the converter itself only consumes the name and the variant tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A free or constructed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Unique name within the construction protocol
    pub name: String,
}

impl Point {
    /// Create a point with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A line, described by the points known to lie on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Unique name within the construction protocol
    pub name: String,

    /// Names of points the line passes through
    #[serde(default)]
    pub points: Vec<String>,
}

impl Line {
    /// Create a line through the given points
    pub fn new(name: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// A circle, described by its center and the points known to lie on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    /// Unique name within the construction protocol
    pub name: String,

    /// Name of the center point, if constructed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,

    /// Names of points the circle passes through
    #[serde(default)]
    pub points: Vec<String>,
}

impl Circle {
    /// Create a circle with the given center and incident points
    pub fn new(name: impl Into<String>, center: Option<String>, points: Vec<String>) -> Self {
        Self {
            name: name.into(),
            center,
            points,
        }
    }
}

/// A segment between two endpoints.
///
/// Segments are materialized in the primary namespace as lines through their
/// endpoints; this typed view lives in the auxiliary object table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Unique name within its namespace
    pub name: String,

    /// First endpoint name
    pub end_a: String,

    /// Second endpoint name
    pub end_b: String,
}

impl Segment {
    /// Create a segment between two named endpoints
    pub fn new(name: impl Into<String>, end_a: impl Into<String>, end_b: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            end_a: end_a.into(),
            end_b: end_b.into(),
        }
    }
}

/// An angle given by its vertex and one point on each arm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Angle {
    /// Unique name within its namespace
    pub name: String,

    /// Vertex point name
    pub vertex: String,

    /// Point on the first arm
    pub arm_a: String,

    /// Point on the second arm
    pub arm_b: String,
}

impl Angle {
    /// Create an angle from its vertex and arm points
    pub fn new(
        name: impl Into<String>,
        vertex: impl Into<String>,
        arm_a: impl Into<String>,
        arm_b: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex: vertex.into(),
            arm_a: arm_a.into(),
            arm_b: arm_b.into(),
        }
    }
}

/// Variant discriminator for geometric objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Point,
    Line,
    Circle,
    Segment,
    Angle,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObjectKind::Point => "point",
            ObjectKind::Line => "line",
            ObjectKind::Circle => "circle",
            ObjectKind::Segment => "segment",
            ObjectKind::Angle => "angle",
        };
        write!(f, "{}", label)
    }
}

/// A geometric object of any variant
///
/// Objects are immutable descriptors; identity is the name, which is unique
/// within the namespace that owns the object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeoObject {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Segment(Segment),
    Angle(Angle),
}

impl GeoObject {
    /// Name of the object, unique within its namespace
    pub fn name(&self) -> &str {
        match self {
            GeoObject::Point(p) => &p.name,
            GeoObject::Line(l) => &l.name,
            GeoObject::Circle(c) => &c.name,
            GeoObject::Segment(s) => &s.name,
            GeoObject::Angle(a) => &a.name,
        }
    }

    /// Variant tag, usable for exhaustive dispatch
    pub fn kind(&self) -> ObjectKind {
        match self {
            GeoObject::Point(_) => ObjectKind::Point,
            GeoObject::Line(_) => ObjectKind::Line,
            GeoObject::Circle(_) => ObjectKind::Circle,
            GeoObject::Segment(_) => ObjectKind::Segment,
            GeoObject::Angle(_) => ObjectKind::Angle,
        }
    }

    /// Downcast to a point
    pub fn into_point(self) -> Option<Point> {
        match self {
            GeoObject::Point(p) => Some(p),
            _ => None,
        }
    }

    /// Downcast to a line
    pub fn into_line(self) -> Option<Line> {
        match self {
            GeoObject::Line(l) => Some(l),
            _ => None,
        }
    }

    /// Downcast to a circle
    pub fn into_circle(self) -> Option<Circle> {
        match self {
            GeoObject::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Downcast to a segment
    pub fn into_segment(self) -> Option<Segment> {
        match self {
            GeoObject::Segment(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast to an angle
    pub fn into_angle(self) -> Option<Angle> {
        match self {
            GeoObject::Angle(a) => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_kind() {
        let object = GeoObject::Line(Line::new("p", vec!["A".to_string(), "B".to_string()]));

        assert_eq!(object.name(), "p");
        assert_eq!(object.kind(), ObjectKind::Line);
    }

    #[test]
    fn test_downcasts() {
        let point = GeoObject::Point(Point::new("A"));

        assert!(point.clone().into_point().is_some());
        assert!(point.into_line().is_none(), "Point should not downcast to line");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ObjectKind::Segment.to_string(), "segment");
        assert_eq!(ObjectKind::Angle.to_string(), "angle");
    }

    #[test]
    fn test_json_tagging() {
        let object = GeoObject::Segment(Segment::new("AB", "A", "B"));
        let json = serde_json::to_string(&object).unwrap();

        assert!(json.contains("\"kind\":\"segment\""));

        let restored: GeoObject = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, object);
    }

    #[test]
    fn test_line_points_default() {
        let line: GeoObject =
            serde_json::from_str(r#"{"kind":"line","name":"q"}"#).unwrap();

        assert_eq!(line.kind(), ObjectKind::Line);
        assert!(line.into_line().unwrap().points.is_empty());
    }
}
