//! Construction protocol and auxiliary object table
//!
//! The protocol is the in-memory record of a geometric construction: the
//! primary name-to-object table (insertion order = construction order), the
//! ordered construction steps, and the theorem metadata. It is populated by
//! the ingestion layer and read-only for the duration of a conversion batch.

use super::objects::GeoObject;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single construction step descriptor, kept for reporting only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionStep {
    /// Name of the constructed object
    pub object: String,

    /// Free-form description of the construction, e.g. "midpoint of A and B"
    pub construction: String,
}

impl ConstructionStep {
    /// Create a step descriptor
    pub fn new(object: impl Into<String>, construction: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            construction: construction.into(),
        }
    }
}

impl fmt::Display for ConstructionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.object, self.construction)
    }
}

/// The primary record of a geometric construction
///
/// Object names are unique; inserting a second object under an existing name
/// is rejected. The steps sequence is append-only and never consulted during
/// conversion.
#[derive(Debug, Clone, Default)]
pub struct ConstructionProtocol {
    theorem_name: Option<String>,
    steps: Vec<ConstructionStep>,

    // Name -> object table plus insertion order (construction order)
    objects: FxHashMap<String, GeoObject>,
    order: Vec<String>,
}

impl ConstructionProtocol {
    /// Create an empty protocol
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theorem name
    pub fn set_theorem_name(&mut self, name: impl Into<String>) {
        self.theorem_name = Some(name.into());
    }

    /// Theorem name, if one was recorded
    pub fn theorem_name(&self) -> Option<&str> {
        self.theorem_name.as_deref()
    }

    /// Append a construction step descriptor
    pub fn add_step(&mut self, step: ConstructionStep) {
        self.steps.push(step);
    }

    /// Construction steps in build order
    pub fn steps(&self) -> &[ConstructionStep] {
        &self.steps
    }

    /// Register a constructed object under its name
    ///
    /// Returns true if the name was free, false if it was already taken;
    /// the existing object is never replaced.
    pub fn add_object(&mut self, object: GeoObject) -> bool {
        let name = object.name().to_string();
        if self.objects.contains_key(&name) {
            return false;
        }
        self.objects.insert(name.clone(), object);
        self.order.push(name);
        true
    }

    /// Look up an object by name in the primary namespace
    pub fn lookup(&self, name: &str) -> Option<&GeoObject> {
        self.objects.get(name)
    }

    /// Iterate over objects in construction order
    pub fn objects(&self) -> impl Iterator<Item = &GeoObject> {
        self.order.iter().filter_map(|name| self.objects.get(name))
    }

    /// Number of constructed objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the protocol holds no objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Secondary name-to-object table for statement-ready typed views
///
/// Holds objects that exist in the primary namespace under a different
/// representation, e.g. a segment whose primary counterpart is a line
/// through its endpoints. May be empty, in which case every lookup misses.
#[derive(Debug, Clone, Default)]
pub struct AuxiliaryObjects {
    objects: FxHashMap<String, GeoObject>,
}

impl AuxiliaryObjects {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an auxiliary object under its name
    ///
    /// Returns true if the name was free, false if it was already taken.
    pub fn insert(&mut self, object: GeoObject) -> bool {
        let name = object.name().to_string();
        if self.objects.contains_key(&name) {
            return false;
        }
        self.objects.insert(name, object);
        true
    }

    /// Look up an object by name
    pub fn lookup(&self, name: &str) -> Option<&GeoObject> {
        self.objects.get(name)
    }

    /// Number of auxiliary objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::objects::{Line, Point, Segment};
    use super::*;

    #[test]
    fn test_object_registration() {
        let mut protocol = ConstructionProtocol::new();

        assert!(protocol.add_object(GeoObject::Point(Point::new("A"))));
        assert!(protocol.add_object(GeoObject::Point(Point::new("B"))));
        assert_eq!(protocol.len(), 2);

        let found = protocol.lookup("A").expect("A should be registered");
        assert_eq!(found.name(), "A");
        assert!(protocol.lookup("C").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut protocol = ConstructionProtocol::new();
        protocol.add_object(GeoObject::Point(Point::new("A")));

        let duplicate = GeoObject::Line(Line::new("A", vec![]));
        assert!(!protocol.add_object(duplicate), "Duplicate name should be rejected");

        // The original object survives
        assert_eq!(protocol.lookup("A").unwrap(), &GeoObject::Point(Point::new("A")));
        assert_eq!(protocol.len(), 1);
    }

    #[test]
    fn test_construction_order() {
        let mut protocol = ConstructionProtocol::new();
        for name in ["C", "A", "B"] {
            protocol.add_object(GeoObject::Point(Point::new(name)));
        }

        let names: Vec<&str> = protocol.objects().map(|o| o.name()).collect();
        assert_eq!(names, vec!["C", "A", "B"], "Iteration should follow insertion order");
    }

    #[test]
    fn test_theorem_name_and_steps() {
        let mut protocol = ConstructionProtocol::new();
        assert!(protocol.theorem_name().is_none());

        protocol.set_theorem_name("midline");
        protocol.add_step(ConstructionStep::new("A", "free point"));
        protocol.add_step(ConstructionStep::new("M", "midpoint of A and B"));

        assert_eq!(protocol.theorem_name(), Some("midline"));
        assert_eq!(protocol.steps().len(), 2);
        assert_eq!(protocol.steps()[1].to_string(), "M: midpoint of A and B");
    }

    #[test]
    fn test_auxiliary_lookup() {
        let mut auxiliaries = AuxiliaryObjects::new();
        assert!(auxiliaries.is_empty());
        assert!(auxiliaries.lookup("AB").is_none());

        assert!(auxiliaries.insert(GeoObject::Segment(Segment::new("AB", "A", "B"))));
        assert!(!auxiliaries.insert(GeoObject::Segment(Segment::new("AB", "A", "B"))));

        assert_eq!(auxiliaries.len(), 1);
        assert!(auxiliaries.lookup("AB").is_some());
    }

    #[test]
    fn test_same_name_across_namespaces() {
        // A segment is stored as a line in the primary namespace and as a
        // typed segment in the auxiliary table, under the same name.
        let mut protocol = ConstructionProtocol::new();
        let mut auxiliaries = AuxiliaryObjects::new();

        protocol.add_object(GeoObject::Line(Line::new(
            "AB",
            vec!["A".to_string(), "B".to_string()],
        )));
        auxiliaries.insert(GeoObject::Segment(Segment::new("AB", "A", "B")));

        assert_eq!(protocol.lookup("AB").unwrap().kind().to_string(), "line");
        assert_eq!(auxiliaries.lookup("AB").unwrap().kind().to_string(), "segment");
    }
}
