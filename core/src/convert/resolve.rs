//! Argument resolution over ordered namespace tiers
//!
//! Statement arguments are names that must all be bound in the *same*
//! namespace. Commands that consult more than one namespace (Equal) try the
//! tiers in order; a tier is accepted only if every argument resolves there,
//! so a partial hit never mixes objects from different tiers.

use crate::model::{AuxiliaryObjects, ConstructionProtocol, GeoObject};

/// A named lookup scope for statement arguments
pub trait Namespace {
    /// Look up an object by name
    fn lookup(&self, name: &str) -> Option<&GeoObject>;
}

impl Namespace for ConstructionProtocol {
    fn lookup(&self, name: &str) -> Option<&GeoObject> {
        ConstructionProtocol::lookup(self, name)
    }
}

impl Namespace for AuxiliaryObjects {
    fn lookup(&self, name: &str) -> Option<&GeoObject> {
        AuxiliaryObjects::lookup(self, name)
    }
}

/// Resolve every argument name from a single namespace tier
///
/// Tiers are tried in order; the first tier that binds all names wins and
/// its objects are returned in argument order. On failure the name of an
/// argument missing from the last tier tried is returned.
pub fn resolve_args(
    args: &[String],
    tiers: &[&dyn Namespace],
) -> Result<Vec<GeoObject>, String> {
    'tiers: for tier in tiers {
        let mut resolved = Vec::with_capacity(args.len());
        for name in args {
            match tier.lookup(name) {
                Some(object) => resolved.push(object.clone()),
                None => continue 'tiers,
            }
        }
        return Ok(resolved);
    }

    let missing = tiers
        .last()
        .and_then(|tier| args.iter().find(|name| tier.lookup(name).is_none()))
        .or_else(|| args.first());
    match missing {
        Some(name) => Err(name.clone()),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Line, Point, Segment};

    fn args(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn primary_with_points(names: &[&str]) -> ConstructionProtocol {
        let mut protocol = ConstructionProtocol::new();
        for name in names {
            protocol.add_object(GeoObject::Point(Point::new(*name)));
        }
        protocol
    }

    #[test]
    fn test_single_tier_resolution() {
        let protocol = primary_with_points(&["A", "B"]);

        let resolved = resolve_args(&args(&["B", "A"]), &[&protocol]).unwrap();

        let names: Vec<&str> = resolved.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["B", "A"], "Objects should come back in argument order");
    }

    #[test]
    fn test_missing_name_reported() {
        let protocol = primary_with_points(&["A"]);

        let missing = resolve_args(&args(&["A", "X"]), &[&protocol]).unwrap_err();
        assert_eq!(missing, "X");
    }

    #[test]
    fn test_earlier_tier_wins() {
        let mut auxiliaries = AuxiliaryObjects::new();
        auxiliaries.insert(GeoObject::Segment(Segment::new("AB", "A", "B")));
        auxiliaries.insert(GeoObject::Segment(Segment::new("CD", "C", "D")));

        let mut protocol = ConstructionProtocol::new();
        protocol.add_object(GeoObject::Line(Line::new("AB", vec![])));
        protocol.add_object(GeoObject::Line(Line::new("CD", vec![])));

        let resolved =
            resolve_args(&args(&["AB", "CD"]), &[&auxiliaries, &protocol]).unwrap();

        assert!(
            resolved.iter().all(|o| o.clone().into_segment().is_some()),
            "Auxiliary tier should take precedence when both tiers bind all names"
        );
    }

    #[test]
    fn test_fallback_to_later_tier() {
        // Only one name is bound in the auxiliary tier; both are bound in the
        // primary tier, so the primary tier resolves the whole argument list.
        let mut auxiliaries = AuxiliaryObjects::new();
        auxiliaries.insert(GeoObject::Segment(Segment::new("AB", "A", "B")));

        let protocol = primary_with_points(&["AB", "CD"]);

        let resolved =
            resolve_args(&args(&["AB", "CD"]), &[&auxiliaries, &protocol]).unwrap();

        assert!(
            resolved.iter().all(|o| o.clone().into_point().is_some()),
            "A tier with a partial hit should be skipped entirely"
        );
    }

    #[test]
    fn test_no_cross_tier_mix() {
        // "AB" is only auxiliary, "CD" only primary: no single tier binds
        // both, so resolution fails even though each name is bound somewhere.
        let mut auxiliaries = AuxiliaryObjects::new();
        auxiliaries.insert(GeoObject::Segment(Segment::new("AB", "A", "B")));

        let protocol = primary_with_points(&["CD"]);

        let missing =
            resolve_args(&args(&["AB", "CD"]), &[&auxiliaries, &protocol]).unwrap_err();
        assert_eq!(missing, "AB", "The name absent from the last tier is reported");
    }

    #[test]
    fn test_empty_auxiliary_tier() {
        let auxiliaries = AuxiliaryObjects::new();
        let protocol = primary_with_points(&["A", "B"]);

        let resolved =
            resolve_args(&args(&["A", "B"]), &[&auxiliaries, &protocol]).unwrap();
        assert_eq!(resolved.len(), 2);
    }
}
