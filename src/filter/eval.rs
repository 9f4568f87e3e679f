//! filter evaluator
//!
//! evaluates a filter tree against unit configurations. evaluation is a
//! pure function of its inputs: no I/O, no mutation, safe to run
//! concurrently over shared filters and units.

use super::types::UnitFilter;
use crate::unit::UnitConfig;

/// evaluate a filter against a single unit
///
/// the node result is `(property_match && and_child) || or_child`:
/// a missing AND child never blocks a match, a missing OR child never
/// forces one, and an OR child that matches overrides everything else.
pub fn matches(filter: &UnitFilter, unit: &UnitConfig) -> bool {
    (property_match(filter, unit) && and_match(filter, unit)) || or_match(filter, unit)
}

/// select the units matching a filter, preserving input order
///
/// duplicates are kept; an empty result is a valid outcome, not an
/// error.
pub fn select_matching<'a>(filter: &UnitFilter, units: &'a [UnitConfig]) -> Vec<&'a UnitConfig> {
    units.iter().filter(|unit| matches(filter, unit)).collect()
}

/// test the node's own property constraints
///
/// constraints are checked in a fixed order (unit type, location id,
/// location root, location type); the first failing constraint decides
/// the result as `negate`, and only if all set constraints pass does
/// the node yield `!negate`. unset constraints are wildcards.
fn property_match(filter: &UnitFilter, unit: &UnitConfig) -> bool {
    let properties = &filter.properties;

    // filter by type
    if let Some(unit_type) = properties.unit_type {
        if unit_type != unit.unit_type {
            return filter.negate;
        }
    }

    // filter by location
    if let Some(location_id) = &properties.location_id {
        if unit.placement.location_id.as_deref() != Some(location_id.as_str()) {
            return filter.negate;
        }
    }

    // filter by location root
    // literal value equality: non-location units compare via their
    // default root flag (false)
    if let Some(root) = properties.location_root {
        if root != unit.location.root {
            return filter.negate;
        }
    }

    // filter by location type
    if let Some(location_type) = properties.location_type {
        if location_type != unit.location.location_type {
            return filter.negate;
        }
    }

    !filter.negate
}

fn and_match(filter: &UnitFilter, unit: &UnitConfig) -> bool {
    match &filter.and {
        Some(and) => matches(and, unit),
        None => true,
    }
}

fn or_match(filter: &UnitFilter, unit: &UnitConfig) -> bool {
    match &filter.or {
        Some(or) => matches(or, unit),
        None => false,
    }
}
