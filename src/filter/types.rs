//! filter tree types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unit::{LocationType, UnitType};

/// property constraints of a single filter node
///
/// every field is optional; an unset field is a wildcard and never
/// causes a mismatch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterProperties {
    /// match units of exactly this type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    /// match units placed in the location with this id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// match units whose location root flag equals this value
    ///
    /// compared by literal value equality: non-location units carry the
    /// default root flag (false), so `Some(true)` never matches them
    /// while `Some(false)` always does. do not set this on filters
    /// meant to also match non-location units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_root: Option<bool>,
    /// match location units of exactly this location type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
}

impl FilterProperties {
    /// constrain on unit type
    pub fn unit_type(unit_type: UnitType) -> Self {
        Self {
            unit_type: Some(unit_type),
            ..Self::default()
        }
    }

    /// constrain on the containing location
    pub fn location_id(location_id: impl Into<String>) -> Self {
        Self {
            location_id: Some(location_id.into()),
            ..Self::default()
        }
    }

    /// constrain on the location root flag
    pub fn location_root(root: bool) -> Self {
        Self {
            location_root: Some(root),
            ..Self::default()
        }
    }

    /// constrain on location type
    pub fn location_type(location_type: LocationType) -> Self {
        Self {
            location_type: Some(location_type),
            ..Self::default()
        }
    }

    pub fn with_unit_type(mut self, unit_type: UnitType) -> Self {
        self.unit_type = Some(unit_type);
        self
    }

    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn with_location_root(mut self, root: bool) -> Self {
        self.location_root = Some(root);
        self
    }

    pub fn with_location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = Some(location_type);
        self
    }

    /// true when no constraint is set (matches everything)
    pub fn is_empty(&self) -> bool {
        self.unit_type.is_none()
            && self.location_id.is_none()
            && self.location_root.is_none()
            && self.location_type.is_none()
    }
}

impl fmt::Display for FilterProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "any");
        }
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            if first {
                first = false;
                Ok(())
            } else {
                write!(f, ", ")
            }
        };
        if let Some(unit_type) = self.unit_type {
            sep(f)?;
            write!(f, "type == {}", unit_type)?;
        }
        if let Some(location_id) = &self.location_id {
            sep(f)?;
            write!(f, "location == \"{}\"", location_id)?;
        }
        if let Some(root) = self.location_root {
            sep(f)?;
            write!(f, "root == {}", root)?;
        }
        if let Some(location_type) = self.location_type {
            sep(f)?;
            write!(f, "location_type == {}", location_type)?;
        }
        Ok(())
    }
}

/// one node of a filter expression tree
///
/// each node exclusively owns its children; the tree is acyclic by
/// construction and discarded after use
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitFilter {
    #[serde(default, skip_serializing_if = "FilterProperties::is_empty")]
    pub properties: FilterProperties,
    /// invert this node's own property test (the AND/OR children are
    /// never negated by this flag)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub negate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<Box<UnitFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub or: Option<Box<UnitFilter>>,
}

impl UnitFilter {
    /// filter with the given property constraints and no children
    pub fn new(properties: FilterProperties) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    /// filter that matches every unit
    pub fn any() -> Self {
        Self::default()
    }

    /// filter with the given property constraints, negated
    pub fn negated(properties: FilterProperties) -> Self {
        Self {
            properties,
            negate: true,
            ..Self::default()
        }
    }

    /// attach an AND child: the result must also satisfy `other`
    pub fn and(mut self, other: UnitFilter) -> Self {
        self.and = Some(Box::new(other));
        self
    }

    /// attach an OR child: a unit matching `other` matches regardless
    /// of this node's own result
    pub fn or(mut self, other: UnitFilter) -> Self {
        self.or = Some(Box::new(other));
        self
    }
}

impl UnitFilter {
    fn fmt_local(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negate {
            write!(f, "not({})", self.properties)
        } else {
            write!(f, "{}", self.properties)
        }
    }
}

impl fmt::Display for UnitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.and, &self.or) {
            (None, None) => self.fmt_local(f),
            (Some(and), None) => {
                self.fmt_local(f)?;
                write!(f, " and ({})", and)
            }
            (None, Some(or)) => {
                self.fmt_local(f)?;
                write!(f, " or ({})", or)
            }
            (Some(and), Some(or)) => {
                write!(f, "(")?;
                self.fmt_local(f)?;
                write!(f, " and ({})) or ({})", and, or)
            }
        }
    }
}
