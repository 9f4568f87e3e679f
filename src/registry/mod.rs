//! in-memory unit registry
//!
//! the record source for filter evaluation: holds unit configurations
//! in registration order and resolves full candidate collections before
//! any filtering happens. purely synchronous, nothing is persisted.

mod error;

pub use error::RegistryError;

use strsim::levenshtein;

use crate::filter::{matches, UnitFilter};
use crate::unit::{Pose, Shape, UnitConfig, Vec3};

/// maximum edit distance for "did you mean" suggestions
const FUZZY_THRESHOLD: usize = 2;

/// insertion-ordered collection of unit configurations
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<UnitConfig>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// register a new unit; ids must be unique
    pub fn register(&mut self, unit: UnitConfig) -> Result<(), RegistryError> {
        if self.units.iter().any(|u| u.id == unit.id) {
            return Err(RegistryError::DuplicateId(unit.id));
        }
        self.units.push(unit);
        Ok(())
    }

    /// look up a unit by id
    pub fn unit_config_by_id(&self, id: &str) -> Result<&UnitConfig, RegistryError> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| RegistryError::not_found(id, self.suggestions_for(id)))
    }

    /// look up a unit by one of its aliases
    pub fn unit_config_by_alias(&self, alias: &str) -> Result<&UnitConfig, RegistryError> {
        self.units
            .iter()
            .find(|u| u.aliases.iter().any(|a| a == alias))
            .ok_or_else(|| RegistryError::alias_not_found(alias, self.suggestions_for(alias)))
    }

    /// list units in registration order
    ///
    /// disabled units are excluded unless `include_disabled` is set
    pub fn unit_configs(&self, include_disabled: bool) -> Vec<&UnitConfig> {
        self.units
            .iter()
            .filter(|u| include_disabled || u.enabled)
            .collect()
    }

    /// list units matching a filter, in registration order
    pub fn unit_configs_filtered(
        &self,
        filter: &UnitFilter,
        include_disabled: bool,
    ) -> Vec<&UnitConfig> {
        self.units
            .iter()
            .filter(|u| (include_disabled || u.enabled) && matches(filter, u))
            .collect()
    }

    /// replace a registered unit with an updated config (same id)
    pub fn update_unit(&mut self, unit: UnitConfig) -> Result<(), RegistryError> {
        let existing = self.unit_mut(&unit.id)?;
        *existing = unit;
        Ok(())
    }

    /// remove a unit, returning its config
    pub fn remove_unit(&mut self, id: &str) -> Result<UnitConfig, RegistryError> {
        let index = self
            .units
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| RegistryError::not_found(id, self.suggestions_for(id)))?;
        Ok(self.units.remove(index))
    }

    /// update a unit's label for a language
    ///
    /// replaces the current best-match entry for that language, or adds
    /// a fresh entry when the unit has no label yet
    pub fn update_label(
        &mut self,
        id: &str,
        language: &str,
        label: &str,
    ) -> Result<(), RegistryError> {
        let unit = self.unit_mut(id)?;
        match unit.label.best_match(language).map(str::to_string) {
            Some(old) => unit.label.replace(&old, label),
            None => unit.label.add(language, label),
        }
        Ok(())
    }

    /// re-parent a unit into another location
    pub fn update_location(&mut self, id: &str, location_id: &str) -> Result<(), RegistryError> {
        let unit = self.unit_mut(id)?;
        unit.placement.location_id = Some(location_id.to_string());
        Ok(())
    }

    /// replace a unit's pose within its location
    pub fn update_pose(&mut self, id: &str, pose: Pose) -> Result<(), RegistryError> {
        let unit = self.unit_mut(id)?;
        unit.placement.pose = Some(pose);
        Ok(())
    }

    /// replace a location's floor outline, keeping the rest of its shape
    pub fn update_floor_plan(&mut self, id: &str, floor: Vec<Vec3>) -> Result<(), RegistryError> {
        let unit = self.unit_mut(id)?;
        let shape = unit.placement.shape.get_or_insert_with(Shape::default);
        shape.floor = floor;
        Ok(())
    }

    fn unit_mut(&mut self, id: &str) -> Result<&mut UnitConfig, RegistryError> {
        if let Some(index) = self.units.iter().position(|u| u.id == id) {
            Ok(&mut self.units[index])
        } else {
            Err(RegistryError::not_found(id, self.suggestions_for(id)))
        }
    }

    /// near-miss ids and aliases for a failed lookup, closest first
    fn suggestions_for(&self, query: &str) -> Vec<String> {
        let query_lower = query.to_lowercase();
        let mut scored: Vec<(usize, &str)> = self
            .units
            .iter()
            .flat_map(|u| std::iter::once(u.id.as_str()).chain(u.aliases.iter().map(String::as_str)))
            .filter_map(|key| {
                let distance = levenshtein(&query_lower, &key.to_lowercase());
                (distance <= FUZZY_THRESHOLD).then_some((distance, key))
            })
            .collect();
        scored.sort_by_key(|(distance, _)| *distance);
        scored.into_iter().map(|(_, key)| key.to_string()).collect()
    }
}
