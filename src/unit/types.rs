//! core types describing a unit configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::label::Label;

/// classifier for what kind of unit a config describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    #[default]
    Unknown,
    Light,
    ColorableLight,
    DimmableLight,
    Switch,
    Button,
    TemperatureSensor,
    MotionDetector,
    PowerConsumptionSensor,
    Location,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitType::Unknown => "UNKNOWN",
            UnitType::Light => "LIGHT",
            UnitType::ColorableLight => "COLORABLE_LIGHT",
            UnitType::DimmableLight => "DIMMABLE_LIGHT",
            UnitType::Switch => "SWITCH",
            UnitType::Button => "BUTTON",
            UnitType::TemperatureSensor => "TEMPERATURE_SENSOR",
            UnitType::MotionDetector => "MOTION_DETECTOR",
            UnitType::PowerConsumptionSensor => "POWER_CONSUMPTION_SENSOR",
            UnitType::Location => "LOCATION",
        };
        write!(f, "{}", name)
    }
}

/// classifier for location units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    #[default]
    Unknown,
    Region,
    Tile,
    Zone,
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocationType::Unknown => "UNKNOWN",
            LocationType::Region => "REGION",
            LocationType::Tile => "TILE",
            LocationType::Zone => "ZONE",
        };
        write!(f, "{}", name)
    }
}

/// 3d vector, used for pose translations and floor outlines
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// unit quaternion describing an orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    #[serde(default = "default_qw")]
    pub qw: f64,
    #[serde(default)]
    pub qx: f64,
    #[serde(default)]
    pub qy: f64,
    #[serde(default)]
    pub qz: f64,
}

fn default_qw() -> f64 {
    1.0
}

impl Default for Rotation {
    fn default() -> Self {
        // identity rotation
        Self {
            qw: 1.0,
            qx: 0.0,
            qy: 0.0,
            qz: 0.0,
        }
    }
}

/// spatial pose of a unit within its location
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    #[serde(default)]
    pub translation: Vec3,
    #[serde(default)]
    pub rotation: Rotation,
}

/// spatial shape of a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// floor outline as a polygon of points
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub floor: Vec<Vec3>,
}

/// where a unit is placed within the location tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// id of the location unit containing this unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// pose within the containing location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
    /// spatial shape (floor plan), meaningful for location units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
}

/// location-specific attributes
///
/// every unit carries one of these with default values; the fields are
/// only meaningful when the unit itself is a location (`root` defaults
/// to false and `location_type` to UNKNOWN on everything else)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// whether this location is the root of the location tree
    #[serde(default)]
    pub root: bool,
    #[serde(default)]
    pub location_type: LocationType,
}

/// configuration record for a single unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConfig {
    /// unique unit id
    pub id: String,
    /// alternative lookup keys
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// human-readable labels per language
    #[serde(default, skip_serializing_if = "Label::is_empty")]
    pub label: Label,
    /// disabled units are hidden from listings unless explicitly included
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub unit_type: UnitType,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

fn default_enabled() -> bool {
    true
}

impl UnitConfig {
    /// create a unit with the given id and type
    pub fn new(id: impl Into<String>, unit_type: UnitType) -> Self {
        Self {
            id: id.into(),
            aliases: Vec::new(),
            label: Label::new(),
            enabled: true,
            unit_type,
            placement: PlacementConfig::default(),
            location: LocationConfig::default(),
        }
    }

    /// create a location unit
    pub fn location(id: impl Into<String>, location_type: LocationType, root: bool) -> Self {
        let mut unit = Self::new(id, UnitType::Location);
        unit.location = LocationConfig {
            root,
            location_type,
        };
        unit
    }

    /// place the unit inside the given location
    pub fn with_placement(mut self, location_id: impl Into<String>) -> Self {
        self.placement.location_id = Some(location_id.into());
        self
    }

    /// register an alternative lookup key
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// add a label entry for a language
    pub fn with_label(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.label.add(language, text);
        self
    }

    /// mark the unit as disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
