//! unit configuration data model
//!
//! a unit is any entity the surrounding system manages: a device
//! (light, switch, sensor, ...), a service, or a location. units carry
//! a type classifier, a placement reference pointing at the location
//! that contains them, and location-specific attributes that are only
//! meaningful when the unit itself is a location.

mod label;
mod types;

pub use label::Label;
pub use types::{
    LocationConfig, LocationType, PlacementConfig, Pose, Rotation, Shape, UnitConfig, UnitType,
    Vec3,
};
