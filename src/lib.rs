// library crate for unit-registry
// an in-memory registry of smart-home unit configurations plus a
// composable boolean filter evaluator over them

pub mod filter;
pub mod registry;
pub mod unit;

pub use filter::{matches, select_matching, FilterProperties, UnitFilter};
pub use registry::{RegistryError, UnitRegistry};
pub use unit::{
    Label, LocationConfig, LocationType, PlacementConfig, Pose, Rotation, Shape, UnitConfig,
    UnitType, Vec3,
};
