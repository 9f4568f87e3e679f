//! unit filter system
//!
//! a filter is a tree of property constraints combined with boolean
//! composition:
//! - each node carries optional equality constraints on unit fields
//!   (unset fields are wildcards)
//! - `negate` inverts the node's own property test (NOT)
//! - an `and` child must also match (AND)
//! - an `or` child matches independently and overrides the rest (OR)
//!
//! filter trees arrive already structured (e.g. deserialized from the
//! JSON the surrounding system speaks); evaluation is pure and never
//! fails.

mod eval;
mod types;

pub use eval::{matches, select_matching};
pub use types::{FilterProperties, UnitFilter};
