//! Spatial partitioning tools.

pub use self::bounds_node::{BoundsNode, LeafTriangle};

mod bounds_node;
