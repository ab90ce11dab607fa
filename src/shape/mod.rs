//! Shapes supported by trivox.

pub use self::mesh_group::{MeshGroup, MeshGroupError};
pub use self::triangle::Triangle;

mod mesh_group;
mod triangle;
