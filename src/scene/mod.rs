//!
//! The scene graph that scripts operate on
//!
//! The scene graph itself belongs to the host: this module defines the view of it that the scripting bridge
//! needs (`SceneGraph`), the element variants that can be exposed to scripts, and `MemoryScene`, a simple
//! in-memory implementation.
//!

mod node_id;
mod values;
mod wire_enums;
mod element;
mod scene_graph;
mod memory_scene;

pub use self::node_id::*;
pub use self::values::*;
pub use self::wire_enums::*;
pub use self::element::*;
pub use self::scene_graph::*;
pub use self::memory_scene::*;
