//!
//! The scene ABI: functions that guests import to query and update scene elements
//!
//! The ABI is defined by the `SceneAbi` trait. `SceneAbiAdapter` implements it against a guest's linear memory
//! and a `ScriptSession`, and the functions in the `host` module link it into a WASM instance.
//!

mod scene_abi;
mod element_event;
mod adapter;

pub use self::scene_abi::*;
pub use self::element_event::*;
pub use self::adapter::*;
