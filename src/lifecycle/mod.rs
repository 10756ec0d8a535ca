//!
//! Loading scripts and driving their lifecycle
//!

mod script_state;
mod module_source;
mod script_exports;
mod script_component;

pub use self::script_state::*;
pub use self::module_source::*;
pub use self::script_component::*;
