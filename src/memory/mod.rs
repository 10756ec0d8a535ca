//!
//! Bounds-checked access to a guest's linear memory
//!
//! Every primitive here checks `offset + size <= memory.size()` before touching the memory, and reports
//! failure as a `MemoryError`. Nothing in this module panics on guest-supplied offsets or lengths.
//!

mod guest_memory;
mod primitives;
mod iovec;

pub use self::guest_memory::*;
pub use self::primitives::*;
pub use self::iovec::*;
