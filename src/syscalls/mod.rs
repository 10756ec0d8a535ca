//!
//! A minimal `wasi_snapshot_preview1` shim
//!
//! Guests compiled for `wasm32-wasi` expect to find the WASI system calls when they are linked. This supplies the
//! handful that a runtime needs to start and write diagnostics, and declares the rest so that linking never fails.
//!

mod clock;
mod string_list;
mod system_calls;
mod unsupported;

pub use self::clock::*;
pub use self::string_list::*;
pub use self::system_calls::*;
pub use self::unsupported::*;
