mod abi_status;
mod errno;
mod memory_error;
mod script_error;

pub use self::abi_status::*;
pub use self::errno::*;
pub use self::memory_error::*;
pub use self::script_error::*;
