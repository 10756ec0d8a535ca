use super::memory_error::*;

///
/// The subset of `wasi_snapshot_preview1` errno values that the system call shim can return
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(i32)]
pub enum Errno {
    Success = 0,
    Badf    = 8,
    Fault   = 21,
    Inval   = 28,
    Io      = 29,
    Nosys   = 52,
}

impl From<Errno> for i32 {
    #[inline]
    fn from(errno: Errno) -> i32 {
        errno as i32
    }
}

impl From<MemoryError> for Errno {
    fn from(error: MemoryError) -> Errno {
        match error {
            MemoryError::OutOfBounds            => Errno::Fault,
            MemoryError::InsufficientBufferSize => Errno::Fault,
            MemoryError::MemoryUnavailable      => Errno::Fault,
        }
    }
}

impl<T> From<Result<T, Errno>> for Errno {
    fn from(result: Result<T, Errno>) -> Errno {
        match result {
            Ok(_)       => Errno::Success,
            Err(errno)  => errno,
        }
    }
}
