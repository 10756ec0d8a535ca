use super::memory_error::*;

///
/// Status code returned to the guest by every scene ABI call
///
/// These are sent across the boundary as an `i32`, so the values here are part of the wire protocol
/// and must not be renumbered.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(i32)]
pub enum AbiStatus {
    /// The call completed
    Success                 = 0,

    /// The call could not run because the host is not in a state to service it (no memory bound, session unavailable)
    UnknownError            = 1,

    /// A parameter could not be decoded (bad pointer, bad length, unknown enum value)
    InvalidArgument         = 2,

    /// The call is declared but has no implementation in this host
    NotImplemented          = 3,

    /// The descriptor or id does not name an element in the scene
    ElementNotFound         = 4,

    /// The guest supplied a buffer that is too small for the result
    InsufficientBufferSize  = 5,

    /// The element exists but does not support the requested attribute
    UnsupportedOperation    = 6,
}

impl AbiStatus {
    ///
    /// True if this status represents success
    ///
    #[inline]
    pub fn is_success(&self) -> bool {
        *self == AbiStatus::Success
    }

    ///
    /// Converts a raw status value (eg, from a guest test harness) back into a status
    ///
    pub fn from_code(code: i32) -> Option<AbiStatus> {
        use AbiStatus::*;

        match code {
            0 => Some(Success),
            1 => Some(UnknownError),
            2 => Some(InvalidArgument),
            3 => Some(NotImplemented),
            4 => Some(ElementNotFound),
            5 => Some(InsufficientBufferSize),
            6 => Some(UnsupportedOperation),
            _ => None,
        }
    }
}

impl From<AbiStatus> for i32 {
    #[inline]
    fn from(status: AbiStatus) -> i32 {
        status as i32
    }
}

impl<T> From<Result<T, AbiStatus>> for AbiStatus {
    fn from(result: Result<T, AbiStatus>) -> AbiStatus {
        match result {
            Ok(_)       => AbiStatus::Success,
            Err(status) => status,
        }
    }
}

impl From<MemoryError> for AbiStatus {
    fn from(error: MemoryError) -> AbiStatus {
        match error {
            MemoryError::OutOfBounds            => AbiStatus::InvalidArgument,
            MemoryError::InsufficientBufferSize => AbiStatus::InsufficientBufferSize,
            MemoryError::MemoryUnavailable      => AbiStatus::UnknownError,
        }
    }
}
