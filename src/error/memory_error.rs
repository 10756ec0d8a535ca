///
/// Errors from the guest memory access layer
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MemoryError {
    /// The region `offset..offset+size` is not entirely inside the guest's linear memory
    OutOfBounds,

    /// A value was larger than the buffer the guest declared for it
    InsufficientBufferSize,

    /// The guest instance has no linear memory bound to the host
    MemoryUnavailable,
}
