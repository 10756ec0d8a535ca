use crate::error::*;
use crate::memory::*;

///
/// A fixed-size structure that can be exchanged with a guest
///
/// All values are little-endian and tightly packed.
///
pub trait WireValue: Sized {
    /// The number of bytes this value takes up in guest memory
    const WIRE_SIZE: usize;

    ///
    /// Appends the encoded form of this value to a byte buffer (exactly `WIRE_SIZE` bytes)
    ///
    fn encode(&self, target: &mut Vec<u8>);

    ///
    /// Decodes a value from a buffer of `WIRE_SIZE` bytes
    ///
    fn decode(bytes: &[u8]) -> Option<Self>;
}

///
/// Reads a little-endian `f32` from a position in a byte slice
///
#[inline]
pub (crate) fn f32_at(bytes: &[u8], offset: usize) -> Option<f32> {
    Some(f32::from_le_bytes(bytes.get(offset..offset+4)?.try_into().ok()?))
}

///
/// Reads a little-endian `i32` from a position in a byte slice
///
#[inline]
pub (crate) fn i32_at(bytes: &[u8], offset: usize) -> Option<i32> {
    Some(i32::from_le_bytes(bytes.get(offset..offset+4)?.try_into().ok()?))
}

///
/// Reads a value from guest memory
///
pub fn read_value<TValue: WireValue>(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<TValue, MemoryError> {
    let bytes = read_bytes(memory, offset, TValue::WIRE_SIZE)?;

    TValue::decode(&bytes).ok_or(MemoryError::OutOfBounds)
}

///
/// Writes a value to guest memory
///
/// The value is encoded before anything is written, and the whole region is checked in one go, so a value that
/// doesn't fit leaves the memory untouched rather than writing the fields that do fit.
///
pub fn write_value<TValue: WireValue>(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: &TValue) -> Result<(), MemoryError> {
    let mut bytes = Vec::with_capacity(TValue::WIRE_SIZE);
    value.encode(&mut bytes);
    debug_assert!(bytes.len() == TValue::WIRE_SIZE);

    write_bytes(memory, offset, &bytes)
}

///
/// Writes a sequence of values to guest memory as a tightly packed array
///
pub fn write_array<'a, TValue: 'a + WireValue>(memory: &mut (impl ?Sized + GuestMemory), offset: u32, values: impl IntoIterator<Item=&'a TValue>) -> Result<(), MemoryError> {
    let mut bytes = vec![];
    values.into_iter().for_each(|value| value.encode(&mut bytes));

    write_bytes(memory, offset, &bytes)
}
