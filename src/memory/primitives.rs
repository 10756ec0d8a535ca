use super::guest_memory::*;
use crate::error::*;

///
/// Checks that `offset..offset+size` lies inside a memory of `memory_size` bytes
///
/// Arithmetic is done in 64 bits so a guest-supplied offset near `u32::MAX` can't wrap around.
///
#[inline]
pub fn check_bounds(memory_size: u64, offset: u32, size: usize) -> Result<(), MemoryError> {
    let end = (offset as u64).checked_add(size as u64).ok_or(MemoryError::OutOfBounds)?;

    if end <= memory_size {
        Ok(())
    } else {
        Err(MemoryError::OutOfBounds)
    }
}

///
/// Reads `len` bytes from the guest memory
///
pub fn read_bytes(memory: &(impl ?Sized + GuestMemory), offset: u32, len: usize) -> Result<Vec<u8>, MemoryError> {
    check_bounds(memory.size(), offset, len)?;

    let mut bytes = vec![0u8; len];
    if memory.read_into(offset as u64, &mut bytes) {
        Ok(bytes)
    } else {
        Err(MemoryError::OutOfBounds)
    }
}

///
/// Reads a fixed number of bytes from the guest memory
///
pub fn read_array<const N: usize>(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<[u8; N], MemoryError> {
    check_bounds(memory.size(), offset, N)?;

    let mut bytes = [0u8; N];
    if memory.read_into(offset as u64, &mut bytes) {
        Ok(bytes)
    } else {
        Err(MemoryError::OutOfBounds)
    }
}

///
/// Writes bytes to the guest memory. Nothing is written if any part of the region is out of bounds.
///
pub fn write_bytes(memory: &mut (impl ?Sized + GuestMemory), offset: u32, bytes: &[u8]) -> Result<(), MemoryError> {
    check_bounds(memory.size(), offset, bytes.len())?;

    if memory.write_from(offset as u64, bytes) {
        Ok(())
    } else {
        Err(MemoryError::OutOfBounds)
    }
}

#[inline]
pub fn read_i32(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<i32, MemoryError> {
    Ok(i32::from_le_bytes(read_array(memory, offset)?))
}

#[inline]
pub fn write_i32(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: i32) -> Result<(), MemoryError> {
    write_bytes(memory, offset, &value.to_le_bytes())
}

#[inline]
pub fn read_u32(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<u32, MemoryError> {
    Ok(u32::from_le_bytes(read_array(memory, offset)?))
}

#[inline]
pub fn write_u32(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: u32) -> Result<(), MemoryError> {
    write_bytes(memory, offset, &value.to_le_bytes())
}

#[inline]
pub fn read_f32(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<f32, MemoryError> {
    Ok(f32::from_le_bytes(read_array(memory, offset)?))
}

#[inline]
pub fn write_f32(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: f32) -> Result<(), MemoryError> {
    write_bytes(memory, offset, &value.to_le_bytes())
}

#[inline]
pub fn read_i64(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<i64, MemoryError> {
    Ok(i64::from_le_bytes(read_array(memory, offset)?))
}

#[inline]
pub fn write_i64(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: i64) -> Result<(), MemoryError> {
    write_bytes(memory, offset, &value.to_le_bytes())
}

#[inline]
pub fn read_u64(memory: &(impl ?Sized + GuestMemory), offset: u32) -> Result<u64, MemoryError> {
    Ok(u64::from_le_bytes(read_array(memory, offset)?))
}

#[inline]
pub fn write_u64(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: u64) -> Result<(), MemoryError> {
    write_bytes(memory, offset, &value.to_le_bytes())
}

///
/// Reads `len` bytes and decodes them as UTF-8
///
/// Invalid sequences are replaced with U+FFFD rather than reported: the only failure is a bounds failure.
///
pub fn read_utf8(memory: &(impl ?Sized + GuestMemory), offset: u32, len: usize) -> Result<String, MemoryError> {
    let bytes = read_bytes(memory, offset, len)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

///
/// Writes the UTF-8 bytes of a string into a guest buffer of `buffer_len` bytes (no terminator is added)
///
pub fn write_string(memory: &mut (impl ?Sized + GuestMemory), offset: u32, buffer_len: usize, value: &str) -> Result<(), MemoryError> {
    let bytes = value.as_bytes();

    if bytes.len() > buffer_len {
        return Err(MemoryError::InsufficientBufferSize);
    }

    write_bytes(memory, offset, bytes)
}

///
/// Writes the number of bytes `write_string` needs for a value, as an `i32`
///
pub fn write_string_len(memory: &mut (impl ?Sized + GuestMemory), offset: u32, value: &str) -> Result<(), MemoryError> {
    let len = i32::try_from(value.len()).map_err(|_| MemoryError::InsufficientBufferSize)?;

    write_i32(memory, offset, len)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip_in_bounds() {
        let mut memory = vec![0u8; 64];

        write_i32(&mut memory, 0, -42).unwrap();
        write_f32(&mut memory, 4, 1.5).unwrap();
        write_i64(&mut memory, 8, -1234567890123).unwrap();
        write_u64(&mut memory, 56, u64::MAX).unwrap();

        assert!(read_i32(&memory, 0) == Ok(-42));
        assert!(read_f32(&memory, 4) == Ok(1.5));
        assert!(read_i64(&memory, 8) == Ok(-1234567890123));
        assert!(read_u64(&memory, 56) == Ok(u64::MAX));
    }

    #[test]
    fn value_at_very_end_of_memory() {
        let mut memory = vec![0u8; 16];

        assert!(write_i32(&mut memory, 12, 7).is_ok());
        assert!(read_i32(&memory, 12) == Ok(7));
    }

    #[test]
    fn out_of_bounds_write_leaves_memory_unchanged() {
        let mut memory = vec![0xaa; 16];

        assert!(write_i32(&mut memory, 13, 7) == Err(MemoryError::OutOfBounds));
        assert!(write_i64(&mut memory, 9, 7) == Err(MemoryError::OutOfBounds));
        assert!(write_bytes(&mut memory, 16, &[1]) == Err(MemoryError::OutOfBounds));

        assert!(memory == vec![0xaa; 16]);
    }

    #[test]
    fn out_of_bounds_reads_fail() {
        let memory = vec![0u8; 16];

        assert!(read_i32(&memory, 13) == Err(MemoryError::OutOfBounds));
        assert!(read_f32(&memory, 16) == Err(MemoryError::OutOfBounds));
        assert!(read_u64(&memory, u32::MAX) == Err(MemoryError::OutOfBounds));
        assert!(read_bytes(&memory, 4, usize::MAX).is_err());
    }

    #[test]
    fn offset_near_u32_max_does_not_wrap() {
        assert!(check_bounds(u64::MAX, u32::MAX, 4).is_ok());
        assert!(check_bounds(4096, u32::MAX, 4) == Err(MemoryError::OutOfBounds));
        assert!(check_bounds(4096, u32::MAX - 2, 4) == Err(MemoryError::OutOfBounds));
    }

    #[test]
    fn zero_length_access_at_end() {
        let mut memory = vec![0u8; 8];

        assert!(read_bytes(&memory, 8, 0) == Ok(vec![]));
        assert!(write_bytes(&mut memory, 8, &[]).is_ok());
        assert!(read_bytes(&memory, 9, 0) == Err(MemoryError::OutOfBounds));
    }

    #[test]
    fn string_too_long_for_buffer_is_not_written() {
        let mut memory = vec![0u8; 32];

        assert!(write_string(&mut memory, 0, 4, "Hello") == Err(MemoryError::InsufficientBufferSize));
        assert!(memory == vec![0u8; 32]);
    }

    #[test]
    fn string_has_no_terminator() {
        let mut memory = vec![0xff; 8];

        write_string(&mut memory, 0, 8, "abc").unwrap();

        assert!(&memory[0..4] == &[b'a', b'b', b'c', 0xff]);
        assert!(read_utf8(&memory, 0, 3) == Ok("abc".to_string()));
    }

    #[test]
    fn string_len_counts_utf8_bytes() {
        let mut memory = vec![0u8; 8];

        write_string_len(&mut memory, 0, "h\u{e9}llo").unwrap();

        assert!(read_i32(&memory, 0) == Ok(6));
    }

    #[test]
    fn invalid_utf8_decodes_with_replacement() {
        let memory = vec![b'o', b'k', 0xff, 0xfe, b'!'];

        assert!(read_utf8(&memory, 0, 5) == Ok("ok\u{fffd}\u{fffd}!".to_string()));
    }
}
