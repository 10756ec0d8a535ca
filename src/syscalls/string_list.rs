use crate::error::*;
use crate::memory::*;

///
/// The number of strings in a list, and the size of the buffer needed to hold them all with NUL terminators
///
pub fn string_list_sizes(strings: &[String]) -> Result<(u32, u32), MemoryError> {
    let count       = u32::try_from(strings.len()).map_err(|_| MemoryError::InsufficientBufferSize)?;
    let buffer_size = strings.iter().map(|string| string.len() as u64 + 1).sum::<u64>();
    let buffer_size = u32::try_from(buffer_size).map_err(|_| MemoryError::InsufficientBufferSize)?;

    Ok((count, buffer_size))
}

///
/// Writes the count and total buffer size of a string list (the `*_sizes_get` half of the WASI string list calls)
///
pub fn write_string_list_sizes(memory: &mut (impl ?Sized + GuestMemory), strings: &[String], count_ptr: u32, buffer_size_ptr: u32) -> Result<(), MemoryError> {
    let (count, buffer_size) = string_list_sizes(strings)?;

    check_bounds(memory.size(), count_ptr, 4)?;
    check_bounds(memory.size(), buffer_size_ptr, 4)?;

    write_u32(memory, count_ptr, count)?;
    write_u32(memory, buffer_size_ptr, buffer_size)
}

///
/// Writes a string list: an array of `u32` pointers at `pointers_ptr`, and the NUL-terminated strings they point
/// to packed into the buffer at `buffer_ptr`
///
/// Both regions are encoded and checked before either is written.
///
pub fn write_string_list(memory: &mut (impl ?Sized + GuestMemory), strings: &[String], pointers_ptr: u32, buffer_ptr: u32) -> Result<(), MemoryError> {
    let mut pointers    = Vec::with_capacity(strings.len() * 4);
    let mut buffer      = vec![];

    for string in strings.iter() {
        let string_ptr = (buffer_ptr as u64) + (buffer.len() as u64);
        let string_ptr = u32::try_from(string_ptr).map_err(|_| MemoryError::OutOfBounds)?;

        pointers.extend(string_ptr.to_le_bytes());
        buffer.extend(string.as_bytes());
        buffer.push(0);
    }

    check_bounds(memory.size(), pointers_ptr, pointers.len())?;
    check_bounds(memory.size(), buffer_ptr, buffer.len())?;

    write_bytes(memory, pointers_ptr, &pointers)?;
    write_bytes(memory, buffer_ptr, &buffer)
}

#[cfg(test)]
mod test {
    use super::*;

    fn env_list() -> Vec<String> {
        vec!["HOME=/".to_string(), "LANG=en".to_string()]
    }

    #[test]
    fn sizes_include_terminators() {
        assert!(string_list_sizes(&env_list()) == Ok((2, 15)));
        assert!(string_list_sizes(&[]) == Ok((0, 0)));
    }

    #[test]
    fn write_list() {
        let mut memory = vec![0u8; 64];

        write_string_list(&mut memory, &env_list(), 0, 16).unwrap();

        assert!(read_u32(&memory, 0) == Ok(16));
        assert!(read_u32(&memory, 4) == Ok(23));
        assert!(&memory[16..31] == b"HOME=/\0LANG=en\0");
    }

    #[test]
    fn buffer_out_of_bounds_writes_nothing() {
        let mut memory = vec![0u8; 24];

        assert!(write_string_list(&mut memory, &env_list(), 0, 16) == Err(MemoryError::OutOfBounds));
        assert!(memory == vec![0u8; 24]);
    }
}
