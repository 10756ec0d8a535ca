use super::guest_memory::*;
use super::primitives::*;
use crate::error::*;

use smallvec::{SmallVec};

/// Size of one `(ptr: u32, len: u32)` record in a guest iovec array
pub const IOVEC_SIZE: u32 = 8;

///
/// One segment of a vectored I/O buffer
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IoSegment {
    pub ptr: u32,
    pub len: u32,
}

///
/// Reads the segment list for a vectored I/O buffer
///
pub fn read_iovec_segments(memory: &(impl ?Sized + GuestMemory), iovs_ptr: u32, iovs_len: u32) -> Result<SmallVec<[IoSegment; 4]>, MemoryError> {
    // Check the whole array up front so a huge iovs_len fails before we start allocating
    let array_size = (iovs_len as u64) * (IOVEC_SIZE as u64);
    let array_size = usize::try_from(array_size).map_err(|_| MemoryError::OutOfBounds)?;
    check_bounds(memory.size(), iovs_ptr, array_size)?;

    let mut segments = SmallVec::new();
    for idx in 0..iovs_len {
        let record  = (iovs_ptr as u64) + (idx as u64) * (IOVEC_SIZE as u64);
        let record  = u32::try_from(record).map_err(|_| MemoryError::OutOfBounds)?;
        let ptr     = read_u32(memory, record)?;
        let len     = read_u32(memory, record.checked_add(4).ok_or(MemoryError::OutOfBounds)?)?;

        segments.push(IoSegment { ptr, len });
    }

    Ok(segments)
}

///
/// Reads a guest iovec array, concatenating the segments it refers to into a single string
///
/// Returns the decoded text along with the number of bytes that were read. Text is decoded leniently,
/// so a UTF-8 sequence split across two segments still decodes as one character.
///
pub fn read_iovecs(memory: &(impl ?Sized + GuestMemory), iovs_ptr: u32, iovs_len: u32) -> Result<(String, usize), MemoryError> {
    let segments = read_iovec_segments(memory, iovs_ptr, iovs_len)?;

    let mut bytes = vec![];
    for segment in segments {
        bytes.extend(read_bytes(memory, segment.ptr, segment.len as usize)?);
    }

    let num_bytes = bytes.len();
    Ok((String::from_utf8_lossy(&bytes).into_owned(), num_bytes))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn concatenate_segments() {
        let mut memory = vec![0u8; 64];

        write_bytes(&mut memory, 32, b"Hello, ").unwrap();
        write_bytes(&mut memory, 48, b"world").unwrap();

        write_u32(&mut memory, 0, 32).unwrap();
        write_u32(&mut memory, 4, 7).unwrap();
        write_u32(&mut memory, 8, 48).unwrap();
        write_u32(&mut memory, 12, 5).unwrap();

        assert!(read_iovecs(&memory, 0, 2) == Ok(("Hello, world".to_string(), 12)));
    }

    #[test]
    fn segment_outside_memory() {
        let mut memory = vec![0u8; 64];

        write_u32(&mut memory, 0, 60).unwrap();
        write_u32(&mut memory, 4, 8).unwrap();

        assert!(read_iovecs(&memory, 0, 1) == Err(MemoryError::OutOfBounds));
    }

    #[test]
    fn huge_iovec_count() {
        let memory = vec![0u8; 64];

        assert!(read_iovecs(&memory, 0, u32::MAX) == Err(MemoryError::OutOfBounds));
    }

    #[test]
    fn empty_iovec_list() {
        let memory = vec![0u8; 8];

        assert!(read_iovecs(&memory, 8, 0) == Ok((String::new(), 0)));
    }
}
