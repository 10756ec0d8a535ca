use wasmer::{MemoryView};

///
/// A guest's linear memory, as seen by the host
///
/// Implementations only need to supply the raw copy operations: the bounds checks that protect the host
/// live in the primitives in this module, which never call `read_into`/`write_from` with a region that
/// has not already been checked against `size()`.
///
pub trait GuestMemory {
    ///
    /// The size of the linear memory in bytes
    ///
    fn size(&self) -> u64;

    ///
    /// Copies bytes out of the memory, returning false if the copy could not be made
    ///
    fn read_into(&self, offset: u64, target: &mut [u8]) -> bool;

    ///
    /// Copies bytes into the memory, returning false if the copy could not be made
    ///
    fn write_from(&mut self, offset: u64, source: &[u8]) -> bool;
}

impl GuestMemory for [u8] {
    #[inline]
    fn size(&self) -> u64 {
        self.len() as u64
    }

    fn read_into(&self, offset: u64, target: &mut [u8]) -> bool {
        let start   = offset as usize;
        let end     = start.checked_add(target.len()).unwrap_or(usize::MAX);

        match self.get(start..end) {
            Some(source)    => { target.copy_from_slice(source); true }
            None            => false,
        }
    }

    fn write_from(&mut self, offset: u64, source: &[u8]) -> bool {
        let start   = offset as usize;
        let end     = start.checked_add(source.len()).unwrap_or(usize::MAX);

        match self.get_mut(start..end) {
            Some(target)    => { target.copy_from_slice(source); true }
            None            => false,
        }
    }
}

impl GuestMemory for Vec<u8> {
    #[inline]
    fn size(&self) -> u64 {
        self.as_slice().size()
    }

    #[inline]
    fn read_into(&self, offset: u64, target: &mut [u8]) -> bool {
        self.as_slice().read_into(offset, target)
    }

    #[inline]
    fn write_from(&mut self, offset: u64, source: &[u8]) -> bool {
        self.as_mut_slice().write_from(offset, source)
    }
}

impl<'a> GuestMemory for MemoryView<'a> {
    #[inline]
    fn size(&self) -> u64 {
        self.data_size()
    }

    #[inline]
    fn read_into(&self, offset: u64, target: &mut [u8]) -> bool {
        self.read(offset, target).is_ok()
    }

    #[inline]
    fn write_from(&mut self, offset: u64, source: &[u8]) -> bool {
        self.write(offset, source).is_ok()
    }
}
