//! RAM Buffer Implementation.
//!
//! This module provides the backing storage for the flat memory. The buffer
//! is allocated fallibly so that a capacity the host cannot satisfy surfaces
//! as a `Trap::AllocationFailed` before execution starts instead of aborting
//! the process.

use crate::common::Trap;
use crate::common::constants::MAX_MEMORY_SIZE;

/// Zero-initialised, fixed-size byte buffer.
///
/// Every accessor is bounds-checked and returns `None` for ranges that do not
/// lie entirely inside the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamBuffer {
    bytes: Vec<u8>,
}

impl RamBuffer {
    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes; must be non-zero and at most 4 GiB.
    ///
    /// # Returns
    ///
    /// The buffer, `Trap::InvalidCapacity` for an unusable size, or
    /// `Trap::AllocationFailed` if the host refused the allocation.
    pub fn new(size: usize) -> Result<Self, Trap> {
        if size == 0 || size as u64 > MAX_MEMORY_SIZE {
            return Err(Trap::InvalidCapacity(size));
        }

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| Trap::AllocationFailed { capacity: size })?;
        bytes.resize(size, 0);
        Ok(Self { bytes })
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes (never the case once built).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows `len` bytes starting at `offset`.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }

    /// Copies `data` into the buffer at `offset`.
    ///
    /// Returns `None` and leaves the buffer untouched if any byte would fall
    /// outside it.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Option<()> {
        let end = offset.checked_add(data.len())?;
        self.bytes.get_mut(offset..end)?.copy_from_slice(data);
        Some(())
    }
}
