//! Flat System Memory.
//!
//! This module implements the interpreter's single memory. It provides:
//! 1. **Buffer:** Zero-initialised backing storage (`RamBuffer`).
//! 2. **Memory:** Little-endian byte/half/word access at unsigned byte addresses.
//! 3. **Bounds Checking:** Every access that does not fit inside the capacity is a `Trap`.

/// RAM buffer implementation for raw byte storage.
pub mod buffer;

use self::buffer::RamBuffer;
use crate::common::{AccessType, Trap, Width};

/// Flat, byte-addressed memory of fixed capacity.
///
/// Multi-byte values are stored little-endian, so the word written at address
/// `A` is the word fetched from `A`, and consecutive instructions live at
/// `A`, `A + 4`, `A + 8`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: RamBuffer,
}

impl Memory {
    /// Allocates a zero-initialised memory of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// `Trap::InvalidCapacity` for a zero or larger-than-4-GiB capacity,
    /// `Trap::AllocationFailed` if the host cannot provide the storage.
    pub fn new(capacity: usize) -> Result<Self, Trap> {
        Ok(Self {
            buffer: RamBuffer::new(capacity)?,
        })
    }

    /// Capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if an access of `width` at `addr` lies entirely inside memory.
    pub fn contains(&self, addr: u32, width: Width) -> bool {
        (addr as usize)
            .checked_add(width.bytes())
            .is_some_and(|end| end <= self.capacity())
    }

    /// Reads a zero-extended value of `width` bytes at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the first byte.
    /// * `width` - Access width.
    /// * `access` - Selects the trap raised when the access is out of bounds.
    ///
    /// # Returns
    ///
    /// The value, zero-extended to 32 bits, or the access fault for `access`.
    pub fn read(&self, addr: u32, width: Width, access: AccessType) -> Result<u32, Trap> {
        let bytes = self
            .buffer
            .read_slice(addr as usize, width.bytes())
            .ok_or_else(|| out_of_bounds(addr, width, access))?;

        Ok(bytes
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
    }

    /// Writes the low `width` bytes of `val` at `addr`.
    ///
    /// Nothing is written if any byte of the access is out of bounds.
    pub fn write(&mut self, addr: u32, width: Width, val: u32) -> Result<(), Trap> {
        let le = val.to_le_bytes();
        self.buffer
            .write_slice(addr as usize, &le[..width.bytes()])
            .ok_or_else(|| out_of_bounds(addr, width, AccessType::Write))
    }

    /// Fetches the instruction word at `addr`.
    #[inline]
    pub fn fetch(&self, addr: u32) -> Result<u32, Trap> {
        self.read(addr, Width::Word, AccessType::Fetch)
    }

    /// Reads a data word at `addr`.
    #[inline]
    pub fn read_u32(&self, addr: u32) -> Result<u32, Trap> {
        self.read(addr, Width::Word, AccessType::Read)
    }

    /// Writes a data word at `addr`.
    #[inline]
    pub fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Trap> {
        self.write(addr, Width::Word, val)
    }

    /// Copies raw bytes into memory starting at `addr`.
    ///
    /// The whole image must fit; otherwise nothing is written and a
    /// `StoreAccessFault` naming the first out-of-range byte is returned.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Trap> {
        self.buffer
            .write_slice(addr as usize, data)
            .ok_or_else(|| {
                let first_bad = self.capacity().max(addr as usize);
                Trap::StoreAccessFault {
                    addr: u32::try_from(first_bad).unwrap_or(u32::MAX),
                    width: Width::Byte,
                    pc: None,
                }
            })
    }
}

/// Builds the access fault matching `access`.
const fn out_of_bounds(addr: u32, width: Width, access: AccessType) -> Trap {
    match access {
        AccessType::Fetch => Trap::InstructionAccessFault(addr),
        AccessType::Read => Trap::LoadAccessFault {
            addr,
            width,
            pc: None,
        },
        AccessType::Write => Trap::StoreAccessFault {
            addr,
            width,
            pc: None,
        },
    }
}
