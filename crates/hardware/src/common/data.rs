//! Memory Access Definitions.
//!
//! This module defines the types used to categorize memory operations. It provides:
//! 1. **Access Types:** Distinguishing between instruction fetches, data reads, and data writes.
//! 2. **Access Widths:** Byte, halfword and word transfers with their masks.

use std::fmt;

/// Type of memory access being performed.
///
/// Used to select the fault reported when an access falls outside memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch access.
    Fetch,
    /// Data read access (load instruction).
    Read,
    /// Data write access (store instruction).
    Write,
}

/// Width of a data transfer between registers and memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8-bit access (`LB`, `SB`).
    Byte,
    /// 16-bit access (`LH`, `SH`).
    Half,
    /// 32-bit access (`LW`, `SW`).
    Word,
}

impl Width {
    /// Number of bytes moved by an access of this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Mask selecting the bits of a register that fit in this width.
    #[inline]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Half => 0xFFFF,
            Self::Word => 0xFFFF_FFFF,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => write!(f, "byte"),
            Self::Half => write!(f, "half"),
            Self::Word => write!(f, "word"),
        }
    }
}
