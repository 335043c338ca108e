//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit integer registers (`x0`-`x31`).
//! 2. **x0 Policy:** By default `x0` is an ordinary register; with `hardwire_zero`
//!    it reads as zero and ignores writes, as in the canonical ISA.
//! 3. **Snapshots:** Copies out the whole register file for inspection.

use crate::common::NUM_REGISTERS;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGISTERS],
    hardwire_zero: bool,
}

impl Gpr {
    /// Creates a register file with all registers zero and `x0` writable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a register file whose `x0` is hard-wired to zero.
    pub fn with_hardwired_zero() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            hardwire_zero: true,
        }
    }

    /// Returns `true` if `x0` is hard-wired to zero.
    pub const fn hardwire_zero(&self) -> bool {
        self.hardwire_zero
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31); only the low 5 bits are used.
    pub const fn read(&self, idx: usize) -> i32 {
        let idx = idx % NUM_REGISTERS;
        if self.hardwire_zero && idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31); only the low 5 bits are used.
    /// * `val` - The value to write.
    pub const fn write(&mut self, idx: usize, val: i32) {
        let idx = idx % NUM_REGISTERS;
        if !(self.hardwire_zero && idx == 0) {
            self.regs[idx] = val;
        }
    }

    /// Copies out all 32 register values as seen by `read`.
    pub fn snapshot(&self) -> [i32; NUM_REGISTERS] {
        std::array::from_fn(|i| self.read(i))
    }
}
