/*!
regs.rs - LS-8 register file (R0..R7) with the stack pointer alias.

Layout
======
Eight 8-bit general purpose registers. R7 doubles as the stack pointer (SP)
and powers up holding `SP_INIT` (0xF4); every other register powers up as 0.

The stack pointer is not a separate field: `stack_pointer` / `set_stack_pointer`
read and write slot 7 directly, so `LDI R7, x` and a push observe the same
value.

Register indices arriving from instruction operands are untrusted bytes;
`get` / `set` reject anything outside 0..8 with `CpuError::InvalidRegister`.
*/

use crate::error::CpuError;

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register slot aliased as the stack pointer.
pub const SP_INDEX: u8 = 7;

/// Power-up value of the stack pointer.
pub const SP_INIT: u8 = 0xF4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
    slots: [u8; REGISTER_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        let mut slots = [0; REGISTER_COUNT];
        slots[SP_INDEX as usize] = SP_INIT;
        Self { slots }
    }
}

impl RegisterFile {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read register `index`.
    #[inline]
    pub fn get(&self, index: u8) -> Result<u8, CpuError> {
        self.slots
            .get(index as usize)
            .copied()
            .ok_or(CpuError::InvalidRegister { index })
    }

    /// Write register `index`.
    #[inline]
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), CpuError> {
        let slot = self
            .slots
            .get_mut(index as usize)
            .ok_or(CpuError::InvalidRegister { index })?;
        *slot = value;
        Ok(())
    }

    /// Fail unless `index` names a register. Used to validate operands up
    /// front so a faulting instruction leaves no partial writes behind.
    #[inline]
    pub fn check(index: u8) -> Result<u8, CpuError> {
        if (index as usize) < REGISTER_COUNT {
            Ok(index)
        } else {
            Err(CpuError::InvalidRegister { index })
        }
    }

    #[inline]
    pub fn stack_pointer(&self) -> u8 {
        self.slots[SP_INDEX as usize]
    }

    #[inline]
    pub fn set_stack_pointer(&mut self, value: u8) {
        self.slots[SP_INDEX as usize] = value;
    }

    /// All eight registers in index order.
    #[inline]
    pub fn as_array(&self) -> [u8; REGISTER_COUNT] {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_up_values() {
        let r = RegisterFile::new();
        for i in 0..7 {
            assert_eq!(r.get(i).unwrap(), 0);
        }
        assert_eq!(r.get(SP_INDEX).unwrap(), 0xF4);
        assert_eq!(r.stack_pointer(), 0xF4);
    }

    #[test]
    fn stack_pointer_aliases_r7() {
        let mut r = RegisterFile::new();
        r.set(7, 0x80).unwrap();
        assert_eq!(r.stack_pointer(), 0x80);
        r.set_stack_pointer(0x20);
        assert_eq!(r.get(7).unwrap(), 0x20);
        assert_eq!(r.as_array()[7], 0x20);
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut r = RegisterFile::new();
        assert!(matches!(r.get(8), Err(CpuError::InvalidRegister { index: 8 })));
        assert!(matches!(
            r.set(0xFF, 1),
            Err(CpuError::InvalidRegister { index: 0xFF })
        ));
        assert_eq!(r, RegisterFile::new());
        assert!(RegisterFile::check(7).is_ok());
        assert!(RegisterFile::check(8).is_err());
    }
}
