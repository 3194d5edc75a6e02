/*!
state.rs - Canonical LS-8 architectural state (memory + registers + PC).

Overview
========
`CpuState` is the single owner of everything an instruction can observe or
change:
  - `memory`: the 256-byte store
  - `regs`: R0..R7 (R7 = stack pointer)
  - `pc`: address of the next opcode
  - `halted`: set by HLT

Decode and dispatch live in sibling modules and operate on `&mut CpuState`.

Stack Helpers
=============
The stack lives at the top of memory and grows downward:
  Push: SP = SP - 1, then write at SP
  Pop:  read at SP, then SP = SP + 1
Both fail instead of wrapping the 8-bit stack pointer.
*/

use crate::cpu::regs::RegisterFile;
use crate::error::CpuError;
use crate::memory::Memory;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuState {
    pub memory: Memory,
    pub regs: RegisterFile,
    pub pc: u8,
    pub halted: bool,
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to power-up state: memory cleared, SP = 0xF4, PC = 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------------
    // Basic Accessors
    // ---------------------------------------------------------------------
    #[inline]
    pub fn pc(&self) -> u8 {
        self.pc
    }
    #[inline]
    pub fn set_pc(&mut self, v: u8) {
        self.pc = v;
    }
    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }
    #[inline]
    pub fn halt(&mut self) {
        self.halted = true;
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs.stack_pointer()
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Address `width` bytes past PC, refusing to run off the end of memory.
    /// Does not move PC; the dispatcher commits it once the handler succeeds.
    pub fn next_pc(&self, width: u8) -> Result<u8, CpuError> {
        self.pc
            .checked_add(width)
            .ok_or(CpuError::ProgramCounterOverflow { pc: self.pc, width })
    }

    // ---------------------------------------------------------------------
    // Stack Helpers
    // ---------------------------------------------------------------------

    /// Push a byte onto the stack.
    pub fn push_u8(&mut self, value: u8) -> Result<(), CpuError> {
        let sp = self.sp();
        let sp = sp.checked_sub(1).ok_or(CpuError::StackOverflow { sp })?;
        self.regs.set_stack_pointer(sp);
        self.memory.write(sp, value);
        Ok(())
    }

    /// Pop a byte from the stack.
    pub fn pop_u8(&mut self) -> Result<u8, CpuError> {
        let sp = self.sp();
        let next = sp.checked_add(1).ok_or(CpuError::StackUnderflow { sp })?;
        let value = self.memory.read(sp);
        self.regs.set_stack_pointer(next);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::regs::SP_INIT;

    #[test]
    fn default_power_up() {
        let s = CpuState::new();
        assert_eq!(s.pc(), 0);
        assert_eq!(s.sp(), SP_INIT);
        assert!(!s.halted());
        assert!(s.memory.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn reset_restores_power_up() {
        let mut s = CpuState::new();
        s.set_pc(0x30);
        s.halt();
        s.memory.write(0x10, 0xAB);
        s.regs.set(3, 9).unwrap();
        s.reset();
        assert_eq!(s, CpuState::new());
    }

    #[test]
    fn next_pc_is_checked_and_pure() {
        let mut s = CpuState::new();
        s.set_pc(0xFD);
        assert_eq!(s.next_pc(2).unwrap(), 0xFF);
        assert_eq!(s.pc(), 0xFD);
        let err = s.next_pc(3).unwrap_err();
        assert!(matches!(
            err,
            CpuError::ProgramCounterOverflow { pc: 0xFD, width: 3 }
        ));
        assert_eq!(s.pc(), 0xFD);
    }

    #[test]
    fn stack_push_pop_round_trip() {
        let mut s = CpuState::new();
        s.push_u8(0xAB).unwrap();
        s.push_u8(0xCD).unwrap();
        assert_eq!(s.sp(), SP_INIT - 2);
        assert_eq!(s.memory.read(SP_INIT - 1), 0xAB);
        assert_eq!(s.memory.read(SP_INIT - 2), 0xCD);
        assert_eq!(s.pop_u8().unwrap(), 0xCD);
        assert_eq!(s.pop_u8().unwrap(), 0xAB);
        assert_eq!(s.sp(), SP_INIT);
    }

    #[test]
    fn stack_bounds_fail_fast() {
        let mut s = CpuState::new();
        s.regs.set_stack_pointer(0x00);
        assert!(matches!(s.push_u8(1), Err(CpuError::StackOverflow { sp: 0 })));
        assert_eq!(s.sp(), 0x00);

        s.regs.set_stack_pointer(0xFF);
        assert!(matches!(s.pop_u8(), Err(CpuError::StackUnderflow { sp: 0xFF })));
        assert_eq!(s.sp(), 0xFF);
    }
}
