/*!
decode.rs - Opcode bit-field extraction and operand window fetch.

The LS-8 encodes two pieces of metadata in every opcode byte:
  bits 7-6: operand count (0, 1 or 2)
  bit 4   : instruction sets PC itself (loop must not auto-advance)

No table lookups happen here; dispatch (`table.rs`) decides whether the
opcode exists at all.
*/

use crate::error::CpuError;
use crate::memory::Memory;

const OPERAND_COUNT_MASK: u8 = 0b1100_0000;
const OPERAND_COUNT_SHIFT: u8 = 6;
const SETS_PC_MASK: u8 = 0b0001_0000;

/// Number of operand bytes following `opcode`.
#[inline]
pub fn operand_count(opcode: u8) -> u8 {
    (opcode & OPERAND_COUNT_MASK) >> OPERAND_COUNT_SHIFT
}

/// True when the instruction moves PC itself.
#[inline]
pub fn sets_pc(opcode: u8) -> bool {
    opcode & SETS_PC_MASK != 0
}

/// Transient decode of the three bytes at PC.
///
/// Built fresh each step from live memory; programs may rewrite their own
/// code with ST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub operand_a: u8,
    pub operand_b: u8,
}

impl Instruction {
    /// Fetch the opcode at `pc` plus the two bytes after it.
    ///
    /// Undeclared operand bytes past the end of memory read as 0. A declared
    /// operand past the end is a `TruncatedInstruction` fault.
    pub fn fetch(memory: &Memory, pc: u8) -> Result<Self, CpuError> {
        let opcode = memory.read(pc);
        let count = operand_count(opcode);
        let base = pc as usize;
        if base + count as usize >= memory.as_slice().len() {
            return Err(CpuError::TruncatedInstruction {
                pc,
                operand_count: count,
            });
        }
        Ok(Self {
            opcode,
            operand_a: memory.get(base + 1).unwrap_or(0),
            operand_b: memory.get(base + 2).unwrap_or(0),
        })
    }

    #[inline]
    pub fn operand_count(&self) -> u8 {
        operand_count(self.opcode)
    }

    #[inline]
    pub fn sets_pc(&self) -> bool {
        sets_pc(self.opcode)
    }

    /// Instruction length in bytes (opcode + operands).
    #[inline]
    pub fn width(&self) -> u8 {
        self.operand_count() + 1
    }
}
