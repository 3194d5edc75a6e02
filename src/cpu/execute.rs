/*!
execute.rs - LS-8 instruction semantics.

Every handler has the same shape:

```text
fn(&mut CpuState, &mut dyn Write, Instruction) -> Result<(), CpuError>
```

The instruction's operands arrive as an explicit argument; nothing is read
from ambient "current operand" state. Handlers never advance PC for the
normal case; the dispatcher does that from the opcode's width unless the
sets-PC bit is on (CALL / RET / JMP).

Each handler resolves every fallible input (register indices, stack bounds,
return address) before its first write, so a faulting instruction leaves the
CPU as it found it.
*/

use std::io::Write;

use crate::cpu::alu::{self, AluOp};
use crate::cpu::decode::Instruction;
use crate::cpu::regs::RegisterFile;
use crate::cpu::state::CpuState;
use crate::error::CpuError;

/// Signature shared by all opcode handlers.
pub(crate) type OpHandler =
    fn(&mut CpuState, &mut dyn Write, Instruction) -> Result<(), CpuError>;

// ---------------------------------------------------------------------------
// Machine control
// ---------------------------------------------------------------------------

pub(crate) fn op_hlt(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    _i: Instruction,
) -> Result<(), CpuError> {
    cpu.halt();
    Ok(())
}

// ---------------------------------------------------------------------------
// Loads / Stores / Output
// ---------------------------------------------------------------------------

/// LDI Ra, imm
pub(crate) fn op_ldi(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    cpu.regs.set(i.operand_a, i.operand_b)
}

/// PRN Ra: decimal value of Ra, one per line.
pub(crate) fn op_prn(
    cpu: &mut CpuState,
    out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let v = cpu.regs.get(i.operand_a)?;
    writeln!(out, "{v}")?;
    Ok(())
}

/// ST Ra, Rb: memory[Ra] = Rb
pub(crate) fn op_st(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let addr = cpu.regs.get(i.operand_a)?;
    let v = cpu.regs.get(i.operand_b)?;
    cpu.memory.write(addr, v);
    Ok(())
}

// ---------------------------------------------------------------------------
// ALU family (ADD / SUB / MUL / AND / OR)
// ---------------------------------------------------------------------------

pub(crate) fn op_alu(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let op = AluOp::from_opcode(i.opcode)?;
    alu::apply(&mut cpu.regs, op, i.operand_a, i.operand_b)
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

pub(crate) fn op_push(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let v = cpu.regs.get(i.operand_a)?;
    cpu.push_u8(v)
}

pub(crate) fn op_pop(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let dst = RegisterFile::check(i.operand_a)?;
    let v = cpu.pop_u8()?;
    cpu.regs.set(dst, v)
}

// ---------------------------------------------------------------------------
// Control flow (sets-PC bit on)
// ---------------------------------------------------------------------------

/// CALL Ra: push the address of CALL's operand byte, jump to Ra.
pub(crate) fn op_call(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let target = cpu.regs.get(i.operand_a)?;
    // Decode guarantees the operand byte exists, so pc + 1 <= 0xFF.
    let ret = cpu.pc().wrapping_add(1);
    cpu.push_u8(ret)?;
    cpu.set_pc(target);
    Ok(())
}

/// RET: pop the address CALL stored and resume on the byte after it.
pub(crate) fn op_ret(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    _i: Instruction,
) -> Result<(), CpuError> {
    let stored = cpu.memory.read(cpu.sp());
    let resume = stored
        .checked_add(1)
        .ok_or(CpuError::ProgramCounterOverflow { pc: stored, width: 1 })?;
    cpu.pop_u8()?;
    cpu.set_pc(resume);
    Ok(())
}

/// JMP Ra
pub(crate) fn op_jmp(
    cpu: &mut CpuState,
    _out: &mut dyn Write,
    i: Instruction,
) -> Result<(), CpuError> {
    let target = cpu.regs.get(i.operand_a)?;
    cpu.set_pc(target);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
