/*!
dispatch.rs - Orchestrator for a single LS-8 fetch / decode / execute step.

Step sequence
=============
1. Halted CPUs do nothing.
2. Fetch the opcode at PC and resolve its handler. A missing handler is
   `UnknownOpcode`, reported before anything is mutated.
3. Fetch the operand window (`Instruction::fetch`).
4. Unless the opcode's sets-PC bit is on, resolve the successor PC. Running
   off the end of memory is `ProgramCounterOverflow`, again before any
   mutation.
5. Run the handler with the instruction's operands.
6. Commit the successor PC.

HLT follows the same path: PC moves past it, then the step reports `Halted`.
HLT in the last byte of memory has no successor and halts with PC on itself.
*/

use std::io::Write;

use crate::cpu::decode::Instruction;
use crate::cpu::opcodes::{HLT, mnemonic};
use crate::cpu::state::CpuState;
use crate::cpu::table::lookup;
use crate::error::CpuError;

/// Result of a single successful step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halted,
}

/// Execute one instruction.
pub(crate) fn step(cpu: &mut CpuState, out: &mut dyn Write) -> Result<StepOutcome, CpuError> {
    if cpu.halted() {
        return Ok(StepOutcome::Halted);
    }

    let pc = cpu.pc();
    let opcode = cpu.memory.read(pc);
    let handler = lookup(opcode).ok_or(CpuError::UnknownOpcode { opcode, pc })?;
    let instr = Instruction::fetch(&cpu.memory, pc)?;

    log::trace!(
        "{:02X}: {:<4} {:02X} {:02X}",
        pc,
        mnemonic(opcode).unwrap_or("?"),
        instr.operand_a,
        instr.operand_b
    );

    let next_pc = if instr.sets_pc() {
        None
    } else {
        match cpu.next_pc(instr.width()) {
            Ok(next) => Some(next),
            Err(_) if opcode == HLT => None,
            Err(e) => return Err(e),
        }
    };

    handler(cpu, out, instr)?;

    if let Some(next) = next_pc {
        cpu.set_pc(next);
    }

    Ok(if cpu.halted() {
        StepOutcome::Halted
    } else {
        StepOutcome::Continue
    })
}
