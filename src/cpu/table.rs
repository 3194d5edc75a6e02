/*!
table.rs - Function-pointer dispatch table (256 entries).

Design
------
- Table: `[Option<OpHandler>; 256]`, indexed by opcode byte.
- `lookup(opcode)` returns the handler or `None` for an undefined opcode;
  the dispatcher turns `None` into `CpuError::UnknownOpcode`.
- The table is a `static` built in a const block: fixed for the life of the
  program and never rebuilt per run.
- The five ALU opcodes share `op_alu`, which recovers the operation kind from
  the opcode byte.
*/

use crate::cpu::execute::{
    OpHandler, op_alu, op_call, op_hlt, op_jmp, op_ldi, op_pop, op_prn, op_push, op_ret, op_st,
};
use crate::cpu::opcodes::{ADD, AND, CALL, HLT, JMP, LDI, MUL, OR, POP, PRN, PUSH, RET, ST, SUB};

/// Resolve the handler for `opcode`, if the CPU implements it.
#[inline]
pub(crate) fn lookup(opcode: u8) -> Option<OpHandler> {
    EXEC_TABLE[opcode as usize]
}

static EXEC_TABLE: [Option<OpHandler>; 256] = {
    let mut t: [Option<OpHandler>; 256] = [None; 256];

    t[HLT as usize] = Some(op_hlt);

    // Loads / stores / output
    t[LDI as usize] = Some(op_ldi);
    t[PRN as usize] = Some(op_prn);
    t[ST as usize] = Some(op_st);

    // ALU
    t[ADD as usize] = Some(op_alu);
    t[SUB as usize] = Some(op_alu);
    t[MUL as usize] = Some(op_alu);
    t[AND as usize] = Some(op_alu);
    t[OR as usize] = Some(op_alu);

    // Stack
    t[PUSH as usize] = Some(op_push);
    t[POP as usize] = Some(op_pop);

    // Control flow
    t[CALL as usize] = Some(op_call);
    t[RET as usize] = Some(op_ret);
    t[JMP as usize] = Some(op_jmp);

    t
};
