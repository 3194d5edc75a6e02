/*!
alu.rs - Register-to-register arithmetic / logic unit.

`apply` reads registers A and B, combines them, and writes the result back to
A. B is never written. Registers are 8 bits wide, so ADD / SUB / MUL wrap
modulo 256.

The operation kind is a closed enum; the only way to hit
`CpuError::UnsupportedAluOperation` is `AluOp::from_opcode` being handed a
non-ALU opcode, which means the dispatch table routed something wrong.
*/

use crate::cpu::opcodes::{ADD, AND, MUL, OR, SUB};
use crate::cpu::regs::RegisterFile;
use crate::error::CpuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    And,
    Or,
}

impl AluOp {
    /// Map an ALU-family opcode onto its operation kind.
    pub fn from_opcode(opcode: u8) -> Result<Self, CpuError> {
        match opcode {
            ADD => Ok(AluOp::Add),
            SUB => Ok(AluOp::Sub),
            MUL => Ok(AluOp::Mul),
            AND => Ok(AluOp::And),
            OR => Ok(AluOp::Or),
            _ => Err(CpuError::UnsupportedAluOperation { opcode }),
        }
    }

    #[inline]
    pub fn eval(self, a: u8, b: u8) -> u8 {
        match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
        }
    }
}

/// Execute `op` on registers `reg_a` and `reg_b`, storing into `reg_a`.
pub fn apply(regs: &mut RegisterFile, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), CpuError> {
    let a = regs.get(reg_a)?;
    let b = regs.get(reg_b)?;
    regs.set(reg_a, op.eval(a, b))
}
