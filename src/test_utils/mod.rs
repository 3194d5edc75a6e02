//! Shared test utilities for building LS-8 program images.
//!
//! `Asm` strings instructions together by mnemonic so tests read like the
//! program they run, instead of a wall of binary literals. It supports just
//! what the test suite needs: no labels, no address fix-ups. Callers count
//! bytes themselves when they need a jump target.
//!
//! `run_program` loads an image into a fresh `Cpu`, runs it to HLT, and returns
//! the CPU together with its PRN output.

use crate::cpu::core::{Cpu, RunSummary};
use crate::cpu::opcodes::{
    ADD, AND, CALL, HLT, JMP, LDI, MUL, OR, POP, PRN, PUSH, RET, ST, SUB,
};

/// Minimal program builder.
#[derive(Debug, Default, Clone)]
pub struct Asm {
    bytes: Vec<u8>,
}

impl Asm {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Address the next emitted byte will occupy.
    pub fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    pub fn hlt(self) -> Self {
        self.emit(&[HLT])
    }
    pub fn ldi(self, reg: u8, imm: u8) -> Self {
        self.emit(&[LDI, reg, imm])
    }
    pub fn prn(self, reg: u8) -> Self {
        self.emit(&[PRN, reg])
    }
    pub fn st(self, addr_reg: u8, value_reg: u8) -> Self {
        self.emit(&[ST, addr_reg, value_reg])
    }
    pub fn add(self, a: u8, b: u8) -> Self {
        self.emit(&[ADD, a, b])
    }
    pub fn sub(self, a: u8, b: u8) -> Self {
        self.emit(&[SUB, a, b])
    }
    pub fn mul(self, a: u8, b: u8) -> Self {
        self.emit(&[MUL, a, b])
    }
    pub fn and(self, a: u8, b: u8) -> Self {
        self.emit(&[AND, a, b])
    }
    pub fn or(self, a: u8, b: u8) -> Self {
        self.emit(&[OR, a, b])
    }
    pub fn push(self, reg: u8) -> Self {
        self.emit(&[PUSH, reg])
    }
    pub fn pop(self, reg: u8) -> Self {
        self.emit(&[POP, reg])
    }
    pub fn call(self, reg: u8) -> Self {
        self.emit(&[CALL, reg])
    }
    pub fn ret(self) -> Self {
        self.emit(&[RET])
    }
    pub fn jmp(self, reg: u8) -> Self {
        self.emit(&[JMP, reg])
    }
    /// Raw byte (data or a deliberately bad opcode).
    pub fn raw(self, byte: u8) -> Self {
        self.emit(&[byte])
    }

    pub fn bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Load `program` into a fresh CPU, run to HLT, and return the CPU, its PRN
/// output, and the run summary. Panics on any fault.
pub fn run_program(program: &[u8]) -> (Cpu, String, RunSummary) {
    let mut cpu = Cpu::new();
    cpu.load(program).expect("program fits in memory");
    let mut out: Vec<u8> = Vec::new();
    let summary = cpu.run(&mut out).expect("program runs to HLT");
    let text = String::from_utf8(out).expect("PRN output is ASCII");
    (cpu, text, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_lays_out_bytes_in_order() {
        let asm = Asm::new().ldi(0, 8).prn(0);
        assert_eq!(asm.here(), 5);
        assert_eq!(asm.hlt().bytes(), vec![LDI, 0, 8, PRN, 0, HLT]);
    }
}
