//! LS-8 opcode bytes and mnemonics.
//!
//! Bit layout of every opcode:
//!
//! ```text
//! 7 6   5   4   3 2 1 0
//! A A   B   C   I I I I
//! ```
//!
//! - `AA`: number of operand bytes (0..=2)
//! - `B`: ALU operation
//! - `C`: instruction sets the program counter itself
//! - `IIII`: instruction identifier within its family

pub const HLT: u8 = 0b0000_0001;
pub const LDI: u8 = 0b1000_0010;
pub const PRN: u8 = 0b0100_0111;
pub const ST: u8 = 0b1000_0100;
pub const ADD: u8 = 0b1010_0000;
pub const SUB: u8 = 0b1010_0001;
pub const MUL: u8 = 0b1010_0010;
pub const AND: u8 = 0b1010_1000;
pub const OR: u8 = 0b1010_1010;
pub const PUSH: u8 = 0b0100_0101;
pub const POP: u8 = 0b0100_0110;
pub const CALL: u8 = 0b0101_0000;
pub const RET: u8 = 0b0001_0001;
pub const JMP: u8 = 0b0101_0100;

/// Every opcode the CPU executes, paired with its mnemonic.
pub const ALL: [(u8, &str); 14] = [
    (HLT, "HLT"),
    (LDI, "LDI"),
    (PRN, "PRN"),
    (ST, "ST"),
    (ADD, "ADD"),
    (SUB, "SUB"),
    (MUL, "MUL"),
    (AND, "AND"),
    (OR, "OR"),
    (PUSH, "PUSH"),
    (POP, "POP"),
    (CALL, "CALL"),
    (RET, "RET"),
    (JMP, "JMP"),
];

pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    ALL.iter().find(|(op, _)| *op == opcode).map(|(_, name)| *name)
}
