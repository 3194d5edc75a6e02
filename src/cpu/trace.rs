//! Debug trace line: PC, the three bytes at PC, and R0..R7.
//!
//! Format: `TRACE: PC | B0 B1 B2 | R0 R1 R2 R3 R4 R5 R6 R7` (all two-digit hex).
//! Bytes past the end of memory show as `00`. Purely observational.

use std::fmt::Write as _;

use crate::cpu::state::CpuState;

pub fn trace_line(cpu: &CpuState) -> String {
    let pc = cpu.pc() as usize;
    let byte = |offset: usize| cpu.memory.get(pc + offset).unwrap_or(0);

    let mut line = format!(
        "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
        pc,
        byte(0),
        byte(1),
        byte(2)
    );
    for r in cpu.regs.as_array() {
        // Writing into a String cannot fail.
        let _ = write!(line, " {r:02X}");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::opcodes::{LDI, PRN};

    #[test]
    fn power_up_trace() {
        let mut cpu = CpuState::new();
        cpu.memory.load(&[LDI, 0, 8]).unwrap();
        assert_eq!(
            trace_line(&cpu),
            "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
        );
    }

    #[test]
    fn trace_at_top_of_memory() {
        let mut cpu = CpuState::new();
        cpu.memory.write(0xFF, PRN);
        cpu.set_pc(0xFF);
        cpu.regs.set(0, 0xAB).unwrap();
        assert_eq!(
            trace_line(&cpu),
            "TRACE: FF | 47 00 00 | AB 00 00 00 00 00 00 F4"
        );
    }
}
