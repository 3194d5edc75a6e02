/*!
core::Cpu - Public LS-8 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` owns a single `CpuState` (memory, registers, PC, halted flag).
- `load` copies a program image to address 0; `run` executes until HLT.
- PRN output goes to any `std::io::Write` the caller supplies, so the same
  engine prints to stdout in the binary and into a `Vec<u8>` in tests.
- `trace_line` / `trace` expose the debug inspection line. Only `run_traced`
  writes it during a run, one line before each instruction.

Usage
=====
```rust
use ls8::Cpu;

let mut cpu = Cpu::new();
cpu.load(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
let mut out: Vec<u8> = Vec::new();
cpu.run(&mut out).unwrap();
assert_eq!(out, b"8\n");
```
*/

use std::io::Write;

use crate::cpu::dispatch::{self, StepOutcome};
use crate::cpu::regs::RegisterFile;
use crate::cpu::state::CpuState;
use crate::cpu::trace::trace_line;
use crate::error::CpuError;
use crate::memory::Memory;

/// Totals reported by a run that reached HLT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, including the final HLT.
    pub steps: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    /// Construct a new CPU with power‑up defaults.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return to power-up state, discarding any loaded program.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Copy `program` into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.state.memory.load(program)?;
        log::debug!("Loaded {} program bytes", program.len());
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------
    pub fn pc(&self) -> u8 {
        self.state.pc
    }
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }
    pub fn stack_pointer(&self) -> u8 {
        self.state.regs.stack_pointer()
    }
    pub fn registers(&self) -> &RegisterFile {
        &self.state.regs
    }
    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<StepOutcome, CpuError> {
        dispatch::step(&mut self.state, out)
    }

    /// Run until HLT or the first fault.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary, CpuError> {
        self.run_inner(out, None, false)
    }

    /// Run until HLT, failing with `StepLimitExceeded` after `limit`
    /// instructions without halting.
    pub fn run_with_limit<W: Write>(
        &mut self,
        out: &mut W,
        limit: u64,
    ) -> Result<RunSummary, CpuError> {
        self.run_inner(out, Some(limit), false)
    }

    /// Like `run` / `run_with_limit`, but writes a trace line to `out` before
    /// each instruction.
    pub fn run_traced<W: Write>(
        &mut self,
        out: &mut W,
        limit: Option<u64>,
    ) -> Result<RunSummary, CpuError> {
        self.run_inner(out, limit, true)
    }

    fn run_inner<W: Write>(
        &mut self,
        out: &mut W,
        limit: Option<u64>,
        trace: bool,
    ) -> Result<RunSummary, CpuError> {
        let mut steps = 0u64;
        while !self.state.halted {
            if let Some(limit) = limit {
                if steps >= limit {
                    return Err(CpuError::StepLimitExceeded { limit });
                }
            }
            if trace {
                self.trace(out)?;
            }
            self.step(out)?;
            steps += 1;
        }
        log::info!("Halted at 0x{:02X} after {} instructions", self.state.pc, steps);
        Ok(RunSummary { steps })
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    /// Debug line with PC, the bytes at PC, and all registers.
    pub fn trace_line(&self) -> String {
        trace_line(&self.state)
    }

    /// Write `trace_line` plus newline to `out`.
    pub fn trace<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.trace_line())
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
