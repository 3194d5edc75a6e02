#![doc = r#"
LS-8 emulator library crate.

The LS-8 is a small 8-bit computer: 256 bytes of memory, eight registers
(R7 doubles as the stack pointer), and a fourteen-instruction ISA whose
opcodes carry their own operand count and "sets PC" bit.

Modules:
- cpu: execution engine (state, register file, ALU, decoder, dispatch table, `Cpu` facade)
- memory: flat 256-byte store
- loader: text program format (one binary byte per line, `#` comments)
- config: layered configuration (files, environment)
- cli: argument parsing for the `ls8` binary
- error: `CpuError` / `LoadError` and process exit statuses

In tests, a small program builder is available under `crate::test_utils`.
"#]

pub mod cli;
pub mod config;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use config::Config;
pub use cpu::{Cpu, CpuState, RegisterFile, RunSummary, StepOutcome};
pub use error::{CpuError, EXIT_EXECUTION_FAILURE, EXIT_LOAD_FAILURE, LoadError};
pub use loader::{load_program_file, parse_program};
pub use memory::Memory;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
