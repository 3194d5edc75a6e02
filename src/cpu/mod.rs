/*!
cpu::mod - Public façade for the LS-8 CPU core.

Layout:

```text
    state.rs     - Architectural state (memory, registers, PC, halted).
    regs.rs      - Register file R0..R7 with the R7 stack pointer alias.
    alu.rs       - ADD / SUB / MUL / AND / OR on register pairs.
    opcodes.rs   - Opcode constants and mnemonics.
    decode.rs    - Operand count / sets-PC bit fields, operand window fetch.
    execute.rs   - Per-opcode handlers.
    table.rs     - Static opcode -> handler table.
    dispatch.rs  - One fetch / decode / execute step.
    trace.rs     - Debug trace line.
    core         - `Cpu` facade (load / step / run / trace).
```

The public surface is the `Cpu` facade plus the state types tests and tools
need to inspect. Handlers and the dispatch table stay crate-private.
*/

pub mod alu;
pub mod core;
pub mod decode;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod opcodes;
pub mod regs;
pub mod state;
pub(crate) mod table;
pub mod trace;

pub use crate::cpu::core::{Cpu, RunSummary};
pub use crate::cpu::dispatch::StepOutcome;
pub use crate::cpu::regs::{REGISTER_COUNT, RegisterFile, SP_INDEX, SP_INIT};
pub use crate::cpu::state::CpuState;
