/*!
error.rs - Error types for the LS-8 core and program loader.

Two families:
- `CpuError`: faults raised while loading bytes into memory or executing
  instructions. Any of these terminates the run; the CLI maps them to
  `EXIT_EXECUTION_FAILURE`.
- `LoadError`: failures reading or parsing a program file. The CPU is never
  started when one of these occurs; the CLI maps them to `EXIT_LOAD_FAILURE`.

Faults that can be detected before an instruction mutates state (unknown
opcode, bad register index, truncated operand window) are always reported
before the handler runs.
*/

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit status for execution faults (unknown opcode and friends).
pub const EXIT_EXECUTION_FAILURE: u8 = 1;

/// Process exit status for program load, configuration, or usage failures.
pub const EXIT_LOAD_FAILURE: u8 = 2;

/// Fault raised by the execution engine.
#[derive(Debug, Error)]
pub enum CpuError {
    /// The dispatch table has no entry for the fetched opcode.
    #[error("Unknown instruction {opcode:08b} at address 0x{pc:02X}")]
    UnknownOpcode { opcode: u8, pc: u8 },

    /// An opcode outside the ALU family was handed to the ALU.
    #[error("Unsupported ALU operation for opcode {opcode:08b}")]
    UnsupportedAluOperation { opcode: u8 },

    /// An operand named a register outside R0..R7.
    #[error("Invalid register index {index}")]
    InvalidRegister { index: u8 },

    /// A declared operand byte would lie past the end of memory.
    #[error("Truncated instruction at 0x{pc:02X}: {operand_count} operand(s) past 0xFF")]
    TruncatedInstruction { pc: u8, operand_count: u8 },

    /// Advancing the program counter would leave the 8-bit address space.
    #[error("Program counter overflow advancing 0x{pc:02X} by {width}")]
    ProgramCounterOverflow { pc: u8, width: u8 },

    /// Push / call with the stack pointer already at 0x00.
    #[error("Stack overflow (SP=0x{sp:02X})")]
    StackOverflow { sp: u8 },

    /// Pop / return with the stack pointer already at 0xFF.
    #[error("Stack underflow (SP=0x{sp:02X})")]
    StackUnderflow { sp: u8 },

    /// Program image does not fit into memory.
    #[error("Program of {len} bytes does not fit into 256 bytes of memory")]
    ProgramTooLarge { len: usize },

    /// Bounded run did not reach HLT.
    #[error("Step limit of {limit} instructions reached without halting")]
    StepLimitExceeded { limit: u64 },

    /// Writing PRN output failed.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Failure reading or parsing a program file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line is neither blank, a comment, nor a binary byte.
    #[error("Line {line}: expected up to 8 binary digits, found {text:?}")]
    InvalidByte { line: usize, text: String },

    #[error("Program of {len} bytes does not fit into 256 bytes of memory")]
    ProgramTooLarge { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_opcode_message_is_binary() {
        let e = CpuError::UnknownOpcode {
            opcode: 0b0000_0011,
            pc: 0x0A,
        };
        assert_eq!(e.to_string(), "Unknown instruction 00000011 at address 0x0A");
    }

    #[test]
    fn io_error_converts_into_output_fault() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let e: CpuError = io.into();
        assert!(matches!(e, CpuError::Output(_)));
    }

    #[test]
    fn exit_statuses_are_distinct() {
        assert_ne!(EXIT_EXECUTION_FAILURE, EXIT_LOAD_FAILURE);
        assert_ne!(EXIT_EXECUTION_FAILURE, 0);
    }
}
