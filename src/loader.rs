/*!
Program loader for the LS-8 text image format.

Format:
- One byte per line, written as binary digits (`10000010`).
- `#` starts a comment that runs to end of line.
- Blank and comment-only lines are skipped.
- Bytes are emitted in file order; the result is loaded at address 0.

```text
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
```
*/

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::memory::MEMORY_SIZE;

/// Parse program text into a flat byte image.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let code = raw.split('#').next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        program.push(parse_byte(code).ok_or_else(|| LoadError::InvalidByte {
            line: idx + 1,
            text: code.to_string(),
        })?);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge { len: program.len() });
    }
    Ok(program)
}

/// Read and parse a program file.
pub fn load_program_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    log::debug!("Parsed {} bytes from {}", program.len(), path.display());
    Ok(program)
}

// 1..=8 binary digits. `u8::from_str_radix` alone would also take a sign.
fn parse_byte(code: &str) -> Option<u8> {
    if code.len() > 8 || !code.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(code, 2).ok()
}
