/*!
Memory module: the LS-8's flat 256-byte store.

Address map:
- $00-$FF: a single RAM region, zero-initialized.
- Programs are loaded at $00 and grow upward; the stack starts below $F4 and
  grows downward.

Addresses are `u8`, so every access lands inside the store. There is no
mirroring and no memory-mapped I/O.
*/

use crate::error::CpuError;

/// Size of LS-8 memory (in bytes).
pub const MEMORY_SIZE: usize = 0x100;

/// Flat byte-addressable RAM owned by a single CPU.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_bytes", &used)
            .finish()
    }
}

impl Memory {
    /// Create a new memory instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Clear memory contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn read(&self, addr: u8) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u8, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Read a byte by wide index, returning `None` past the end of memory.
    ///
    /// Used by the decoder for the operand window and by the tracer, where
    /// `pc + 1` / `pc + 2` may fall off the top of the address space.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Copy a program image into memory starting at address 0.
    ///
    /// Bytes past the image are left untouched.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        if program.len() > MEMORY_SIZE {
            return Err(CpuError::ProgramTooLarge { len: program.len() });
        }
        self.data[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Expose the internal slice (read-only). Useful for diagnostics.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::{MEMORY_SIZE, Memory};
    use crate::error::CpuError;

    #[test]
    fn size_and_init() {
        let m = Memory::new();
        assert_eq!(m.as_slice().len(), MEMORY_SIZE);
        assert!(m.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn read_back_writes_at_both_ends() {
        let mut m = Memory::new();
        m.write(0x00, 0xAA);
        m.write(0xFF, 0x55);
        assert_eq!(m.read(0x00), 0xAA);
        assert_eq!(m.read(0xFF), 0x55);
        assert_eq!(m.read(0x01), 0x00);
    }

    #[test]
    fn get_past_end_is_none() {
        let m = Memory::new();
        assert_eq!(m.get(0xFF), Some(0));
        assert_eq!(m.get(0x100), None);
    }

    #[test]
    fn load_copies_from_zero() {
        let mut m = Memory::new();
        m.write(0x10, 0x77);
        m.load(&[1, 2, 3]).unwrap();
        assert_eq!(&m.as_slice()[..4], &[1, 2, 3, 0]);
        assert_eq!(m.read(0x10), 0x77);
    }

    #[test]
    fn load_accepts_full_image_and_rejects_larger() {
        let mut m = Memory::new();
        assert!(m.load(&[0xEE; MEMORY_SIZE]).is_ok());
        assert_eq!(m.read(0xFF), 0xEE);
        let err = m.load(&[0; MEMORY_SIZE + 1]).unwrap_err();
        assert!(matches!(err, CpuError::ProgramTooLarge { len: 257 }));
    }

    #[test]
    fn reset_clears() {
        let mut m = Memory::new();
        m.write(0x42, 1);
        m.reset();
        assert_eq!(m, Memory::new());
    }
}
