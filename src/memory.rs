//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from a concrete memory map.
//! The provided `FlatMemory` maps the whole 16-bit address space to one
//! contiguous, zero-initialized RAM array — everything a bare emulation
//! session needs, while ROM/RAM splits or memory-mapped devices can be
//! supplied by implementing the trait.
//!
//! Bus accesses are total: every 16-bit address is a valid index and no
//! error path exists, matching the hardware's lack of a bus fault.

/// Memory bus trait the CPU reads and writes through.
///
/// - `read(&self)`: immutable, always succeeds
/// - `write(&mut self)`: mutable, side effects explicit
/// - no error types: the 6502 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use mos6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads the byte at a 16-bit address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to a 16-bit address. Must never panic; read-only
    /// regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Whether the IRQ line is currently asserted.
    ///
    /// The 6502 IRQ line is level-sensitive and shared: it stays active as
    /// long as any device holds a pending interrupt. The execution loop
    /// samples it between instructions and enters the IRQ sequence when it
    /// is high (and the interrupt-disable flag permits).
    ///
    /// Plain memory has no interrupt-capable devices, so the default is
    /// `false`.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Flat 64 KiB memory: every address from 0x0000 to 0xFFFF is writable RAM,
/// initialized to zero.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector low
/// memory.write(0xFFFD, 0x80); // reset vector high
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64 KiB contiguous cell array, index = address
    cells: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a zero-filled 64 KiB memory.
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; 0x10000]),
        }
    }

    /// The full 64 KiB contents, for inspection and dumps.
    pub fn dump(&self) -> &[u8] {
        &self.cells[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.cells[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;
    }
}
