//! # MOS 6502 CPU Emulator
//!
//! An instruction-level emulator for the MOS Technology 6502 processor:
//! a flat 64 KiB memory bus, the register/flag file, and a
//! fetch-decode-execute loop covering the documented instruction set,
//! its twelve addressing modes, and the IRQ/NMI interrupt entry points.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Program: LDA #$05; ADC #$03; BRK — loaded at 0x8000
//! for (i, byte) in [0xA9, 0x05, 0x69, 0x03, 0x00].into_iter().enumerate() {
//!     memory.write(0x8000 + i as u16, byte);
//! }
//!
//! // Reset vector points at the program start
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.a(), 0x08);
//! assert!(cpu.halted());
//! ```
//!
//! ## Architecture
//!
//! - `memory` — the `MemoryBus` trait and a flat 64 KiB implementation
//! - `addressing` — the twelve addressing modes
//! - `opcodes` — the read-only opcode descriptor table
//! - `cpu` — registers, status flags, addressing resolver, execution loop,
//!   and the IRQ/NMI entry sequences
//!
//! The CPU is generic over the `MemoryBus` trait, so custom memory maps can
//! be substituted for `FlatMemory`. Opcode 0x00 is the halt sentinel: the
//! execution loop treats it as "program complete" rather than dispatching
//! a handler.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Instruction handler implementations (not part of the public API)
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, CpuSnapshot, Flag, Step};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Opcode, Operation, OPCODE_TABLE};

/// Errors that abort execution.
///
/// Both variants are fatal: the session holds no recovery path, mirroring
/// the hardware's lack of software-visible decode-fault handling. The halt
/// sentinel is *not* an error; it surfaces as [`Step::Halted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The opcode byte has no entry in the instruction table.
    ///
    /// Raised before any register or memory cell is touched, so the
    /// pre-fetch machine state is still inspectable.
    IllegalOpcode(u8),

    /// A handler reached an addressing mode it has no resolution for,
    /// e.g. a store with implied addressing.
    UnsupportedAddressingMode {
        /// Opcode byte that was being executed.
        opcode: u8,
        /// The offending addressing mode.
        mode: AddressingMode,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode(opcode) => {
                write!(f, "illegal opcode 0x{opcode:02X}")
            }
            ExecutionError::UnsupportedAddressingMode { opcode, mode } => {
                write!(
                    f,
                    "opcode 0x{opcode:02X} has no resolution for addressing mode {mode:?}"
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
