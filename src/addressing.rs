//! # Addressing Modes
//!
//! The twelve addressing modes of the 6502. Each mode determines how many
//! operand bytes follow the opcode and how the effective address (if any)
//! is computed. Accumulator-only operations share the `Implied` variant:
//! shift and rotate handlers check the mode and fall back to the
//! accumulator when no memory operand exists.

use serde::{Deserialize, Serialize};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressingMode {
    /// No operand bytes; the instruction operates on registers or, for
    /// shifts and rotates, directly on the accumulator.
    ///
    /// Examples: CLC, RTS, LSR A
    Implied,

    /// 8-bit constant embedded in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address within the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit displacement used by branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer; only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: the zero-page pointer location is (operand + X)
    /// masked into the zero page, then dereferenced.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the zero-page pointer location is (operand + Y)
    /// masked into the zero page, then dereferenced.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes the mode consumes from the instruction
    /// stream. An instruction's total size is this plus the opcode byte.
    pub fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
