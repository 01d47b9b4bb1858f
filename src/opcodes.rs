//! # Opcode Descriptor Table
//!
//! The single source of truth for instruction metadata: a 256-entry const
//! table indexed by opcode byte. Documented opcodes carry a descriptor;
//! every other entry is `None` and decodes to an `IllegalOpcode` failure.
//!
//! Base cycle counts are the fixed per-instruction costs; page-crossing
//! penalties are not modeled.

use crate::addressing::AddressingMode;

/// Operation identifier, one per documented mnemonic.
///
/// The execution engine dispatches on this tag with an exhaustive match,
/// so adding a variant without a handler fails to compile.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS,
    CLC, CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX,
    INY, JMP, JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP,
    ROL, ROR, RTI, RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY,
    TSX, TXA, TXS, TYA,
}

/// Descriptor for a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Three-letter display mnemonic (e.g. "LDA").
    pub mnemonic: &'static str,

    /// Operation tag the engine dispatches on.
    pub operation: Operation,

    /// How the operand is located.
    pub mode: AddressingMode,

    /// Base cycle cost.
    pub cycles: u8,
}

impl Opcode {
    const fn new(
        mnemonic: &'static str,
        operation: Operation,
        mode: AddressingMode,
        cycles: u8,
    ) -> Self {
        Self {
            mnemonic,
            operation,
            mode,
            cycles,
        }
    }
}

/// The complete opcode table, indexed by opcode byte.
///
/// Covers the documented NMOS 6502 instruction set. Two entries deserve a
/// note: 0x46 is LSR zero-page and 0x45 is EOR zero-page per the published
/// opcode matrix (an upstream instruction listing collided the two on
/// 0x46), and 0xB6/0xBE are the ,Y-indexed LDX forms.
pub const OPCODE_TABLE: [Option<Opcode>; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [Option<Opcode>; 256] {
    use AddressingMode as M;
    use Operation as O;

    const fn e(
        mnemonic: &'static str,
        operation: Operation,
        mode: AddressingMode,
        cycles: u8,
    ) -> Option<Opcode> {
        Some(Opcode::new(mnemonic, operation, mode, cycles))
    }

    let mut t: [Option<Opcode>; 256] = [None; 256];

    // BRK doubles as the halt sentinel; the engine never dispatches it.
    t[0x00] = e("BRK", O::BRK, M::Implied, 7);
    t[0xEA] = e("NOP", O::NOP, M::Implied, 2);

    // Loads
    t[0xA9] = e("LDA", O::LDA, M::Immediate, 2);
    t[0xA5] = e("LDA", O::LDA, M::ZeroPage, 3);
    t[0xB5] = e("LDA", O::LDA, M::ZeroPageX, 4);
    t[0xAD] = e("LDA", O::LDA, M::Absolute, 4);
    t[0xBD] = e("LDA", O::LDA, M::AbsoluteX, 4);
    t[0xB9] = e("LDA", O::LDA, M::AbsoluteY, 4);
    t[0xA1] = e("LDA", O::LDA, M::IndirectX, 6);
    t[0xB1] = e("LDA", O::LDA, M::IndirectY, 5);

    t[0xA2] = e("LDX", O::LDX, M::Immediate, 2);
    t[0xA6] = e("LDX", O::LDX, M::ZeroPage, 3);
    t[0xB6] = e("LDX", O::LDX, M::ZeroPageY, 4);
    t[0xAE] = e("LDX", O::LDX, M::Absolute, 4);
    t[0xBE] = e("LDX", O::LDX, M::AbsoluteY, 4);

    t[0xA0] = e("LDY", O::LDY, M::Immediate, 2);
    t[0xA4] = e("LDY", O::LDY, M::ZeroPage, 3);
    t[0xB4] = e("LDY", O::LDY, M::ZeroPageX, 4);
    t[0xAC] = e("LDY", O::LDY, M::Absolute, 4);
    t[0xBC] = e("LDY", O::LDY, M::AbsoluteX, 4);

    // Stores
    t[0x85] = e("STA", O::STA, M::ZeroPage, 3);
    t[0x95] = e("STA", O::STA, M::ZeroPageX, 4);
    t[0x8D] = e("STA", O::STA, M::Absolute, 4);
    t[0x9D] = e("STA", O::STA, M::AbsoluteX, 5);
    t[0x99] = e("STA", O::STA, M::AbsoluteY, 5);
    t[0x81] = e("STA", O::STA, M::IndirectX, 6);
    t[0x91] = e("STA", O::STA, M::IndirectY, 6);

    t[0x86] = e("STX", O::STX, M::ZeroPage, 3);
    t[0x96] = e("STX", O::STX, M::ZeroPageY, 4);
    t[0x8E] = e("STX", O::STX, M::Absolute, 4);

    t[0x84] = e("STY", O::STY, M::ZeroPage, 3);
    t[0x94] = e("STY", O::STY, M::ZeroPageX, 4);
    t[0x8C] = e("STY", O::STY, M::Absolute, 4);

    // Transfers
    t[0xAA] = e("TAX", O::TAX, M::Implied, 2);
    t[0xA8] = e("TAY", O::TAY, M::Implied, 2);
    t[0xBA] = e("TSX", O::TSX, M::Implied, 2);
    t[0x8A] = e("TXA", O::TXA, M::Implied, 2);
    t[0x9A] = e("TXS", O::TXS, M::Implied, 2);
    t[0x98] = e("TYA", O::TYA, M::Implied, 2);

    // Arithmetic
    t[0x69] = e("ADC", O::ADC, M::Immediate, 2);
    t[0x65] = e("ADC", O::ADC, M::ZeroPage, 3);
    t[0x75] = e("ADC", O::ADC, M::ZeroPageX, 4);
    t[0x6D] = e("ADC", O::ADC, M::Absolute, 4);
    t[0x7D] = e("ADC", O::ADC, M::AbsoluteX, 4);
    t[0x79] = e("ADC", O::ADC, M::AbsoluteY, 4);
    t[0x61] = e("ADC", O::ADC, M::IndirectX, 6);
    t[0x71] = e("ADC", O::ADC, M::IndirectY, 5);

    t[0xE9] = e("SBC", O::SBC, M::Immediate, 2);
    t[0xE5] = e("SBC", O::SBC, M::ZeroPage, 3);
    t[0xF5] = e("SBC", O::SBC, M::ZeroPageX, 4);
    t[0xED] = e("SBC", O::SBC, M::Absolute, 4);
    t[0xFD] = e("SBC", O::SBC, M::AbsoluteX, 4);
    t[0xF9] = e("SBC", O::SBC, M::AbsoluteY, 4);
    t[0xE1] = e("SBC", O::SBC, M::IndirectX, 6);
    t[0xF1] = e("SBC", O::SBC, M::IndirectY, 5);

    // Logical
    t[0x29] = e("AND", O::AND, M::Immediate, 2);
    t[0x25] = e("AND", O::AND, M::ZeroPage, 3);
    t[0x35] = e("AND", O::AND, M::ZeroPageX, 4);
    t[0x2D] = e("AND", O::AND, M::Absolute, 4);
    t[0x3D] = e("AND", O::AND, M::AbsoluteX, 4);
    t[0x39] = e("AND", O::AND, M::AbsoluteY, 4);
    t[0x21] = e("AND", O::AND, M::IndirectX, 6);
    t[0x31] = e("AND", O::AND, M::IndirectY, 5);

    t[0x49] = e("EOR", O::EOR, M::Immediate, 2);
    t[0x45] = e("EOR", O::EOR, M::ZeroPage, 3);
    t[0x55] = e("EOR", O::EOR, M::ZeroPageX, 4);
    t[0x4D] = e("EOR", O::EOR, M::Absolute, 4);
    t[0x5D] = e("EOR", O::EOR, M::AbsoluteX, 4);
    t[0x59] = e("EOR", O::EOR, M::AbsoluteY, 4);
    t[0x41] = e("EOR", O::EOR, M::IndirectX, 6);
    t[0x51] = e("EOR", O::EOR, M::IndirectY, 5);

    t[0x09] = e("ORA", O::ORA, M::Immediate, 2);
    t[0x05] = e("ORA", O::ORA, M::ZeroPage, 3);
    t[0x15] = e("ORA", O::ORA, M::ZeroPageX, 4);
    t[0x0D] = e("ORA", O::ORA, M::Absolute, 4);
    t[0x1D] = e("ORA", O::ORA, M::AbsoluteX, 4);
    t[0x19] = e("ORA", O::ORA, M::AbsoluteY, 4);
    t[0x01] = e("ORA", O::ORA, M::IndirectX, 6);
    t[0x11] = e("ORA", O::ORA, M::IndirectY, 5);

    // Shifts and rotates (Implied = accumulator form)
    t[0x0A] = e("ASL", O::ASL, M::Implied, 2);
    t[0x06] = e("ASL", O::ASL, M::ZeroPage, 5);
    t[0x16] = e("ASL", O::ASL, M::ZeroPageX, 6);
    t[0x0E] = e("ASL", O::ASL, M::Absolute, 6);
    t[0x1E] = e("ASL", O::ASL, M::AbsoluteX, 7);

    t[0x4A] = e("LSR", O::LSR, M::Implied, 2);
    t[0x46] = e("LSR", O::LSR, M::ZeroPage, 5);
    t[0x56] = e("LSR", O::LSR, M::ZeroPageX, 6);
    t[0x4E] = e("LSR", O::LSR, M::Absolute, 6);
    t[0x5E] = e("LSR", O::LSR, M::AbsoluteX, 7);

    t[0x2A] = e("ROL", O::ROL, M::Implied, 2);
    t[0x26] = e("ROL", O::ROL, M::ZeroPage, 5);
    t[0x36] = e("ROL", O::ROL, M::ZeroPageX, 6);
    t[0x2E] = e("ROL", O::ROL, M::Absolute, 6);
    t[0x3E] = e("ROL", O::ROL, M::AbsoluteX, 7);

    t[0x6A] = e("ROR", O::ROR, M::Implied, 2);
    t[0x66] = e("ROR", O::ROR, M::ZeroPage, 5);
    t[0x76] = e("ROR", O::ROR, M::ZeroPageX, 6);
    t[0x6E] = e("ROR", O::ROR, M::Absolute, 6);
    t[0x7E] = e("ROR", O::ROR, M::AbsoluteX, 7);

    // Branches
    t[0x90] = e("BCC", O::BCC, M::Relative, 2);
    t[0xB0] = e("BCS", O::BCS, M::Relative, 2);
    t[0xF0] = e("BEQ", O::BEQ, M::Relative, 2);
    t[0x30] = e("BMI", O::BMI, M::Relative, 2);
    t[0xD0] = e("BNE", O::BNE, M::Relative, 2);
    t[0x10] = e("BPL", O::BPL, M::Relative, 2);
    t[0x50] = e("BVC", O::BVC, M::Relative, 2);
    t[0x70] = e("BVS", O::BVS, M::Relative, 2);

    // Jumps and returns
    t[0x4C] = e("JMP", O::JMP, M::Absolute, 3);
    t[0x6C] = e("JMP", O::JMP, M::Indirect, 5);
    t[0x20] = e("JSR", O::JSR, M::Absolute, 6);
    t[0x40] = e("RTI", O::RTI, M::Implied, 6);
    t[0x60] = e("RTS", O::RTS, M::Implied, 6);

    // Flag set/clear
    t[0x18] = e("CLC", O::CLC, M::Implied, 2);
    t[0xD8] = e("CLD", O::CLD, M::Implied, 2);
    t[0x58] = e("CLI", O::CLI, M::Implied, 2);
    t[0xB8] = e("CLV", O::CLV, M::Implied, 2);
    t[0x38] = e("SEC", O::SEC, M::Implied, 2);
    t[0xF8] = e("SED", O::SED, M::Implied, 2);
    t[0x78] = e("SEI", O::SEI, M::Implied, 2);

    // Comparisons
    t[0xC9] = e("CMP", O::CMP, M::Immediate, 2);
    t[0xC5] = e("CMP", O::CMP, M::ZeroPage, 3);
    t[0xD5] = e("CMP", O::CMP, M::ZeroPageX, 4);
    t[0xCD] = e("CMP", O::CMP, M::Absolute, 4);
    t[0xDD] = e("CMP", O::CMP, M::AbsoluteX, 4);
    t[0xD9] = e("CMP", O::CMP, M::AbsoluteY, 4);
    t[0xC1] = e("CMP", O::CMP, M::IndirectX, 6);
    t[0xD1] = e("CMP", O::CMP, M::IndirectY, 5);

    t[0xE0] = e("CPX", O::CPX, M::Immediate, 2);
    t[0xE4] = e("CPX", O::CPX, M::ZeroPage, 3);
    t[0xEC] = e("CPX", O::CPX, M::Absolute, 4);

    t[0xC0] = e("CPY", O::CPY, M::Immediate, 2);
    t[0xC4] = e("CPY", O::CPY, M::ZeroPage, 3);
    t[0xCC] = e("CPY", O::CPY, M::Absolute, 4);

    // Increment / decrement
    t[0xC6] = e("DEC", O::DEC, M::ZeroPage, 5);
    t[0xD6] = e("DEC", O::DEC, M::ZeroPageX, 6);
    t[0xCE] = e("DEC", O::DEC, M::Absolute, 6);
    t[0xDE] = e("DEC", O::DEC, M::AbsoluteX, 7);
    t[0xCA] = e("DEX", O::DEX, M::Implied, 2);
    t[0x88] = e("DEY", O::DEY, M::Implied, 2);

    t[0xE6] = e("INC", O::INC, M::ZeroPage, 5);
    t[0xF6] = e("INC", O::INC, M::ZeroPageX, 6);
    t[0xEE] = e("INC", O::INC, M::Absolute, 6);
    t[0xFE] = e("INC", O::INC, M::AbsoluteX, 7);
    t[0xE8] = e("INX", O::INX, M::Implied, 2);
    t[0xC8] = e("INY", O::INY, M::Implied, 2);

    // Stack
    t[0x48] = e("PHA", O::PHA, M::Implied, 3);
    t[0x08] = e("PHP", O::PHP, M::Implied, 3);
    t[0x68] = e("PLA", O::PLA, M::Implied, 4);
    t[0x28] = e("PLP", O::PLP, M::Implied, 4);

    // Bit test
    t[0x24] = e("BIT", O::BIT, M::ZeroPage, 3);
    t[0x2C] = e("BIT", O::BIT, M::Absolute, 4);

    t
}
