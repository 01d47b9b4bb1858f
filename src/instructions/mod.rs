//! # Instruction Handlers
//!
//! Semantic handlers for every documented operation, grouped by category.
//! Each handler is a free function over `&mut Cpu<M>`; the execution engine
//! dispatches to them from an exhaustive match on the operation tag.
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY
//! - **branches**: the eight conditional branches, via one shared helper
//! - **control**: JMP, JSR, RTS, RTI
//! - **flags**: CLC/SEC, CLD/SED, CLI/SEI, CLV
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **stack**: PHA, PHP, PLA, PLP
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
