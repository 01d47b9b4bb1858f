//! # CPU State and Execution
//!
//! The `Cpu` struct owns the register file, the packed status byte, and the
//! memory bus, and drives the fetch-decode-execute loop:
//!
//! 1. read the opcode byte at PC and look it up in the descriptor table
//!    (an absent entry is a fatal `IllegalOpcode` and mutates nothing)
//! 2. advance PC past the opcode
//! 3. halt if the byte is the sentinel (0x00)
//! 4. otherwise resolve the operand per the addressing mode (consuming
//!    further instruction-stream bytes) and dispatch the semantic handler
//!
//! Interrupt entry (`irq`/`nmi`) happens only between instructions: `run()`
//! samples the bus IRQ line before each step, and both methods can also be
//! called directly by a harness.

use serde::{Deserialize, Serialize};

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::{Opcode, Operation, OPCODE_TABLE};
use crate::ExecutionError;

/// Reset vector location (low byte; high byte at +1).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Sentinel opcode: the execution loop treats this byte as "program
/// complete" and enters the terminal halted state.
pub const HALT_OPCODE: u8 = 0x00;

/// Stack page base; SP is an offset into 0x0100-0x01FF.
const STACK_BASE: u16 = 0x0100;

/// Status register flag bits.
///
/// Each variant is the mask of exactly one bit; `Cpu::set_flag` never
/// touches more than that bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Flag {
    Carry = 0x01,
    Zero = 0x02,
    InterruptDisable = 0x04,
    Decimal = 0x08,
    Break = 0x10,
    /// Bit 5 has no hardware meaning but reads back as set; forced on at
    /// reset and whenever the status byte is restored from the stack.
    Unused = 0x20,
    Overflow = 0x40,
    Negative = 0x80,
}

impl Flag {
    pub fn mask(self) -> u8 {
        self as u8
    }
}

/// Outcome of a single `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An instruction executed; the CPU can keep going.
    Running,
    /// The sentinel opcode was fetched (or the CPU was already halted).
    /// Terminal: further steps keep returning `Halted`.
    Halted,
}

/// Operand resolved by the addressing unit: the value read and, when the
/// mode names a memory location, its effective address.
///
/// `addr` is `None` only for `Implied`, where the value is the current
/// accumulator. For `Relative` the value is the raw displacement byte and
/// `addr` is the address of the instruction *after* it, which is what
/// branch targets are computed from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operand {
    pub(crate) value: u8,
    pub(crate) addr: Option<u16>,
}

/// Register/flag snapshot for inspection and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,
    pub halted: bool,
}

/// 6502 CPU state and execution context, generic over the memory bus.
pub struct Cpu<M: MemoryBus> {
    /// Accumulator
    pub(crate) a: u8,
    /// X index register
    pub(crate) x: u8,
    /// Y index register
    pub(crate) y: u8,
    /// Stack pointer, offset into page one
    pub(crate) sp: u8,
    /// Program counter
    pub(crate) pc: u16,
    /// Packed status register (NV-BDIZC)
    pub(crate) status: u8,
    /// Total base cycles charged so far
    pub(crate) cycles: u64,
    /// Terminal state, entered only via the sentinel opcode
    pub(crate) halted: bool,
    /// Memory bus, exclusively owned for the session
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU over the given bus and applies [`Cpu::reset`].
    ///
    /// The reset vector bytes at 0xFFFC/0xFFFD must already be seeded, so
    /// loaders write the program image and vector first and construct the
    /// CPU last.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0,
            status: 0,
            cycles: 0,
            halted: false,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Applies the power-on reset sequence: PC from the reset vector
    /// (little-endian), A/X/Y zeroed, SP = 0xFF, status cleared with the
    /// Unused bit forced on.
    pub fn reset(&mut self) {
        let lo = self.memory.read(RESET_VECTOR) as u16;
        let hi = self.memory.read(RESET_VECTOR + 1) as u16;
        self.pc = (hi << 8) | lo;

        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;

        self.status = 0;
        self.set_flag(Flag::Unused, true);

        self.cycles = 0;
        self.halted = false;
    }

    /// Executes one instruction.
    ///
    /// Returns [`Step::Halted`] when the sentinel opcode is fetched (PC is
    /// left pointing past it) and on every call thereafter. Fails with
    /// [`ExecutionError::IllegalOpcode`] before any state is mutated if the
    /// opcode byte has no descriptor.
    pub fn step(&mut self) -> Result<Step, ExecutionError> {
        if self.halted {
            return Ok(Step::Halted);
        }

        let opcode = self.memory.read(self.pc);

        // Decode before touching any state, so an illegal byte leaves the
        // machine exactly as it was.
        let Some(descriptor) = OPCODE_TABLE[opcode as usize] else {
            return Err(ExecutionError::IllegalOpcode(opcode));
        };

        self.pc = self.pc.wrapping_add(1);
        self.cycles += descriptor.cycles as u64;

        if opcode == HALT_OPCODE {
            self.halted = true;
            return Ok(Step::Halted);
        }

        self.execute(opcode, &descriptor)?;
        Ok(Step::Running)
    }

    /// Runs until the sentinel opcode halts the CPU, servicing the bus IRQ
    /// line at instruction boundaries.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        loop {
            if self.memory.irq_active() {
                self.irq();
            }
            if let Step::Halted = self.step()? {
                return Ok(());
            }
        }
    }

    /// Maskable interrupt entry. A no-op while the interrupt-disable flag
    /// is set; otherwise stacks PC (high, low) and the status byte (Break
    /// cleared, Unused set), sets interrupt-disable, and vectors through
    /// 0xFFFE/0xFFFF.
    pub fn irq(&mut self) {
        if self.flag(Flag::InterruptDisable) {
            return;
        }
        self.interrupt(IRQ_VECTOR);
    }

    /// Non-maskable interrupt entry: the same stacking sequence as IRQ but
    /// unconditional, vectoring through 0xFFFA/0xFFFB.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
    }

    fn interrupt(&mut self, vector: u16) {
        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);

        self.set_flag(Flag::Break, false);
        self.set_flag(Flag::Unused, true);
        self.set_flag(Flag::InterruptDisable, true);
        self.push(self.status);

        let lo = self.memory.read(vector) as u16;
        let hi = self.memory.read(vector.wrapping_add(1)) as u16;
        self.pc = (hi << 8) | lo;
    }

    /// Dispatches the decoded operation to its semantic handler.
    fn execute(&mut self, opcode: u8, descriptor: &Opcode) -> Result<(), ExecutionError> {
        match descriptor.operation {
            Operation::LDA => instructions::load_store::lda(self, descriptor),
            Operation::LDX => instructions::load_store::ldx(self, descriptor),
            Operation::LDY => instructions::load_store::ldy(self, descriptor),
            Operation::STA => instructions::load_store::sta(self, opcode, descriptor),
            Operation::STX => instructions::load_store::stx(self, opcode, descriptor),
            Operation::STY => instructions::load_store::sty(self, opcode, descriptor),

            Operation::ADC => instructions::alu::adc(self, descriptor),
            Operation::SBC => instructions::alu::sbc(self, descriptor),
            Operation::AND => instructions::alu::and(self, descriptor),
            Operation::EOR => instructions::alu::eor(self, descriptor),
            Operation::ORA => instructions::alu::ora(self, descriptor),
            Operation::BIT => instructions::alu::bit(self, descriptor),
            Operation::CMP => instructions::alu::cmp(self, descriptor),
            Operation::CPX => instructions::alu::cpx(self, descriptor),
            Operation::CPY => instructions::alu::cpy(self, descriptor),

            Operation::ASL => instructions::shifts::asl(self, opcode, descriptor),
            Operation::LSR => instructions::shifts::lsr(self, opcode, descriptor),
            Operation::ROL => instructions::shifts::rol(self, opcode, descriptor),
            Operation::ROR => instructions::shifts::ror(self, opcode, descriptor),

            Operation::INC => instructions::inc_dec::inc(self, opcode, descriptor),
            Operation::DEC => instructions::inc_dec::dec(self, opcode, descriptor),
            Operation::INX => instructions::inc_dec::inx(self),
            Operation::INY => instructions::inc_dec::iny(self),
            Operation::DEX => instructions::inc_dec::dex(self),
            Operation::DEY => instructions::inc_dec::dey(self),

            Operation::BCC => instructions::branches::branch(self, descriptor, Flag::Carry, false),
            Operation::BCS => instructions::branches::branch(self, descriptor, Flag::Carry, true),
            Operation::BNE => instructions::branches::branch(self, descriptor, Flag::Zero, false),
            Operation::BEQ => instructions::branches::branch(self, descriptor, Flag::Zero, true),
            Operation::BPL => {
                instructions::branches::branch(self, descriptor, Flag::Negative, false)
            }
            Operation::BMI => {
                instructions::branches::branch(self, descriptor, Flag::Negative, true)
            }
            Operation::BVC => {
                instructions::branches::branch(self, descriptor, Flag::Overflow, false)
            }
            Operation::BVS => {
                instructions::branches::branch(self, descriptor, Flag::Overflow, true)
            }

            Operation::JMP => instructions::control::jmp(self, opcode, descriptor),
            Operation::JSR => instructions::control::jsr(self, opcode, descriptor),
            Operation::RTS => instructions::control::rts(self),
            Operation::RTI => instructions::control::rti(self),
            Operation::NOP => Ok(()),
            // The sentinel short-circuits in step(); a BRK descriptor never
            // reaches dispatch.
            Operation::BRK => Ok(()),

            Operation::PHA => instructions::stack::pha(self),
            Operation::PHP => instructions::stack::php(self),
            Operation::PLA => instructions::stack::pla(self),
            Operation::PLP => instructions::stack::plp(self),

            Operation::CLC => instructions::flags::set(self, Flag::Carry, false),
            Operation::SEC => instructions::flags::set(self, Flag::Carry, true),
            Operation::CLD => instructions::flags::set(self, Flag::Decimal, false),
            Operation::SED => instructions::flags::set(self, Flag::Decimal, true),
            Operation::CLI => instructions::flags::set(self, Flag::InterruptDisable, false),
            Operation::SEI => instructions::flags::set(self, Flag::InterruptDisable, true),
            Operation::CLV => instructions::flags::set(self, Flag::Overflow, false),

            Operation::TAX => instructions::transfer::tax(self),
            Operation::TAY => instructions::transfer::tay(self),
            Operation::TXA => instructions::transfer::txa(self),
            Operation::TYA => instructions::transfer::tya(self),
            Operation::TSX => instructions::transfer::tsx(self),
            Operation::TXS => instructions::transfer::txs(self),
        }
    }

    // ========== Addressing resolver ==========

    /// Resolves the operand for the given addressing mode, consuming the
    /// mode's operand bytes from the instruction stream (PC advances by
    /// that count).
    pub(crate) fn fetch_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand {
                value: self.a,
                addr: None,
            },
            AddressingMode::Immediate => {
                let addr = self.pc;
                let value = self.fetch_byte();
                Operand {
                    value,
                    addr: Some(addr),
                }
            }
            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte() as u16;
                self.operand_at(addr)
            }
            AddressingMode::ZeroPageX => {
                // Index wraps within the zero page; the carry never reaches
                // the high byte.
                let addr = self.fetch_byte().wrapping_add(self.x) as u16;
                self.operand_at(addr)
            }
            AddressingMode::ZeroPageY => {
                let addr = self.fetch_byte().wrapping_add(self.y) as u16;
                self.operand_at(addr)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                self.operand_at(addr)
            }
            AddressingMode::AbsoluteX => {
                let addr = self.fetch_word().wrapping_add(self.x as u16);
                self.operand_at(addr)
            }
            AddressingMode::AbsoluteY => {
                let addr = self.fetch_word().wrapping_add(self.y as u16);
                self.operand_at(addr)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = self.memory.read(ptr) as u16;
                // Hardware quirk: the pointer high byte never crosses the
                // page, so ($xxFF) wraps back to ($xx00).
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = self.memory.read(hi_addr) as u16;
                self.operand_at((hi << 8) | lo)
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                self.operand_at(self.read_zero_page_pointer(ptr))
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte().wrapping_add(self.y);
                self.operand_at(self.read_zero_page_pointer(ptr))
            }
            AddressingMode::Relative => {
                let value = self.fetch_byte();
                // addr is where execution continues when the branch is not
                // taken; branch targets add the displacement to it.
                Operand {
                    value,
                    addr: Some(self.pc),
                }
            }
        }
    }

    fn operand_at(&mut self, addr: u16) -> Operand {
        Operand {
            value: self.memory.read(addr),
            addr: Some(addr),
        }
    }

    /// Reads a little-endian pointer from the zero page; both bytes wrap
    /// within the page.
    fn read_zero_page_pointer(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Stack helpers ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    // ========== Flags ==========

    /// Returns the named flag bit.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status & flag.mask() != 0
    }

    /// Sets or clears exactly the named flag bit.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.status |= flag.mask();
        } else {
            self.status &= !flag.mask();
        }
    }

    /// Updates Zero and Negative from a result byte; the shared tail of
    /// most handlers.
    pub(crate) fn set_zero_negative(&mut self, value: u8) {
        self.set_flag(Flag::Zero, value == 0);
        self.set_flag(Flag::Negative, value & 0x80 != 0);
    }

    // ========== Inspection ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Stack pointer (full stack address is 0x0100 + SP).
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Packed status byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Total base cycles charged since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the sentinel opcode has been reached.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Full register/flag snapshot.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status,
            cycles: self.cycles,
            halted: self.halted,
        }
    }

    /// Copies the entire 64 KiB address space out through the bus.
    pub fn dump_memory(&self) -> Vec<u8> {
        (0..=0xFFFFu16).map(|addr| self.memory.read(addr)).collect()
    }

    /// Shared access to the bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the bus, for seeding programs and test fixtures.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Test harness setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }
}
