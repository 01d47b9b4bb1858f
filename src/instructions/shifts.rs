//! # Shift and Rotate Instructions
//!
//! All four operate on the accumulator when the addressing mode is
//! Implied, otherwise on the resolved memory cell. Carry takes the bit
//! shifted out; ROL/ROR thread the carry-in through bit 0/7.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;
use crate::opcodes::Opcode;
use crate::ExecutionError;

pub(crate) fn asl<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode);
    let result = operand.value << 1;

    cpu.set_flag(Flag::Carry, operand.value & 0x80 != 0);
    cpu.set_zero_negative(result);
    write_back(cpu, opcode, descriptor, operand.addr, result)
}

pub(crate) fn lsr<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode);
    let result = operand.value >> 1;

    cpu.set_flag(Flag::Carry, operand.value & 0x01 != 0);
    cpu.set_zero_negative(result);
    write_back(cpu, opcode, descriptor, operand.addr, result)
}

pub(crate) fn rol<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode);
    let result = (operand.value << 1) | cpu.flag(Flag::Carry) as u8;

    cpu.set_flag(Flag::Carry, operand.value & 0x80 != 0);
    cpu.set_zero_negative(result);
    write_back(cpu, opcode, descriptor, operand.addr, result)
}

pub(crate) fn ror<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode);
    let result = (operand.value >> 1) | ((cpu.flag(Flag::Carry) as u8) << 7);

    cpu.set_flag(Flag::Carry, operand.value & 0x01 != 0);
    cpu.set_zero_negative(result);
    write_back(cpu, opcode, descriptor, operand.addr, result)
}

/// Implied means the accumulator form; anything else must carry an
/// effective address to rewrite.
fn write_back<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
    addr: Option<u16>,
    result: u8,
) -> Result<(), ExecutionError> {
    if descriptor.mode == AddressingMode::Implied {
        cpu.a = result;
        return Ok(());
    }
    let addr = addr.ok_or(ExecutionError::UnsupportedAddressingMode {
        opcode,
        mode: descriptor.mode,
    })?;
    cpu.memory.write(addr, result);
    Ok(())
}
