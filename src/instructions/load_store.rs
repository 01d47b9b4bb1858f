//! # Load and Store Instructions
//!
//! Loads copy the operand into a register and set Zero/Negative from it;
//! stores write a register to the effective address and touch no flags.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Opcode;
use crate::ExecutionError;

pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    cpu.a = cpu.fetch_operand(descriptor.mode).value;
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    cpu.x = cpu.fetch_operand(descriptor.mode).value;
    cpu.set_zero_negative(cpu.x);
    Ok(())
}

pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    cpu.y = cpu.fetch_operand(descriptor.mode).value;
    cpu.set_zero_negative(cpu.y);
    Ok(())
}

pub(crate) fn sta<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let value = cpu.a;
    store(cpu, opcode, descriptor, value)
}

pub(crate) fn stx<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let value = cpu.x;
    store(cpu, opcode, descriptor, value)
}

pub(crate) fn sty<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    let value = cpu.y;
    store(cpu, opcode, descriptor, value)
}

/// A store without an effective address is malformed and fatal rather than
/// guessed at.
fn store<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
    value: u8,
) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode);
    let addr = operand
        .addr
        .ok_or(ExecutionError::UnsupportedAddressingMode {
            opcode,
            mode: descriptor.mode,
        })?;
    cpu.memory.write(addr, value);
    Ok(())
}
