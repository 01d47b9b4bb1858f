//! # Increment and Decrement Instructions
//!
//! Memory forms read-modify-write the resolved cell; register forms
//! mutate X or Y directly. All update Zero/Negative from the result and
//! wrap modulo 256.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Opcode;
use crate::ExecutionError;

pub(crate) fn inc<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    modify_memory(cpu, opcode, descriptor, |v| v.wrapping_add(1))
}

pub(crate) fn dec<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    modify_memory(cpu, opcode, descriptor, |v| v.wrapping_sub(1))
}

fn modify_memory<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
    apply: fn(u8) -> u8,
) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode);
    let addr = operand
        .addr
        .ok_or(ExecutionError::UnsupportedAddressingMode {
            opcode,
            mode: descriptor.mode,
        })?;

    let result = apply(operand.value);
    cpu.memory.write(addr, result);
    cpu.set_zero_negative(result);
    Ok(())
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zero_negative(cpu.x);
    Ok(())
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zero_negative(cpu.y);
    Ok(())
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zero_negative(cpu.x);
    Ok(())
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zero_negative(cpu.y);
    Ok(())
}
