//! # Register Transfer Instructions
//!
//! Copies between registers. Every transfer updates Zero/Negative from
//! the destination except TXS, which writes the stack pointer silently.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::ExecutionError;

pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.a;
    cpu.set_zero_negative(cpu.x);
    Ok(())
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.y = cpu.a;
    cpu.set_zero_negative(cpu.y);
    Ok(())
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.a = cpu.x;
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.a = cpu.y;
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.x = cpu.sp;
    cpu.set_zero_negative(cpu.x);
    Ok(())
}

pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.sp = cpu.x;
    Ok(())
}
