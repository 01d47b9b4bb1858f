//! # Stack Instructions
//!
//! Push/pull the accumulator or the status byte through page one. PHP
//! forces Break and Unused into the stacked copy and clears both live
//! bits afterwards; PLP restores whatever was stacked but keeps Unused
//! set unconditionally.

use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;
use crate::ExecutionError;

pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let a = cpu.a;
    cpu.push(a);
    Ok(())
}

pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let stacked = cpu.status | Flag::Break.mask() | Flag::Unused.mask();
    cpu.push(stacked);
    cpu.set_flag(Flag::Break, false);
    cpu.set_flag(Flag::Unused, false);
    Ok(())
}

pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.a = cpu.pull();
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    cpu.status = cpu.pull();
    cpu.set_flag(Flag::Unused, true);
    Ok(())
}
