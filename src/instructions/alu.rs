//! # Arithmetic and Logic Instructions
//!
//! ADC/SBC share one adder data path (SBC feeds the one's complement of
//! the operand into it, so carry acts as not-borrow). The comparisons each
//! measure against their own register.

use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;
use crate::opcodes::Opcode;
use crate::ExecutionError;

/// ADC: accumulator + operand + carry-in, in a 16-bit temporary.
///
/// Carry is the bit 8 carry-out; Overflow uses the standard two's
/// complement rule (both inputs share a sign the result lacks);
/// Zero/Negative come from the stored low byte.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    add_to_accumulator(cpu, operand);
    Ok(())
}

/// SBC: ADC of the inverted operand, so the carry flag is the borrow
/// complement (set carry before a subtraction, as on real hardware).
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    add_to_accumulator(cpu, !operand);
    Ok(())
}

fn add_to_accumulator<M: MemoryBus>(cpu: &mut Cpu<M>, operand: u8) {
    let a = cpu.a as u16;
    let carry_in = cpu.flag(Flag::Carry) as u16;
    let sum = a + operand as u16 + carry_in;
    let result = sum as u8;

    cpu.set_flag(Flag::Carry, sum > 0xFF);
    cpu.set_flag(
        Flag::Overflow,
        (!(a ^ operand as u16) & (a ^ sum)) & 0x0080 != 0,
    );
    cpu.set_zero_negative(result);

    cpu.a = result;
}

pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    cpu.a &= operand;
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    cpu.a ^= operand;
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    cpu.a |= operand;
    cpu.set_zero_negative(cpu.a);
    Ok(())
}

/// BIT: Zero from A AND operand; Negative and Overflow copied straight
/// from operand bits 7 and 6. The accumulator is not written.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    cpu.set_flag(Flag::Zero, cpu.a & operand == 0);
    cpu.set_flag(Flag::Negative, operand & 0x80 != 0);
    cpu.set_flag(Flag::Overflow, operand & 0x40 != 0);
    Ok(())
}

pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let register = cpu.a;
    compare(cpu, descriptor, register);
    Ok(())
}

pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let register = cpu.x;
    compare(cpu, descriptor, register);
    Ok(())
}

pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode) -> Result<(), ExecutionError> {
    let register = cpu.y;
    compare(cpu, descriptor, register);
    Ok(())
}

/// Shared comparison: `register - operand` in a 16-bit temporary. Carry is
/// the unsigned `register >= operand` test against the register being
/// compared, Zero/Negative come from the low difference byte.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, descriptor: &Opcode, register: u8) {
    let operand = cpu.fetch_operand(descriptor.mode).value;
    let diff = (register as u16).wrapping_sub(operand as u16);

    cpu.set_flag(Flag::Carry, register >= operand);
    cpu.set_zero_negative(diff as u8);
}
