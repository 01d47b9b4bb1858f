//! # Control Flow Instructions
//!
//! JMP, JSR, RTS and RTI. JSR stacks the address of its own last operand
//! byte (PC - 1), which RTS compensates for with a final +1; RTI restores
//! a stacked PC verbatim.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;
use crate::opcodes::Opcode;
use crate::ExecutionError;

/// JMP: set PC to the resolved address, direct or through one level of
/// indirection. Any other mode in the descriptor is malformed.
pub(crate) fn jmp<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    match descriptor.mode {
        AddressingMode::Absolute | AddressingMode::Indirect => {
            let operand = cpu.fetch_operand(descriptor.mode);
            // Both modes always produce an address
            if let Some(addr) = operand.addr {
                cpu.pc = addr;
            }
            Ok(())
        }
        mode => Err(ExecutionError::UnsupportedAddressingMode { opcode, mode }),
    }
}

/// JSR: push PC - 1 (high byte first), then jump to the absolute target.
pub(crate) fn jsr<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    opcode: u8,
    descriptor: &Opcode,
) -> Result<(), ExecutionError> {
    if descriptor.mode != AddressingMode::Absolute {
        return Err(ExecutionError::UnsupportedAddressingMode {
            opcode,
            mode: descriptor.mode,
        });
    }

    let operand = cpu.fetch_operand(descriptor.mode);
    let return_addr = cpu.pc.wrapping_sub(1);

    cpu.push((return_addr >> 8) as u8);
    cpu.push(return_addr as u8);

    if let Some(addr) = operand.addr {
        cpu.pc = addr;
    }
    Ok(())
}

/// RTS: pull PC (low byte first) and step past the stacked operand byte.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    Ok(())
}

/// RTI: pull status (Break and Unused stripped from the restored value),
/// then pull PC low/high — no +1 adjustment, unlike RTS.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let status = cpu.pull();
    cpu.status = status & !(Flag::Break.mask() | Flag::Unused.mask());

    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = (hi << 8) | lo;
    Ok(())
}
