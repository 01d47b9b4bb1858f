//! # Branch Instructions
//!
//! All eight conditional branches share one helper: test a flag against an
//! expected value and, when it matches, add the signed Relative
//! displacement to the program counter. A branch not taken leaves PC just
//! past the displacement byte.

use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;
use crate::opcodes::Opcode;
use crate::ExecutionError;

pub(crate) fn branch<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    descriptor: &Opcode,
    flag: Flag,
    expected: bool,
) -> Result<(), ExecutionError> {
    let displacement = cpu.fetch_operand(descriptor.mode).value;

    if cpu.flag(flag) == expected {
        // Sign-extend the 8-bit displacement into the 16-bit delta before
        // the wrapping add; PC already points past the displacement byte.
        let mut delta = displacement as u16;
        if delta & 0x0080 != 0 {
            delta |= 0xFF00;
        }
        cpu.pc = cpu.pc.wrapping_add(delta);
    }

    Ok(())
}
