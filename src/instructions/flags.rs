//! # Status Flag Manipulation Instructions
//!
//! CLC/SEC, CLD/SED, CLI/SEI and CLV all reduce to writing one literal
//! flag bit; the engine passes the flag and target value from dispatch.

use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;
use crate::ExecutionError;

pub(crate) fn set<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    flag: Flag,
    value: bool,
) -> Result<(), ExecutionError> {
    cpu.set_flag(flag, value);
    Ok(())
}
