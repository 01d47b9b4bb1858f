//! Tests for the comparison instructions. Each family measures against its
//! own register: CMP against A, CPX against X, CPY against Y.

use mos6502::{Cpu, Flag, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

// ========== CMP ==========

#[test]
fn test_cmp_equal_sets_zero_and_carry() {
    let mut cpu = setup_cpu();

    // CMP #$42
    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x42);

    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Negative));
    assert_eq!(cpu.a(), 0x42); // comparison leaves the register alone
}

#[test]
fn test_cmp_greater_sets_carry_only() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.set_a(0x50);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
}

#[test]
fn test_cmp_less_clears_carry() {
    let mut cpu = setup_cpu();

    // 0x10 - 0x50 = 0xC0: borrow, negative difference
    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x50);

    cpu.set_a(0x10);
    cpu.step().unwrap();

    assert!(!cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_cmp_uses_accumulator_not_index_registers() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x30);

    cpu.set_a(0x30);
    cpu.set_x(0x99); // would compare unequal
    cpu.set_y(0x99);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Carry));
}

#[test]
fn test_cmp_zero_page() {
    let mut cpu = setup_cpu();

    // CMP $42
    cpu.memory_mut().write(0x8000, 0xC5);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x20);

    cpu.set_a(0x20);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Zero));
    assert_eq!(cpu.cycles(), 3);
}

// ========== CPX ==========

#[test]
fn test_cpx_compares_x_register() {
    let mut cpu = setup_cpu();

    // CPX #$10
    cpu.memory_mut().write(0x8000, 0xE0);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.set_x(0x10);
    cpu.set_a(0xFF); // must not participate
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Carry));
}

#[test]
fn test_cpx_less_than_operand() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xE0);
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.set_x(0x01);
    cpu.step().unwrap();

    assert!(!cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Negative)); // 0x01 - 0x80 = 0x81
}

// ========== CPY ==========

#[test]
fn test_cpy_compares_y_register() {
    let mut cpu = setup_cpu();

    // CPY #$33
    cpu.memory_mut().write(0x8000, 0xC0);
    cpu.memory_mut().write(0x8001, 0x33);

    cpu.set_y(0x44);
    cpu.set_a(0x00); // must not participate
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Zero));
}

#[test]
fn test_cpy_absolute() {
    let mut cpu = setup_cpu();

    // CPY $1234
    cpu.memory_mut().write(0x8000, 0xCC);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x07);

    cpu.set_y(0x07);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Zero));
    assert_eq!(cpu.cycles(), 4);
}
