//! Tests for the bitwise instructions AND, EOR, ORA and BIT.

use mos6502::{Cpu, Flag, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu();

    // AND #$0F
    cpu.memory_mut().write(0x8000, 0x29);
    cpu.memory_mut().write(0x8001, 0x0F);

    cpu.set_a(0x3C);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_and_to_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x29);
    cpu.memory_mut().write(0x8001, 0x0F);

    cpu.set_a(0xF0);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

// ========== EOR ==========

#[test]
fn test_eor_immediate() {
    let mut cpu = setup_cpu();

    // EOR #$FF inverts the accumulator
    cpu.memory_mut().write(0x8000, 0x49);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x0F);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_eor_zero_page_via_0x45() {
    let mut cpu = setup_cpu();

    // EOR $10
    cpu.memory_mut().write(0x8000, 0x45);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xAA);

    cpu.set_a(0xAA);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
    assert_eq!(cpu.cycles(), 3);
}

// ========== ORA ==========

#[test]
fn test_ora_immediate() {
    let mut cpu = setup_cpu();

    // ORA #$80
    cpu.memory_mut().write(0x8000, 0x09);
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.set_a(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_ora_zero_stays_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x09);
    cpu.memory_mut().write(0x8001, 0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

// ========== BIT ==========

#[test]
fn test_bit_copies_operand_high_bits() {
    let mut cpu = setup_cpu();

    // BIT $42 with operand bits 7 and 6 set
    cpu.memory_mut().write(0x8000, 0x24);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0xC0);

    cpu.set_a(0xFF);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Negative));
    assert!(cpu.flag(Flag::Overflow));
    assert!(!cpu.flag(Flag::Zero)); // 0xFF & 0xC0 != 0
    assert_eq!(cpu.a(), 0xFF); // accumulator untouched
}

#[test]
fn test_bit_zero_from_masked_and() {
    let mut cpu = setup_cpu();

    // Operand 0x3F has neither high bit; A misses all of its bits
    cpu.memory_mut().write(0x8000, 0x24);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x3F);

    cpu.set_a(0x40);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Overflow));
}

#[test]
fn test_bit_absolute() {
    let mut cpu = setup_cpu();

    // BIT $1234
    cpu.memory_mut().write(0x8000, 0x2C);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x80);

    cpu.set_a(0x80);
    cpu.step().unwrap();

    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Overflow));
    assert!(!cpu.flag(Flag::Zero));
    assert_eq!(cpu.cycles(), 4);
}
