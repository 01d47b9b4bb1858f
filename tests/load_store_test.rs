//! Tests for the load and store instruction families.

use mos6502::{Cpu, Flag, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_sets_negative() {
    let mut cpu = setup_cpu();

    // LDA #$80
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Zero));
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_zero_flag() {
    let mut cpu = setup_cpu();

    // LDA #$00 over a non-zero accumulator
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x00);

    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    // LDX $40,Y with Y=2
    cpu.memory_mut().write(0x8000, 0xB6);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0042, 0x77);

    cpu.set_y(0x02);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x77);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldx_absolute_y() {
    let mut cpu = setup_cpu();

    // LDX $1200,Y with Y=4
    cpu.memory_mut().write(0x8000, 0xBE);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1204, 0x3F);

    cpu.set_y(0x04);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x3F);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();

    // LDY $1200,X with X=1
    cpu.memory_mut().write(0x8000, 0xBC);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1201, 0x09);

    cpu.set_x(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x09);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    // STA $42
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x42);

    cpu.set_a(0x99);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0042), 0x99);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut cpu = setup_cpu();

    // STA $42 with A=0: no Zero flag from a store
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x42);

    let status_before = cpu.status();
    cpu.step().unwrap();

    assert_eq!(cpu.status(), status_before);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    // STA ($40),Y with Y=2: pointer read from 0x42/0x43
    cpu.memory_mut().write(0x8000, 0x91);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0042, 0x00);
    cpu.memory_mut().write(0x0043, 0x30);

    cpu.set_a(0xBE);
    cpu.set_y(0x02);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3000), 0xBE);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    // STX $40,Y with Y=5
    cpu.memory_mut().write(0x8000, 0x96);
    cpu.memory_mut().write(0x8001, 0x40);

    cpu.set_x(0x11);
    cpu.set_y(0x05);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0045), 0x11);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();

    // STY $1234
    cpu.memory_mut().write(0x8000, 0x8C);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);

    cpu.set_y(0x77);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1234), 0x77);
    assert_eq!(cpu.cycles(), 4);
}
