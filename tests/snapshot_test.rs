//! Tests for the register snapshot and its serde representation.

use mos6502::{Cpu, CpuSnapshot, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

#[test]
fn test_snapshot_reflects_machine_state() {
    let mut cpu = setup_cpu();

    // LDA #$05; ADC #$03; BRK
    let program = [0xA9, 0x05, 0x69, 0x03, 0x00];
    for (i, byte) in program.into_iter().enumerate() {
        cpu.memory_mut().write(0x8000 + i as u16, byte);
    }
    cpu.run().unwrap();

    let snapshot = cpu.snapshot();
    assert_eq!(snapshot.a, 0x08);
    assert_eq!(snapshot.pc, 0x8005);
    assert_eq!(snapshot.sp, 0xFF);
    assert_eq!(snapshot.cycles, 11);
    assert!(snapshot.halted);
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.set_x(0x01);

    let snapshot = cpu.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: CpuSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, snapshot);
}

#[test]
fn test_snapshot_json_field_names() {
    let cpu = setup_cpu();
    let json = serde_json::to_string(&cpu.snapshot()).unwrap();

    for field in ["\"a\"", "\"x\"", "\"y\"", "\"sp\"", "\"pc\"", "\"status\"", "\"cycles\"", "\"halted\""] {
        assert!(json.contains(field), "missing {field} in {json}");
    }
}

#[test]
fn test_dump_memory_covers_address_space() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1234, 0xAB);

    let dump = cpu.dump_memory();
    assert_eq!(dump.len(), 0x10000);
    assert_eq!(dump[0x1234], 0xAB);
    assert_eq!(dump[0xFFFD], 0x80); // reset vector high byte
}
