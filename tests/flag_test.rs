//! Tests for the status flag instructions.

use lib2a03::{Cpu, FlatMemory, Word};

/// Helper function to create a CPU with `program` at the reset address 0x8000
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0x8000, program);
    Cpu::new(memory).unwrap()
}

#[test]
fn test_set_and_clear_pairs() {
    // SEC; SED; CLI
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x58, 0x18, 0xD8, 0x78]);

    cpu.run(3).unwrap();
    let status = cpu.processor().status();
    assert!(status.carry());
    assert!(status.decimal());
    assert!(!status.interrupt_disable());

    // CLC; CLD; SEI
    cpu.run(3).unwrap();
    let status = cpu.processor().status();
    assert!(!status.carry());
    assert!(!status.decimal());
    assert!(status.interrupt_disable());
    assert_eq!(cpu.pc(), Word::new(0x8006));
}

#[test]
fn test_clv_after_overflow() {
    // LDA #$7F; ADC #$01; CLV
    let mut cpu = setup_cpu(&[0xA9, 0x7F, 0x69, 0x01, 0xB8]);

    cpu.run(2).unwrap();
    assert!(cpu.processor().status().overflow());

    cpu.step().unwrap();
    assert!(!cpu.processor().status().overflow());
}
