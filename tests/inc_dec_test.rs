//! Tests for INC, DEC, INX, INY, DEX and DEY.

use lib2a03::{Byte, Cpu, FlatMemory, MemoryBus, Word};

/// Helper function to create a CPU with `program` at the reset address 0x8000
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0x8000, program);
    Cpu::new(memory).unwrap()
}

#[test]
fn test_inc_zero_page_wraps_to_zero() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.bus_mut().load(0x0010, &[0xFF]);

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(Word::new(0x0010)).unwrap(), Byte::new(0x00));
    assert!(cpu.processor().status().zero());
}

#[test]
fn test_dec_absolute_to_negative() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x03]);

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(Word::new(0x0300)).unwrap(), Byte::new(0xFF));
    assert!(cpu.processor().status().negative());
}

#[test]
fn test_dec_leaves_carry() {
    // SEC; DEC $10
    let mut cpu = setup_cpu(&[0x38, 0xC6, 0x10]);
    cpu.bus_mut().load(0x0010, &[0x01]);

    cpu.run(2).unwrap();

    assert!(cpu.processor().status().zero());
    assert!(cpu.processor().status().carry());
}

#[test]
fn test_register_increments() {
    // INX; INY; INY; DEX
    let mut cpu = setup_cpu(&[0xE8, 0xC8, 0xC8, 0xCA]);

    cpu.run(4).unwrap();

    assert_eq!(cpu.processor().x(), Byte::new(0x00));
    assert_eq!(cpu.processor().y(), Byte::new(0x02));
    assert!(cpu.processor().status().zero());
}

#[test]
fn test_dey_wraps() {
    let mut cpu = setup_cpu(&[0x88]);

    cpu.step().unwrap();

    assert_eq!(cpu.processor().y(), Byte::new(0xFF));
    assert!(cpu.processor().status().negative());
}
