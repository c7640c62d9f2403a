//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary processor states and memory contents, then
//! executes a few instructions looking for panics.

#![no_main]

use arbitrary::Arbitrary;
use lib2a03::{Byte, Cpu, FlatMemory};
use libfuzzer_sys::fuzz_target;

/// Arbitrary processor state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV--DIZC byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Target region for absolute addressing at 0x4000
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFA, &[0x00, 0x90, 0x00, 0x80, 0x00, 0x90]);
    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let Ok(mut cpu) = Cpu::new(memory) else {
        return;
    };

    let processor = cpu.processor_mut();
    processor.set_accumulator(Byte::new(input.cpu_state.a));
    processor.set_x(Byte::new(input.cpu_state.x));
    processor.set_y(Byte::new(input.cpu_state.y));
    processor.set_stack_pointer(Byte::new(input.cpu_state.sp));
    processor.status_mut().assign(Byte::new(input.cpu_state.status));

    // Undocumented opcodes are errors, not panics
    for _ in 0..input.steps % 16 {
        if cpu.step().is_err() {
            break;
        }
    }

    // Bits 4 and 5 are never stored
    assert_eq!(cpu.processor().status().value().value() & 0x30, 0);
});
