//! # Processor State
//!
//! This module contains the [`Processor`] struct holding the 2A03 register file:
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack**: 8-bit pointer into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C packed in a [`Status`]
//!
//! The processor does not own the bus. Instruction methods (one per mnemonic,
//! grouped under `instructions/`) receive their operand already resolved into one
//! of four shapes: nothing, a [`Byte`](crate::Byte) value, a
//! [`Reference`](crate::Reference) into memory, or a [`Pointer`](crate::Pointer)
//! target. Instructions that touch the stack take the bus explicitly.

use crate::byte::{Byte, Word};
use crate::stack::Stack;
use crate::status::Status;

/// Non-maskable interrupt vector.
pub const NMI_VECTOR: Word = Word(0xFFFA);

/// Reset vector.
pub const RESET_VECTOR: Word = Word(0xFFFC);

/// IRQ and BRK vector.
pub const IRQ_VECTOR: Word = Word(0xFFFE);

/// 2A03 register file.
///
/// # Examples
///
/// ```
/// use lib2a03::{Byte, Processor};
///
/// let mut cpu = Processor::new();
/// cpu.set_accumulator(Byte::new(0x50));
/// cpu.adc(Byte::new(0x50));
///
/// assert_eq!(cpu.accumulator(), Byte::new(0xA0));
/// assert!(cpu.status().overflow());
/// assert!(cpu.status().negative());
/// assert!(!cpu.status().carry());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processor {
    pub(crate) accumulator: Byte,
    pub(crate) x: Byte,
    pub(crate) y: Byte,
    pub(crate) program_counter: Word,
    pub(crate) status: Status,
    pub(crate) stack: Stack,
}

impl Processor {
    /// Power-up register state. The program counter is loaded by [`reset`](Self::reset).
    pub fn new() -> Self {
        Self {
            accumulator: Byte::new(0x00),
            x: Byte::new(0x00),
            y: Byte::new(0x00),
            program_counter: Word::new(0x0000),
            status: Status::default(),
            stack: Stack::default(),
        }
    }

    pub fn accumulator(&self) -> Byte {
        self.accumulator
    }

    pub fn set_accumulator(&mut self, value: Byte) {
        self.accumulator = value;
    }

    pub fn x(&self) -> Byte {
        self.x
    }

    pub fn set_x(&mut self, value: Byte) {
        self.x = value;
    }

    pub fn y(&self) -> Byte {
        self.y
    }

    pub fn set_y(&mut self, value: Byte) {
        self.y = value;
    }

    pub fn program_counter(&self) -> Word {
        self.program_counter
    }

    pub fn set_program_counter(&mut self, value: Word) {
        self.program_counter = value;
    }

    /// Returns the stack pointer; the full stack address is 0x0100 + SP.
    pub fn stack_pointer(&self) -> Byte {
        self.stack.pointer()
    }

    pub fn set_stack_pointer(&mut self, value: Byte) {
        self.stack.set_pointer(value);
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}
