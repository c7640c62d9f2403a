//! # NES 2A03 Processor Core
//!
//! An instruction-level emulator of the Ricoh 2A03, the 6502-derived processor of the
//! Nintendo Entertainment System, together with the console's CPU memory bus.
//!
//! The 2A03 executes the 56 documented 6502 instructions with binary arithmetic only:
//! the decimal flag can be set and cleared but ADC and SBC ignore it.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib2a03::{Byte, Cpu, FlatMemory, Word};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0xFFFC, &[0x00, 0x80]);                   // reset vector -> 0x8000
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03, 0xEA]); // LDA #5; ADC #3; NOP
//!
//! let mut cpu = Cpu::new(memory).unwrap();
//! cpu.run(3).unwrap();
//!
//! assert_eq!(cpu.processor().accumulator(), Byte::new(0x08));
//! assert_eq!(cpu.pc(), Word::new(0x8005));
//! ```
//!
//! ## Architecture
//!
//! - **Processor** owns the registers, the status byte and the stack pointer. It does
//!   not own memory: every instruction receives its operand already resolved into a
//!   value, a [`Reference`] into memory, or a [`Pointer`] target.
//! - **MemoryBus** is the seam to memory. [`FlatMemory`] backs tests; [`MappedMemory`]
//!   dispatches to registered [`Device`]s in registration order.
//! - **Cpu** pairs a processor with a bus and runs the table-driven decode loop.
//!
//! ## Modules
//!
//! - `byte` - [`Byte`] and [`Word`] with wrapping arithmetic and bit access
//! - `status`, `stack`, `processor`, `instructions` - the processor core
//! - `memory`, `devices` - bus, reference types and the console address map
//! - `addressing`, `opcodes`, `cpu` - operand resolution and the driver
//! - `rom` - iNES image parsing feeding [`Cartridge`]

pub mod addressing;
pub mod byte;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod processor;
pub mod rom;
pub mod stack;
pub mod status;

mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

use thiserror::Error;

pub use addressing::{AddressingMode, Operand};
pub use byte::{overflows, Byte, Word};
pub use cpu::Cpu;
pub use devices::{
    Cartridge, CartridgeError, Device, MappedMemory, Mapper, Mirroring, RegisterBlock, Segment,
};
pub use memory::{Access, BusError, FlatMemory, MemoryBus, Pointer, Reference};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use processor::{Processor, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use rom::{RomError, RomImage};
pub use stack::Stack;
pub use status::Status;

/// Errors that can occur while executing instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched byte is not one of the 151 documented opcodes.
    #[error("opcode 0x{opcode} at 0x{address} is not a documented instruction")]
    IllegalOpcode { opcode: Byte, address: Word },

    #[error(transparent)]
    Bus(#[from] BusError),

    /// The decoded addressing mode produced an operand the instruction cannot use.
    #[error("{mnemonic} cannot take operand {operand:?}")]
    InvalidOperand { mnemonic: Mnemonic, operand: Operand },
}
