//! # Instruction Driver
//!
//! [`Cpu`] pairs a [`Processor`] with the bus it runs against and implements the
//! fetch-decode-execute loop:
//!
//! 1. Fetch the opcode byte at PC
//! 2. Decode it through [`OPCODE_TABLE`]; undocumented opcodes are an error
//! 3. Resolve the operand from the addressing mode
//! 4. Advance PC past the instruction
//! 5. Execute
//! 6. Service a pending IRQ if the bus reports one and I is clear
//!
//! Execution is instruction-granular. There is no cycle counting, and interrupts
//! are only taken between instructions.

use tracing::trace;

use crate::byte::Word;
use crate::instructions;
use crate::memory::{BusError, MemoryBus};
use crate::opcodes::OPCODE_TABLE;
use crate::processor::Processor;
use crate::ExecutionError;

/// 2A03 processor attached to a memory bus.
///
/// # Type Parameters
///
/// * `B` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use lib2a03::{Byte, Cpu, FlatMemory, Word};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x80]); // reset vector
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = Cpu::new(memory).unwrap();
/// assert_eq!(cpu.processor().program_counter(), Word::new(0x8000));
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.processor().accumulator(), Byte::new(0x42));
/// assert_eq!(cpu.processor().program_counter(), Word::new(0x8002));
/// ```
pub struct Cpu<B: MemoryBus> {
    processor: Processor,
    bus: B,
    instructions: u64,
}

impl<B: MemoryBus> Cpu<B> {
    /// Attaches a processor to `bus` and runs the reset sequence.
    pub fn new(mut bus: B) -> Result<Self, BusError> {
        let mut processor = Processor::new();
        processor.reset(&mut bus)?;
        Ok(Self {
            processor,
            bus,
            instructions: 0,
        })
    }

    /// Executes one instruction.
    ///
    /// On error the processor registers are restored to their state before the
    /// instruction, so PC still points at the failing opcode. Bus writes that
    /// completed before the failure are not undone.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let pc = self.processor.program_counter();
        let opcode = self.bus.read(pc)?;
        let metadata = OPCODE_TABLE[opcode.value() as usize]
            .ok_or(ExecutionError::IllegalOpcode { opcode, address: pc })?;

        let operand = metadata
            .addressing_mode
            .resolve(&self.bus, &self.processor, pc)?;
        trace!(
            pc = %pc,
            opcode = %opcode,
            mnemonic = %metadata.mnemonic,
            operand = ?operand,
            a = %self.processor.accumulator(),
            x = %self.processor.x(),
            y = %self.processor.y(),
            sp = %self.processor.stack_pointer(),
            p = %self.processor.status().value(),
            "execute"
        );

        let saved = self.processor.clone();
        self.processor
            .set_program_counter(pc + metadata.size_bytes as u16);
        if let Err(error) =
            instructions::execute(&mut self.processor, &mut self.bus, metadata.mnemonic, operand)
        {
            self.processor = saved;
            return Err(error);
        }
        self.instructions += 1;

        if self.bus.irq_active() {
            let saved = self.processor.clone();
            if let Err(error) = self.processor.irq(&mut self.bus) {
                self.processor = saved;
                return Err(error.into());
            }
        }
        Ok(())
    }

    /// Executes `count` instructions, stopping at the first error.
    pub fn run(&mut self, count: usize) -> Result<(), ExecutionError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Requests a maskable interrupt. Returns whether it was taken.
    pub fn irq(&mut self) -> Result<bool, BusError> {
        self.processor.irq(&mut self.bus)
    }

    /// Signals a non-maskable interrupt.
    pub fn nmi(&mut self) -> Result<(), BusError> {
        self.processor.nmi(&mut self.bus)
    }

    pub fn reset(&mut self) -> Result<(), BusError> {
        self.processor.reset(&mut self.bus)
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    pub fn processor_mut(&mut self) -> &mut Processor {
        &mut self.processor
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Number of instructions executed since construction.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Address of the next instruction.
    pub fn pc(&self) -> Word {
        self.processor.program_counter()
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::Byte;
    use crate::devices::{MappedMemory, Segment};
    use crate::memory::{Access, FlatMemory};

    fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0xFFFC, &[0x00, 0x80]);
        memory.load(0x8000, program);
        Cpu::new(memory).unwrap()
    }

    #[test]
    fn test_illegal_opcode_leaves_pc() {
        let mut cpu = setup_cpu(&[0x02]);

        let result = cpu.step();

        assert_eq!(
            result,
            Err(ExecutionError::IllegalOpcode {
                opcode: Byte::new(0x02),
                address: Word::new(0x8000)
            })
        );
        assert_eq!(cpu.pc(), Word::new(0x8000));
        assert_eq!(cpu.instructions(), 0);
    }

    #[test]
    fn test_run_counts_instructions() {
        let mut cpu = setup_cpu(&[0xE8, 0xE8, 0xE8]);

        cpu.run(3).unwrap();

        assert_eq!(cpu.processor().x(), Byte::new(0x03));
        assert_eq!(cpu.instructions(), 3);
        assert_eq!(cpu.pc(), Word::new(0x8003));
    }

    #[test]
    fn test_brk_skips_padding_byte() {
        let mut cpu = setup_cpu(&[0x00, 0xFF]);
        cpu.bus_mut().load(0xFFFE, &[0x00, 0x90]);

        cpu.step().unwrap();

        assert_eq!(cpu.pc(), Word::new(0x9000));
        assert_eq!(
            cpu.bus().read_word(Word::new(0x01FE)).unwrap(),
            Word::new(0x8002)
        );
    }

    fn setup_mapped(program: &[u8]) -> Cpu<MappedMemory> {
        let mut rom = Segment::new(0x8000, 0x8000, 0x1_0000);
        rom.load_bytes(0x0000, program);
        rom.load_bytes(0x7FFC, &[0x00, 0x80]);
        Cpu::new(MappedMemory::new().with_device(Box::new(rom))).unwrap()
    }

    #[test]
    fn test_unmapped_store_restores_registers() {
        // LDA #$42; STA $4000
        let mut cpu = setup_mapped(&[0xA9, 0x42, 0x8D, 0x00, 0x40]);
        cpu.step().unwrap();

        let result = cpu.step();

        assert_eq!(
            result,
            Err(ExecutionError::Bus(BusError::Unmapped {
                address: Word::new(0x4000),
                access: Access::Write,
            }))
        );
        assert_eq!(cpu.pc(), Word::new(0x8002));
        assert_eq!(cpu.processor().accumulator(), Byte::new(0x42));
        assert_eq!(cpu.instructions(), 1);
    }

    #[test]
    fn test_jsr_without_stack_memory_restores_registers() {
        // JSR $9000 with nothing mapped at page 0x01
        let mut cpu = setup_mapped(&[0x20, 0x00, 0x90]);

        let result = cpu.step();

        assert!(matches!(
            result,
            Err(ExecutionError::Bus(BusError::Unmapped {
                access: Access::Write,
                ..
            }))
        ));
        assert_eq!(cpu.pc(), Word::new(0x8000));
        assert_eq!(cpu.processor().stack_pointer(), Byte::new(0xFF));
    }
}
