//! # 2A03 Instruction Implementations
//!
//! Every documented instruction is a method on [`Processor`], grouped by category.
//! The methods never decode anything themselves: each receives its operand already
//! resolved by [`AddressingMode::resolve`](crate::AddressingMode::resolve) into a
//! value, a memory reference, or a target pointer.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP) and interrupts
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::Operand;
use crate::byte::Byte;
use crate::memory::{MemoryBus, Pointer, Reference};
use crate::opcodes::Mnemonic;
use crate::processor::{Processor, IRQ_VECTOR};
use crate::ExecutionError;

/// Runs `mnemonic` against an operand resolved by the addressing mode.
///
/// The program counter must already point at the following instruction.
pub(crate) fn execute<B: MemoryBus + ?Sized>(
    cpu: &mut Processor,
    bus: &mut B,
    mnemonic: Mnemonic,
    operand: Operand,
) -> Result<(), ExecutionError> {
    use Mnemonic::*;

    match mnemonic {
        // Value operands
        Adc => cpu.adc(value(bus, mnemonic, operand)?),
        And => cpu.and(value(bus, mnemonic, operand)?),
        Bit => cpu.bit(value(bus, mnemonic, operand)?),
        Cmp => cpu.cmp(value(bus, mnemonic, operand)?),
        Cpx => cpu.cpx(value(bus, mnemonic, operand)?),
        Cpy => cpu.cpy(value(bus, mnemonic, operand)?),
        Eor => cpu.eor(value(bus, mnemonic, operand)?),
        Lda => cpu.lda(value(bus, mnemonic, operand)?),
        Ldx => cpu.ldx(value(bus, mnemonic, operand)?),
        Ldy => cpu.ldy(value(bus, mnemonic, operand)?),
        Ora => cpu.ora(value(bus, mnemonic, operand)?),
        Sbc => cpu.sbc(value(bus, mnemonic, operand)?),

        // Memory references
        Sta => cpu.sta(reference(bus, mnemonic, operand)?)?,
        Stx => cpu.stx(reference(bus, mnemonic, operand)?)?,
        Sty => cpu.sty(reference(bus, mnemonic, operand)?)?,
        Inc => cpu.inc(reference(bus, mnemonic, operand)?)?,
        Dec => cpu.dec(reference(bus, mnemonic, operand)?)?,

        // Accumulator or memory
        Asl => match operand {
            Operand::Accumulator => cpu.asl_accumulator(),
            _ => cpu.asl(reference(bus, mnemonic, operand)?)?,
        },
        Lsr => match operand {
            Operand::Accumulator => cpu.lsr_accumulator(),
            _ => cpu.lsr(reference(bus, mnemonic, operand)?)?,
        },
        Rol => match operand {
            Operand::Accumulator => cpu.rol_accumulator(),
            _ => cpu.rol(reference(bus, mnemonic, operand)?)?,
        },
        Ror => match operand {
            Operand::Accumulator => cpu.ror_accumulator(),
            _ => cpu.ror(reference(bus, mnemonic, operand)?)?,
        },

        // Targets
        Bcc => cpu.bcc(pointer(mnemonic, operand)?),
        Bcs => cpu.bcs(pointer(mnemonic, operand)?),
        Beq => cpu.beq(pointer(mnemonic, operand)?),
        Bmi => cpu.bmi(pointer(mnemonic, operand)?),
        Bne => cpu.bne(pointer(mnemonic, operand)?),
        Bpl => cpu.bpl(pointer(mnemonic, operand)?),
        Bvc => cpu.bvc(pointer(mnemonic, operand)?),
        Bvs => cpu.bvs(pointer(mnemonic, operand)?),
        Jmp => cpu.jmp(pointer(mnemonic, operand)?),
        Jsr => cpu.jsr(bus, pointer(mnemonic, operand)?)?,

        // Stack
        Pha => cpu.pha(bus)?,
        Php => cpu.php(bus)?,
        Pla => cpu.pla(bus)?,
        Plp => cpu.plp(bus)?,
        Rti => cpu.rti(bus)?,
        Rts => cpu.rts(bus)?,
        Brk => cpu.brk(bus, Pointer::new(IRQ_VECTOR))?,

        // Implied
        Clc => cpu.clc(),
        Cld => cpu.cld(),
        Cli => cpu.cli(),
        Clv => cpu.clv(),
        Sec => cpu.sec(),
        Sed => cpu.sed(),
        Sei => cpu.sei(),
        Dex => cpu.dex(),
        Dey => cpu.dey(),
        Inx => cpu.inx(),
        Iny => cpu.iny(),
        Nop => cpu.nop(),
        Tax => cpu.tax(),
        Tay => cpu.tay(),
        Tsx => cpu.tsx(),
        Txa => cpu.txa(),
        Txs => cpu.txs(),
        Tya => cpu.tya(),
    }

    Ok(())
}

fn value<B: MemoryBus + ?Sized>(
    bus: &B,
    mnemonic: Mnemonic,
    operand: Operand,
) -> Result<Byte, ExecutionError> {
    match operand {
        Operand::Value(value) => Ok(value),
        Operand::Address(address) => Ok(bus.read(address.address())?),
        other => Err(ExecutionError::InvalidOperand {
            mnemonic,
            operand: other,
        }),
    }
}

fn reference<B: MemoryBus + ?Sized>(
    bus: &mut B,
    mnemonic: Mnemonic,
    operand: Operand,
) -> Result<Reference<'_, B>, ExecutionError> {
    match operand {
        Operand::Address(address) => Ok(address.reference(bus)),
        other => Err(ExecutionError::InvalidOperand {
            mnemonic,
            operand: other,
        }),
    }
}

fn pointer(mnemonic: Mnemonic, operand: Operand) -> Result<Pointer, ExecutionError> {
    match operand {
        Operand::Address(address) => Ok(address),
        other => Err(ExecutionError::InvalidOperand {
            mnemonic,
            operand: other,
        }),
    }
}
