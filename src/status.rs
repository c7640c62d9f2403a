//! # Processor Status Register
//!
//! The six physical flags are stored packed in a single byte at their hardware bit
//! positions (NV--DIZC). Bits 4 and 5 are never stored: they only exist in the
//! serialized form pushed to the stack, where bit 5 is always set and bit 4 (the
//! "break" bit) distinguishes an instruction push (PHP, BRK) from a hardware
//! interrupt push (IRQ, NMI).

use crate::byte::Byte;

const CARRY: u32 = 0;
const ZERO: u32 = 1;
const INTERRUPT_DISABLE: u32 = 2;
const DECIMAL: u32 = 3;
const BREAK: u32 = 4;
const UNUSED: u32 = 5;
const OVERFLOW: u32 = 6;
const NEGATIVE: u32 = 7;

/// Mask of the bits that are physically stored.
const STORED: u8 = 0b1100_1111;

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use lib2a03::{Byte, Status};
///
/// let mut status = Status::default();
/// status.assign(Byte::new(0x00));
///
/// assert_eq!(status.instruction_value(), Byte::new(0x30));
/// assert_eq!(status.interrupt_value(), Byte::new(0x20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    bits: Byte,
}

impl Default for Status {
    /// Power-up state: interrupts disabled.
    fn default() -> Self {
        Self::from(Byte::new(0x24))
    }
}

impl From<Byte> for Status {
    fn from(value: Byte) -> Self {
        Self {
            bits: Byte::new(value.value() & STORED),
        }
    }
}

impl Status {
    /// Packs the six flags into a byte. Bits 4 and 5 are always clear.
    pub fn value(&self) -> Byte {
        self.bits
    }

    /// Serialized form pushed by PHP and BRK: bits 4 and 5 set.
    pub fn instruction_value(&self) -> Byte {
        self.bits.with_bit(UNUSED, true).with_bit(BREAK, true)
    }

    /// Serialized form pushed on IRQ and NMI entry: bit 5 set, bit 4 clear.
    pub fn interrupt_value(&self) -> Byte {
        self.bits.with_bit(UNUSED, true)
    }

    /// Decodes all six flags from `value`, discarding bits 4 and 5 (PLP, RTI).
    pub fn assign(&mut self, value: Byte) {
        *self = Self::from(value);
    }

    /// Updates zero and negative from the low byte of `result`.
    pub fn logical(&mut self, result: u16) {
        let low = Byte::new(result as u8);
        self.set_zero(low.value() == 0);
        self.set_negative(low.sign());
    }

    /// `logical` plus carry out of a 9-bit-wide computation.
    pub fn arithmetic(&mut self, result: u16) {
        self.logical(result);
        self.set_carry(result > 0xFF);
    }

    /// Sets overflow when both operands share a sign that the result does not.
    pub fn overflows(&mut self, left: Byte, right: Byte, result: u16) {
        let result_sign = Byte::new(result as u8).sign();
        self.set_overflow(left.sign() == right.sign() && left.sign() != result_sign);
    }

    pub fn carry(&self) -> bool {
        self.bits.bit(CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.bits.set(CARRY, value);
    }

    pub fn zero(&self) -> bool {
        self.bits.bit(ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.bits.set(ZERO, value);
    }

    pub fn interrupt_disable(&self) -> bool {
        self.bits.bit(INTERRUPT_DISABLE)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.bits.set(INTERRUPT_DISABLE, value);
    }

    /// Decimal mode has no arithmetic effect on the 2A03; the flag is still stored.
    pub fn decimal(&self) -> bool {
        self.bits.bit(DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.bits.set(DECIMAL, value);
    }

    pub fn overflow(&self) -> bool {
        self.bits.bit(OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.bits.set(OVERFLOW, value);
    }

    pub fn negative(&self) -> bool {
        self.bits.bit(NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.bits.set(NEGATIVE, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_up_state() {
        let status = Status::default();
        assert!(status.interrupt_disable());
        assert!(!status.carry());
        assert_eq!(status.value(), Byte::new(0x04));
        assert_eq!(status.interrupt_value(), Byte::new(0x24));
    }

    #[test]
    fn test_value_packs_flags_at_hardware_positions() {
        let mut status = Status::from(Byte::new(0x00));
        status.set_carry(true);
        status.set_zero(true);
        status.set_interrupt_disable(true);
        status.set_decimal(true);
        status.set_overflow(true);
        status.set_negative(true);
        assert_eq!(status.value(), Byte::new(0b1100_1111));
    }

    #[test]
    fn test_assign_discards_break_and_unused() {
        let mut status = Status::default();
        status.assign(Byte::new(0xFF));
        assert_eq!(status.value(), Byte::new(0xCF));
        assert_eq!(status.instruction_value(), Byte::new(0xFF));
        assert_eq!(status.interrupt_value(), Byte::new(0xEF));
    }

    #[test]
    fn test_logical() {
        let mut status = Status::default();
        status.logical(0x100);
        assert!(status.zero());
        assert!(!status.negative());

        status.logical(0x80);
        assert!(!status.zero());
        assert!(status.negative());
    }

    #[test]
    fn test_arithmetic_sets_carry_from_ninth_bit() {
        let mut status = Status::default();
        status.arithmetic(0x1A0);
        assert!(status.carry());
        assert!(status.negative());
        assert!(!status.zero());

        status.arithmetic(0x0FF);
        assert!(!status.carry());
    }

    #[test]
    fn test_overflows() {
        let mut status = Status::default();
        status.overflows(Byte::new(0x50), Byte::new(0x50), 0xA0);
        assert!(status.overflow());

        status.overflows(Byte::new(0x50), Byte::new(0x10), 0x60);
        assert!(!status.overflow());

        status.overflows(Byte::new(0xD0), Byte::new(0x90), 0x160);
        assert!(status.overflow());
    }
}
