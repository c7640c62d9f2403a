//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add and subtract with carry (the 2A03 has no decimal mode)
//! - AND, ORA, EOR: bitwise operations on the accumulator
//! - CMP, CPX, CPY: register comparisons
//! - BIT: bit test against the accumulator

use crate::byte::Byte;
use crate::processor::Processor;

impl Processor {
    /// Executes the ADC (Add with Carry) instruction.
    ///
    /// Adds `operand` plus the carry flag to the accumulator. Sets C when the 9-bit
    /// sum exceeds 0xFF, V on signed overflow, and N and Z from the result. The
    /// decimal flag is ignored.
    pub fn adc(&mut self, operand: Byte) {
        let result =
            u16::from(self.accumulator) + u16::from(operand) + u16::from(self.status.carry());

        self.status.arithmetic(result);
        self.status.overflows(self.accumulator, operand, result);
        self.accumulator = Byte::new(result as u8);
    }

    /// Executes the SBC (Subtract with Carry) instruction.
    ///
    /// `A - M - (1 - C)` is computed as `A + !M + C`, so every flag follows ADC.
    pub fn sbc(&mut self, operand: Byte) {
        self.adc(!operand);
    }

    /// Executes the AND (Logical AND) instruction.
    pub fn and(&mut self, operand: Byte) {
        self.accumulator &= operand;
        self.status.logical(self.accumulator.into());
    }

    /// Executes the ORA (Logical Inclusive OR) instruction.
    pub fn ora(&mut self, operand: Byte) {
        self.accumulator |= operand;
        self.status.logical(self.accumulator.into());
    }

    /// Executes the EOR (Exclusive OR) instruction.
    pub fn eor(&mut self, operand: Byte) {
        self.accumulator ^= operand;
        self.status.logical(self.accumulator.into());
    }

    /// Executes the CMP (Compare Accumulator) instruction.
    ///
    /// Sets C when `A >= M`, Z when they are equal, and N from bit 7 of `A - M`.
    pub fn cmp(&mut self, operand: Byte) {
        self.compare(self.accumulator, operand);
    }

    /// Executes the CPX (Compare X Register) instruction.
    pub fn cpx(&mut self, operand: Byte) {
        self.compare(self.x, operand);
    }

    /// Executes the CPY (Compare Y Register) instruction.
    pub fn cpy(&mut self, operand: Byte) {
        self.compare(self.y, operand);
    }

    /// Executes the BIT (Bit Test) instruction.
    ///
    /// Z is set when `A & M` is zero. N and V are copied from bits 7 and 6 of the
    /// operand itself. The accumulator is unchanged.
    pub fn bit(&mut self, operand: Byte) {
        self.status.set_zero((self.accumulator & operand).value() == 0);
        self.status.set_overflow(operand.bit(6));
        self.status.set_negative(operand.sign());
    }

    fn compare(&mut self, register: Byte, operand: Byte) {
        let result = u16::from(register).wrapping_sub(u16::from(operand));
        self.status.logical(result);
        self.status.set_carry(register >= operand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_accumulator(value: u8) -> Processor {
        let mut cpu = Processor::new();
        cpu.set_accumulator(Byte::new(value));
        cpu
    }

    #[test]
    fn test_adc_carry_in_and_out() {
        let mut cpu = with_accumulator(0xFF);
        cpu.status_mut().set_carry(true);
        cpu.adc(Byte::new(0x01));

        assert_eq!(cpu.accumulator(), Byte::new(0x01));
        assert!(cpu.status().carry());
        assert!(!cpu.status().zero());
        assert!(!cpu.status().overflow());
    }

    #[test]
    fn test_adc_ignores_decimal_flag() {
        let mut cpu = with_accumulator(0x09);
        cpu.status_mut().set_decimal(true);
        cpu.adc(Byte::new(0x01));

        assert_eq!(cpu.accumulator(), Byte::new(0x0A));
    }

    #[test]
    fn test_sbc_with_borrow() {
        let mut cpu = with_accumulator(0x50);
        cpu.status_mut().set_carry(false);
        cpu.sbc(Byte::new(0xF0));

        assert_eq!(cpu.accumulator(), Byte::new(0x5F));
        assert!(!cpu.status().carry());
        assert!(!cpu.status().overflow());
    }

    #[test]
    fn test_sbc_matches_adc_of_complement() {
        let mut subtract = with_accumulator(0x50);
        subtract.status_mut().set_carry(true);
        subtract.sbc(Byte::new(0xB0));

        let mut add = with_accumulator(0x50);
        add.status_mut().set_carry(true);
        add.adc(Byte::new(0x4F));

        assert_eq!(subtract, add);
        assert_eq!(subtract.accumulator(), Byte::new(0xA0));
        assert!(subtract.status().overflow());
    }

    #[test]
    fn test_compare_sets_carry_when_greater_or_equal() {
        let mut cpu = with_accumulator(0x40);
        cpu.cmp(Byte::new(0x40));
        assert!(cpu.status().carry());
        assert!(cpu.status().zero());

        cpu.cmp(Byte::new(0x41));
        assert!(!cpu.status().carry());
        assert!(cpu.status().negative());
    }

    #[test]
    fn test_bit_copies_operand_bits() {
        let mut cpu = with_accumulator(0x01);
        cpu.bit(Byte::new(0xC0));

        assert!(cpu.status().zero());
        assert!(cpu.status().overflow());
        assert!(cpu.status().negative());
        assert_eq!(cpu.accumulator(), Byte::new(0x01));
    }
}
