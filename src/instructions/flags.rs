//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! The decimal flag is stored and reported but has no effect on arithmetic.

use crate::processor::Processor;

impl Processor {
    pub fn clc(&mut self) {
        self.status.set_carry(false);
    }

    pub fn sec(&mut self) {
        self.status.set_carry(true);
    }

    pub fn cli(&mut self) {
        self.status.set_interrupt_disable(false);
    }

    pub fn sei(&mut self) {
        self.status.set_interrupt_disable(true);
    }

    pub fn clv(&mut self) {
        self.status.set_overflow(false);
    }

    pub fn cld(&mut self) {
        self.status.set_decimal(false);
    }

    pub fn sed(&mut self) {
        self.status.set_decimal(true);
    }
}
