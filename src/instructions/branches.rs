//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: branch on carry clear / set
//! - BEQ, BNE: branch on zero set / clear
//! - BMI, BPL: branch on negative set / clear
//! - BVC, BVS: branch on overflow clear / set
//!
//! The target is resolved before execution (relative to the address following
//! the two-byte instruction), so a taken branch is a plain program counter load.

use crate::memory::Pointer;
use crate::processor::Processor;

impl Processor {
    pub fn bcc(&mut self, target: Pointer) {
        self.branch(!self.status.carry(), target);
    }

    pub fn bcs(&mut self, target: Pointer) {
        self.branch(self.status.carry(), target);
    }

    pub fn beq(&mut self, target: Pointer) {
        self.branch(self.status.zero(), target);
    }

    pub fn bne(&mut self, target: Pointer) {
        self.branch(!self.status.zero(), target);
    }

    pub fn bmi(&mut self, target: Pointer) {
        self.branch(self.status.negative(), target);
    }

    pub fn bpl(&mut self, target: Pointer) {
        self.branch(!self.status.negative(), target);
    }

    pub fn bvc(&mut self, target: Pointer) {
        self.branch(!self.status.overflow(), target);
    }

    pub fn bvs(&mut self, target: Pointer) {
        self.branch(self.status.overflow(), target);
    }

    fn branch(&mut self, condition: bool, target: Pointer) {
        if condition {
            self.program_counter = target.address();
        }
    }
}
