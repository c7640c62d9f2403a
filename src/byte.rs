//! # Byte and Word Primitives
//!
//! Fixed-width wrappers around `u8` and `u16` that every other part of the core is
//! built on. All arithmetic wraps within the type's width, and both types expose the
//! bit-level operations the processor needs: indexed bit access, shifts that report
//! the bit shifted out, and rotations chained through an external carry flag.
//!
//! ```
//! use lib2a03::{Byte, Word};
//!
//! let word = Word::from_bytes(Byte::new(0xAB), Byte::new(0xCD));
//! assert_eq!(word, Word::new(0xABCD));
//! assert_eq!(word.high(), Byte::new(0xAB));
//! assert_eq!(word.low(), Byte::new(0xCD));
//! ```

use std::fmt;
use std::ops;

/// An 8-bit value with wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Byte(pub u8);

/// A 16-bit value with wrapping arithmetic. All bus addresses are words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Word(pub u16);

macro_rules! bitwise_wrapper {
    ($name:ident, $inner:ty) => {
        impl $name {
            /// Width of the value in bits.
            pub const BITS: u32 = <$inner>::BITS;

            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn value(self) -> $inner {
                self.0
            }

            /// Returns bit `index` (0 is least significant).
            pub const fn bit(self, index: u32) -> bool {
                (self.0 >> index) & 1 != 0
            }

            pub const fn high_bit(self) -> bool {
                self.bit(Self::BITS - 1)
            }

            pub const fn low_bit(self) -> bool {
                self.bit(0)
            }

            /// Returns a copy with bit `index` set to `value`.
            pub const fn with_bit(self, index: u32, value: bool) -> Self {
                Self((self.0 & !(1 << index)) | ((value as $inner) << index))
            }

            pub fn set(&mut self, index: u32, value: bool) -> &mut Self {
                *self = self.with_bit(index, value);
                self
            }

            pub fn clear(&mut self, index: u32) -> &mut Self {
                self.set(index, false)
            }

            pub fn toggle(&mut self, index: u32) -> &mut Self {
                self.0 ^= 1 << index;
                self
            }

            pub fn increment(&mut self) -> &mut Self {
                self.0 = self.0.wrapping_add(1);
                self
            }

            pub fn decrement(&mut self) -> &mut Self {
                self.0 = self.0.wrapping_sub(1);
                self
            }

            /// Shifts one bit left, inserting `carry` at bit 0.
            ///
            /// Returns the bit shifted out of the top.
            pub fn shift_left(&mut self, carry: bool) -> bool {
                let out = self.high_bit();
                self.0 = (self.0 << 1) | carry as $inner;
                out
            }

            /// Shifts one bit right, inserting `carry` at the top bit.
            ///
            /// Returns the bit shifted out of bit 0.
            pub fn shift_right(&mut self, carry: bool) -> bool {
                let out = self.low_bit();
                self.0 = (self.0 >> 1) | ((carry as $inner) << (Self::BITS - 1));
                out
            }

            /// Rotates left through `carry`, updating it in place.
            pub fn rotate_left(&mut self, carry: &mut bool) -> &mut Self {
                *carry = self.shift_left(*carry);
                self
            }

            /// Rotates right through `carry`, updating it in place.
            pub fn rotate_right(&mut self, carry: &mut bool) -> &mut Self {
                *carry = self.shift_right(*carry);
                self
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl ops::Add<$inner> for $name {
            type Output = Self;
            fn add(self, rhs: $inner) -> Self {
                Self(self.0.wrapping_add(rhs))
            }
        }

        impl ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl ops::Sub<$inner> for $name {
            type Output = Self;
            fn sub(self, rhs: $inner) -> Self {
                Self(self.0.wrapping_sub(rhs))
            }
        }

        impl ops::AddAssign<$inner> for $name {
            fn add_assign(&mut self, rhs: $inner) {
                self.0 = self.0.wrapping_add(rhs);
            }
        }

        impl ops::SubAssign<$inner> for $name {
            fn sub_assign(&mut self, rhs: $inner) {
                self.0 = self.0.wrapping_sub(rhs);
            }
        }

        impl ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ops::BitXor for $name {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ops::BitXorAssign for $name {
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }

        impl ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        /// Zero-padded uppercase hexadecimal, two digits per byte.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:0width$X}", self.0, width = (Self::BITS / 4) as usize)
            }
        }

        impl fmt::UpperHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::UpperHex::fmt(&self.0, f)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }
    };
}

bitwise_wrapper!(Byte, u8);
bitwise_wrapper!(Word, u16);

impl Byte {
    /// Two's-complement sign: bit 7.
    pub const fn sign(self) -> bool {
        self.bit(7)
    }

    pub const fn as_signed(self) -> i8 {
        self.0 as i8
    }
}

impl Word {
    /// Composes a word from its high and low bytes.
    pub const fn from_bytes(high: Byte, low: Byte) -> Self {
        Self(((high.0 as u16) << 8) | low.0 as u16)
    }

    pub const fn high(self) -> Byte {
        Byte((self.0 >> 8) as u8)
    }

    pub const fn low(self) -> Byte {
        Byte((self.0 & 0xFF) as u8)
    }
}

impl ops::Add<Byte> for Word {
    type Output = Self;
    fn add(self, rhs: Byte) -> Self {
        Self(self.0.wrapping_add(rhs.0 as u16))
    }
}

impl From<Byte> for Word {
    fn from(value: Byte) -> Self {
        Self(value.0 as u16)
    }
}

/// Widens for 9-bit intermediate results.
impl From<Byte> for u16 {
    fn from(value: Byte) -> Self {
        value.0 as u16
    }
}

/// Determines whether adding `left` and `right` produces signed overflow.
///
/// Overflow is the carry into bit 7 XOR the carry out of bit 7. It is true
/// exactly when both operands share a sign and the sum's sign differs.
pub const fn overflows(left: Byte, right: Byte) -> bool {
    let carry_in = (left.0 & 0x7F) as u16 + (right.0 & 0x7F) as u16 > 0x7F;
    let carry_out = left.0 as u16 + right.0 as u16 > 0xFF;
    carry_in ^ carry_out
}
