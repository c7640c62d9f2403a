//! Memory segment device.
//!
//! A segment owns a fixed-capacity byte array and one contiguous slice of the
//! address space. When the slice is larger than the storage, addresses wrap modulo
//! the capacity, which is how the console mirrors its 2 KB of work RAM four times
//! across 0x0000-0x1FFF.

use std::any::Any;

use super::Device;
use crate::byte::{Byte, Word};

/// Readable and writable storage mapped at `base..end` with mirroring.
///
/// # Examples
///
/// ```rust
/// use lib2a03::{Byte, Device, Segment, Word};
///
/// // 0x200 bytes spread over 0x000-0x3FF: mirrored twice
/// let mut segment = Segment::new(0x200, 0x0000, 0x0400);
///
/// segment.write(Word::new(0x00FF), Byte::new(0xFE));
/// assert_eq!(segment.read(Word::new(0x02FF)), Byte::new(0xFE));
/// ```
pub struct Segment {
    storage: Vec<u8>,
    base: u16,
    /// Exclusive end; 0x10000 reaches the top of the address space.
    end: u32,
}

impl Segment {
    /// Creates a zeroed segment of `capacity` bytes owning `base..end`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `end` is not above `base` or beyond 0x10000.
    pub fn new(capacity: usize, base: u16, end: u32) -> Self {
        assert!(capacity > 0, "segment capacity must be non-zero");
        assert!(
            end > base as u32 && end <= 0x10000,
            "segment range 0x{:04X}..0x{:X} is invalid",
            base,
            end
        );
        Self {
            storage: vec![0; capacity],
            base,
            end,
        }
    }

    /// The console's 2 KB work RAM at 0x0000-0x1FFF.
    pub fn work_ram() -> Self {
        Self::new(0x800, 0x0000, 0x2000)
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn base(&self) -> Word {
        Word::new(self.base)
    }

    /// Underlying storage, indexed locally.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Copies `bytes` into the storage starting at local `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + bytes.len()` exceeds the capacity.
    pub fn load_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.storage[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    fn index(&self, address: Word) -> usize {
        (address.value() - self.base) as usize % self.storage.len()
    }
}

impl Device for Segment {
    fn contains(&self, address: Word) -> bool {
        address.value() >= self.base && (address.value() as u32) < self.end
    }

    fn read(&self, address: Word) -> Byte {
        Byte::new(self.storage[self.index(address)])
    }

    fn write(&mut self, address: Word, data: Byte) {
        let index = self.index(address);
        self.storage[index] = data.value();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
