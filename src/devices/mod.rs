//! Memory-mapped device support for the console bus.
//!
//! This module provides the memory mapping architecture that lets the independently
//! owned regions of the console (work RAM, PPU registers, APU/I/O registers and the
//! cartridge) share one 16-bit address space.
//!
//! # Architecture
//!
//! - **Device trait**: each device claims addresses with `contains` and services
//!   `read`/`write` using the absolute bus address
//! - **MappedMemory**: dispatches every access to the first registered device that
//!   claims the address
//! - **Device implementations**: [`Segment`], [`RegisterBlock`], [`Cartridge`]
//!
//! # Dispatch precedence
//!
//! Devices are consulted in registration order and the first match wins, so
//! overlapping devices are allowed. Register the most specific device first and
//! catch-all devices last. An address claimed by no device is reported as
//! [`BusError::Unmapped`].
//!
//! # Example
//!
//! ```rust
//! use lib2a03::{Byte, MappedMemory, MemoryBus, Segment, Word};
//!
//! let mut memory = MappedMemory::new();
//! memory.add_device(Box::new(Segment::work_ram()));
//!
//! // 0x0800 mirrors 0x0000
//! memory.write(Word::new(0x0800), Byte::new(0x42)).unwrap();
//! assert_eq!(memory.read(Word::new(0x0000)).unwrap(), Byte::new(0x42));
//!
//! // Nothing claims the cartridge space yet
//! assert!(memory.read(Word::new(0x8000)).is_err());
//! ```

use std::any::Any;

use tracing::error;

use crate::byte::{Byte, Word};
use crate::memory::{Access, BusError, MemoryBus};

pub mod cartridge;
pub mod registers;
pub mod segment;

pub use cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};
pub use registers::RegisterBlock;
pub use segment::Segment;

/// Abstract interface for memory-mapped hardware devices.
///
/// Devices receive absolute bus addresses. A device is only asked to `read` or
/// `write` addresses for which it returned `true` from `contains`.
///
/// # Examples
///
/// ```rust
/// use lib2a03::{Byte, Device, Word};
/// use std::any::Any;
///
/// struct OpenBus;
///
/// impl Device for OpenBus {
///     fn contains(&self, _address: Word) -> bool {
///         true
///     }
///
///     fn read(&self, address: Word) -> Byte {
///         address.high()
///     }
///
///     fn write(&mut self, _address: Word, _data: Byte) {}
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn as_any_mut(&mut self) -> &mut dyn Any {
///         self
///     }
/// }
/// ```
pub trait Device {
    /// Returns whether the device owns `address`.
    fn contains(&self, address: Word) -> bool;

    /// Read byte at an address the device owns.
    fn read(&self, address: Word) -> Byte;

    /// Write byte at an address the device owns.
    fn write(&mut self, address: Word, data: Byte);

    /// Returns whether the device is asserting the shared IRQ line.
    fn irq_pending(&self) -> bool {
        false
    }

    /// Enables downcasting to the concrete device type.
    fn as_any(&self) -> &dyn Any;

    /// Enables mutable downcasting to the concrete device type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Bus that routes read/write operations to registered devices.
///
/// The bus owns its devices; the rest of the system reaches their state through
/// [`MappedMemory::device`] and [`MappedMemory::device_mut`].
pub struct MappedMemory {
    devices: Vec<Box<dyn Device>>,
}

impl MappedMemory {
    /// Create a new empty memory mapper.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Builds the console memory map around `cartridge`:
    ///
    /// | Range | Device |
    /// |-------|--------|
    /// | 0x0000-0x1FFF | 2 KB work RAM, mirrored 4x |
    /// | 0x2000-0x3FFF | PPU registers, mirrored every 8 bytes |
    /// | 0x4000-0x401F | APU and I/O registers |
    /// | 0x4020-0xFFFF | Cartridge |
    pub fn console(cartridge: Cartridge) -> Self {
        let mut memory = Self::new();
        memory.add_device(Box::new(Segment::work_ram()));
        memory.add_device(Box::new(RegisterBlock::ppu()));
        memory.add_device(Box::new(RegisterBlock::io()));
        memory.add_device(Box::new(cartridge));
        memory
    }

    /// Registers a device after all existing ones.
    ///
    /// Earlier registrations take precedence for addresses claimed by several devices.
    pub fn add_device(&mut self, device: Box<dyn Device>) {
        self.devices.push(device);
    }

    /// Builder form of [`add_device`](Self::add_device).
    pub fn with_device(mut self, device: Box<dyn Device>) -> Self {
        self.add_device(device);
        self
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns the first registered device of type `T`.
    pub fn device<T: Device + 'static>(&self) -> Option<&T> {
        self.devices
            .iter()
            .find_map(|device| device.as_any().downcast_ref::<T>())
    }

    /// Returns the first registered device of type `T`, mutably.
    pub fn device_mut<T: Device + 'static>(&mut self) -> Option<&mut T> {
        self.devices
            .iter_mut()
            .find_map(|device| device.as_any_mut().downcast_mut::<T>())
    }

    fn find_device(&self, address: Word) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|device| device.contains(address))
            .map(|device| device.as_ref())
    }

    fn find_device_mut(&mut self, address: Word) -> Option<&mut Box<dyn Device>> {
        self.devices
            .iter_mut()
            .find(|device| device.contains(address))
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn read(&self, address: Word) -> Result<Byte, BusError> {
        match self.find_device(address) {
            Some(device) => Ok(device.read(address)),
            None => {
                error!(address = %address, "unmapped bus read");
                Err(BusError::Unmapped {
                    address,
                    access: Access::Read,
                })
            }
        }
    }

    fn write(&mut self, address: Word, data: Byte) -> Result<(), BusError> {
        match self.find_device_mut(address) {
            Some(device) => {
                device.write(address, data);
                Ok(())
            }
            None => {
                error!(address = %address, data = %data, "unmapped bus write");
                Err(BusError::Unmapped {
                    address,
                    access: Access::Write,
                })
            }
        }
    }

    fn irq_active(&self) -> bool {
        self.devices.iter().any(|device| device.irq_pending())
    }
}
