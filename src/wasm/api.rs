//! WASM API for the 2A03 core.
//!
//! Provides JavaScript-callable interfaces for CPU control and state inspection.

use wasm_bindgen::prelude::*;

use crate::{Byte, Cartridge, Cpu, MappedMemory, MemoryBus, RomImage, Segment, Word};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl JsError {
    fn from_error(error: impl std::error::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Console CPU running an NROM cartridge.
#[wasm_bindgen]
pub struct NesCore {
    cpu: Cpu<MappedMemory>,
}

#[wasm_bindgen]
impl NesCore {
    /// Builds the console from the bytes of an iNES file and runs the reset sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(rom: &[u8]) -> Result<NesCore, JsError> {
        let image = RomImage::parse(rom).map_err(JsError::from_error)?;
        let cartridge = Cartridge::new(image).map_err(JsError::from_error)?;
        let cpu = Cpu::new(MappedMemory::console(cartridge)).map_err(JsError::from_error)?;
        Ok(NesCore { cpu })
    }

    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(JsError::from_error)
    }

    /// Executes `count` instructions.
    pub fn run(&mut self, count: u32) -> Result<(), JsError> {
        self.cpu.run(count as usize).map_err(JsError::from_error)
    }

    pub fn nmi(&mut self) -> Result<(), JsError> {
        self.cpu.nmi().map_err(JsError::from_error)
    }

    /// Returns whether the interrupt was taken.
    pub fn irq(&mut self) -> Result<bool, JsError> {
        self.cpu.irq().map_err(JsError::from_error)
    }

    pub fn reset(&mut self) -> Result<(), JsError> {
        self.cpu.reset().map_err(JsError::from_error)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.processor().accumulator().value()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.processor().x().value()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.processor().y().value()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc().value()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.processor().stack_pointer().value()
    }

    /// Packed status byte (NV--DIZC).
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.processor().status().value().value()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Reads one byte from the CPU bus.
    pub fn peek(&self, address: u16) -> Result<u8, JsError> {
        self.cpu
            .bus()
            .read(Word::new(address))
            .map(Byte::value)
            .map_err(JsError::from_error)
    }

    /// Snapshot of the 2 KB of work RAM.
    pub fn work_ram(&self) -> js_sys::Uint8Array {
        let ram = self
            .cpu
            .bus()
            .device::<Segment>()
            .map(Segment::as_bytes)
            .unwrap_or_default();
        js_sys::Uint8Array::from(ram)
    }
}
