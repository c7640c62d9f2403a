//! Fuzz target for iNES parsing and cartridge construction.
//!
//! Arbitrary bytes must either be rejected with an error or produce a cartridge
//! that can be mounted and reset without panicking.

#![no_main]

use lib2a03::{Cartridge, Cpu, MappedMemory, RomImage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(image) = RomImage::parse(data) else {
        return;
    };
    let Ok(cartridge) = Cartridge::new(image) else {
        return;
    };
    if let Ok(mut cpu) = Cpu::new(MappedMemory::console(cartridge)) {
        let _ = cpu.run(64);
    }
});
