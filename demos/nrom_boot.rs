//! Boots an NROM cartridge and prints the processor state after each instruction.
//!
//! Run with: `cargo run --example nrom_boot [path/to/game.nes] [instructions]`
//!
//! Without a path, a small built-in image that clears work RAM is used. Set
//! `RUST_LOG=lib2a03=trace` to see the per-instruction log from the core.

use std::env;
use std::process::ExitCode;

use lib2a03::{Cartridge, Cpu, MappedMemory, RomImage};
use tracing_subscriber::EnvFilter;

/// Clears 0x0000-0x00FF then spins.
#[rustfmt::skip]
const BUILTIN_PROGRAM: [u8; 14] = [
    0x78,             // SEI
    0xD8,             // CLD
    0xA9, 0x00,       // LDA #$00
    0xAA,             // TAX
    0x95, 0x00,       // STA $00,X
    0xE8,             // INX
    0xD0, 0xFB,       // BNE -5
    0x4C, 0x0A, 0xC0, // JMP $C00A
    0x00,
];

fn builtin_image() -> RomImage {
    let mut bank = [0xEA; 0x4000];
    bank[..BUILTIN_PROGRAM.len()].copy_from_slice(&BUILTIN_PROGRAM);
    bank[0x3FFC] = 0x00;
    bank[0x3FFD] = 0xC0;
    RomImage::nrom(vec![bank])
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let image = match args.next() {
        Some(path) => match RomImage::load(&path) {
            Ok(image) => image,
            Err(error) => {
                eprintln!("{path}: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => builtin_image(),
    };
    let count: usize = args.next().and_then(|n| n.parse().ok()).unwrap_or(32);

    let cartridge = match Cartridge::new(image) {
        Ok(cartridge) => cartridge,
        Err(error) => {
            eprintln!("cannot mount cartridge: {error}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "mapper {} ({:?} mirroring)",
        cartridge.mapper().number(),
        cartridge.mirroring()
    );

    let mut cpu = match Cpu::new(MappedMemory::console(cartridge)) {
        Ok(cpu) => cpu,
        Err(error) => {
            eprintln!("reset failed: {error}");
            return ExitCode::FAILURE;
        }
    };

    for _ in 0..count {
        if let Err(error) = cpu.step() {
            eprintln!("stopped at {:04X}: {error}", cpu.pc());
            return ExitCode::FAILURE;
        }
        let p = cpu.processor();
        println!(
            "PC:{} A:{} X:{} Y:{} P:{} SP:{}",
            p.program_counter(),
            p.accumulator(),
            p.x(),
            p.y(),
            p.status().value(),
            p.stack_pointer()
        );
    }

    println!("{} instructions executed", cpu.instructions());
    ExitCode::SUCCESS
}
