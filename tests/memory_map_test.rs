//! Tests for the console memory map built by `MappedMemory::console`.
//!
//! Tests cover:
//! - Work RAM and PPU register mirroring
//! - Cartridge PRG-ROM, PRG-RAM and the expansion area
//! - Unmapped access reporting
//! - First-match dispatch precedence

use lib2a03::{
    Access, BusError, Byte, Cartridge, MappedMemory, MemoryBus, RegisterBlock, RomImage,
    Segment, Word,
};

fn console_with_prg(fill: u8) -> MappedMemory {
    let mut bank = [fill; 0x4000];
    bank[0x3FFC] = 0x00;
    bank[0x3FFD] = 0x80;
    let cartridge = Cartridge::new(RomImage::nrom(vec![bank])).unwrap();
    MappedMemory::console(cartridge)
}

fn read(memory: &MappedMemory, address: u16) -> u8 {
    memory.read(Word::new(address)).unwrap().value()
}

fn write(memory: &mut MappedMemory, address: u16, value: u8) {
    memory.write(Word::new(address), Byte::new(value)).unwrap();
}

#[test]
fn test_work_ram_mirrors() {
    let mut memory = console_with_prg(0xEA);
    write(&mut memory, 0x0001, 0x11);

    assert_eq!(read(&memory, 0x0801), 0x11);
    assert_eq!(read(&memory, 0x1001), 0x11);
    assert_eq!(read(&memory, 0x1801), 0x11);

    write(&mut memory, 0x1FFF, 0x22);
    assert_eq!(read(&memory, 0x07FF), 0x22);
}

#[test]
fn test_ppu_registers_mirror() {
    let mut memory = console_with_prg(0xEA);
    write(&mut memory, 0x2006, 0x3F);

    assert_eq!(read(&memory, 0x3FFE), 0x3F);
    let ppu = memory.device::<RegisterBlock>().unwrap();
    assert_eq!(ppu.name(), "ppu");
    assert_eq!(ppu.registers()[6], 0x3F);
}

#[test]
fn test_io_registers() {
    let mut memory = console_with_prg(0xEA);
    write(&mut memory, 0x4014, 0x02);

    assert_eq!(read(&memory, 0x4014), 0x02);
}

#[test]
fn test_single_bank_prg_mirrored() {
    let memory = console_with_prg(0xEA);

    assert_eq!(read(&memory, 0x8000), 0xEA);
    assert_eq!(read(&memory, 0xC000), 0xEA);
    assert_eq!(memory.read_word(Word::new(0xFFFC)).unwrap(), Word::new(0x8000));
    assert_eq!(memory.read_word(Word::new(0xBFFC)).unwrap(), Word::new(0x8000));
}

#[test]
fn test_two_bank_prg() {
    let cartridge = Cartridge::new(RomImage::nrom(vec![[0x11; 0x4000], [0x22; 0x4000]])).unwrap();
    let memory = MappedMemory::console(cartridge);

    assert_eq!(read(&memory, 0xBFFF), 0x11);
    assert_eq!(read(&memory, 0xC000), 0x22);
}

#[test]
fn test_prg_rom_ignores_writes() {
    let mut memory = console_with_prg(0xEA);
    write(&mut memory, 0x8000, 0x00);

    assert_eq!(read(&memory, 0x8000), 0xEA);
}

#[test]
fn test_prg_ram_and_expansion_area() {
    let mut memory = console_with_prg(0xEA);
    write(&mut memory, 0x6000, 0x5A);
    write(&mut memory, 0x4020, 0x77);

    assert_eq!(read(&memory, 0x6000), 0x5A);
    assert_eq!(read(&memory, 0x4020), 0x00);
    assert_eq!(memory.device::<Cartridge>().unwrap().prg_ram()[0], 0x5A);
}

#[test]
fn test_unmapped_read_reports_address() {
    let memory = MappedMemory::new().with_device(Box::new(Segment::work_ram()));

    let result = memory.read(Word::new(0x8000));

    assert_eq!(
        result,
        Err(BusError::Unmapped {
            address: Word::new(0x8000),
            access: Access::Read
        })
    );
}

#[test]
fn test_unmapped_write_reports_access() {
    let mut memory = MappedMemory::new();

    let error = memory.write(Word::new(0x2000), Byte::new(1)).unwrap_err();

    assert_eq!(
        error.to_string(),
        "unhandled memory write at address 0x2000"
    );
}

#[test]
fn test_first_registered_device_wins() {
    let mut low = Segment::new(0x10, 0x0000, 0x0100);
    low.load_bytes(0, &[0xAA]);
    let mut wide = Segment::new(0x100, 0x0000, 0x0100);
    wide.load_bytes(0, &[0xBB]);

    let memory = MappedMemory::new()
        .with_device(Box::new(low))
        .with_device(Box::new(wide));

    assert_eq!(memory.device_count(), 2);
    assert_eq!(read(&memory, 0x0000), 0xAA);
    // 0x0010 is inside the first segment's range, mirrored
    assert_eq!(read(&memory, 0x0010), 0xAA);
}
