//! Cartridge device.
//!
//! Owns everything a cartridge contributes to the console: PRG-ROM on the CPU bus,
//! CHR-ROM (or CHR-RAM) on the PPU bus, and the board's optional PRG-RAM. Bank
//! mapping is selected by [`Mapper`]; only the fixed-mapping NROM board exists so
//! far, and any other mapper number is rejected at construction.
//!
//! ## CPU address map (NROM)
//!
//! | Range | Contents |
//! |-------|----------|
//! | 0x4020-0x5FFF | Expansion area, reads 0, writes ignored |
//! | 0x6000-0x7FFF | 8 KB PRG-RAM (trainer loaded at 0x7000) |
//! | 0x8000-0xBFFF | Lower PRG bank |
//! | 0xC000-0xFFFF | Upper PRG bank, or the lower bank again for 16 KB images |

use std::any::Any;

use thiserror::Error;
use tracing::{info, warn};

use super::Device;
use crate::byte::{Byte, Word};
use crate::rom::{ChrBank, PrgBank, RomImage, CHR_BANK_SIZE, PRG_BANK_SIZE};

const CARTRIDGE_START: u16 = 0x4020;
const PRG_RAM_START: u16 = 0x6000;
const PRG_RAM_SIZE: usize = 0x2000;
const TRAINER_OFFSET: usize = 0x1000;
const PRG_ROM_START: u16 = 0x8000;

/// Unsupported cartridge configurations, detected before any instruction runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartridgeError {
    #[error("mapper {0} is not supported")]
    UnsupportedMapper(u8),

    #[error("{mapper:?} boards hold 1 or 2 PRG-ROM banks, image has {banks}")]
    PrgSize { mapper: Mapper, banks: usize },

    #[error("{mapper:?} boards hold at most 1 CHR-ROM bank, image has {banks}")]
    ChrSize { mapper: Mapper, banks: usize },
}

/// Bank-mapping hardware on the cartridge board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapper {
    /// Mapper 0: fixed 16 KB banks at 0x8000 and 0xC000.
    Nrom,
}

impl Mapper {
    /// Looks up the board for an iNES mapper number.
    pub fn from_number(number: u8) -> Result<Self, CartridgeError> {
        match number {
            0 => Ok(Mapper::Nrom),
            other => Err(CartridgeError::UnsupportedMapper(other)),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Mapper::Nrom => 0,
        }
    }

    fn max_prg_banks(self) -> usize {
        match self {
            Mapper::Nrom => 2,
        }
    }

    fn max_chr_banks(self) -> usize {
        match self {
            Mapper::Nrom => 1,
        }
    }
}

/// Nametable arrangement wired on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Cartridge mapped at 0x4020-0xFFFF.
pub struct Cartridge {
    mapper: Mapper,
    mirroring: Mirroring,
    prg_rom: Vec<PrgBank>,
    prg_ram: Box<[u8; PRG_RAM_SIZE]>,
    chr: Box<ChrBank>,
    chr_writable: bool,
    persistent_memory: bool,
}

impl Cartridge {
    /// Builds a cartridge from a parsed ROM image.
    ///
    /// Fails if the image needs a mapper that is not implemented or holds more
    /// banks than the board can address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lib2a03::{Cartridge, CartridgeError, RomImage};
    ///
    /// let cartridge = Cartridge::new(RomImage::nrom(vec![[0xEA; 0x4000]]));
    /// assert!(cartridge.is_ok());
    ///
    /// let mut image = RomImage::nrom(vec![[0xEA; 0x4000]]);
    /// image.mapper = 4;
    /// assert_eq!(Cartridge::new(image).err(), Some(CartridgeError::UnsupportedMapper(4)));
    /// ```
    pub fn new(image: RomImage) -> Result<Self, CartridgeError> {
        let mapper = Mapper::from_number(image.mapper).inspect_err(|error| {
            warn!(%error, "rejecting cartridge");
        })?;

        let prg_banks = image.prg_rom.len();
        if prg_banks == 0 || prg_banks > mapper.max_prg_banks() {
            warn!(?mapper, prg_banks, "rejecting cartridge: PRG-ROM size");
            return Err(CartridgeError::PrgSize {
                mapper,
                banks: prg_banks,
            });
        }
        let chr_banks = image.chr_rom.len();
        if chr_banks > mapper.max_chr_banks() {
            warn!(?mapper, chr_banks, "rejecting cartridge: CHR-ROM size");
            return Err(CartridgeError::ChrSize {
                mapper,
                banks: chr_banks,
            });
        }

        let mirroring = if image.four_screen_vram {
            Mirroring::FourScreen
        } else if image.vertical_mirroring {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mut prg_ram = Box::new([0; PRG_RAM_SIZE]);
        if let Some(trainer) = &image.trainer {
            prg_ram[TRAINER_OFFSET..TRAINER_OFFSET + trainer.len()].copy_from_slice(&trainer[..]);
        }

        let chr_writable = image.chr_rom.is_empty();
        let chr = match image.chr_rom.into_iter().next() {
            Some(bank) => Box::new(bank),
            None => Box::new([0; CHR_BANK_SIZE]),
        };

        info!(
            ?mapper,
            ?mirroring,
            prg_banks,
            chr_ram = chr_writable,
            "cartridge inserted"
        );

        Ok(Self {
            mapper,
            mirroring,
            prg_rom: image.prg_rom,
            prg_ram,
            chr,
            chr_writable,
            persistent_memory: image.persistent_memory,
        })
    }

    pub fn mapper(&self) -> Mapper {
        self.mapper
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    /// Whether the PRG-RAM is battery backed and should be saved by the frontend.
    pub fn has_persistent_memory(&self) -> bool {
        self.persistent_memory
    }

    pub fn prg_ram(&self) -> &[u8] {
        &self.prg_ram[..]
    }

    pub fn prg_ram_mut(&mut self) -> &mut [u8] {
        &mut self.prg_ram[..]
    }

    /// PPU-side read of the pattern tables at 0x0000-0x1FFF.
    pub fn chr_read(&self, address: Word) -> Byte {
        Byte::new(self.chr[address.value() as usize % CHR_BANK_SIZE])
    }

    /// PPU-side write; only boards without CHR-ROM have writable CHR-RAM.
    pub fn chr_write(&mut self, address: Word, data: Byte) {
        if self.chr_writable {
            self.chr[address.value() as usize % CHR_BANK_SIZE] = data.value();
        }
    }

    fn prg_index(&self, address: Word) -> (usize, usize) {
        match self.mapper {
            Mapper::Nrom => {
                let offset = (address.value() - PRG_ROM_START) as usize;
                let bank = (offset / PRG_BANK_SIZE) % self.prg_rom.len();
                (bank, offset % PRG_BANK_SIZE)
            }
        }
    }
}

impl Device for Cartridge {
    fn contains(&self, address: Word) -> bool {
        address.value() >= CARTRIDGE_START
    }

    fn read(&self, address: Word) -> Byte {
        match address.value() {
            PRG_ROM_START..=0xFFFF => {
                let (bank, offset) = self.prg_index(address);
                Byte::new(self.prg_rom[bank][offset])
            }
            PRG_RAM_START..=0x7FFF => {
                Byte::new(self.prg_ram[(address.value() - PRG_RAM_START) as usize])
            }
            _ => Byte::new(0),
        }
    }

    fn write(&mut self, address: Word, data: Byte) {
        if let PRG_RAM_START..=0x7FFF = address.value() {
            self.prg_ram[(address.value() - PRG_RAM_START) as usize] = data.value();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(fill: u8) -> PrgBank {
        [fill; PRG_BANK_SIZE]
    }

    #[test]
    fn test_single_bank_is_mirrored_into_upper_half() {
        let mut prg = bank(0x00);
        prg[0x0000] = 0x11;
        prg[0x3FFC] = 0x22;
        let cartridge = Cartridge::new(RomImage::nrom(vec![prg])).unwrap();

        assert_eq!(cartridge.read(Word::new(0x8000)), Byte::new(0x11));
        assert_eq!(cartridge.read(Word::new(0xC000)), Byte::new(0x11));
        assert_eq!(cartridge.read(Word::new(0xBFFC)), Byte::new(0x22));
        assert_eq!(cartridge.read(Word::new(0xFFFC)), Byte::new(0x22));
    }

    #[test]
    fn test_two_banks_are_lower_and_upper() {
        let cartridge = Cartridge::new(RomImage::nrom(vec![bank(0xAA), bank(0xBB)])).unwrap();

        assert_eq!(cartridge.read(Word::new(0x8000)), Byte::new(0xAA));
        assert_eq!(cartridge.read(Word::new(0xBFFF)), Byte::new(0xAA));
        assert_eq!(cartridge.read(Word::new(0xC000)), Byte::new(0xBB));
        assert_eq!(cartridge.read(Word::new(0xFFFF)), Byte::new(0xBB));
    }

    #[test]
    fn test_prg_rom_ignores_writes() {
        let mut cartridge = Cartridge::new(RomImage::nrom(vec![bank(0xAA)])).unwrap();
        cartridge.write(Word::new(0x8000), Byte::new(0x00));
        assert_eq!(cartridge.read(Word::new(0x8000)), Byte::new(0xAA));
    }

    #[test]
    fn test_prg_ram_and_expansion_area() {
        let mut cartridge = Cartridge::new(RomImage::nrom(vec![bank(0)])).unwrap();

        cartridge.write(Word::new(0x6000), Byte::new(0x42));
        assert_eq!(cartridge.read(Word::new(0x6000)), Byte::new(0x42));
        assert_eq!(cartridge.prg_ram()[0], 0x42);

        cartridge.write(Word::new(0x5000), Byte::new(0x42));
        assert_eq!(cartridge.read(Word::new(0x5000)), Byte::new(0x00));

        assert!(cartridge.contains(Word::new(0x4020)));
        assert!(!cartridge.contains(Word::new(0x401F)));
    }

    #[test]
    fn test_trainer_is_loaded_at_0x7000() {
        let mut image = RomImage::nrom(vec![bank(0)]);
        image.trainer_present = true;
        image.trainer = Some(Box::new([0x5C; 512]));
        let cartridge = Cartridge::new(image).unwrap();

        assert_eq!(cartridge.read(Word::new(0x6FFF)), Byte::new(0x00));
        assert_eq!(cartridge.read(Word::new(0x7000)), Byte::new(0x5C));
        assert_eq!(cartridge.read(Word::new(0x71FF)), Byte::new(0x5C));
        assert_eq!(cartridge.read(Word::new(0x7200)), Byte::new(0x00));
    }

    #[test]
    fn test_chr_rom_is_read_only_and_chr_ram_is_writable() {
        let mut image = RomImage::nrom(vec![bank(0)]);
        image.chr_rom = vec![[0x99; CHR_BANK_SIZE]];
        let mut with_rom = Cartridge::new(image).unwrap();
        with_rom.chr_write(Word::new(0x0000), Byte::new(0x01));
        assert_eq!(with_rom.chr_read(Word::new(0x0000)), Byte::new(0x99));

        let mut with_ram = Cartridge::new(RomImage::nrom(vec![bank(0)])).unwrap();
        with_ram.chr_write(Word::new(0x1FFF), Byte::new(0x01));
        assert_eq!(with_ram.chr_read(Word::new(0x1FFF)), Byte::new(0x01));
    }

    #[test]
    fn test_mirroring_from_board_flags() {
        let mut image = RomImage::nrom(vec![bank(0)]);
        image.vertical_mirroring = true;
        assert_eq!(Cartridge::new(image.clone()).unwrap().mirroring(), Mirroring::Vertical);

        image.four_screen_vram = true;
        assert_eq!(Cartridge::new(image).unwrap().mirroring(), Mirroring::FourScreen);
    }

    #[test]
    fn test_rejects_unsupported_configurations() {
        let mut image = RomImage::nrom(vec![bank(0)]);
        image.mapper = 1;
        assert_eq!(
            Cartridge::new(image).err(),
            Some(CartridgeError::UnsupportedMapper(1))
        );

        assert_eq!(
            Cartridge::new(RomImage::nrom(vec![])).err(),
            Some(CartridgeError::PrgSize {
                mapper: Mapper::Nrom,
                banks: 0
            })
        );
        assert_eq!(
            Cartridge::new(RomImage::nrom(vec![bank(0), bank(0), bank(0)])).err(),
            Some(CartridgeError::PrgSize {
                mapper: Mapper::Nrom,
                banks: 3
            })
        );

        let mut image = RomImage::nrom(vec![bank(0)]);
        image.chr_rom = vec![[0; CHR_BANK_SIZE], [0; CHR_BANK_SIZE]];
        assert_eq!(
            Cartridge::new(image).err(),
            Some(CartridgeError::ChrSize {
                mapper: Mapper::Nrom,
                banks: 2
            })
        );
    }
}
