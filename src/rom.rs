//! # iNES ROM Images
//!
//! Parses the iNES container into a structured, in-memory [`RomImage`]. The file
//! layout is:
//!
//! | Section | Size |
//! |---------|------|
//! | Header (`NES\x1A`, bank counts, flags 6 and 7, padding) | 16 bytes |
//! | Trainer (flags 6 bit 2) | 0 or 512 bytes |
//! | PRG-ROM | header byte 4 × 16 KB |
//! | CHR-ROM | header byte 5 × 8 KB |
//! | PlayChoice INST-ROM (flags 7 bit 1) | 0 or 8 KB |
//!
//! Parsing only validates the container. Whether a board can actually run the
//! image is decided when the [`Cartridge`](crate::Cartridge) is constructed.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::byte::Byte;

pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_BANK_SIZE: usize = 0x4000;
pub const CHR_BANK_SIZE: usize = 0x2000;
pub const PLAYCHOICE_SIZE: usize = 0x2000;

const MAGIC: [u8; 4] = *b"NES\x1A";

/// One 16 KB unit of program ROM.
pub type PrgBank = [u8; PRG_BANK_SIZE];

/// One 8 KB unit of character ROM.
pub type ChrBank = [u8; CHR_BANK_SIZE];

/// Errors produced while reading an iNES file.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("unable to read ROM file: {0}")]
    Io(#[from] io::Error),

    #[error("file does not start with the iNES magic bytes")]
    BadMagic,

    #[error("ROM file truncated in {section}: needed {needed} bytes, {available} available")]
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },
}

/// Structured contents of an iNES file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    pub mapper: u8,

    // Flags 6
    pub vertical_mirroring: bool,
    pub persistent_memory: bool,
    pub trainer_present: bool,
    pub four_screen_vram: bool,

    // Flags 7
    pub vs_unisystem: bool,
    pub playchoice: bool,

    pub trainer: Option<Box<[u8; TRAINER_SIZE]>>,
    pub prg_rom: Vec<PrgBank>,
    pub chr_rom: Vec<ChrBank>,
    pub playchoice_data: Option<Vec<u8>>,
}

impl RomImage {
    /// A mapper 0 image with the given PRG banks and no CHR-ROM.
    pub fn nrom(prg_rom: Vec<PrgBank>) -> Self {
        Self {
            mapper: 0,
            vertical_mirroring: false,
            persistent_memory: false,
            trainer_present: false,
            four_screen_vram: false,
            vs_unisystem: false,
            playchoice: false,
            trainer: None,
            prg_rom,
            chr_rom: Vec::new(),
            playchoice_data: None,
        }
    }

    /// Reads and parses an iNES file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RomError> {
        let data = fs::read(path.as_ref())?;
        info!(path = %path.as_ref().display(), size = data.len(), "loaded ROM file");
        Self::parse(&data)
    }

    /// Parses an in-memory iNES file.
    pub fn parse(data: &[u8]) -> Result<Self, RomError> {
        let mut reader = Reader { data };

        let header = reader.take("header", HEADER_SIZE)?;
        if header[0..4] != MAGIC {
            return Err(RomError::BadMagic);
        }

        let prg_banks = header[4] as usize;
        let chr_banks = header[5] as usize;
        let flags6 = Byte::new(header[6]);
        let flags7 = Byte::new(header[7]);

        let mut image = Self {
            mapper: (flags6.value() >> 4) | (flags7.value() & 0xF0),
            vertical_mirroring: flags6.bit(0),
            persistent_memory: flags6.bit(1),
            trainer_present: flags6.bit(2),
            four_screen_vram: flags6.bit(3),
            vs_unisystem: flags7.bit(0),
            playchoice: flags7.bit(1),
            trainer: None,
            prg_rom: Vec::with_capacity(prg_banks),
            chr_rom: Vec::with_capacity(chr_banks),
            playchoice_data: None,
        };

        if image.trainer_present {
            image.trainer = Some(Box::new(reader.take_array("trainer")?));
        }
        for _ in 0..prg_banks {
            image.prg_rom.push(reader.take_array("PRG-ROM")?);
        }
        for _ in 0..chr_banks {
            image.chr_rom.push(reader.take_array("CHR-ROM")?);
        }
        if image.playchoice {
            image.playchoice_data = Some(reader.take("PlayChoice data", PLAYCHOICE_SIZE)?.to_vec());
        }

        info!(
            mapper = image.mapper,
            prg_banks,
            chr_banks,
            trainer = image.trainer_present,
            "parsed iNES image"
        );
        Ok(image)
    }
}

/// Sequential reader over the file contents.
struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, section: &'static str, count: usize) -> Result<&'a [u8], RomError> {
        if self.data.len() < count {
            return Err(RomError::Truncated {
                section,
                needed: count,
                available: self.data.len(),
            });
        }
        let (head, tail) = self.data.split_at(count);
        self.data = tail;
        Ok(head)
    }

    fn take_array<const N: usize>(&mut self, section: &'static str) -> Result<[u8; N], RomError> {
        let mut array = [0; N];
        array.copy_from_slice(self.take(section, N)?);
        Ok(array)
    }
}
