//! # Cartridge Container Writer
//!
//! This module serializes generated code and graphics data into an iNES
//! cartridge image, the de facto container format for NES binaries.
//!
//! An image is a 16-byte header followed by the binary regions. The header's
//! size fields are always derived from the region lengths at write time, so
//! the header can never disagree with the payload. Region sizes are
//! validated when the header is written: a PRG-ROM that is not a whole
//! number of 16 KiB banks, or a CHR-ROM that is not a whole number of 8 KiB
//! banks, fails the write rather than truncating.
//!
//! The fixed-size regions (trainer, INST-ROM) are fixed-size arrays, so an
//! impossible trainer length is unrepresentable.

use std::fmt;
use std::io::{self, Write};

use log::debug;

/// String "NES^Z" identifying an iNES file.
pub const INES_MAGIC: [u8; 4] = [b'N', b'E', b'S', 0x1A];

/// Size of one PRG-ROM bank.
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// Size of one CHR-ROM bank.
pub const CHR_BANK_SIZE: usize = 8 * 1024;

/// Size of the trainer region, when present.
pub const TRAINER_SIZE: usize = 512;

/// Size of the INST-ROM region, when present.
pub const INST_ROM_SIZE: usize = 8192;

/// A cartridge image under construction.
///
/// Fields are populated by the assembly driver, then [`Cartridge::write`] is
/// called exactly once to serialize the image. Header size fields are
/// computed from the region lengths; they cannot be set independently.
///
/// # Examples
///
/// ```
/// use nesgen::{Cartridge, PRG_BANK_SIZE};
///
/// let cart = Cartridge::new(vec![0; PRG_BANK_SIZE]);
/// let mut image = Vec::new();
/// cart.write(&mut image).unwrap();
/// assert_eq!(image.len(), 16 + PRG_BANK_SIZE);
/// assert_eq!(&image[0..5], &[0x4E, 0x45, 0x53, 0x1A, 0x01]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cartridge {
    /// Flags 6: mirroring, battery, trainer, mapper low nibble.
    pub flags6: u8,

    /// Flags 7: console type, mapper high nibble.
    pub flags7: u8,

    /// Flags 8: PRG-RAM size.
    pub flags8: u8,

    /// Flags 9: TV system.
    pub flags9: u8,

    /// Flags 10: TV system and PRG-RAM presence (unofficial).
    pub flags10: u8,

    /// PRG-ROM: the program code. Length must be a multiple of
    /// [`PRG_BANK_SIZE`].
    pub prg_rom: Vec<u8>,

    /// CHR-ROM: pattern tables. Length must be a multiple of
    /// [`CHR_BANK_SIZE`]; absent means the cartridge uses CHR-RAM.
    pub chr_rom: Option<Vec<u8>>,

    /// 512-byte trainer, rarely used.
    pub trainer: Option<Box<[u8; TRAINER_SIZE]>>,

    /// 8 KiB INST-ROM (PlayChoice-10 instruction data), rarely used.
    pub inst_rom: Option<Box<[u8; INST_ROM_SIZE]>>,
}

impl Cartridge {
    /// A cartridge with the given PRG-ROM, no optional regions, and all
    /// flag bytes zero.
    pub fn new(prg_rom: Vec<u8>) -> Self {
        Cartridge {
            prg_rom,
            ..Cartridge::default()
        }
    }

    /// Number of 16 KiB PRG-ROM banks, derived from the region length.
    ///
    /// Fails if the length is not a whole number of banks or exceeds 255
    /// banks.
    pub fn prg_units(&self) -> Result<u8, CartridgeError> {
        region_units("PRG-ROM", self.prg_rom.len(), PRG_BANK_SIZE)
    }

    /// Number of 8 KiB CHR-ROM banks, derived from the region length.
    ///
    /// Zero when no CHR-ROM is present (the cartridge uses CHR-RAM).
    pub fn chr_units(&self) -> Result<u8, CartridgeError> {
        match &self.chr_rom {
            Some(chr) => region_units("CHR-ROM", chr.len(), CHR_BANK_SIZE),
            None => Ok(0),
        }
    }

    /// Write the 16-byte iNES header to `sink`.
    ///
    /// Validates region sizes before writing anything: an invalid PRG-ROM or
    /// CHR-ROM length fails here, leaving the sink untouched.
    pub fn write_header<W: Write>(&self, sink: &mut W) -> Result<(), CartridgeError> {
        let prg_units = self.prg_units()?;
        let chr_units = self.chr_units()?;

        let mut header = [0u8; 16];
        header[0..4].copy_from_slice(&INES_MAGIC);
        header[4] = prg_units;
        header[5] = chr_units;
        header[6] = self.flags6;
        header[7] = self.flags7;
        header[8] = self.flags8;
        header[9] = self.flags9;
        header[10] = self.flags10;
        // Bytes 11-15 stay zero padding.

        sink.write_all(&header)?;
        Ok(())
    }

    /// Serialize the complete cartridge image to `sink`.
    ///
    /// Writes the header, then the regions: PRG-ROM, CHR-ROM (if present),
    /// trainer (if present), INST-ROM (if present). Consumes the cartridge;
    /// serialization is a terminal, one-shot operation.
    pub fn write<W: Write>(self, sink: &mut W) -> Result<(), CartridgeError> {
        debug!(
            "writing cartridge image: {} PRG bytes, {} CHR bytes",
            self.prg_rom.len(),
            self.chr_rom.as_ref().map_or(0, Vec::len)
        );

        self.write_header(sink)?;
        sink.write_all(&self.prg_rom)?;
        if let Some(chr) = &self.chr_rom {
            sink.write_all(chr)?;
        }
        if let Some(trainer) = &self.trainer {
            sink.write_all(&trainer[..])?;
        }
        if let Some(inst) = &self.inst_rom {
            sink.write_all(&inst[..])?;
        }
        Ok(())
    }
}

/// Derive a header unit count from a region's byte length.
fn region_units(region: &'static str, len: usize, unit: usize) -> Result<u8, CartridgeError> {
    if len % unit != 0 {
        return Err(CartridgeError::RegionSize { region, len, unit });
    }
    let units = len / unit;
    if units > u8::MAX as usize {
        return Err(CartridgeError::RegionTooLarge { region, len });
    }
    Ok(units as u8)
}

/// Errors that can occur while serializing a cartridge image.
#[derive(Debug)]
pub enum CartridgeError {
    /// A region's byte length is not a whole number of its bank unit.
    RegionSize {
        /// Region name for diagnostics.
        region: &'static str,
        /// Actual byte length of the region.
        len: usize,
        /// Required bank unit in bytes.
        unit: usize,
    },

    /// A region exceeds the 255 banks representable in the header.
    RegionTooLarge {
        /// Region name for diagnostics.
        region: &'static str,
        /// Actual byte length of the region.
        len: usize,
    },

    /// The underlying byte sink rejected a write.
    Io(io::Error),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CartridgeError::RegionSize { region, len, unit } => write!(
                f,
                "{} length {} is not a multiple of {} bytes",
                region, len, unit
            ),
            CartridgeError::RegionTooLarge { region, len } => {
                write!(f, "{} length {} exceeds 255 banks", region, len)
            }
            CartridgeError::Io(err) => write!(f, "write to output sink failed: {}", err),
        }
    }
}

impl std::error::Error for CartridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CartridgeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CartridgeError {
    fn from(err: io::Error) -> Self {
        CartridgeError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_units() {
        assert_eq!(region_units("PRG-ROM", 0, PRG_BANK_SIZE).unwrap(), 0);
        assert_eq!(region_units("PRG-ROM", 16384, PRG_BANK_SIZE).unwrap(), 1);
        assert_eq!(region_units("PRG-ROM", 32768, PRG_BANK_SIZE).unwrap(), 2);
        assert!(region_units("PRG-ROM", 16383, PRG_BANK_SIZE).is_err());
        assert!(region_units("PRG-ROM", 256 * PRG_BANK_SIZE, PRG_BANK_SIZE).is_err());
    }
}
