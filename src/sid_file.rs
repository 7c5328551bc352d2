// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

mod error;
mod text;
mod version;

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::word::{bytes_to_long_word, bytes_to_word, format_hex16, high_byte, low_byte};
pub use error::{FormatError, LoadError};
pub use text::{chop, decode_text, TEXT_FIELD_SIZE};
pub use version::{Version, MAX_VERSION, MIN_VERSION};

pub const MIN_SID_HEADER_SIZE: usize = 0x76;
pub const MIN_HEADER_SIZE: usize = 0x7C;

pub const DATA_OFFSET_V1: u16 = 0x76;
pub const DATA_OFFSET_V2: u16 = 0x7C;

const VERSION_OFFSET: usize = 0x04;
const DATA_OFFSET_OFFSET: usize = 0x06;
const LOAD_ADDRESS_OFFSET: usize = 0x08;
const INIT_ADDRESS_OFFSET: usize = 0x0A;
const PLAY_ADDRESS_OFFSET: usize = 0x0C;
const SONGS_OFFSET: usize = 0x0E;
const START_SONG_OFFSET: usize = 0x10;
const SPEED_OFFSET: usize = 0x12;
const NAME_OFFSET: usize = 0x16;
const AUTHOR_OFFSET: usize = 0x36;
const RELEASED_OFFSET: usize = 0x56;

pub fn is_sid_file(source: &[u8]) -> bool {
    source.len() >= MIN_SID_HEADER_SIZE && is_marker(source)
}

fn is_marker(source: &[u8]) -> bool {
    (source[0] == b'R' || source[0] == b'P') && &source[1..4] == b"SID"
}

/// A PSID/RSID file held as its raw bytes.
///
/// Every accessor reads its field straight from the buffer. The accessors rely on
/// [`SidFile::validate`] having succeeded; on a buffer that failed validation they
/// may panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidFile {
    data: Vec<u8>
}

impl SidFile {
    pub fn from_bytes(data: Vec<u8>) -> SidFile {
        SidFile { data }
    }

    pub fn decode(data: Vec<u8>) -> Result<SidFile, FormatError> {
        let sid_file = Self::from_bytes(data);
        sid_file.validate()?;
        Ok(sid_file)
    }

    pub fn read<R: Read>(mut reader: R) -> Result<SidFile, LoadError> {
        let mut data = vec![];
        reader.read_to_end(&mut data)?;
        Ok(Self::decode(data)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<SidFile, LoadError> {
        let file = File::open(path)?;
        Self::read(file)
    }

    pub fn validate(&self) -> Result<(), FormatError> {
        if self.data.len() < MIN_HEADER_SIZE {
            return Err(FormatError::TooShort { length: self.data.len() });
        }

        if !is_marker(&self.data) {
            return Err(FormatError::BadMagic { marker: self.magic() });
        }

        let version = self.version();
        if !version.is_supported() {
            return Err(FormatError::BadVersion { version: version.0 });
        }

        let offset = self.data_offset();
        if offset != DATA_OFFSET_V1 && offset != DATA_OFFSET_V2 {
            return Err(FormatError::BadDataOffset { offset });
        }
        Ok(())
    }

    pub fn magic(&self) -> [u8; 4] {
        [self.data[0], self.data[1], self.data[2], self.data[3]]
    }

    pub fn is_rsid(&self) -> bool {
        self.data[0] == b'R'
    }

    pub fn version(&self) -> Version {
        Version(self.read_word(VERSION_OFFSET))
    }

    pub fn data_offset(&self) -> u16 {
        self.read_word(DATA_OFFSET_OFFSET)
    }

    /// Raw header field; 0 means the address is stored in front of the payload.
    pub fn load_address(&self) -> u16 {
        self.read_word(LOAD_ADDRESS_OFFSET)
    }

    pub fn init_address(&self) -> u16 {
        self.read_word(INIT_ADDRESS_OFFSET)
    }

    pub fn play_address(&self) -> u16 {
        self.read_word(PLAY_ADDRESS_OFFSET)
    }

    pub fn song_count(&self) -> u16 {
        self.read_word(SONGS_OFFSET)
    }

    pub fn start_song(&self) -> u16 {
        self.read_word(START_SONG_OFFSET)
    }

    pub fn speed(&self) -> u32 {
        let mut speed = [0; 4];
        speed.copy_from_slice(&self.data[SPEED_OFFSET..SPEED_OFFSET + 4]);
        bytes_to_long_word(&speed)
    }

    pub fn speed_is_50hz(&self) -> bool {
        self.speed() & 1 == 0
    }

    pub fn name(&self) -> String {
        self.read_text(NAME_OFFSET)
    }

    pub fn author(&self) -> String {
        self.read_text(AUTHOR_OFFSET)
    }

    pub fn released(&self) -> String {
        self.read_text(RELEASED_OFFSET)
    }

    pub fn has_load_address_in_data(&self) -> bool {
        self.load_address() == 0
    }

    /// The program as a C64 PRG image: little-endian load address followed by the instructions.
    pub fn payload_bytes(&self) -> Cow<'_, [u8]> {
        let data = self.data_slice();
        if self.has_load_address_in_data() {
            return Cow::Borrowed(data);
        }

        let load_address = self.load_address();
        let mut payload = Vec::with_capacity(data.len() + 2);
        payload.push(low_byte(load_address));
        payload.push(high_byte(load_address));
        payload.extend_from_slice(data);
        Cow::Owned(payload)
    }

    pub fn raw_instructions(&self) -> &[u8] {
        let data = self.data_slice();
        if self.has_load_address_in_data() {
            data.get(2..).unwrap_or(&[])
        } else {
            data
        }
    }

    pub fn effective_load_address(&self) -> u16 {
        if !self.has_load_address_in_data() {
            return self.load_address();
        }

        // stored little-endian, unlike the header fields
        match self.data_slice() {
            [lo, hi, ..] => bytes_to_word(*hi, *lo),
            _ => 0
        }
    }

    pub fn load_end_address(&self) -> u16 {
        self.effective_load_address().wrapping_add(self.raw_instructions().len() as u16)
    }

    pub fn summary_string(&self) -> String {
        format!("{:?} by {} (c) {} ({}-{})",
                self.name(),
                self.author(),
                self.released(),
                format_hex16(self.effective_load_address()),
                format_hex16(self.load_end_address()))
    }

    fn data_slice(&self) -> &[u8] {
        let offset = self.data_offset() as usize;
        self.data.get(offset..).unwrap_or(&[])
    }

    fn read_word(&self, offset: usize) -> u16 {
        bytes_to_word(self.data[offset], self.data[offset + 1])
    }

    fn read_text(&self, offset: usize) -> String {
        decode_text(&self.data[offset..offset + TEXT_FIELD_SIZE])
    }
}

impl fmt::Display for SidFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_string())
    }
}

#[cfg(test)]
#[path = "./sid_file_test.rs"]
mod sid_file_test;
