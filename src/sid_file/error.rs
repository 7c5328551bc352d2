// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::error::Error;
use std::fmt;
use std::io;

use super::MIN_HEADER_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Buffer is shorter than the minimum header size.
    TooShort { length: usize },

    /// First four bytes are not "PSID" or "RSID".
    BadMagic { marker: [u8; 4] },

    /// Version is outside 1 to 4.
    BadVersion { version: u16 },

    /// Data offset is neither 0x76 nor 0x7C.
    BadDataOffset { offset: u16 },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::TooShort { length } =>
                write!(f, "input too short to be a SID file, length: {} bytes (minimum {})", length, MIN_HEADER_SIZE),
            FormatError::BadMagic { marker } =>
                write!(f, "incorrect PSID/RSID header marker: {:?}", String::from_utf8_lossy(marker)),
            FormatError::BadVersion { version } =>
                write!(f, "incorrect version: 0x{:04x}", version),
            FormatError::BadDataOffset { offset } =>
                write!(f, "incorrect data offset: 0x{:04x}", offset),
        }
    }
}

impl Error for FormatError {}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Format(FormatError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(error) => write!(f, "error reading file: {}", error),
            LoadError::Format(error) => error.fmt(f),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(error) => Some(error),
            LoadError::Format(error) => Some(error),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Io(error)
    }
}

impl From<FormatError> for LoadError {
    fn from(error: FormatError) -> Self {
        LoadError::Format(error)
    }
}
