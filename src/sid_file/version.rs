// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::fmt;

use crate::word::format_hex16;

pub const MIN_VERSION: u16 = 1;
pub const MAX_VERSION: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(pub u16);

impl Version {
    pub fn is_supported(&self) -> bool {
        (MIN_VERSION..=MAX_VERSION).contains(&self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "PSID, {}", format_hex16(self.0)),
            2..=4 => write!(f, "PSID V2NG, RSID, {}", format_hex16(self.0)),
            _ => write!(f, "unknown version {}", format_hex16(self.0))
        }
    }
}
