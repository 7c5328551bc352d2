// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

//! Big-endian word helpers shared by every multi-byte header read.

pub fn bytes_to_word(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

pub fn bytes_to_long_word(source: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*source)
}

pub fn format_hex16(word: u16) -> String {
    format!("0x{:04x}", word)
}

pub fn format_hex32(long_word: u32) -> String {
    format!("0x{:08x}", long_word)
}

pub fn low_byte(word: u16) -> u8 {
    (word & 0xff) as u8
}

pub fn high_byte(word: u16) -> u8 {
    (word >> 8) as u8
}

#[cfg(test)]
#[path = "./word_test.rs"]
mod word_test;
