// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use encoding_rs::WINDOWS_1252;

pub const TEXT_FIELD_SIZE: usize = 32;

/// Returns everything before the first NUL byte, or the whole input when there is none.
pub fn chop(source: &[u8]) -> &[u8] {
    match source.iter().position(|&b| b == 0) {
        Some(end) => &source[..end],
        None => source
    }
}

// Chop before decoding so garbage after the terminator never reaches the decoder.
pub fn decode_text(source: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(chop(source));
    text.into_owned()
}
