// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

//! Reader and validator for Commodore 64 PSID/RSID music files.

pub mod sid_file;
pub mod word;

pub use sid_file::{is_sid_file, FormatError, LoadError, SidFile, Version};
