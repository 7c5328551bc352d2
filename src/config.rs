// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

use std::env;

#[derive(Debug, PartialEq, Eq)]
pub struct FilePattern {
    pub base_path: String,
    pub pattern: String
}

pub struct Config {
    pub cpu_threads: usize,
    pub recursive: bool,
    pub verbose: bool,
    pub file_patterns: Vec<FilePattern>
}

impl Config {
    pub fn read() -> Result<Config, String> {
        Self::from_args(env::args().skip(1))
    }

    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config, String> {
        let max_threads = rayon::current_num_threads();
        let mut cpu_threads = max_threads;
        let mut recursive = false;
        let mut verbose = false;
        let mut file_patterns = vec![];

        for argument in args {
            if argument.len() > 1 && argument.starts_with('-') {
                match &argument[1..2] {
                    "c" => cpu_threads = Self::parse_argument_number("Max threads", &argument[2..])? as usize,
                    "s" => recursive = true,
                    "v" => verbose = true,
                    _ => return Err(format!("Unknown option: {argument}"))
                }
            } else {
                file_patterns.push(Self::split_file_path(argument.trim()));
            }
        }

        if cpu_threads > max_threads {
            cpu_threads = max_threads;
        }

        Self::validate_file_patterns(&file_patterns)?;

        Ok(Config {
            cpu_threads,
            recursive,
            verbose,
            file_patterns
        })
    }

    fn validate_file_patterns(file_patterns: &[FilePattern]) -> Result<(), String> {
        if file_patterns.is_empty() {
            return Err("No file path pattern provided.".to_string());
        }
        if file_patterns.iter().any(|file_pattern| file_pattern.pattern.is_empty()) {
            return Err("File path pattern should end with a filename or wildcard.".to_string());
        }
        Ok(())
    }

    fn parse_argument_number(arg_name: &str, arg_value: &str) -> Result<u32, String> {
        let number = match arg_value.parse::<u32>() {
            Ok(i) => i,
            Err(_e) => return Err(format!("{arg_name} must be a valid number."))
        };
        if number > 0 {
            Ok(number)
        } else {
            Err(format!("{arg_name} must be higher than 0."))
        }
    }

    fn split_file_path(file_path: &str) -> FilePattern {
        let file_path_unix = file_path.replace('\\', "/");
        let (base_path, pattern) = match file_path_unix.rfind('/') {
            Some(0) => ("/", &file_path[1..]),
            Some(index) if index > 1 && file_path_unix.starts_with("./") => (&file_path[2..index], &file_path[index + 1..]),
            Some(index) => (&file_path[..index], &file_path[index + 1..]),
            None => (".", file_path)
        };

        FilePattern {
            base_path: base_path.to_string(),
            pattern: pattern.to_string()
        }
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
