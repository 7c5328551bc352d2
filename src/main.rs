// Copyright (C) 2026 Wilfred Bos
// Licensed under the MIT license. See the LICENSE file for the terms and conditions.

mod config;

use std::env;
use std::process::exit;
use std::time::Instant;

use rayon::prelude::*;
use sid_info::word::{format_hex16, format_hex32};
use sid_info::{LoadError, SidFile};
use self::config::{Config, FilePattern};

fn main() {
    if env::args().count() <= 1 {
        print_usage();
        return;
    }

    match run() {
        Ok(0) => {}
        Ok(_) => exit(1),
        Err(message) => {
            eprintln!("ERROR: {}\r", message);
            exit(1);
        }
    }
}

struct FileResult {
    filename: String,
    sid_file: Result<SidFile, LoadError>
}

fn run() -> Result<usize, String> {
    let config = Config::read()?;

    let start_time = Instant::now();
    let max_depth = if config.recursive { usize::MAX } else { 1 };

    let mut files = vec![];
    for file_pattern in &config.file_patterns {
        files.extend(find_files(file_pattern, max_depth)?);
    }

    if files.is_empty() {
        eprintln!("No file(s) found.\r");
        return Ok(0);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.cpu_threads)
        .build()
        .map_err(|error| format!("Unable to create thread pool: {error}"))?;

    let results: Vec<FileResult> = pool.install(|| {
        files
            .par_iter()
            .map(|filename| FileResult {
                filename: filename.to_owned(),
                sid_file: SidFile::load(filename)
            })
            .collect()
    });

    let multiple_files = results.len() > 1;
    let mut failed_files = 0;

    for result in &results {
        match &result.sid_file {
            Ok(sid_file) => {
                if multiple_files {
                    print!("{:?}: ", result.filename);
                }
                println!("{}\r", sid_file);

                if config.verbose {
                    print_header_fields(sid_file);
                }
            }
            Err(error) => {
                failed_files += 1;
                eprintln!("ERROR: {:?}: {}\r", result.filename, error);
            }
        }
    }

    if multiple_files {
        eprintln!("\r\nValid files           {:>9}\r", results.len() - failed_files);
        eprintln!("Invalid files         {:>9}\r", failed_files);
        eprintln!("Total files processed {:>9}\r", results.len());
        output_elapsed_time(start_time);
    }

    Ok(failed_files)
}

fn find_files(file_pattern: &FilePattern, max_depth: usize) -> Result<Vec<String>, String> {
    let walker = globwalk::GlobWalkerBuilder::from_patterns(&file_pattern.base_path, &[&file_pattern.pattern])
        .max_depth(max_depth)
        .case_insensitive(true)
        .build()
        .map_err(|error| format!("Invalid file path pattern {}: {error}", file_pattern.pattern))?;

    let mut files = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().display().to_string())
        .collect::<Vec<String>>();
    files.sort();
    Ok(files)
}

fn print_header_fields(sid_file: &SidFile) {
    let timing = if sid_file.speed_is_50hz() { "50Hz" } else { "60Hz" };

    println!("  Version      : {}\r", sid_file.version());
    println!("  Data offset  : {}\r", format_hex16(sid_file.data_offset()));
    println!("  Load address : {}\r", format_hex16(sid_file.effective_load_address()));
    println!("  Init address : {}\r", format_hex16(sid_file.init_address()));
    println!("  Play address : {}\r", format_hex16(sid_file.play_address()));
    println!("  Songs        : {}\r", format_hex16(sid_file.song_count()));
    println!("  Start song   : {}\r", format_hex16(sid_file.start_song()));
    println!("  Speed        : {} ({})\r", format_hex32(sid_file.speed()), timing);
    println!("  Data size    : {} bytes\r", sid_file.raw_instructions().len());
}

fn output_elapsed_time(start_time: Instant) {
    let time_millis = start_time.elapsed().as_millis();
    let time_seconds = time_millis / 1000;
    let seconds = time_seconds % 60;
    let minutes = time_seconds / 60 % 60;
    let hours = time_seconds / 60 / 60;
    eprintln!("\r\nTotal time: {:0>2}:{:0>2}:{:0>2} (+{} milliseconds)\r", hours, minutes, seconds, time_millis % 1000);
}

fn print_usage() {
    println!("SID-Info v1.0 - Copyright (c) 2026 Wilfred Bos\r");
    println!("\r\nUsage: sid-info <options> <file_path_pattern>...\r");
    println!("\r\n<Options>\r");
    println!("  -c{{max_threads}}: set the maximum CPU threads to be used [Default is all]\r");
    println!("  -s: include subdirectories\r");
    println!("  -v: display all header fields\r");
}
