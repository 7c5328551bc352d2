use super::*;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn assert_split(input: &str, base_path: &str, pattern: &str) {
    let file_pattern = Config::split_file_path(input);

    assert_eq!(file_pattern, FilePattern { base_path: base_path.to_string(), pattern: pattern.to_string() });
}

#[test]
fn split_file_path_no_path() {
    assert_split("*.sid", ".", "*.sid");
}

#[test]
fn split_file_path_root_path() {
    assert_split("/Rivalry_tune_5.sid", "/", "Rivalry_tune_5.sid");
}

#[test]
fn split_file_path_relative() {
    assert_split("./MUSICIANS/L/Laxity/*.sid", "MUSICIANS/L/Laxity", "*.sid");
}

#[test]
fn split_file_path_mixed_slashes() {
    assert_split(".\\MUSICIANS\\L/Laxity\\*.sid", "MUSICIANS\\L/Laxity", "*.sid");
}

#[test]
fn split_file_path_current_dir_only() {
    assert_split("./", ".", "");
}

#[test]
fn split_file_path_dot() {
    assert_split(".", ".", ".");
}

#[test]
fn options_and_patterns() {
    let config = Config::from_args(args(&["-s", "-v", "a.sid", "tunes/*.sid"])).unwrap();

    assert!(config.recursive);
    assert!(config.verbose);
    assert_eq!(config.file_patterns.len(), 2);
    assert_eq!(config.file_patterns[1].base_path, "tunes");
    assert_eq!(config.file_patterns[1].pattern, "*.sid");
}

#[test]
fn defaults() {
    let config = Config::from_args(args(&["a.sid"])).unwrap();

    assert!(!config.recursive);
    assert!(!config.verbose);
    assert_eq!(config.cpu_threads, rayon::current_num_threads());
}

#[test]
fn cpu_threads_clamped_to_maximum() {
    let config = Config::from_args(args(&["-c100000", "a.sid"])).unwrap();

    assert_eq!(config.cpu_threads, rayon::current_num_threads());
}

#[test]
fn cpu_threads_invalid() {
    assert_eq!(Config::from_args(args(&["-cx", "a.sid"])).err(), Some("Max threads must be a valid number.".to_string()));
    assert_eq!(Config::from_args(args(&["-c0", "a.sid"])).err(), Some("Max threads must be higher than 0.".to_string()));
}

#[test]
fn unknown_option() {
    assert_eq!(Config::from_args(args(&["-q", "a.sid"])).err(), Some("Unknown option: -q".to_string()));
}

#[test]
fn missing_pattern() {
    assert!(Config::from_args(args(&["-s"])).is_err());
    assert!(Config::from_args(args(&["tunes/"])).is_err());
}
