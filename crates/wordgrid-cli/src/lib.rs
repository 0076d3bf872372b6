// wordgrid-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use wordgrid_core::config::{SolverConfig, WordSource};

/// Curated word-list file name (smaller, pre-filtered).
const CURATED_LIST: &str = "curated.txt";

/// Supplementary curated word-list file name.
const SUPPLEMENT_LIST: &str = "supplement.txt";

/// Bulk raw word-list file name (large, unfiltered).
const BULK_LIST: &str = "bulk.txt";

/// Proper-noun denylist file name.
const PROPER_NOUNS: &str = "proper_nouns.txt";

/// Initialize logging for a CLI tool. Respects `RUST_LOG`; defaults to
/// warnings only so the word output stays clean.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Locate the word-list data directory.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `WORDGRID_DATA_PATH` environment variable
/// 3. `~/.wordgrid`
/// 4. Current working directory
///
/// The first directory containing the curated list wins; if none does,
/// the first candidate is returned and the solver's own degradation
/// handles the missing lists.
pub fn resolve_data_dir(data_path: Option<&str>) -> PathBuf {
    let candidates = build_search_paths(data_path);
    for dir in &candidates {
        if dir.join(CURATED_LIST).is_file() || dir.join(BULK_LIST).is_file() {
            return dir.clone();
        }
    }
    candidates.into_iter().next().unwrap_or_else(|| PathBuf::from("."))
}

fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("WORDGRID_DATA_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".wordgrid"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Build the standard solver configuration for a data directory.
pub fn build_config(data_dir: &Path) -> SolverConfig {
    SolverConfig {
        curated_sources: vec![
            WordSource::prefiltered("curated", data_dir.join(CURATED_LIST)),
            WordSource::prefiltered("supplement", data_dir.join(SUPPLEMENT_LIST)),
        ],
        bulk_source: Some(WordSource::alphabetic("bulk", data_dir.join(BULK_LIST))),
        denylist_path: Some(data_dir.join(PROPER_NOUNS)),
        ..SolverConfig::default()
    }
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            if i + 1 < args.len() {
                data_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Parse a flag taking a value, e.g. `--threads 4` or `--threads=4`.
///
/// Returns `(value, remaining_args)`; exits on a malformed value.
pub fn parse_value_flag(args: &[String], flag: &str) -> (Option<usize>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let prefix = format!("{flag}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let raw = if let Some(v) = arg.strip_prefix(&prefix) {
            Some(v.to_string())
        } else if arg == flag {
            if i + 1 < args.len() {
                skip_next = true;
                Some(args[i + 1].clone())
            } else {
                eprintln!("error: {flag} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
            None
        };
        if let Some(raw) = raw {
            match raw.parse::<usize>() {
                Ok(v) => value = Some(v),
                Err(_) => {
                    eprintln!("error: {flag} expects a number, got '{raw}'");
                    process::exit(1);
                }
            }
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
