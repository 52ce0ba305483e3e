//! Logger setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! temp directory when asked to. CLI runs log to stderr.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use rand::distr::Alphanumeric;
use rand::Rng;

const LOG_FILE_PREFIX: &str = "transtui-";
const LOG_SUFFIX_LEN: usize = 8;

/// A fresh `transtui-XXXXXXXX.log` file name.
pub fn log_file_name() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(LOG_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{LOG_FILE_PREFIX}{suffix}.log")
}

/// Sends log records to a new file in `dir` and returns its path.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_file_logger(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(log_file_name());
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    Ok(path)
}

/// Sends warnings and errors to stderr.
pub fn init_stderr_logger() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .target(Target::Stderr)
        .try_init()
        .context("Logger already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        let suffix = name
            .strip_prefix(LOG_FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(".log"))
            .unwrap();
        assert_eq!(suffix.len(), LOG_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_log_file_names_differ() {
        assert_ne!(log_file_name(), log_file_name());
    }
}
