//! Loader for the RON runner configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::RunnerConfig;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse runner configuration text. `file` only labels errors.
pub fn parse_runner_config(contents: &str, file: &str) -> Result<RunnerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load and sanitize the runner configuration file.
pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let config = parse_runner_config(&contents, &file_name)?;
    Ok(config.sanitized())
}
