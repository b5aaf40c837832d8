//! Session configuration

use std::path::PathBuf;

/// Default catalog location, before `~` expansion
pub const DEFAULT_CATALOG_PATH: &str = "~/.local/share/video-session/videos.txt";

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Catalog file (`.txt` or `.xml`)
    pub catalog_path: PathBuf,

    /// How command results are written to stdout
    pub output: OutputFormat,

    /// Seed for random picks (None = seeded from the OS)
    pub seed: Option<u64>,
}

/// Output style for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable message lines
    #[default]
    Text,

    /// One JSON object per command
    Json,
}

impl SessionConfig {
    /// Create a configuration for the given catalog, expanding a leading `~`
    pub fn new(catalog_path: &str) -> Self {
        let expanded = shellexpand::tilde(catalog_path);
        Self {
            catalog_path: PathBuf::from(expanded.as_ref()),
            output: OutputFormat::Text,
            seed: None,
        }
    }

    /// Set the output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set a fixed random seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}
