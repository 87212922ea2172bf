//! Bundle configuration
//!
//! The CLI always uses the defaults. Other values exist so callers and tests
//! can point the output somewhere else.

use std::path::PathBuf;

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "js/assets.js";

/// Default global object the bundle attaches its accessors to
pub const DEFAULT_GLOBAL: &str = "window";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// File the bundle is written to; an existing file is overwritten
    pub output: PathBuf,
    /// Name of the global passed into the wrapper function
    pub global: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            global: DEFAULT_GLOBAL.to_string(),
        }
    }
}

impl BundleConfig {
    /// Default config writing to a different output path
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BundleConfig::default();
        assert_eq!(config.output, PathBuf::from("js/assets.js"));
        assert_eq!(config.global, "window");
    }

    #[test]
    fn test_with_output_keeps_global() {
        let config = BundleConfig::with_output("/tmp/out.js");
        assert_eq!(config.output, PathBuf::from("/tmp/out.js"));
        assert_eq!(config.global, DEFAULT_GLOBAL);
    }
}
