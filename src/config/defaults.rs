use crate::config::types::*;
use std::path::PathBuf;

// Diagnostics derives Default (ColorMode::Auto)

impl Default for Paths {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }
}
