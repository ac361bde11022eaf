use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            paths: match (self.paths, other.paths) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
            diagnostics: match (self.diagnostics, other.diagnostics) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
            yaml: match (self.yaml, other.yaml) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
        }
    }
}

// Field-wise merges: values from `other` win when present
impl PathsInput {
    pub fn merge_with(self, other: PathsInput) -> PathsInput {
        PathsInput {
            base_dir: other.base_dir.or(self.base_dir),
        }
    }
}

impl DiagnosticsInput {
    pub fn merge_with(self, other: DiagnosticsInput) -> DiagnosticsInput {
        DiagnosticsInput {
            color: other.color.or(self.color),
        }
    }
}

impl YamlInput {
    pub fn merge_with(self, other: YamlInput) -> YamlInput {
        YamlInput {
            safe_mode: other.safe_mode.or(self.safe_mode),
        }
    }
}
