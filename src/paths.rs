//! Path expression resolution and directory checks.

use crate::constants::{ABSOLUTE_PREFIX, CURRENT_DIR_PREFIX, HOME_PREFIX};
use anyhow::{Result, anyhow};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Why a directory check failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    Missing(PathBuf),
    NotADirectory(PathBuf),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Missing(path) => {
                write!(f, "Directory does not exist, need: {}", path.display())
            }
            DirectoryError::NotADirectory(path) => {
                write!(f, "Path is not a directory, check: {}", path.display())
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Check that `path` exists and is a directory
pub fn check_directory(path: &Path) -> Result<(), DirectoryError> {
    if !path.exists() {
        return Err(DirectoryError::Missing(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(DirectoryError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// The form of a path expression, decided by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathForm {
    Absolute,
    HomeRelative,
    DotRelative,
    Bare,
}

impl PathForm {
    pub fn classify(expression: &str) -> Self {
        let expression = expression.trim();
        if expression.starts_with(ABSOLUTE_PREFIX) {
            PathForm::Absolute
        } else if expression.starts_with(HOME_PREFIX) {
            PathForm::HomeRelative
        } else if expression.starts_with(CURRENT_DIR_PREFIX) {
            PathForm::DotRelative
        } else {
            PathForm::Bare
        }
    }
}

/// Resolves path expressions against a base directory.
///
/// The home directory is captured at construction so resolution stays a pure
/// function of its inputs.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver using the invoking user's home directory
    pub fn from_env() -> Self {
        Self {
            home: home_dir(),
        }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Resolver with no home directory; `~/` expressions fail
    pub fn without_home() -> Self {
        Self { home: None }
    }

    /// Resolve `expression` against `base`.
    ///
    /// The expression is trimmed first. Absolute expressions ignore `base`,
    /// `~/` is replaced by the home directory, a leading `./` is stripped and
    /// everything else is joined onto `base`. No `..` collapsing happens.
    pub fn resolve(&self, base: &Path, expression: &str) -> Result<PathBuf> {
        let expression = expression.trim();

        let resolved = match PathForm::classify(expression) {
            PathForm::Absolute => PathBuf::from(expression),
            PathForm::HomeRelative => {
                let home = self.home.as_ref().ok_or_else(|| {
                    anyhow!("Cannot resolve '{}': home directory is unknown", expression)
                })?;
                // `~//x` still lands under home
                home.join(expression[HOME_PREFIX.len()..].trim_start_matches('/'))
            }
            PathForm::DotRelative => base.join(&expression[CURRENT_DIR_PREFIX.len()..]),
            PathForm::Bare => base.join(expression),
        };

        debug!(
            "Resolved '{}' against {} to {}",
            expression,
            base.display(),
            resolved.display()
        );
        Ok(resolved)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Resolve with the invoking user's home directory
pub fn resolve(base: &Path, expression: &str) -> Result<PathBuf> {
    PathResolver::from_env().resolve(base, expression)
}

pub fn home_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// True when the absolute string form of `second` starts with the absolute
/// string form of `first`.
///
/// This is a plain string comparison: `/data/app` matches `/data/application`.
pub fn string_prefix_matches(first: &Path, second: &Path) -> bool {
    let first = absolute_string(first);
    let second = absolute_string(second);
    second.starts_with(&first)
}

fn absolute_string(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
