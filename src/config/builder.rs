use crate::config::{merge::Merge, types::*};
use crate::document::YamlOptions;
use crate::paths::PathResolver;
use anyhow::{Context, Result};
use std::path::Path;

pub struct ConfigBuilder {
    config_input: ConfigInput,
    resolver: PathResolver,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
            resolver: PathResolver::from_env(),
        }
    }

    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            paths: self.resolve_paths(&defaults.paths)?,
            diagnostics: self.resolve_diagnostics(&defaults.diagnostics),
            yaml: self.resolve_yaml(&defaults.yaml),
        })
    }

    fn resolve_paths(&self, defaults: &Paths) -> Result<Paths> {
        let base_dir = match self
            .config_input
            .paths
            .as_ref()
            .and_then(|p| p.base_dir.as_ref())
        {
            Some(expression) => self
                .resolver
                .resolve(Path::new("."), expression)
                .with_context(|| format!("Invalid base directory '{}'", expression))?,
            None => defaults.base_dir.clone(),
        };

        Ok(Paths { base_dir })
    }

    fn resolve_diagnostics(&self, defaults: &Diagnostics) -> Diagnostics {
        let diag_input = self.config_input.diagnostics.as_ref();

        Diagnostics {
            color: diag_input
                .and_then(|d| d.color)
                .unwrap_or(defaults.color),
        }
    }

    fn resolve_yaml(&self, defaults: &YamlOptions) -> YamlOptions {
        let yaml_input = self.config_input.yaml.as_ref();

        YamlOptions {
            safe_mode: yaml_input
                .and_then(|y| y.safe_mode)
                .unwrap_or(defaults.safe_mode),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
