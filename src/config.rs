//! Optional `lx.toml` configuration.
//!
//! Looked up as `--config PATH`, else `./lx.toml`, else
//! `<config dir>/lx/config.toml`. Only an explicit path has to exist. Unknown
//! keys are ignored so older binaries tolerate newer files.
//!
//! ```toml
//! line_numbers = true
//! newline = "lf"
//!
//! [template]
//! prefix = "== {filename} =={n}"
//! postfix = "{n}"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::LxError;
use crate::options::{Newline, RenderOptions};

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub postfix: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub line_numbers: Option<bool>,
    #[serde(default)]
    pub newline: Option<Newline>,
    #[serde(default)]
    pub template: TemplateConfig,
}

/// Settings that came from the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub line_numbers: Option<bool>,
    pub newline: Option<Newline>,
}

/// First existing default location, if any.
pub fn discover() -> Option<PathBuf> {
    let local = PathBuf::from("lx.toml");
    if local.is_file() {
        return Some(local);
    }
    let global = dirs::config_dir()?.join("lx").join("config.toml");
    global.is_file().then_some(global)
}

/// Load the config file. An explicit `path` must exist; a discovered one is
/// optional and its absence means defaults.
pub fn load(path: Option<&Path>) -> Result<Config, LxError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match discover() {
            Some(p) => p,
            None => {
                debug!(target: "config", "no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };
    let content = fs::read_to_string(&path).map_err(|e| LxError::Config {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let config = parse(&content).map_err(|reason| LxError::Config {
        path: path.clone(),
        reason,
    })?;
    debug!(target: "config", path = %path.display(), ?config, "loaded config");
    Ok(config)
}

pub fn parse(content: &str) -> Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string().trim_end().to_string())
}

impl Config {
    /// Command line over config file over built-in defaults. Empty templates
    /// count as unset and fall through to the next source.
    #[must_use]
    pub fn apply(&self, cli: Overrides, head: usize, tail: usize) -> RenderOptions {
        let defaults = RenderOptions::default();
        let pick = |cli: Option<String>, file: Option<&String>, default: String| {
            cli.filter(|s| !s.is_empty())
                .or_else(|| file.filter(|s| !s.is_empty()).cloned())
                .unwrap_or(default)
        };
        RenderOptions {
            head,
            tail,
            prefix: pick(cli.prefix, self.template.prefix.as_ref(), defaults.prefix),
            postfix: pick(cli.postfix, self.template.postfix.as_ref(), defaults.postfix),
            line_numbers: cli.line_numbers.or(self.line_numbers).unwrap_or(false),
            newline: cli.newline.or(self.newline).unwrap_or(defaults.newline),
        }
    }
}
