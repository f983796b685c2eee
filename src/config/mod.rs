// src/config/mod.rs
pub mod types;

pub use self::types::{Config, ExecutionConfig, PathsConfig, RankingConfig};

use crate::error::{LeagueError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "popleague.toml";

pub const DEFAULT_TOML: &str = r#"# popleague.toml
[paths]
# input = "edges/"
# output = "league-ranks.tsv"
# league = "league.txt"
intermediate = ".popleague/tmp/popularity.tsv"

[ranking]
# zero-fill | omit | strict
missing = "zero-fill"

[execution]
threads = 0
chunk_lines = 65536
"#;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit`, or `popleague.toml` in the working directory if present.
    ///
    /// # Errors
    /// Returns `LeagueError::Configuration` if an explicit file is missing, or
    /// if any file found cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) if !p.exists() => {
                return Err(LeagueError::config(p, "config file not found"));
            }
            Some(p) => p.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| LeagueError::config(&path, format!("cannot read config: {e}")))?;
        Self::parse_toml(&content, &path)
    }

    /// Parses TOML content; `origin` names the source in errors.
    ///
    /// # Errors
    /// Returns `LeagueError::Configuration` on invalid TOML or unknown values.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| LeagueError::config(origin, format!("invalid TOML: {e}")))
    }

    /// Checks settings that must hold for any run.
    ///
    /// # Errors
    /// Returns `LeagueError::Configuration` if `chunk_lines` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.execution.chunk_lines == 0 {
            return Err(LeagueError::config(
                Path::new(CONFIG_FILE),
                "execution.chunk_lines must be at least 1",
            ));
        }
        Ok(())
    }

    /// Checks everything a full `run` needs: the general settings plus the
    /// input, output and league paths.
    ///
    /// # Errors
    /// Returns `LeagueError::Configuration` naming the first missing setting.
    pub fn validate_for_run(&self) -> Result<()> {
        self.validate()?;
        self.input()?;
        self.output()?;
        self.league()?;
        Ok(())
    }

    /// # Errors
    /// Returns `LeagueError::Configuration` if no input path is set.
    pub fn input(&self) -> Result<&Path> {
        required(self.paths.input.as_deref(), "input")
    }

    /// # Errors
    /// Returns `LeagueError::Configuration` if no output path is set.
    pub fn output(&self) -> Result<&Path> {
        required(self.paths.output.as_deref(), "output")
    }

    /// # Errors
    /// Returns `LeagueError::Configuration` if no league path is set.
    pub fn league(&self) -> Result<&Path> {
        required(self.paths.league.as_deref(), "league")
    }
}

fn required<'a>(value: Option<&'a Path>, name: &str) -> Result<&'a Path> {
    value.ok_or_else(|| {
        LeagueError::config(
            Path::new(CONFIG_FILE),
            format!("no {name} path given (set paths.{name} or pass --{name})"),
        )
    })
}

/// Writes the default config to `popleague.toml` unless one exists.
///
/// Returns `false` if the file was already present.
///
/// # Errors
/// Returns `LeagueError::Io` if the write fails.
pub fn write_default(dir: &Path) -> Result<bool> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, DEFAULT_TOML).map_err(|e| LeagueError::io(&path, e))?;
    Ok(true)
}
