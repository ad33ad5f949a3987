use std::path::PathBuf;

use tracing::debug;

use crate::error::AppError;

/// Environment variable naming the README to load.
pub const README_ENV: &str = "PUBLIC_APIS_README";

/// Fallback locations, relative to the working directory.
const DEFAULT_CANDIDATES: &[&str] = &["README.md", "../README.md"];

/// Where the directory document lives.
///
/// Resolution order: `--readme`, then `PUBLIC_APIS_README`, then the default
/// candidates. An explicitly named path that does not exist is an error rather
/// than a reason to fall back.
#[derive(Debug, Clone)]
pub struct Config {
    pub readme_path: PathBuf,
}

impl Config {
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, AppError> {
        let from_env = std::env::var_os(README_ENV).map(PathBuf::from);
        let candidates: Vec<PathBuf> = DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect();
        Self::resolve_from(explicit, from_env, &candidates)
    }

    fn resolve_from(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        candidates: &[PathBuf],
    ) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::existing(path, "--readme");
        }
        if let Some(path) = from_env {
            return Self::existing(path, README_ENV);
        }

        candidates
            .iter()
            .inspect(|path| debug!(path = %path.display(), "checking for README"))
            .find(|path| path.is_file())
            .map(|path| Self {
                readme_path: path.clone(),
            })
            .ok_or_else(|| {
                AppError::Config(format!(
                    "could not find README.md (pass --readme or set {README_ENV})"
                ))
            })
    }

    fn existing(path: PathBuf, source: &str) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "README not found at {} (from {source})",
                path.display()
            )));
        }
        Ok(Self { readme_path: path })
    }

    /// Read the whole document into memory.
    pub fn load_document(&self) -> Result<String, AppError> {
        std::fs::read_to_string(&self.readme_path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", self.readme_path.display()))
        })
    }
}
