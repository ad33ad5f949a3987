/// Command-line surface.
///
/// Positional arguments mirror the scripted form `INTERESTS [AUTH] [LIMIT]`;
/// with no interests the interactive flow runs instead.
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use apis_common::model::AuthPreference;
use apis_common::profiles::ProfileRegistry;

use crate::error::AppError;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "api-recommender",
    version,
    about = "Personalized picks from the public-apis directory",
    long_about = None
)]
pub struct Cli {
    /// Comma-separated interest tags, e.g. "fun,geo". Omit for interactive mode
    pub interests: Option<String>,

    /// Auth preference: none, apikey or any
    #[arg(default_value = "apikey")]
    pub auth: String,

    /// Number of recommendations to show
    #[arg(default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Path to the public-apis README.md
    #[arg(long)]
    pub readme: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// List the interest tags and exit
    #[arg(long)]
    pub list_profiles: bool,
}

/// A fully validated non-interactive request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub interests: Vec<&'static str>,
    pub auth: AuthPreference,
    pub limit: usize,
}

impl Cli {
    /// Build the scripted request, or `None` when interactive mode should run.
    ///
    /// Unknown interest tags are dropped with a warning; it is an error only
    /// if nothing valid remains.
    pub fn request(&self, registry: &ProfileRegistry) -> Result<Option<Request>, AppError> {
        let Some(raw) = self.interests.as_deref() else {
            return Ok(None);
        };

        let tags: Vec<&str> = raw.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        for tag in tags.iter().filter(|t| !registry.contains(t)) {
            warn!(tag, "ignoring unknown interest");
        }

        let interests = registry.validate_tags(&tags);
        if interests.is_empty() {
            let valid: Vec<&str> = registry.tags().collect();
            return Err(AppError::InvalidArgs(format!(
                "no valid interests. Choose from: {}",
                valid.join(", ")
            )));
        }

        Ok(Some(Request {
            interests,
            auth: self.auth_preference(),
            limit: self.limit,
        }))
    }

    /// Unrecognised auth text earns no bonus, the same as `any`.
    fn auth_preference(&self) -> AuthPreference {
        self.auth.parse().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to auth preference 'any'");
            AuthPreference::Any
        })
    }
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("not a number: {e}")),
    }
}
