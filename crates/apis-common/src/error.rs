/// Error types for the catalog core.
///
/// Parsing and scoring never fail on data-quality problems; these variants only
/// cover caller-supplied tags that cannot be resolved.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown auth preference: {0} (expected none, apikey or any)")]
    UnknownAuthPreference(String),

    #[error("unknown interest: {0}")]
    UnknownInterest(String),
}
