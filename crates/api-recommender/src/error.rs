use apis_common::error::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
