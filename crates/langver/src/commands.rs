use langver_version::VersionFormatError;

pub mod check;
pub mod compare;
pub mod parse;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidVersion(#[from] VersionFormatError),
    #[error("No language version was given")]
    #[diagnostic(help(
        "pass --language-version, or set LANGVER_VERSION or LANGVER_HOST_VERSION"
    ))]
    MissingVersion,
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

type Result<T> = miette::Result<T, Error>;
