use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxtbError {
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file {path:?}: {source}")]
    WriteFile { path: PathBuf, source: std::io::Error },

    #[error("Failed to remove {path:?}: {source}")]
    Remove { path: PathBuf, source: std::io::Error },

    #[error("Failed to move {from:?} to {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    HttpClient { source: reqwest::Error },

    #[error("HTTP request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP request to {url} returned {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unsupported archive format for {url}")]
    UnsupportedArchive { url: String },

    #[error("Failed to extract archive into {path:?}: {source}")]
    Archive { path: PathBuf, source: std::io::Error },

    #[error("Archive did not contain a top-level {name} directory in {path:?}")]
    MissingExtractedDir { name: String, path: PathBuf },

    #[error("{product} {version} is already installed at {path:?} (use --force to reinstall)")]
    AlreadyInstalled {
        product: String,
        version: String,
        path: PathBuf,
    },

    #[error("Profile {name} already exists at {path:?}")]
    ProfileExists { name: String, path: PathBuf },
}
