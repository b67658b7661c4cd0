pub mod autoconfig;
pub mod config;
pub mod console;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod operations;
pub mod product;

pub use config::FxtbConfig;
pub use error::FxtbError;
pub use fetch::{ArchiveFetcher, HttpArchiveFetcher};
pub use product::Product;

pub type Result<T> = std::result::Result<T, FxtbError>;
