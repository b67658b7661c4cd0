use crate::{FxtbConfig, FxtbError, Product, Result, console};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct InitSummary {
    pub created: Vec<PathBuf>,
    pub failed: Vec<FxtbError>,
}

impl InitSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// True when the home directory exists and is a directory.
pub fn is_initialized(config: &FxtbConfig) -> bool {
    match fs::metadata(config.home_dir()) {
        Ok(metadata) => metadata.is_dir(),
        Err(_) => false,
    }
}

/// True when `versions` and `profiles` exist for every product.
pub fn has_skeleton(config: &FxtbConfig) -> bool {
    Product::ALL.iter().all(|product| {
        config.versions_dir(product.as_str()).is_dir()
            && config.profiles_dir(product.as_str()).is_dir()
    })
}

/// Creates `versions` and `profiles` for every product. Existing directories
/// are left alone; failures are collected as warnings and do not stop the
/// remaining directories from being created.
pub fn initialize(config: &FxtbConfig) -> InitSummary {
    let mut summary = InitSummary::default();

    for product in Product::ALL {
        let entries = [
            config.versions_dir(product.as_str()),
            config.profiles_dir(product.as_str()),
        ];

        for entry in entries {
            if entry.is_dir() {
                debug!("{} already exists", entry.display());
                continue;
            }

            match create_private_dir_all(&entry) {
                Ok(()) => {
                    console::created(&entry);
                    summary.created.push(entry);
                }
                Err(error) => {
                    warn!("{}", error);
                    console::warn(&error.to_string());
                    summary.failed.push(error);
                }
            }
        }
    }

    summary
}

/// `create_dir_all` with owner-only permissions on every directory it creates.
pub(crate) fn create_private_dir_all(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(path).map_err(|source| FxtbError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
