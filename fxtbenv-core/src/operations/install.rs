use crate::environment::create_private_dir_all;
use crate::fetch::ArchiveFetcher;
use crate::{FxtbConfig, FxtbError, Product, Result, autoconfig, console};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub product: Product,
    pub version: String,
    /// Overrides the configured locale for the download URL.
    pub locale: Option<String>,
    pub force: bool,
}

#[derive(Debug)]
pub struct InstallOutcome {
    pub source_url: String,
    pub install_dir: PathBuf,
    pub pointer_file: PathBuf,
    pub body_file: PathBuf,
}

pub fn install(
    config: &FxtbConfig,
    fetcher: &dyn ArchiveFetcher,
    options: &InstallOptions,
) -> Result<InstallOutcome> {
    let product = options.product;
    let version = options.version.as_str();

    let source_url = config.source_url(product, version, options.locale.as_deref());
    let install_dir = config.product_dir(product.as_str(), version, None);

    if install_dir.exists() && !options.force {
        return Err(FxtbError::AlreadyInstalled {
            product: product.to_string(),
            version: version.to_string(),
            path: install_dir,
        });
    }

    let staging = config
        .staging_dir()
        .join(format!("{}-{}", product.as_str(), version));
    if staging.exists() {
        debug!("clearing stale staging directory {}", staging.display());
        remove_dir(&staging)?;
    }
    create_private_dir_all(&staging)?;

    console::step(&format!(
        "Downloading {} {}...",
        product.display_name(),
        version
    ));
    info!("fetching {} into {}", source_url, staging.display());

    let placed = stage_and_place(fetcher, &source_url, product, &staging, &install_dir);
    discard_staging(&staging);
    placed?;

    if let Err(error) = write_autoconfig(&install_dir) {
        warn!(
            "removing {} after failed autoconfig write",
            install_dir.display()
        );
        if let Err(cleanup) = fs::remove_dir_all(&install_dir) {
            warn!("failed to remove {}: {}", install_dir.display(), cleanup);
        }
        return Err(error);
    }
    let pointer_file = autoconfig::pointer_path(&install_dir);
    let body_file = autoconfig::body_path(&install_dir);

    console::installed(product.as_str(), version, &install_dir);

    Ok(InstallOutcome {
        source_url,
        install_dir,
        pointer_file,
        body_file,
    })
}

/// Fetches into `staging` and moves the extracted product directory to
/// `install_dir`. A previous install is only removed once the new tree is
/// on disk.
fn stage_and_place(
    fetcher: &dyn ArchiveFetcher,
    source_url: &str,
    product: Product,
    staging: &Path,
    install_dir: &Path,
) -> Result<()> {
    fetcher.fetch(source_url, staging)?;

    let extracted = staging.join(product.as_str());
    if !extracted.is_dir() {
        return Err(FxtbError::MissingExtractedDir {
            name: product.as_str().to_string(),
            path: staging.to_path_buf(),
        });
    }

    if let Some(parent) = install_dir.parent() {
        create_private_dir_all(parent)?;
    }

    if install_dir.exists() {
        info!("removing previous install at {}", install_dir.display());
        remove_dir(install_dir)?;
    }

    fs::rename(&extracted, install_dir).map_err(|source| FxtbError::Rename {
        from: extracted.clone(),
        to: install_dir.to_path_buf(),
        source,
    })
}

fn write_autoconfig(install_dir: &Path) -> Result<()> {
    autoconfig::write_pointer(install_dir)?;
    autoconfig::write_body(install_dir)?;
    Ok(())
}

fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|source| FxtbError::Remove {
        path: path.to_path_buf(),
        source,
    })
}

fn discard_staging(staging: &Path) {
    if let Err(error) = fs::remove_dir_all(staging) {
        warn!(
            "failed to remove staging directory {}: {}",
            staging.display(),
            error
        );
    }
}
