use crate::fetch::HttpArchiveFetcher;
use crate::{FxtbConfig, FxtbError, Product, Result};
use std::fs;
use std::path::Path;

/// Installed versions of `product`, sorted by directory name.
pub fn list_installed(config: &FxtbConfig, product: Product) -> Result<Vec<String>> {
    list_dir_names(&config.versions_dir(product.as_str()))
}

/// Raw releases index for `product`. No attempt is made to parse it.
pub fn release_listing(
    config: &FxtbConfig,
    fetcher: &HttpArchiveFetcher,
    product: Product,
) -> Result<String> {
    fetcher.fetch_listing(&config.releases_url(product))
}

pub(crate) fn list_dir_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let to_error = |source| FxtbError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(to_error)? {
        let path = entry.map_err(to_error)?.path();

        if path.is_dir()
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}
