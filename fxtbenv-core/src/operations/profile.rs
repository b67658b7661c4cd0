use crate::environment::create_private_dir_all;
use crate::operations::list::list_dir_names;
use crate::{FxtbConfig, FxtbError, Product, Result};
use std::path::PathBuf;
use tracing::info;

/// Creates an empty named profile directory for `product`.
pub fn create_profile(config: &FxtbConfig, product: Product, name: &str) -> Result<PathBuf> {
    let path = config.profile_dir(product.as_str(), name);

    if path.exists() {
        return Err(FxtbError::ProfileExists {
            name: name.to_string(),
            path,
        });
    }

    create_private_dir_all(&path)?;
    info!("created profile {} at {}", name, path.display());

    Ok(path)
}

pub fn list_profiles(config: &FxtbConfig, product: Product) -> Result<Vec<String>> {
    list_dir_names(&config.profiles_dir(product.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_list_profiles() {
        let temp = TempDir::new().unwrap();
        let config = FxtbConfig::with_home(temp.path());

        let path = create_profile(&config, Product::Firefox, "57:ja@work").unwrap();

        assert_eq!(path, temp.path().join("firefox/profiles/57:ja@work"));
        assert!(path.is_dir());
        assert_eq!(
            list_profiles(&config, Product::Firefox).unwrap(),
            vec!["57:ja@work".to_string()]
        );
    }

    #[test]
    fn test_create_existing_profile_fails() {
        let temp = TempDir::new().unwrap();
        let config = FxtbConfig::with_home(temp.path());

        create_profile(&config, Product::Thunderbird, "default").unwrap();
        let result = create_profile(&config, Product::Thunderbird, "default");

        assert!(matches!(result, Err(FxtbError::ProfileExists { .. })));
    }
}
