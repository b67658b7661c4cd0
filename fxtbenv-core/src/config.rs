use crate::product::Product;
use std::env;
use std::path::{Path, PathBuf};

pub const HOME_DIR_NAME: &str = ".fxtbenv";
pub const DEFAULT_LOCALE: &str = "ja";
pub const DEFAULT_MIRROR: &str = "https://ftp.mozilla.org/pub";
/// `{ext}` expands to `tar.xz` for releases from 135 on and `tar.bz2` before
/// that. Set `FXTBENV_FIREFOX_URL`/`FXTBENV_THUNDERBIRD_URL` to pin a suffix.
pub const DEFAULT_URL_TEMPLATE: &str =
    "{base}/{product}/releases/{version}/{platform}/{locale}/{product}-{version}.{ext}";

const FIRST_XZ_RELEASE: u32 = 135;

const VERSIONS_DIR: &str = "versions";
const PROFILES_DIR: &str = "profiles";
const STAGING_DIR: &str = ".staging";

#[derive(Debug, Clone)]
pub struct FxtbConfig {
    pub home_dir: PathBuf,
    pub locale: String,
    pub platform: String,
    pub mirror: String,
    pub firefox_url: String,
    pub thunderbird_url: String,
    pub verbose: bool,
}

impl FxtbConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), dirs::home_dir())
    }

    /// Builds the configuration from an arbitrary variable source. Blank
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F, user_home: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let home_dir = match read("FXTBENV_HOME") {
            Some(home) => PathBuf::from(home),
            None => user_home.unwrap_or_default().join(HOME_DIR_NAME),
        };

        let locale = read("FXTBENV_LOCALE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let platform = read("FXTBENV_PLATFORM")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| default_platform().to_string());

        let mirror = read("FXTBENV_MIRROR")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_MIRROR.to_string());

        let firefox_url = read("FXTBENV_FIREFOX_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_URL_TEMPLATE.to_string());

        let thunderbird_url = read("FXTBENV_THUNDERBIRD_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_URL_TEMPLATE.to_string());

        let verbose = match read("FXTBENV_VERBOSE") {
            Some(value) => {
                let v = value.trim().to_ascii_lowercase();
                matches!(v.as_str(), "1" | "true" | "yes" | "y" | "on")
            }
            None => false,
        };

        FxtbConfig {
            home_dir,
            locale,
            platform,
            mirror,
            firefox_url,
            thunderbird_url,
            verbose,
        }
    }

    /// Default configuration rooted at an explicit home directory.
    pub fn with_home(home_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_lookup(|_| None, None);
        config.home_dir = home_dir.into();
        config
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn product_root(&self, product: &str) -> PathBuf {
        self.home_dir.join(product)
    }

    pub fn versions_dir(&self, product: &str) -> PathBuf {
        self.product_root(product).join(VERSIONS_DIR)
    }

    pub fn profiles_dir(&self, product: &str) -> PathBuf {
        self.product_root(product).join(PROFILES_DIR)
    }

    /// `<home>/<product>/versions/<version>[/<locale>]`. The product string is
    /// joined as-is.
    pub fn product_dir(&self, product: &str, version: &str, locale: Option<&str>) -> PathBuf {
        let dir = self.versions_dir(product).join(version);
        match locale {
            Some(locale) => dir.join(locale),
            None => dir,
        }
    }

    /// `<home>/<product>/profiles/<name>`. Path separators in `name` are not
    /// escaped.
    pub fn profile_dir(&self, product: &str, name: &str) -> PathBuf {
        self.profiles_dir(product).join(name)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.home_dir.join(STAGING_DIR)
    }

    pub fn url_template(&self, product: Product) -> &str {
        match product {
            Product::Firefox => &self.firefox_url,
            Product::Thunderbird => &self.thunderbird_url,
        }
    }

    pub fn source_url(&self, product: Product, version: &str, locale: Option<&str>) -> String {
        let locale = locale.unwrap_or(&self.locale);

        self.url_template(product)
            .replace("{base}", &self.mirror)
            .replace("{product}", product.as_str())
            .replace("{version}", version)
            .replace("{platform}", &self.platform)
            .replace("{locale}", locale)
            .replace("{ext}", archive_extension(version))
    }

    pub fn releases_url(&self, product: Product) -> String {
        format!("{}/{}/releases/", self.mirror, product.as_str())
    }
}

/// Mozilla switched Linux tarballs from bzip2 to xz with release 135.
fn archive_extension(version: &str) -> &'static str {
    let major: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();

    match major.parse::<u32>() {
        Ok(major) if major >= FIRST_XZ_RELEASE => "tar.xz",
        _ => "tar.bz2",
    }
}

fn default_platform() -> &'static str {
    match (env::consts::OS, env::consts::ARCH) {
        ("macos", _) => "mac",
        ("windows", "x86_64") | ("windows", "aarch64") => "win64",
        ("windows", _) => "win32",
        ("linux", "x86") => "linux-i686",
        ("linux", "aarch64") => "linux-aarch64",
        _ => "linux-x86_64",
    }
}
