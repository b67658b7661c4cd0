//! Preference files that lock the auto-update machinery of an install.
//!
//! `defaults/pref/autoconfig.js` points the application at `autoconfig.cfg`,
//! which in turn holds the locked preferences.

use crate::environment::create_private_dir_all;
use crate::{FxtbError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const POINTER_FILE: &str = "autoconfig.js";
pub const BODY_FILE: &str = "autoconfig.cfg";

const LINE_ENDING: &str = "\r\n";

const POINTER_LINES: &[&str] = &[
    "pref(\"general.config.filename\", \"autoconfig.cfg\");",
    "pref(\"general.config.vendor\", \"autoconfig\");",
    "pref(\"general.config.obscure_value\", 0);",
];

const BODY_LINES: &[&str] = &[
    "// Disable auto update feature",
    "lockPref('app.update.auto', false);",
    "lockPref('app.update.enabled', false);",
    "lockPref('app.update.url', '');",
    "lockPref('app.update.url.override', '');",
    "lockPref('browser.search.update', false);",
];

pub fn pointer_path(install_dir: &Path) -> PathBuf {
    install_dir.join("defaults").join("pref").join(POINTER_FILE)
}

pub fn body_path(install_dir: &Path) -> PathBuf {
    install_dir.join(BODY_FILE)
}

pub fn pointer_contents() -> String {
    POINTER_LINES.join(LINE_ENDING)
}

pub fn body_contents() -> String {
    BODY_LINES.join(LINE_ENDING)
}

pub fn write_pointer(install_dir: &Path) -> Result<PathBuf> {
    let path = pointer_path(install_dir);

    if let Some(parent) = path.parent() {
        create_private_dir_all(parent)?;
    }

    write_private_file(&path, &pointer_contents())?;
    Ok(path)
}

pub fn write_body(install_dir: &Path) -> Result<PathBuf> {
    let path = body_path(install_dir);
    write_private_file(&path, &body_contents())?;
    Ok(path)
}

fn write_private_file(path: &Path, contents: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let to_error = |source| FxtbError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;

    debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_pointer_into_existing_pref_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("defaults/pref")).unwrap();

        let path = write_pointer(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("defaults/pref/autoconfig.js"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.is_empty());
        assert!(written.starts_with("pref(\"general.config.filename\", \"autoconfig.cfg\");\r\n"));
    }

    #[test]
    fn test_write_pointer_creates_pref_dir() {
        let temp = TempDir::new().unwrap();
        let path = write_pointer(temp.path()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_write_body() {
        let temp = TempDir::new().unwrap();

        let path = write_body(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("autoconfig.cfg"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 6);
        assert!(written.contains("lockPref('app.update.enabled', false);"));
        assert!(!written.ends_with("\r\n"));
    }

    #[test]
    fn test_rewrite_truncates_previous_contents() {
        let temp = TempDir::new().unwrap();
        let path = body_path(temp.path());
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_body(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), body_contents());
    }

    #[test]
    fn test_write_body_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let result = write_body(&temp.path().join("missing"));
        assert!(matches!(result, Err(FxtbError::WriteFile { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_files_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = write_body(temp.path()).unwrap();
        let mode = fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
