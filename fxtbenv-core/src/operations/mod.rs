pub mod init;
pub mod install;
pub mod list;
pub mod profile;

pub use init::ensure_initialized;
pub use install::{InstallOptions, InstallOutcome, install};
pub use list::{list_installed, release_listing};
pub use profile::{create_profile, list_profiles};
