use crate::environment::{self, InitSummary};
use crate::{FxtbConfig, console};
use tracing::info;

/// Runs the initializer unless the home directory already holds the full
/// product skeleton. Returns the summary of that run, or `None` when nothing
/// had to be done.
pub fn ensure_initialized(config: &FxtbConfig) -> Option<InitSummary> {
    if environment::is_initialized(config) && environment::has_skeleton(config) {
        return None;
    }

    info!("initializing {}", config.home_dir().display());
    console::step(&format!(
        "Initializing {}...",
        config.home_dir().display()
    ));

    Some(environment::initialize(config))
}
