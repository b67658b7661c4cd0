use anyhow::Result;
use clap::Args;
use fxtbenv_core::environment;
use fxtbenv_core::{FxtbConfig, Product, console};

#[derive(Args, Debug)]
pub struct ConfigArgs {}

pub fn run(_args: ConfigArgs, config: &FxtbConfig) -> Result<()> {
    console::header("config", env!("CARGO_PKG_VERSION"));

    console::info("paths");
    console::info(&format!("  home: {}", config.home_dir().display()));
    console::info(&format!(
        "  initialized: {}",
        environment::is_initialized(config)
    ));
    for product in Product::ALL {
        console::info(&format!(
            "  {} versions: {}",
            product,
            config.versions_dir(product.as_str()).display()
        ));
        console::info(&format!(
            "  {} profiles: {}",
            product,
            config.profiles_dir(product.as_str()).display()
        ));
    }
    println!();

    console::info("download");
    console::info(&format!("  mirror: {}", config.mirror));
    console::info(&format!("  platform: {}", config.platform));
    console::info(&format!("  locale: {}", config.locale));
    for product in Product::ALL {
        console::info(&format!(
            "  {} url: {}",
            product,
            config.url_template(product)
        ));
    }
    println!();

    console::info("logging");
    console::info(&format!("  verbose: {}", config.verbose));

    Ok(())
}
