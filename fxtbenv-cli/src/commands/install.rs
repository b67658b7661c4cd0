use anyhow::Result;
use clap::{Args, Subcommand};
use fxtbenv_core::{FxtbConfig, HttpArchiveFetcher, Product, console, operations};

#[derive(Args, Debug)]
pub struct InstallArgs {
    #[command(subcommand)]
    pub product: InstallProduct,
}

#[derive(Subcommand, Debug)]
pub enum InstallProduct {
    /// Install Firefox
    #[command(visible_alias = "fx")]
    Firefox(ProductArgs),
    /// Install Thunderbird
    #[command(visible_alias = "tb")]
    Thunderbird(ProductArgs),
}

#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Release version, e.g. 57.0 or 115.0esr
    pub version: Option<String>,
    /// Print the remote releases listing instead of installing
    #[arg(short = 'l', long = "list")]
    pub list: bool,
    /// Locale of the build to download
    #[arg(long)]
    pub locale: Option<String>,
    /// Replace an existing install of the same version
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

pub fn run(args: InstallArgs, config: &FxtbConfig) -> Result<()> {
    let (product, args) = match args.product {
        InstallProduct::Firefox(args) => (Product::Firefox, args),
        InstallProduct::Thunderbird(args) => (Product::Thunderbird, args),
    };

    if args.list {
        let fetcher = HttpArchiveFetcher::new()?;
        let listing = operations::release_listing(config, &fetcher, product)?;
        console::info(&listing);
        return Ok(());
    }

    let Some(version) = args.version.filter(|v| !v.trim().is_empty()) else {
        anyhow::bail!(
            "Specify {} version for install {} subcommand",
            product.display_name(),
            product
        );
    };

    console::header("install", env!("CARGO_PKG_VERSION"));

    operations::ensure_initialized(config);

    let fetcher = HttpArchiveFetcher::new()?;
    let options = operations::InstallOptions {
        product,
        version,
        locale: args.locale,
        force: args.force,
    };
    operations::install(config, &fetcher, &options)?;

    Ok(())
}
