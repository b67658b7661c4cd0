use anyhow::Result;
use clap::Args;
use fxtbenv_core::{FxtbConfig, Product, console, operations};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list this product (firefox or thunderbird)
    #[arg(value_parser = super::parse_product)]
    pub product: Option<Product>,
}

pub fn run(args: ListArgs, config: &FxtbConfig) -> Result<()> {
    let products = match args.product {
        Some(product) => vec![product],
        None => Product::ALL.to_vec(),
    };

    for product in products {
        let versions = operations::list_installed(config, product)?;

        if versions.is_empty() {
            console::info(&format!("No {} versions installed.", product));
            continue;
        }

        console::info(&format!("Installed {} versions:", product));
        for version in versions {
            console::info(&format!("  {}", version));
        }
    }

    Ok(())
}
