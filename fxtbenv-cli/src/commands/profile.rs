use anyhow::Result;
use clap::{Args, Subcommand};
use fxtbenv_core::{FxtbConfig, Product, console, operations};

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Create an empty named profile
    Create {
        #[arg(value_parser = super::parse_product)]
        product: Product,
        /// Profile name, e.g. 57:ja@work
        name: String,
    },
    /// List profiles of a product
    List {
        #[arg(value_parser = super::parse_product)]
        product: Product,
    },
}

pub fn run(args: ProfileArgs, config: &FxtbConfig) -> Result<()> {
    match args.action {
        ProfileAction::Create { product, name } => {
            operations::ensure_initialized(config);
            let path = operations::create_profile(config, product, &name)?;
            console::info(&format!("Created {} profile {}", product, path.display()));
        }
        ProfileAction::List { product } => {
            let profiles = operations::list_profiles(config, product)?;

            if profiles.is_empty() {
                console::info(&format!("No {} profiles.", product));
            } else {
                for profile in profiles {
                    console::info(&profile);
                }
            }
        }
    }

    Ok(())
}
