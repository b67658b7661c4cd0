pub mod completions;
pub mod config;
pub mod init;
pub mod install;
pub mod list;
pub mod profile;

use fxtbenv_core::Product;

pub(crate) fn parse_product(value: &str) -> Result<Product, String> {
    Product::from_str(value)
        .ok_or_else(|| format!("unknown product '{value}' (expected firefox or thunderbird)"))
}
