use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Firefox,
    Thunderbird,
}

impl Product {
    pub const ALL: [Product; 2] = [Product::Firefox, Product::Thunderbird];

    /// Directory and URL segment for the product.
    pub fn as_str(self) -> &'static str {
        match self {
            Product::Firefox => "firefox",
            Product::Thunderbird => "thunderbird",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Product::Firefox => "Firefox",
            Product::Thunderbird => "Thunderbird",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "firefox" | "fx" => Some(Product::Firefox),
            "thunderbird" | "tb" => Some(Product::Thunderbird),
            _ => None,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!(Product::from_str("firefox"), Some(Product::Firefox));
        assert_eq!(Product::from_str("FX"), Some(Product::Firefox));
        assert_eq!(Product::from_str(" tb "), Some(Product::Thunderbird));
        assert_eq!(Product::from_str("seamonkey"), None);
    }
}
