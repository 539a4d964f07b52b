use serde::{Deserialize, Serialize};

/// Identifies one fitted response curve: a product advertised on a platform.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct ChannelKey {
    pub product: String,
    pub platform: String,
}

impl ChannelKey {
    pub fn new(product: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            platform: platform.into(),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl std::fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} in {}", self.product, self.platform)
    }
}
