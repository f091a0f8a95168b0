use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An amount of money. Every price in the catalog shares one implicit
/// currency, so only the amount is stored.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Price;

    #[test]
    fn test_price_ordering() {
        assert!(Price(699) < Price(799));
        assert_eq!(Price::default(), Price(0));
    }

    #[test]
    fn test_price_is_bare_number() {
        assert_eq!(serde_json::to_string(&Price(2699)).unwrap(), "2699");
        assert_eq!(serde_json::from_str::<Price>("799").unwrap(), Price(799));
        assert!(serde_json::from_str::<Price>("-1").is_err());
        assert_eq!(Price(1999).to_string(), "1999");
    }
}
