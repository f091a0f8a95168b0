use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::schemas::money::Price;

/// Page-open benchmark score. Higher is faster; the score has no unit, so it
/// only supports comparison.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct OpenSpeed(pub u32);

impl Display for OpenSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CPU {
    pub name: &'static str,
    pub year: u16,
    pub open_speed: OpenSpeed,
    pub price: Price,
}

#[cfg(test)]
mod tests {
    use super::{OpenSpeed, CPU};
    use crate::schemas::money::Price;

    #[test]
    fn test_cpu_json_shape() {
        let cpu = CPU {
            name: "Ryzen 5 5600",
            year: 2020,
            open_speed: OpenSpeed(620),
            price: Price(799),
        };
        assert_eq!(
            serde_json::to_value(&cpu).unwrap(),
            serde_json::json!({
                "name": "Ryzen 5 5600",
                "year": 2020,
                "openSpeed": 620,
                "price": 799,
            })
        );
    }

    #[test]
    fn test_open_speed_compares() {
        assert!(OpenSpeed(980) > OpenSpeed(920));
        assert_eq!(OpenSpeed(580).to_string(), "580");
    }
}
