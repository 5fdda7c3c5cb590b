use serde::{Deserialize, Serialize};

/// Direction of a market price since the last report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    #[default]
    Stable,
}

impl PriceTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTrend::Up => "up",
            PriceTrend::Down => "down",
            PriceTrend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PriceTrend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(PriceTrend::Up),
            "down" => Ok(PriceTrend::Down),
            "stable" => Ok(PriceTrend::Stable),
            _ => Err(()),
        }
    }
}

/// A mandi price quote for one crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub crop_name: String,
    pub price: String,
    pub unit: String,
    pub market: String,
    /// Raw trend value; unrecognized values read as stable.
    pub trend: String,
}

impl MarketPrice {
    pub fn trend_enum(&self) -> PriceTrend {
        self.trend.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_parse() {
        assert_eq!("up".parse(), Ok(PriceTrend::Up));
        assert_eq!("Down".parse(), Ok(PriceTrend::Down));
        assert_eq!("sideways".parse::<PriceTrend>(), Err(()));
    }

    #[test]
    fn test_malformed_trend_reads_stable() {
        let price = MarketPrice {
            crop_name: "Coconut".into(),
            price: "38".into(),
            unit: "per kg".into(),
            market: "Thrissur".into(),
            trend: "sideways".into(),
        };
        assert_eq!(price.trend_enum(), PriceTrend::Stable);
    }

    #[test]
    fn test_market_price_wire_shape() {
        let json = r#"{
            "cropName": "Paddy",
            "price": "22.50",
            "unit": "per kg",
            "market": "Palakkad",
            "trend": "up"
        }"#;
        let price: MarketPrice = serde_json::from_str(json).unwrap();
        assert_eq!(price.trend_enum(), PriceTrend::Up);
    }
}
