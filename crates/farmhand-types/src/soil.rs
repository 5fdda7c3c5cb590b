use serde::{Deserialize, Serialize};

/// Laboratory soil measurements, kept as the strings the lab report
/// provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilData {
    pub ph: String,
    pub ec: String,
    pub oc: String,
    pub soil_type: String,
    pub n: String,
    pub p: String,
    pub k: String,
    pub ca: String,
    pub mg: String,
    pub s: String,
}

/// How well a crop fits the analyzed soil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Suitability {
    Best,
    Excellent,
    #[default]
    Good,
}

impl Suitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Best => "Best",
            Suitability::Excellent => "Excellent",
            Suitability::Good => "Good",
        }
    }

    /// Rank for ordering recommendations, best first.
    pub fn rank(&self) -> u8 {
        match self {
            Suitability::Best => 0,
            Suitability::Excellent => 1,
            Suitability::Good => 2,
        }
    }
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Suitability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best" => Ok(Suitability::Best),
            "excellent" => Ok(Suitability::Excellent),
            "good" => Ok(Suitability::Good),
            _ => Err(()),
        }
    }
}

/// A crop suggestion produced from a soil analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop_name: String,
    /// Raw suitability value; unrecognized values read as Good.
    pub suitability: String,
    #[serde(rename = "yield")]
    pub yield_estimate: String,
    pub duration: String,
    pub reasons: Vec<String>,
    pub planting_tips: Vec<String>,
}

impl CropRecommendation {
    pub fn suitability_enum(&self) -> Suitability {
        self.suitability.parse().unwrap_or_default()
    }
}

/// One saved soil analysis with its recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub date: String,
    pub soil_data: SoilData,
    pub recommendations: Vec<CropRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_parse() {
        assert_eq!("Best".parse(), Ok(Suitability::Best));
        assert_eq!("excellent".parse(), Ok(Suitability::Excellent));
        assert_eq!("fair".parse::<Suitability>(), Err(()));
    }

    #[test]
    fn test_suitability_rank_orders_best_first() {
        assert!(Suitability::Best.rank() < Suitability::Excellent.rank());
        assert!(Suitability::Excellent.rank() < Suitability::Good.rank());
    }

    #[test]
    fn test_recommendation_wire_shape() {
        let json = r#"{
            "cropName": "Banana",
            "suitability": "Excellent",
            "yield": "20 t/acre",
            "duration": "11 months",
            "reasons": ["Good potassium level"],
            "plantingTips": ["Plant at the onset of monsoon"]
        }"#;
        let rec: CropRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.suitability_enum(), Suitability::Excellent);
        assert_eq!(rec.yield_estimate, "20 t/acre");
    }

    #[test]
    fn test_malformed_suitability_reads_good() {
        let rec = CropRecommendation {
            crop_name: "Tapioca".into(),
            suitability: "Superb".into(),
            yield_estimate: "12 t/acre".into(),
            duration: "9 months".into(),
            reasons: vec![],
            planting_tips: vec![],
        };
        assert_eq!(rec.suitability_enum(), Suitability::Good);
    }
}
