use serde::{Deserialize, Serialize};

/// A titled bundle of advisory lines for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardAdvice {
    pub title: String,
    pub advice: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_roundtrip() {
        let advice = DashboardAdvice {
            title: "Monsoon prep".into(),
            advice: vec!["Clear drainage channels".into(), "Stake young plants".into()],
        };
        let json = serde_json::to_string(&advice).unwrap();
        let back: DashboardAdvice = serde_json::from_str(&json).unwrap();
        assert_eq!(back.advice.len(), 2);
        assert_eq!(back.title, "Monsoon prep");
    }
}
