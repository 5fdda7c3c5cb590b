use serde::{Deserialize, Serialize};

/// Farmer profile captured during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub district: String,
    pub land_size: String,
    pub crop: String,
    pub soil_type: String,
    pub irrigation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_shape() {
        let json = r#"{
            "name": "Meera",
            "district": "Palakkad",
            "landSize": "1.5 acres",
            "crop": "Paddy",
            "soilType": "Laterite",
            "irrigation": "Canal"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.land_size, "1.5 acres");
        assert_eq!(profile.email, None);
    }
}
