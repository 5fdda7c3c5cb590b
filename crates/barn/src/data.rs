//! Demo data source standing in for the host application's fetch layer.
//!
//! The UI itself performs no I/O: these loaders hand it fully-formed
//! domain values, decoded through the same serde shapes the host wire
//! format uses. Swap this module out to plug in a real backend.

use farmhand_types::{DashboardAdvice, MarketPrice, Profile, Task, WeeklyTasks};

const PROFILE_JSON: &str = r#"{
    "name": "Meera",
    "district": "Palakkad",
    "landSize": "1.5 acres",
    "crop": "Paddy",
    "soilType": "Laterite",
    "irrigation": "Canal"
}"#;

const TASKS_JSON: &str = r#"[
    { "id": "1", "text": "Water the east paddy field", "completed": false, "priority": "high" },
    { "id": "2", "text": "Order hybrid seed for next season", "completed": true, "priority": "low" },
    { "id": "3", "text": "Check soil moisture near the canal", "completed": false },
    { "id": "4", "text": "Repair the pump-house latch", "completed": false, "priority": "medium" },
    { "id": "5", "text": "Call the co-op about fertilizer stock", "completed": true, "priority": "high" }
]"#;

const WEEKLY_TASKS_JSON: &str = r#"{
    "day1": ["Weed the banana rows", "Top-dress paddy with urea"],
    "day2": ["Spray neem oil on the vegetable patch"],
    "day3": [],
    "day4": ["Harvest mature plantain bunches", "Clean the drip filters"],
    "day5": ["Take soil samples for the lab"]
}"#;

const ADVICE_JSON: &str = r#"{
    "title": "Monsoon week ahead",
    "advice": [
        "Clear drainage channels before Thursday's rain",
        "Hold off on foliar sprays until the wind drops",
        "Stake young banana plants against gusts"
    ]
}"#;

const MARKET_PRICES_JSON: &str = r#"[
    { "cropName": "Paddy", "price": "22.50", "unit": "per kg", "market": "Palakkad", "trend": "up" },
    { "cropName": "Banana (Nendran)", "price": "48.00", "unit": "per kg", "market": "Thrissur", "trend": "stable" },
    { "cropName": "Coconut", "price": "38.00", "unit": "per piece", "market": "Kozhikode", "trend": "down" }
]"#;

/// Today's task list, as the host would deliver it.
pub async fn load_tasks() -> Result<Vec<Task>, String> {
    serde_json::from_str(TASKS_JSON).map_err(|e| format!("Failed to decode tasks: {}", e))
}

/// Week-ahead preview. `Ok(None)` models a host with no schedule at all.
pub async fn load_weekly_tasks() -> Result<Option<WeeklyTasks>, String> {
    serde_json::from_str(WEEKLY_TASKS_JSON)
        .map(Some)
        .map_err(|e| format!("Failed to decode weekly tasks: {}", e))
}

pub fn profile() -> Profile {
    serde_json::from_str(PROFILE_JSON).expect("demo profile fixture is valid")
}

pub fn advice() -> DashboardAdvice {
    serde_json::from_str(ADVICE_JSON).expect("demo advice fixture is valid")
}

pub fn market_prices() -> Vec<MarketPrice> {
    serde_json::from_str(MARKET_PRICES_JSON).expect("demo market fixture is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixtures_decode() {
        let tasks = load_tasks().await.unwrap();
        assert_eq!(tasks.len(), 5);

        let weekly = load_weekly_tasks().await.unwrap().unwrap();
        let days: Vec<&str> = weekly.iter().map(|p| p.day.as_str()).collect();
        assert_eq!(days, ["day1", "day2", "day3", "day4", "day5"]);

        assert_eq!(profile().district, "Palakkad");
        assert_eq!(advice().advice.len(), 3);
        assert_eq!(market_prices().len(), 3);
    }
}
