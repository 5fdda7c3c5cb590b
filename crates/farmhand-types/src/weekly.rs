use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One day of the week-ahead preview.
///
/// Plain task descriptions only: no identity, no completion state.
/// These are read-only preview items, not interactive [`crate::Task`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: String,
    pub tasks: Vec<String>,
}

/// Week-ahead task preview keyed by day.
///
/// Stored as an explicitly ordered sequence of day plans so display
/// order never depends on map iteration order. On the wire this is the
/// JSON object the host emits (`{"day1": [...], "day2": [...]}`); entry
/// order in the document is preserved on deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyTasks {
    days: Vec<DayPlan>,
}

impl WeeklyTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day at the end of the display order.
    pub fn push(&mut self, day: impl Into<String>, tasks: Vec<String>) {
        self.days.push(DayPlan {
            day: day.into(),
            tasks,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter()
    }

    pub fn get(&self, day: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|plan| plan.day == day)
            .map(|plan| plan.tasks.as_slice())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for WeeklyTasks {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            days: iter
                .into_iter()
                .map(|(day, tasks)| DayPlan { day, tasks })
                .collect(),
        }
    }
}

impl Serialize for WeeklyTasks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for plan in &self.days {
            map.serialize_entry(&plan.day, &plan.tasks)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklyTasks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeeklyVisitor;

        impl<'de> Visitor<'de> for WeeklyVisitor {
            type Value = WeeklyTasks;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of day keys to task lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut weekly = WeeklyTasks::new();
                // Map entries arrive in document order.
                while let Some((day, tasks)) = access.next_entry::<String, Vec<String>>()? {
                    weekly.push(day, tasks);
                }
                Ok(weekly)
            }
        }

        deserializer.deserialize_map(WeeklyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_entry_order() {
        let json = r#"{"day3":["Weed paddy"],"day1":["Water field"],"day2":[]}"#;
        let weekly: WeeklyTasks = serde_json::from_str(json).unwrap();
        let days: Vec<&str> = weekly.iter().map(|p| p.day.as_str()).collect();
        assert_eq!(days, ["day3", "day1", "day2"]);
    }

    #[test]
    fn test_roundtrip() {
        let mut weekly = WeeklyTasks::new();
        weekly.push("day1", vec!["Water field".into(), "Order seed".into()]);
        weekly.push("day2", vec![]);
        let json = serde_json::to_string(&weekly).unwrap();
        assert_eq!(json, r#"{"day1":["Water field","Order seed"],"day2":[]}"#);
        let back: WeeklyTasks = serde_json::from_str(&json).unwrap();
        assert_eq!(back, weekly);
    }

    #[test]
    fn test_get_and_empty() {
        let mut weekly = WeeklyTasks::new();
        assert!(weekly.is_empty());
        weekly.push("day1", vec!["Mulch banana rows".into()]);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly.get("day1"), Some(&["Mulch banana rows".to_string()][..]));
        assert_eq!(weekly.get("day9"), None);
    }

    #[test]
    fn test_empty_map_is_empty_not_absent() {
        let weekly: WeeklyTasks = serde_json::from_str("{}").unwrap();
        assert!(weekly.is_empty());
        assert_eq!(weekly.len(), 0);
    }
}
