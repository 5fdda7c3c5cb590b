use serde::{Deserialize, Serialize};

/// An interactive to-do item owned by the host application.
///
/// The UI only ever flips `completed`; tasks are never created or
/// destroyed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Raw priority value; absent or unrecognized values read as medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl Task {
    pub fn priority_enum(&self) -> TaskPriority {
        self.priority
            .as_deref()
            .map(|p| p.parse().unwrap_or_default())
            .unwrap_or_default()
    }
}

/// Task priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse(), Ok(TaskPriority::High));
        assert_eq!("Medium".parse(), Ok(TaskPriority::Medium));
        assert_eq!("LOW".parse(), Ok(TaskPriority::Low));
        assert_eq!("urgent".parse::<TaskPriority>(), Err(()));
    }

    #[test]
    fn test_missing_priority_reads_medium() {
        let task: Task =
            serde_json::from_str(r#"{"id":"3","text":"Check soil","completed":false}"#).unwrap();
        assert_eq!(task.priority, None);
        assert_eq!(task.priority_enum(), TaskPriority::Medium);
    }

    #[test]
    fn test_malformed_priority_reads_medium() {
        let task = Task {
            id: "9".into(),
            text: "Spray".into(),
            completed: false,
            priority: Some("critical".into()),
        };
        assert_eq!(task.priority_enum(), TaskPriority::Medium);
    }

    #[test]
    fn test_priority_enum_from_wire_value() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","text":"Water field","completed":false,"priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(task.priority_enum(), TaskPriority::High);
    }
}
