use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

pub const TASKS_DOCUMENT: &str = "tasks";
pub const UPDATES_DOCUMENT: &str = "updates";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task: String,
    pub added: DateTime<Utc>
}

/// Developer tasks in the order they were added. Users refer to them by 1-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, poise::ChoiceParameter)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    #[name = "feature"]
    Feature,
    #[name = "fix"]
    Fix
}

impl ChangeType {
    pub fn label(self) -> &'static str {
        match self {
            ChangeType::Feature => "feature",
            ChangeType::Fix => "fix"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub feature: String
}

fn changes_of_type(changes: &[Change], change_type: ChangeType) -> Vec<&str> {
    changes.iter()
        .filter(|o| o.change_type == change_type)
        .map(|o| o.feature.as_str())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUpdate {
    pub features: Vec<Change>
}

impl PendingUpdate {
    pub fn of_type(&self, change_type: ChangeType) -> Vec<&str> {
        changes_of_type(&self.features, change_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub version: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub features: Vec<Change>
}

impl Update {
    pub fn of_type(&self, change_type: ChangeType) -> Vec<&str> {
        changes_of_type(&self.features, change_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLog {
    #[serde(default)]
    pub pending: Option<PendingUpdate>,
    /// Oldest first.
    #[serde(default)]
    pub released: Vec<Update>
}

impl UpdateLog {
    pub fn recent(&self) -> Option<&Update> {
        self.released.last()
    }
}
