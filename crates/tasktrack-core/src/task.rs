use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

/// Identity of a task inside one controller. Assigned from a counter,
/// never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("expected a task id, got nothing"));
        }
        let raw = trimmed
            .parse::<u64>()
            .with_context(|| format!("invalid task id: {trimmed}"))?;
        Ok(Self(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Builds a task from raw user input. Returns `None` when the input is
    /// blank once trimmed.
    pub fn from_input(id: TaskId, input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId};

    #[test]
    fn from_input_trims_and_starts_pending() {
        let task = Task::from_input(TaskId::new(7), "  buy milk \t").expect("non-blank input");
        assert_eq!(task.id, TaskId::new(7));
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn from_input_rejects_blank() {
        assert!(Task::from_input(TaskId::new(1), "").is_none());
        assert!(Task::from_input(TaskId::new(1), " \n\t ").is_none());
    }

    #[test]
    fn task_id_parses_decimal_only() {
        assert_eq!(" 42 ".parse::<TaskId>().expect("parse"), TaskId::new(42));
        assert!("".parse::<TaskId>().is_err());
        assert!("-1".parse::<TaskId>().is_err());
        assert!("abc".parse::<TaskId>().is_err());
    }

    #[test]
    fn serializes_with_bare_numeric_id() {
        let task = Task::from_input(TaskId::new(3), "water plants").expect("task");
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "text": "water plants", "completed": false })
        );
    }
}
