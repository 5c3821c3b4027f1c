use serde::{Deserialize, Serialize};

/// A single task owned by a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique across every category
    pub id: i64,
    /// Task text, unique (case-insensitive) within its category
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: i64, description: String) -> Self {
        Task {
            id,
            description,
            completed: false,
        }
    }
}

/// A named grouping owning an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Category title, unique (case-insensitive) across the board
    pub title: String,
    /// Tasks in insertion order
    #[serde(default)]
    pub items: Vec<Task>,
}

impl Category {
    pub fn new(id: i64, title: String) -> Self {
        Category {
            id,
            title,
            items: Vec::new(),
        }
    }

    pub fn find_task(&self, task_id: i64) -> Option<&Task> {
        self.items.iter().find(|t| t.id == task_id)
    }

    pub fn find_task_mut(&mut self, task_id: i64) -> Option<&mut Task> {
        self.items.iter_mut().find(|t| t.id == task_id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.items.len() - self.completed_count()
    }
}

/// Case-insensitive equality used for title and description uniqueness.
pub fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
