use std::fmt;

use serde::{Deserialize, Serialize};

/// Status filter applied to the task list when no category is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    /// Parse a filter name (case-insensitive)
    pub fn parse_filter(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "completed" | "done" => Some(StatusFilter::Completed),
            "pending" | "todo" => Some(StatusFilter::Pending),
            _ => None,
        }
    }

    /// Completion state matched by this filter; `None` matches everything
    pub fn completed(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some(true),
            StatusFilter::Pending => Some(false),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Completed => write!(f, "Completed"),
            StatusFilter::Pending => write!(f, "Pending"),
        }
    }
}
