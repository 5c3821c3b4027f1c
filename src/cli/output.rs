use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::model::board::Board;
use crate::model::category::{Category, Task};
use crate::ops::category_ops::category_name_for_task;
use crate::ops::view::{self, TaskCounts};

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

pub const CATEGORY_ADDED: &str = "Category added successfully.";
pub const CATEGORY_RENAMED: &str = "Category title updated successfully.";
pub const CATEGORY_DELETED: &str = "Category deleted successfully.";
pub const TASK_ADDED: &str = "Task added successfully.";
pub const TASK_UPDATED: &str = "Task updated successfully.";
pub const TASK_DELETED: &str = "Task deleted successfully.";

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub category: String,
}

#[derive(Serialize)]
pub struct ListJson {
    pub title: String,
    pub summary: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CategoryJson {
    pub id: i64,
    pub title: String,
    pub selected: bool,
    pub total: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct CountsJson {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Serialize)]
pub struct OverviewJson {
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<i64>,
    pub counts: CountsJson,
    pub categories: Vec<CategoryJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(board: &Board, task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        description: task.description.clone(),
        completed: task.completed,
        category: category_name_for_task(board, task.id).to_string(),
    }
}

pub fn category_to_json(board: &Board, category: &Category) -> CategoryJson {
    CategoryJson {
        id: category.id,
        title: category.title.clone(),
        selected: board.selected_category_id == Some(category.id),
        total: category.items.len(),
        completed: category.completed_count(),
    }
}

pub fn counts_to_json(counts: TaskCounts) -> CountsJson {
    CountsJson {
        total: counts.total,
        completed: counts.completed,
        pending: counts.pending,
    }
}

pub fn list_to_json(board: &Board) -> ListJson {
    ListJson {
        title: view::header_title(board),
        summary: view::completion_summary(board),
        tasks: view::visible_tasks(board)
            .into_iter()
            .map(|t| task_to_json(board, t))
            .collect(),
    }
}

pub fn overview_to_json(board: &Board) -> OverviewJson {
    OverviewJson {
        filter: board.current_filter.to_string(),
        selected_category: board.selected_category_id,
        counts: counts_to_json(view::task_counts(board)),
        categories: board
            .categories
            .iter()
            .map(|c| category_to_json(board, c))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary, optionally tagged with its category
pub fn format_task_line(task: &Task, category: Option<&str>) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    match category {
        Some(title) => format!("[{}] {} {} ({})", check, task.id, task.description, title),
        None => format!("[{}] {} {}", check, task.id, task.description),
    }
}

/// Header, visible tasks, and summary line. Tasks carry their category name
/// unless a single category is selected.
pub fn format_list_view(board: &Board) -> Vec<String> {
    let mut lines = vec![view::header_title(board), String::new()];

    let tasks = view::visible_tasks(board);
    if tasks.is_empty() {
        lines.push("(no tasks)".to_string());
    }
    let show_category = board.selected_category_id.is_none();
    for task in tasks {
        let category = show_category.then(|| category_name_for_task(board, task.id));
        lines.push(format_task_line(task, category));
    }

    lines.push(String::new());
    lines.push(view::completion_summary(board));
    lines
}

/// One row per category: selection marker, ID, padded title, progress.
pub fn format_category_table(board: &Board) -> Vec<String> {
    let title_w = board
        .categories
        .iter()
        .map(|c| c.title.width())
        .max()
        .unwrap_or(0);

    board
        .categories
        .iter()
        .map(|c| {
            let marker = if board.selected_category_id == Some(c.id) {
                '*'
            } else {
                ' '
            };
            format!(
                "{} {}  {}  {}/{} done",
                marker,
                c.id,
                pad_to_width(&c.title, title_w),
                c.completed_count(),
                c.items.len()
            )
        })
        .collect()
}

pub fn format_counts(counts: TaskCounts) -> String {
    format!(
        "{} tasks: {} completed, {} pending",
        counts.total, counts.completed, counts.pending
    )
}

/// Pad `s` with spaces to `width` display columns
fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}
