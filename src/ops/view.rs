//! Derived views over the board: the visible task list, its header and
//! summary line, and board-wide counts. Everything here is a pure function of
//! the current board.

use crate::model::board::Board;
use crate::model::category::Task;
use crate::model::filter::StatusFilter;

/// Header shown when nothing narrows the list
pub const ALL_TASKS_TITLE: &str = "All Tasks";

/// Tasks currently on screen.
///
/// A selected category shows exactly its own tasks and ignores the status
/// filter. Otherwise tasks from every category are flattened in order and
/// narrowed by the filter.
pub fn visible_tasks(board: &Board) -> Vec<&Task> {
    if board.selected_category_id.is_some() {
        return board
            .selected_category()
            .map(|c| c.items.iter().collect())
            .unwrap_or_default();
    }

    let wanted = board.current_filter.completed();
    board
        .categories
        .iter()
        .flat_map(|c| c.items.iter())
        .filter(|t| wanted.is_none_or(|completed| t.completed == completed))
        .collect()
}

pub fn header_title(board: &Board) -> String {
    if board.selected_category_id.is_some() {
        return board
            .selected_category()
            .map(|c| c.title.clone())
            .unwrap_or_else(|| ALL_TASKS_TITLE.to_string());
    }
    match board.current_filter {
        StatusFilter::All => ALL_TASKS_TITLE.to_string(),
        filter => format!("{} Tasks", filter),
    }
}

/// One-line summary of the visible tasks.
///
/// `"X out of Y Tasks Completed"` for a selected category or the `All`
/// filter; `"N Task(s) Pending|Completed"` when filtered by status.
pub fn completion_summary(board: &Board) -> String {
    let tasks = visible_tasks(board);
    let total = tasks.len();

    if board.selected_category_id.is_some() || board.current_filter == StatusFilter::All {
        let completed = tasks.iter().filter(|t| t.completed).count();
        return format!("{} out of {} Tasks Completed", completed, total);
    }

    let noun = if total == 1 { "Task" } else { "Tasks" };
    format!("{} {} {}", total, noun, board.current_filter)
}

/// Board-wide task counts, independent of selection and filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn task_counts(board: &Board) -> TaskCounts {
    let mut counts = TaskCounts::default();
    for task in board.categories.iter().flat_map(|c| c.items.iter()) {
        counts.total += 1;
        if task.completed {
            counts.completed += 1;
        } else {
            counts.pending += 1;
        }
    }
    counts
}
