use crate::model::board::Board;
use crate::model::category::{Category, Task, same_text};

/// Error type for task operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(i64),
    #[error("a task \"{0}\" already exists in this category")]
    Duplicate(String),
    #[error("no category selected")]
    NoCategorySelected,
}

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// Append a pending task to the selected category.
/// Returns the assigned ID.
pub fn add_task(board: &mut Board, description: String) -> Result<i64, TaskError> {
    let category_id = board
        .selected_category()
        .map(|c| c.id)
        .ok_or(TaskError::NoCategorySelected)?;

    let category = board
        .find_category(category_id)
        .ok_or(TaskError::NoCategorySelected)?;
    if description_taken(category, &description, None) {
        return Err(TaskError::Duplicate(description));
    }

    let id = board.ids.next_id();
    let category = board
        .find_category_mut(category_id)
        .ok_or(TaskError::NoCategorySelected)?;
    category.items.push(Task::new(id, description));
    Ok(id)
}

/// Change a task's description.
pub fn update_task_description(
    board: &mut Board,
    task_id: i64,
    new_description: String,
) -> Result<(), TaskError> {
    let category = board
        .task_owner_mut(task_id)
        .ok_or(TaskError::NotFound(task_id))?;
    if description_taken(category, &new_description, Some(task_id)) {
        return Err(TaskError::Duplicate(new_description));
    }
    let task = category
        .find_task_mut(task_id)
        .ok_or(TaskError::NotFound(task_id))?;
    task.description = new_description;
    Ok(())
}

/// Remove a task from its category. Returns the removed task.
pub fn delete_task(board: &mut Board, task_id: i64) -> Result<Task, TaskError> {
    let category = board
        .task_owner_mut(task_id)
        .ok_or(TaskError::NotFound(task_id))?;
    let idx = category
        .items
        .iter()
        .position(|t| t.id == task_id)
        .ok_or(TaskError::NotFound(task_id))?;
    Ok(category.items.remove(idx))
}

/// Flip a task's completion. Returns the new state, or `None` when no task
/// has this ID (nothing changes).
pub fn toggle_task(board: &mut Board, task_id: i64) -> Option<bool> {
    let task = board
        .categories
        .iter_mut()
        .find_map(|c| c.find_task_mut(task_id))?;
    task.completed = !task.completed;
    Some(task.completed)
}

/// Find a task by ID anywhere on the board.
pub fn find_task(board: &Board, task_id: i64) -> Option<&Task> {
    board.categories.iter().find_map(|c| c.find_task(task_id))
}

fn description_taken(category: &Category, description: &str, except: Option<i64>) -> bool {
    category
        .items
        .iter()
        .any(|t| Some(t.id) != except && same_text(&t.description, description))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
