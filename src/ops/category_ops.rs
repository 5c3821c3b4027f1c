use crate::model::board::Board;
use crate::model::category::{Category, Task, same_text};
use crate::model::filter::StatusFilter;

/// Title reported for a task that belongs to no category
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Error type for category operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("a category titled \"{0}\" already exists")]
    Duplicate(String),
    #[error("category not found: {0}")]
    NotFound(i64),
    #[error("task \"{0}\" is listed more than once")]
    DuplicateTask(String),
}

/// Add a category with one pending task per description. Descriptions that
/// repeat (ignoring case) reject the whole add.
/// Returns the new category's ID.
pub fn add_category(
    board: &mut Board,
    title: String,
    descriptions: Vec<String>,
) -> Result<i64, CategoryError> {
    if title_taken(board, &title, None) {
        return Err(CategoryError::Duplicate(title));
    }
    for (i, description) in descriptions.iter().enumerate() {
        if descriptions[..i].iter().any(|d| same_text(d, description)) {
            return Err(CategoryError::DuplicateTask(description.clone()));
        }
    }

    let id = board.ids.next_id();
    let mut category = Category::new(id, title);
    for description in descriptions {
        category
            .items
            .push(Task::new(board.ids.next_id(), description));
    }
    board.categories.push(category);
    Ok(id)
}

/// Rename a category. Matching its own current title in another case is allowed.
pub fn update_category_title(
    board: &mut Board,
    category_id: i64,
    new_title: String,
) -> Result<(), CategoryError> {
    if board.find_category(category_id).is_none() {
        return Err(CategoryError::NotFound(category_id));
    }
    if title_taken(board, &new_title, Some(category_id)) {
        return Err(CategoryError::Duplicate(new_title));
    }
    if let Some(category) = board.find_category_mut(category_id) {
        category.title = new_title;
    }
    Ok(())
}

/// Remove a category and all of its tasks; clears the selection if it pointed here.
pub fn delete_category(board: &mut Board, category_id: i64) -> Result<Category, CategoryError> {
    let idx = board
        .categories
        .iter()
        .position(|c| c.id == category_id)
        .ok_or(CategoryError::NotFound(category_id))?;

    let removed = board.categories.remove(idx);
    if board.selected_category_id == Some(category_id) {
        board.selected_category_id = None;
    }
    Ok(removed)
}

/// Focus a category. Resets the status filter to `All`.
pub fn select_category(board: &mut Board, category_id: i64) -> Result<(), CategoryError> {
    if board.find_category(category_id).is_none() {
        return Err(CategoryError::NotFound(category_id));
    }
    board.selected_category_id = Some(category_id);
    board.current_filter = StatusFilter::All;
    Ok(())
}

/// Drop the selection, leaving the status filter as it is.
pub fn clear_selection(board: &mut Board) {
    board.selected_category_id = None;
}

/// Switch the status filter. Clears the selection so the filter takes effect.
pub fn set_status_filter(board: &mut Board, filter: StatusFilter) {
    board.current_filter = filter;
    board.selected_category_id = None;
}

/// Title of the category owning `task_id`, or [`UNKNOWN_CATEGORY`].
pub fn category_name_for_task(board: &Board, task_id: i64) -> &str {
    board
        .task_owner(task_id)
        .map(|c| c.title.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

fn title_taken(board: &Board, title: &str, except: Option<i64>) -> bool {
    board
        .categories
        .iter()
        .any(|c| Some(c.id) != except && same_text(&c.title, title))
}
