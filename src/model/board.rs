use serde::{Deserialize, Serialize};

use super::category::Category;
use super::filter::StatusFilter;
use super::ids::IdGenerator;

/// In-memory store state: the category list plus the current view
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Categories in insertion order
    pub categories: Vec<Category>,
    /// Focused category; overrides the status filter when set
    pub selected_category_id: Option<i64>,
    pub current_filter: StatusFilter,
    pub ids: IdGenerator,
}

/// Persisted selection and filter (written to the `viewState` slot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(default)]
    pub selected_category_id: Option<i64>,
    #[serde(default)]
    pub current_filter: StatusFilter,
}

impl Board {
    /// Build a board over loaded categories, with no selection and filter `All`.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let ids = IdGenerator::seeded(&categories);
        Board {
            categories,
            selected_category_id: None,
            current_filter: StatusFilter::All,
            ids,
        }
    }

    pub fn find_category(&self, category_id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn find_category_mut(&mut self, category_id: i64) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    /// The selected category, if the selection points at one
    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category_id
            .and_then(|id| self.find_category(id))
    }

    /// The category containing the given task id
    pub fn task_owner(&self, task_id: i64) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.find_task(task_id).is_some())
    }

    pub fn task_owner_mut(&mut self, task_id: i64) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| c.find_task(task_id).is_some())
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            selected_category_id: self.selected_category_id,
            current_filter: self.current_filter,
        }
    }

    /// Restore a saved view. A selection naming a missing category is dropped.
    pub fn apply_view_state(&mut self, state: ViewState) {
        self.current_filter = state.current_filter;
        self.selected_category_id = state
            .selected_category_id
            .filter(|id| self.find_category(*id).is_some());
    }
}
