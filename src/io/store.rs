use tracing::{debug, error, warn};

use crate::io::storage::KeyValueStore;
use crate::model::board::{Board, ViewState};
use crate::model::category::Category;

/// Slot holding the persisted selection and status filter
pub const VIEW_STATE_KEY: &str = "viewState";

/// The board plus the storage it is loaded from and saved to.
///
/// Every change goes through [`Store::update`], which persists the category
/// list whenever the operation changed it. Storage failures are logged and
/// never surfaced to the caller.
#[derive(Debug)]
pub struct Store<S: KeyValueStore> {
    board: Board,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> Store<S> {
    /// Load the board from `storage`. Missing or malformed data yields an
    /// empty category list.
    pub fn open(mut storage: S, key: &str) -> Self {
        let categories = load_categories(&mut storage, key);
        let mut board = Board::from_categories(categories);
        if let Some(state) = load_view_state(&storage) {
            board.apply_view_state(state);
        }
        Store {
            board,
            storage,
            key: key.to_string(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Run an operation against the board, then write back whatever it
    /// changed: the category list to its slot, the view to `viewState`.
    pub fn update<T>(&mut self, op: impl FnOnce(&mut Board) -> T) -> T {
        let categories_before = self.board.categories.clone();
        let view_before = self.board.view_state();

        let result = op(&mut self.board);

        if self.board.categories != categories_before {
            self.save_categories();
        }
        if self.board.view_state() != view_before {
            self.save_view_state();
        }
        result
    }

    fn save_categories(&mut self) {
        let json = match serde_json::to_string(&self.board.categories) {
            Ok(json) => json,
            Err(e) => {
                error!(key = %self.key, error = %e, "could not serialize categories");
                return;
            }
        };
        match self.storage.set(&self.key, &json) {
            Ok(()) => debug!(
                key = %self.key,
                categories = self.board.categories.len(),
                "saved categories"
            ),
            Err(e) => error!(key = %self.key, error = %e, "could not save categories"),
        }
    }

    fn save_view_state(&mut self) {
        let state = self.board.view_state();
        let result = serde_json::to_string(&state)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(VIEW_STATE_KEY, &json)
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            error!(error = %e, "could not save view state");
        }
    }
}

fn load_categories<S: KeyValueStore>(storage: &mut S, key: &str) -> Vec<Category> {
    let text = match storage.get(key) {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => {
            debug!(key, "no stored categories");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "could not read stored categories; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Category>>(&text) {
        Ok(categories) => {
            debug!(key, categories = categories.len(), "loaded categories");
            categories
        }
        Err(e) => {
            warn!(key, error = %e, "stored categories are malformed; starting empty");
            if let Err(e) = storage.backup(key) {
                warn!(key, error = %e, "could not back up malformed categories");
            }
            Vec::new()
        }
    }
}

fn load_view_state<S: KeyValueStore>(storage: &S) -> Option<ViewState> {
    let text = match storage.get(VIEW_STATE_KEY) {
        Ok(text) => text?,
        Err(e) => {
            warn!(error = %e, "could not read stored view state; ignoring");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(error = %e, "stored view state is malformed; ignoring");
            None
        }
    }
}
