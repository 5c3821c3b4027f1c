use chrono::Utc;

use super::category::Category;

/// Hands out creation-time ids: the current Unix time in milliseconds, bumped
/// past the last issued id so that ids stay unique and strictly increasing.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Seed the generator past every id already present in `categories`.
    pub fn seeded(categories: &[Category]) -> Self {
        let last = categories
            .iter()
            .flat_map(|c| std::iter::once(c.id).chain(c.items.iter().map(|t| t.id)))
            .max()
            .unwrap_or(0);
        IdGenerator { last }
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Issue an id for the given clock reading
    pub fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }

    pub fn last_issued(&self) -> i64 {
        self.last
    }
}
