use shared::domain::{Category, Product, User};
use storage::Storage;
use tracing::debug;

use crate::{
    derive::derive,
    join::{join, JoinedProduct},
    presentation::is_displayable,
    view_state::{Intent, ViewState},
};

/// Owns the joined catalog and the current [`ViewState`]; every dispatched
/// intent re-derives the rows from scratch.
#[derive(Debug, Clone)]
pub struct CatalogController {
    users: Vec<User>,
    categories: Vec<Category>,
    joined: Vec<JoinedProduct>,
    state: ViewState,
    rows: Vec<JoinedProduct>,
}

impl CatalogController {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: &[Product]) -> Self {
        let joined = join(&users, &categories, products);
        let state = ViewState::default();
        let rows = derive(&joined, &state);
        Self {
            users,
            categories,
            joined,
            state,
            rows,
        }
    }

    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(
            storage.users().to_vec(),
            storage.categories().to_vec(),
            storage.products(),
        )
    }

    /// Applies `intent` and returns how many rows are now displayable.
    pub fn dispatch(&mut self, intent: Intent) -> usize {
        let intent_name = intent.name();
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(intent);
        self.rows = derive(&self.joined, &self.state);

        let visible = self.visible_count();
        debug!(
            intent = intent_name,
            rows = self.rows.len(),
            visible,
            "applied view intent"
        );
        visible
    }

    pub fn dispatch_all(&mut self, intents: impl IntoIterator<Item = Intent>) -> usize {
        intents
            .into_iter()
            .fold(self.visible_count(), |_, intent| self.dispatch(intent))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn joined(&self) -> &[JoinedProduct] {
        &self.joined
    }

    /// Derived rows before the display rule is applied.
    pub fn rows(&self) -> &[JoinedProduct] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &JoinedProduct> + '_ {
        self.rows.iter().filter(|row| is_displayable(row))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
