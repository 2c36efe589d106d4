use std::collections::BTreeSet;

use shared::domain::{CategoryId, UserId};

use crate::{
    collation::locale_compare,
    join::JoinedProduct,
    view_state::{SortColumn, SortDirection, ViewState},
};

/// Recomputes the row set for `state`: owner, search and category filters in
/// that order, then the optional sort.
///
/// Rows with an unresolved category or owner are not removed here unless a
/// filter needs the missing side; see [`crate::presentation::is_displayable`].
pub fn derive(joined: &[JoinedProduct], state: &ViewState) -> Vec<JoinedProduct> {
    let query = state.search_query().trim().to_lowercase();

    let mut rows: Vec<JoinedProduct> = joined
        .iter()
        .filter(|row| matches_owner(row, state.selected_owner()))
        .filter(|row| matches_search(row, &query))
        .filter(|row| matches_categories(row, state.selected_categories()))
        .cloned()
        .collect();

    sort_rows(&mut rows, state.sort_column(), state.sort_direction());
    rows
}

/// Stable sort; equal keys keep their relative order in either direction.
pub fn sort_rows(rows: &mut [JoinedProduct], column: SortColumn, direction: SortDirection) {
    if column == SortColumn::None {
        return;
    }

    rows.sort_by(|a, b| {
        let ordering = locale_compare(sort_key(a, column), sort_key(b, column));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn sort_key(row: &JoinedProduct, column: SortColumn) -> &str {
    match column {
        SortColumn::None | SortColumn::Name => &row.name,
        SortColumn::CategoryTitle => row.category_title(),
    }
}

fn matches_owner(row: &JoinedProduct, owner: Option<UserId>) -> bool {
    match owner {
        Some(owner) => row.owner_id() == Some(owner),
        None => true,
    }
}

// `query` is already trimmed and lowercased.
fn matches_search(row: &JoinedProduct, query: &str) -> bool {
    query.is_empty() || row.name.to_lowercase().contains(query)
}

fn matches_categories(row: &JoinedProduct, selected: &BTreeSet<CategoryId>) -> bool {
    if selected.is_empty() {
        return true;
    }
    row.category
        .as_ref()
        .is_some_and(|category| selected.contains(&category.id))
}

#[cfg(test)]
#[path = "tests/derive_tests.rs"]
mod tests;
