//! Filter and sort selections, changed only through [`Intent`]s.

use std::{collections::BTreeSet, fmt, str::FromStr};

use shared::domain::{CategoryId, UserId};

use crate::error::ParseSortColumnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
    #[default]
    None,
    Name,
    CategoryTitle,
}

impl SortColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Name => "name",
            Self::CategoryTitle => "category",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = ParseSortColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "name" | "product" => Ok(Self::Name),
            "category" | "category_title" | "categorytitle" => Ok(Self::CategoryTitle),
            _ => Err(ParseSortColumnError {
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectOwner(Option<UserId>),
    ToggleCategory(CategoryId),
    ClearCategories,
    SetSearchQuery(String),
    ClearSearch,
    ToggleSort(SortColumn),
    ResetAll,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectOwner(_) => "select_owner",
            Self::ToggleCategory(_) => "toggle_category",
            Self::ClearCategories => "clear_categories",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::ClearSearch => "clear_search",
            Self::ToggleSort(_) => "toggle_sort",
            Self::ResetAll => "reset_all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    selected_owner: Option<UserId>,
    search_query: String,
    selected_categories: BTreeSet<CategoryId>,
    sort_column: SortColumn,
    sort_direction: SortDirection,
}

impl ViewState {
    pub fn selected_owner(&self) -> Option<UserId> {
        self.selected_owner
    }

    /// The query exactly as typed; trimming happens when filtering.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_categories(&self) -> &BTreeSet<CategoryId> {
        &self.selected_categories
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.selected_categories.contains(&id)
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when any selection narrows the rows. Sorting alone does not count.
    pub fn has_active_filters(&self) -> bool {
        self.selected_owner.is_some()
            || !self.search_query.trim().is_empty()
            || !self.selected_categories.is_empty()
    }

    pub fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::SelectOwner(owner) => self.select_owner(owner),
            Intent::ToggleCategory(id) => self.toggle_category(id),
            Intent::ClearCategories => self.clear_categories(),
            Intent::SetSearchQuery(text) => self.set_search_query(text),
            Intent::ClearSearch => self.clear_search(),
            Intent::ToggleSort(column) => self.toggle_sort(column),
            Intent::ResetAll => self.reset_all(),
        }
    }

    pub fn select_owner(self, owner: Option<UserId>) -> Self {
        Self {
            selected_owner: owner,
            ..self
        }
    }

    pub fn toggle_category(mut self, id: CategoryId) -> Self {
        if !self.selected_categories.remove(&id) {
            self.selected_categories.insert(id);
        }
        self
    }

    pub fn clear_categories(self) -> Self {
        Self {
            selected_categories: BTreeSet::new(),
            ..self
        }
    }

    pub fn set_search_query(self, text: impl Into<String>) -> Self {
        Self {
            search_query: text.into(),
            ..self
        }
    }

    pub fn clear_search(self) -> Self {
        Self {
            search_query: String::new(),
            ..self
        }
    }

    /// Cycles a column through ascending, descending and unsorted.
    ///
    /// Toggling [`SortColumn::None`] clears sorting.
    pub fn toggle_sort(self, column: SortColumn) -> Self {
        let (sort_column, sort_direction) = match (column, self.sort_column, self.sort_direction) {
            (SortColumn::None, _, _) => (SortColumn::None, SortDirection::Asc),
            (requested, active, SortDirection::Asc) if requested == active => {
                (requested, SortDirection::Desc)
            }
            (requested, active, SortDirection::Desc) if requested == active => {
                (SortColumn::None, SortDirection::Asc)
            }
            (requested, _, _) => (requested, SortDirection::Asc),
        };
        Self {
            sort_column,
            sort_direction,
            ..self
        }
    }

    pub fn reset_all(self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
