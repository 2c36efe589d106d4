//! Display rules shared by the GUI and the CLI table.

use shared::domain::{Category, Sex, User};

use crate::{
    join::JoinedProduct,
    view_state::{SortColumn, SortDirection, ViewState},
};

pub const EMPTY_MESSAGE: &str = "No products matching selected criteria";

/// A row is shown only when both its category and its owner resolved.
pub fn is_displayable(row: &JoinedProduct) -> bool {
    row.category.is_some() && row.owner.is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerTone {
    Link,
    Danger,
}

impl OwnerTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Link => "has-text-link",
            Self::Danger => "has-text-danger",
        }
    }
}

pub fn owner_tone(sex: Sex) -> OwnerTone {
    match sex {
        Sex::M => OwnerTone::Link,
        Sex::F => OwnerTone::Danger,
    }
}

pub fn category_label(category: &Category) -> String {
    format!("{} - {}", category.icon, category.title)
}

pub fn owner_tab_label(user: &User) -> String {
    format!("{} ({})", user.name, user.sex)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Unsorted => "⇅",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

pub fn sort_indicator(state: &ViewState, column: SortColumn) -> SortIndicator {
    if column == SortColumn::None || state.sort_column() != column {
        return SortIndicator::Unsorted;
    }
    match state.sort_direction() {
        SortDirection::Asc => SortIndicator::Ascending,
        SortDirection::Desc => SortIndicator::Descending,
    }
}
