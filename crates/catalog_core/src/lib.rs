//! Product catalog view-model: join the static record sets once, then derive the
//! visible, filtered and sorted rows from the current [`ViewState`].

pub mod collation;
pub mod controller;
pub mod derive;
pub mod error;
pub mod join;
pub mod presentation;
pub mod view_state;

pub use controller::CatalogController;
pub use derive::derive;
pub use error::ParseSortColumnError;
pub use join::{join, CatalogIndex, JoinedProduct};
pub use view_state::{Intent, SortColumn, SortDirection, ViewState};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
