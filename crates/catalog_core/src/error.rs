use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort column '{input}' (expected 'name' or 'category')")]
pub struct ParseSortColumnError {
    pub input: String,
}
