//! UI events and error modeling for the catalog window.

use catalog_core::Intent;
use storage::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Intent(Intent),
    DismissBanner,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intent(intent) => intent.name(),
            Self::DismissBanner => "dismiss_banner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    MissingFixtures,
    MalformedFixtures,
    EventQueue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    Interaction,
}

impl UiErrorContext {
    pub fn label(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Interaction => "interaction",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_store_error(err: &StoreError) -> Self {
        let category = match err {
            StoreError::Io { .. } => UiErrorCategory::MissingFixtures,
            StoreError::Parse { .. } => UiErrorCategory::MalformedFixtures,
        };
        Self::new(category, UiErrorContext::Startup, err.to_string())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &'static str {
        match self.category {
            UiErrorCategory::MissingFixtures => "Fixtures not found",
            UiErrorCategory::MalformedFixtures => "Malformed fixtures",
            UiErrorCategory::EventQueue => "Event queue",
        }
    }
}
