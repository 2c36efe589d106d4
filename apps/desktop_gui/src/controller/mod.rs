//! Controller layer: UI events, error modeling, and intent queue orchestration.

pub mod events;
pub mod orchestration;
