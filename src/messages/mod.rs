//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Source layers.

pub mod render;
pub mod source;
pub mod ui_events;

pub use render::{RenderState, View};
pub use source::{SourceCommand, SourceResponse};
pub use ui_events::UiEvent;
