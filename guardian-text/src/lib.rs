//! Rich chat text for Guardian.
//!
//! A [`Component`] is an immutable tree of styled text segments. Segments can
//! carry a [`TextColor`], hover text and a click action, and the whole tree
//! serializes to the JSON chat-component format game clients render.
//!
//! The model is deliberately small: it covers what domain listings need
//! (colors, hover text, click-to-copy) and nothing else.

mod color;
mod component;
mod event;

pub use color::TextColor;
pub use component::Component;
pub use event::{ClickEvent, HoverEvent};

/// Errors raised while encoding or decoding components.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
