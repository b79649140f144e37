use crate::Component;
use serde::{Deserialize, Serialize};

/// Action performed when a segment is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickEvent {
    /// Copies the value to the client's clipboard.
    CopyToClipboard(String),
}

/// Content shown while the cursor hovers a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "contents", rename_all = "snake_case")]
pub enum HoverEvent {
    ShowText(Box<Component>),
}

impl HoverEvent {
    /// Returns the hover text as a component.
    pub fn text(&self) -> &Component {
        match self {
            Self::ShowText(component) => component,
        }
    }
}
