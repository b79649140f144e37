//! The component tree.

use crate::{ClickEvent, HoverEvent, TextColor, TextResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A styled text segment with optional children.
///
/// Components are values: every builder method consumes `self` and returns
/// the extended component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<TextColor>,
    #[serde(rename = "hoverEvent", default, skip_serializing_if = "Option::is_none")]
    hover: Option<HoverEvent>,
    #[serde(rename = "clickEvent", default, skip_serializing_if = "Option::is_none")]
    click: Option<ClickEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extra: Vec<Component>,
}

impl Component {
    /// Creates an empty component, useful as a container.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an unstyled text segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a colored text segment.
    #[must_use]
    pub fn colored(text: impl Into<String>, color: TextColor) -> Self {
        Self::text(text).with_color(color)
    }

    /// Creates a line break segment.
    #[must_use]
    pub fn newline() -> Self {
        Self::text("\n")
    }

    #[must_use]
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Shows `text` while the segment is hovered.
    #[must_use]
    pub fn with_hover_text(mut self, text: Component) -> Self {
        self.hover = Some(HoverEvent::ShowText(Box::new(text)));
        self
    }

    #[must_use]
    pub fn with_click(mut self, click: ClickEvent) -> Self {
        self.click = Some(click);
        self
    }

    /// Copies `value` to the clipboard when the segment is clicked.
    #[must_use]
    pub fn copy_on_click(self, value: impl Into<String>) -> Self {
        self.with_click(ClickEvent::CopyToClipboard(value.into()))
    }

    /// Appends a child segment.
    #[must_use]
    pub fn append(mut self, child: Component) -> Self {
        self.extra.push(child);
        self
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    pub fn hover(&self) -> Option<&HoverEvent> {
        self.hover.as_ref()
    }

    pub fn click(&self) -> Option<&ClickEvent> {
        self.click.as_ref()
    }

    pub fn children(&self) -> &[Component] {
        &self.extra
    }

    /// Flattens the tree into unstyled text, depth first.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.extra {
            child.write_plain(out);
        }
    }

    /// Flattens the tree into text with `§` color codes, for consoles and
    /// legacy clients. Hover and click actions are dropped.
    ///
    /// A code is written only when the effective color changes; uncolored
    /// text after colored text is preceded by a `§r` reset.
    pub fn to_legacy(&self) -> String {
        let mut out = String::new();
        let mut written = None;
        self.write_legacy(&mut out, None, &mut written);
        out
    }

    fn write_legacy(
        &self,
        out: &mut String,
        inherited: Option<TextColor>,
        written: &mut Option<TextColor>,
    ) {
        let color = self.color.or(inherited);
        if !self.text.is_empty() {
            if color != *written {
                match color {
                    Some(color) => {
                        out.push('§');
                        out.push(color.legacy_code());
                    }
                    None => out.push_str("§r"),
                }
                *written = color;
            }
            out.push_str(&self.text);
        }
        for child in &self.extra {
            child.write_legacy(out, color, written);
        }
    }

    /// Encodes the tree as a JSON chat component.
    pub fn to_json(&self) -> TextResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON chat component.
    pub fn from_json(json: &str) -> TextResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}
