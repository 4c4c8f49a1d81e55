//! Inline style parsing and computed-value resolution.

use crate::NodeId;
use crate::document::Document;
use std::collections::BTreeMap;

/// Parse inline style text (`color: red; margin-top: 4px`) into a
/// property-to-value map. Properties are lowercased; malformed
/// declarations are skipped.
pub(crate) fn parse_inline_style(text: &str) -> BTreeMap<String, String> {
    let mut declarations = BTreeMap::new();
    for declaration in text.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        declarations.insert(property, value.to_owned());
    }
    declarations
}

pub(crate) fn serialize_inline_style(declarations: &BTreeMap<String, String>) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// The leading integer of a CSS value string: optional sign, then digits,
/// ignoring everything after them. `None` when no digits lead the value,
/// so `auto` and keyword values read as absent rather than zero.
pub fn leading_int(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1_i64, rest),
        None => (1_i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = body.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let magnitude: i64 = body[..end].parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}

/// Display value used when an element carries no inline `display`.
fn default_display(tag_name: &str) -> &'static str {
    match tag_name {
        "head" | "link" | "meta" | "script" | "style" | "title" | "template" => "none",
        "html" | "body" | "div" | "p" | "section" | "article" | "header" | "footer" | "nav"
        | "aside" | "main" | "form" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
        | "figure" | "blockquote" | "pre" | "hr" | "fieldset" | "address" => "block",
        "li" => "list-item",
        "table" => "table",
        "tr" => "table-row",
        "td" | "th" => "table-cell",
        _ => "inline",
    }
}

impl Document {
    /// Resolve a computed style value for an element.
    ///
    /// There is no cascade here: inline declarations win, `width` and
    /// `height` fall back to the layout box (as `{n}px` strings, or
    /// `auto` when the element computes to `display: none` and so has no
    /// used dimensions), `display` falls back to a per-tag default and
    /// `visibility` to `visible`. Anything else without an inline
    /// declaration is `None`.
    pub fn computed_value(&self, node: NodeId, property: &str) -> Option<String> {
        let element = self.element(node)?;
        let property = property.to_ascii_lowercase();
        if let Some(value) = element.style(&property) {
            return Some(value.to_owned());
        }
        match property.as_str() {
            "width" | "height" if self.computes_display_none(node) => Some("auto".to_owned()),
            "width" => self
                .layout_box(node)
                .map(|rect| format!("{}px", rect.width)),
            "height" => self
                .layout_box(node)
                .map(|rect| format!("{}px", rect.height)),
            "display" => Some(default_display(&element.tag_name).to_owned()),
            "visibility" => Some("visible".to_owned()),
            _ => None,
        }
    }

    /// Whether the element's computed `display` is `none`.
    pub(crate) fn computes_display_none(&self, node: NodeId) -> bool {
        self.computed_value(node, "display").as_deref() == Some("none")
    }
}
