//! Node payloads and element attribute handling.

use crate::style::{parse_inline_style, serialize_inline_style};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Data stored for each DOM node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

impl NodeData {
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

/// A single attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Data for an element node.
///
/// The `id`, `classes` and `inline_style` fields are caches over the raw
/// attribute list and are kept in sync by every mutation path, so selector
/// matching and style reads never re-parse attribute text.
#[derive(Debug, Clone)]
pub struct ElementData {
    pub tag_name: String,
    attributes: SmallVec<[Attribute; 8]>,
    id: Option<String>,
    classes: Vec<String>,
    inline_style: BTreeMap<String, String>,
}

impl ElementData {
    pub fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attributes: SmallVec::new(),
            id: None,
            classes: Vec::new(),
            inline_style: BTreeMap::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Set an attribute, refreshing the id/class/style caches when the
    /// attribute backs one of them.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.write_attr(name, value.to_owned());
        match name {
            "id" => self.id = Some(value.to_owned()),
            "class" => {
                self.classes = value.split_whitespace().map(str::to_owned).collect();
            }
            "style" => self.inline_style = parse_inline_style(value),
            _ => {}
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Add a class if it is not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
            self.sync_class_attr();
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) {
        let before = self.classes.len();
        self.classes.retain(|existing| existing != class);
        if self.classes.len() != before {
            self.sync_class_attr();
        }
    }

    /// Toggle a class: remove it when present, add it otherwise.
    pub fn toggle_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    /// Read a declaration from the element's inline style.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.inline_style
            .get(&property.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Write a declaration into the element's inline style.
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.inline_style
            .insert(property.to_ascii_lowercase(), value.trim().to_owned());
        let text = serialize_inline_style(&self.inline_style);
        self.write_attr("style", text);
    }

    pub fn inline_style(&self) -> &BTreeMap<String, String> {
        &self.inline_style
    }

    /// Write the raw attribute entry without touching the caches.
    fn write_attr(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_owned(),
                value,
            }),
        }
    }

    fn sync_class_attr(&mut self) {
        let text = self.classes.join(" ");
        self.write_attr("class", text);
    }
}
