//! promptform-dom — Shared DomNode types for promptform renderers
//!
//! This crate defines the canonical Rust representation of the rendered form:
//! an ordered tree of control specifications. The view layer builds these
//! trees, the HTML renderer consumes them, and the snapshot exporter strips
//! them down to an inert copy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single node in the rendered control tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    /// HTML tag name (e.g. "div", "button", "input")
    pub tag: String,

    /// Stable identity for in-place updates on the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// HTML attributes (class, value, data-*, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<HashMap<String, String>>,

    /// Map of DOM event name → action name (e.g. "input" → "set_field")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<HashMap<String, String>>,

    /// Text content for leaf nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DomNode>>,
}

/// A complete snapshot wrapping the root DomNode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: DomNode,
}

impl DomNode {
    /// Create an empty element node
    pub fn new(tag: &str) -> Self {
        DomNode {
            tag: tag.to_string(),
            key: None,
            attrs: None,
            events: None,
            text: None,
            children: None,
        }
    }

    /// Create a simple text node
    pub fn text(tag: &str, content: &str) -> Self {
        DomNode::new(tag).content(content)
    }

    /// Set the stable key
    pub fn key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Set an attribute
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Wire an event to an action name
    pub fn on(mut self, event: &str, action: &str) -> Self {
        self.events
            .get_or_insert_with(HashMap::new)
            .insert(event.to_string(), action.to_string());
        self
    }

    /// Set the text content
    pub fn content(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Append a child node
    pub fn child(mut self, node: DomNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(node);
        self
    }

    /// Append children from an iterator
    pub fn children<I: IntoIterator<Item = DomNode>>(mut self, nodes: I) -> Self {
        self.children.get_or_insert_with(Vec::new).extend(nodes);
        self
    }

    /// Get a class attribute if present
    pub fn class(&self) -> Option<&str> {
        self.attrs.as_ref()?.get("class").map(|s| s.as_str())
    }

    /// Get an attribute by name
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(name).map(|s| s.as_str())
    }

    /// Iterate over children (empty slice if none)
    pub fn children_iter(&self) -> &[DomNode] {
        match &self.children {
            Some(c) => c,
            None => &[],
        }
    }

    /// Get an event action by event name
    pub fn event(&self, name: &str) -> Option<&str> {
        self.events.as_ref()?.get(name).map(|s| s.as_str())
    }

    /// Recursively remove every event wiring. Used to bake an inert copy of
    /// the tree for export: the resulting document carries no behavior.
    pub fn strip_events(&mut self) {
        self.events = None;
        if let Some(children) = &mut self.children {
            for child in children {
                child.strip_events();
            }
        }
    }

    /// Depth-first search for the node with the given key
    pub fn find_key(&self, key: &str) -> Option<&DomNode> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children_iter().iter().find_map(|c| c.find_key(key))
    }
}

/// Parse a snapshot from a JSON string
pub fn parse_snapshot(json: &str) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a single DomNode from a JSON string
pub fn parse_node(json: &str) -> Result<DomNode, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_roundtrip() {
        let node = DomNode::new("div")
            .key("f-askPrice")
            .attr("class", "field")
            .child(DomNode::text("label", "Ask Price").attr("for", "askPrice"))
            .child(
                DomNode::new("input")
                    .key("i-askPrice")
                    .attr("value", "108.714")
                    .on("input", "set_field"),
            );

        let json = serde_json::to_string(&node).unwrap();
        let parsed = parse_node(&json).unwrap();
        assert_eq!(parsed.key.as_deref(), Some("f-askPrice"));
        assert_eq!(parsed.class(), Some("field"));
        assert_eq!(parsed.children_iter().len(), 2);
        assert_eq!(parsed.children_iter()[1].event("input"), Some("set_field"));
        assert_eq!(parsed.children_iter()[1].attr_value("value"), Some("108.714"));
    }

    #[test]
    fn test_parse_snapshot() {
        let json = r#"{
            "root": {
                "tag": "div",
                "key": "app",
                "children": [
                    { "tag": "h1", "text": "Assumption Form" },
                    { "tag": "button", "events": { "click": "copy_prompt" }, "text": "Copy" }
                ]
            }
        }"#;

        let snap = parse_snapshot(json).unwrap();
        assert_eq!(snap.root.tag, "div");
        assert_eq!(snap.root.key.as_deref(), Some("app"));
        assert_eq!(snap.root.children_iter().len(), 2);
        assert_eq!(snap.root.children_iter()[1].event("click"), Some("copy_prompt"));
    }

    #[test]
    fn test_strip_events() {
        let mut node = DomNode::new("form")
            .on("submit", "save")
            .child(DomNode::new("input").on("input", "set_field"));
        node.strip_events();
        assert!(node.events.is_none());
        assert!(node.children_iter()[0].events.is_none());
    }

    #[test]
    fn test_find_key() {
        let node = DomNode::new("div").key("app").child(
            DomNode::new("div")
                .key("prompts-grid")
                .child(DomNode::text("div", "hello").key("prompt-partA")),
        );
        let found = node.find_key("prompt-partA").unwrap();
        assert_eq!(found.text.as_deref(), Some("hello"));
        assert!(node.find_key("prompt-partZ").is_none());
    }
}
