//! Navigable view over a parsed scorecard document.
//!
//! Descending into a [`Node`] never fails: absent keys, out of range indexes, descent
//! through scalars, and explicit `null` values all produce the missing sentinel, which
//! answers `None` to every typed accessor and yields no elements or entries.
//!
//! Every node carries two locations. Its path names the exact position, with array indexes
//! and mapping keys, for error messages. Its field drops array indexes and replaces mapping
//! keys with `*`, so `info.players.India[0]` is the field `info.players.*`, and is what
//! field rules are keyed by.

use serde_json::Value;

use crate::server::error::ingest::IngestError;

/// A parsed scorecard document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parses raw upload bytes into a document.
    ///
    /// # Returns
    /// - `Ok(Document)` - The bytes were well-formed JSON
    /// - `Err(IngestError::Parse)` - Malformed input, carrying the parser's line and column
    pub fn parse(bytes: &[u8]) -> Result<Self, IngestError> {
        let root = serde_json::from_slice(bytes)?;

        Ok(Self { root })
    }

    /// Root node of the document.
    pub fn root(&self) -> Node<'_> {
        Node::new(Some(&self.root), String::new(), String::new())
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

/// A borrowed position in a [`Document`], either present or the missing sentinel.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: Option<&'a Value>,
    path: String,
    field: String,
}

fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}

impl<'a> Node<'a> {
    fn new(value: Option<&'a Value>, path: String, field: String) -> Self {
        Self {
            value: value.filter(|v| !v.is_null()),
            path,
            field,
        }
    }

    /// Descends into an object member.
    pub fn get(&self, key: &str) -> Node<'a> {
        Node::new(
            self.value.and_then(|v| v.get(key)),
            join(&self.path, key),
            join(&self.field, key),
        )
    }

    /// Descends into an array element.
    pub fn at(&self, index: usize) -> Node<'a> {
        Node::new(
            self.value.and_then(|v| v.get(index)),
            format!("{}[{}]", self.path, index),
            self.field.clone(),
        )
    }

    /// Full path of this node including array indexes, e.g. `innings[0].overs[3].over`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path of this node without array indexes and with mapping keys as `*`, e.g.
    /// `innings.overs.over` or `info.players.*`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether this node is the missing sentinel.
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    /// Whether this node is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.value, Some(Value::Array(_)))
    }

    /// Whether this node is an object.
    pub fn is_object(&self) -> bool {
        matches!(self.value, Some(Value::Object(_)))
    }

    /// Number of array elements or object members, zero for scalars and the sentinel.
    pub fn len(&self) -> usize {
        match self.value {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(map)) => map.len(),
            _ => 0,
        }
    }

    /// Whether [`Node::len`] is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array elements in order; empty when this node is not an array.
    pub fn elements(&self) -> Vec<Node<'a>> {
        match self.value {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Node::new(
                        Some(item),
                        format!("{}[{}]", self.path, index),
                        self.field.clone(),
                    )
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Members of a mapping keyed by data, in source order; empty when this node is not an
    /// object. Each member's field uses `*` in place of its key.
    pub fn entries(&self) -> Vec<(&'a str, Node<'a>)> {
        match self.value {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(key, value)| {
                    let node = Node::new(
                        Some(value),
                        join(&self.path, key),
                        join(&self.field, "*"),
                    );

                    (key.as_str(), node)
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Scalar value as text. Numbers and booleans are rendered, containers yield `None`.
    pub fn text(&self) -> Option<String> {
        match self.value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Scalar value as a 32-bit integer.
    ///
    /// Fractional numbers are truncated toward zero and numeric strings are parsed. Values
    /// outside the `i32` range yield `None`.
    pub fn integer(&self) -> Option<i32> {
        match self.value? {
            Value::Number(n) => match n.as_i64() {
                Some(v) => i32::try_from(v).ok(),
                None => n
                    .as_f64()
                    .map(f64::trunc)
                    .filter(|f| *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                    .map(|f| f as i32),
            },
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Scalar value as a decimal, accepting numbers and numeric strings.
    pub fn decimal(&self) -> Option<f64> {
        match self.value? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Document, Node};

    fn document() -> Document {
        Document::from(json!({
            "info": {
                "city": "Wellington",
                "season": 2017,
                "overs": "20",
                "dates": ["2017-02-17"],
                "players": { "New Zealand": ["A", "B"], "Australia": ["C"] },
                "umpire": null
            },
            "innings": [
                { "powerplays": [{ "from": 0.1, "to": 5.6, "type": "mandatory" }] }
            ]
        }))
    }

    /// Expect malformed input to fail with the parser diagnostic
    #[test]
    fn rejects_malformed_json() {
        let result = Document::parse(b"{\"info\": [1, 2");

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("line 1"), "message: {}", message);
    }

    /// Expect missing keys, null values and descent through scalars to yield the sentinel
    #[test]
    fn missing_nodes_answer_defaults() {
        let document = document();
        let root = document.root();

        let missing: [Node; 4] = [
            root.get("nope"),
            root.get("info").get("umpire"),
            root.get("info").get("city").get("name"),
            root.get("innings").at(4),
        ];

        for node in missing {
            assert!(node.is_missing(), "{} should be missing", node.path());
            assert_eq!(node.text(), None);
            assert_eq!(node.integer(), None);
            assert_eq!(node.decimal(), None);
            assert!(!node.is_array());
            assert!(node.elements().is_empty());
            assert!(node.entries().is_empty());
        }
    }

    /// Expect scalars to coerce between text and numbers
    #[test]
    fn coerces_scalars() {
        let document = document();
        let info = document.root().get("info");

        assert_eq!(info.get("season").text().as_deref(), Some("2017"));
        assert_eq!(info.get("season").integer(), Some(2017));
        assert_eq!(info.get("overs").integer(), Some(20));
        assert_eq!(info.get("city").integer(), None);
        assert_eq!(info.get("dates").text(), None);
    }

    /// Expect fractional numbers to truncate when read as integers
    #[test]
    fn truncates_fractional_integers() {
        let document = Document::from(json!({ "over": 5.6, "huge": 1e12 }));
        let root = document.root();

        assert_eq!(root.get("over").integer(), Some(5));
        assert_eq!(root.get("over").decimal(), Some(5.6));
        assert_eq!(root.get("huge").integer(), None);
    }

    /// Expect object entries to keep source order
    #[test]
    fn entries_preserve_source_order() {
        let document = document();
        let players = document.root().get("info").get("players");

        let names: Vec<&str> = players.entries().into_iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["New Zealand", "Australia"]);
    }

    /// Expect mapping members to keep their key in the path but not in the field
    #[test]
    fn replaces_mapping_keys_in_fields() {
        let document = document();
        let entries = document.root().get("info").get("players").entries();
        let (_, australia) = &entries[1];
        let player = australia.at(0);

        assert_eq!(player.path(), "info.players.Australia[0]");
        assert_eq!(player.field(), "info.players.*");
        assert_eq!(player.text().as_deref(), Some("C"));
    }

    /// Expect paths to record indexes and fields to strip them
    #[test]
    fn tracks_paths_and_fields() {
        let document = document();
        let powerplay = document.root().get("innings").at(0).get("powerplays").at(0);
        let from = powerplay.get("from");

        assert_eq!(from.path(), "innings[0].powerplays[0].from");
        assert_eq!(from.field(), "innings.powerplays.from");
        assert_eq!(from.decimal(), Some(0.1));
    }
}
