use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

mod config;
mod css;
mod dts;
mod error;
mod generate;
pub mod naming;
mod walk;

pub use config::{Config, CONFIG_FILE};
pub use error::Error;
pub use generate::{generate, load_document, Generated};
pub use walk::{LeafEntry, Leaves};

const PROVENANCE: &str = "描述: 由 tokens.json 自动生成，请勿手工编辑";

/// Comment block opening both generated files.
pub(crate) fn header(title: &str, version: &str) -> Vec<String> {
    vec![
        "/**".to_string(),
        format!(" * {title}"),
        format!(" * 版本: {version}"),
        format!(" * {PROVENANCE}"),
        " */".to_string(),
        String::new(),
    ]
}

/// A parsed `tokens.json`. The root is always a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
}
impl Document {
    /// The root `version` entry as display text, empty when absent.
    pub fn version(&self) -> String {
        match &self.root {
            Node::Group(group) => group
                .get("version")
                .map(|version| version.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
    pub fn leaves(&self) -> Leaves<'_> {
        self.root.leaves()
    }
}
impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Document, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Node::deserialize(deserializer)? {
            root @ (Node::Group(_) | Node::Leaf(_)) => Ok(Document { root }),
            _ => Err(de::Error::custom("token document root must be an object")),
        }
    }
}
impl FromStr for Document {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Token),
    Group(IndexMap<String, Node>),
    List(Vec<Node>),
    Scalar(Scalar),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: Box<Node>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A mapping is a token iff it has a `value` and nothing besides `value` and `description`.
pub fn is_token_leaf(entries: &IndexMap<String, Node>) -> bool {
    entries.contains_key("value")
        && entries
            .keys()
            .all(|key| key == "value" || key == "description")
}

impl Node {
    fn from_entries(mut entries: IndexMap<String, Node>) -> Node {
        if !is_token_leaf(&entries) {
            return Node::Group(entries);
        }
        match entries.swap_remove("value") {
            Some(value) => Node::Leaf(Token {
                value: Box::new(value),
                description: entries.swap_remove("description").map(Node::into_text),
            }),
            None => Node::Group(entries),
        }
    }
    fn into_text(self) -> String {
        match self {
            Node::Scalar(Scalar::String(text)) => text,
            other => other.to_string(),
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self)
    }
}

/// Strings print verbatim, everything else as compact JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(Scalar::String(text)) => f.write_str(text),
            Node::Scalar(Scalar::Number(number)) => write!(f, "{number}"),
            Node::Scalar(Scalar::Bool(flag)) => write!(f, "{flag}"),
            Node::Scalar(Scalar::Null) => f.write_str("null"),
            composite => {
                let json = serde_json::to_string(composite).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Leaf(token) => {
                let len = if token.description.is_some() { 2 } else { 1 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("value", &*token.value)?;
                if let Some(description) = &token.description {
                    map.serialize_entry("description", description)?;
                }
                map.end()
            }
            Node::Group(group) => serializer.collect_map(group),
            Node::List(items) => serializer.collect_seq(items),
            Node::Scalar(Scalar::Null) => serializer.serialize_unit(),
            Node::Scalar(Scalar::Bool(flag)) => serializer.serialize_bool(*flag),
            Node::Scalar(Scalar::Number(number)) => number.serialize(serializer),
            Node::Scalar(Scalar::String(text)) => serializer.serialize_str(text),
        }
    }
}

/// Arbitrary-precision numbers keep their source spelling, so large integers
/// are not rounded through `f64`.
impl From<Value> for Node {
    fn from(value: Value) -> Node {
        match value {
            Value::Null => Node::Scalar(Scalar::Null),
            Value::Bool(flag) => Node::Scalar(Scalar::Bool(flag)),
            Value::Number(number) => Node::Scalar(Scalar::Number(number)),
            Value::String(text) => Node::Scalar(Scalar::String(text)),
            Value::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::from_entries(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Node::from)
    }
}

#[cfg(test)]
fn string(text: &str) -> Node {
    Node::Scalar(Scalar::String(text.to_string()))
}

#[test]
fn classifies_leaves_and_groups() {
    let doc: Document = r##"{
        "color": {
            "brand": { "value": "#ff0000", "description": "Brand red" },
            "plain": { "value": "#00ff00" },
            "extra": { "value": "#0000ff", "type": "color" },
            "described": { "description": "no value here" }
        }
    }"##
    .parse()
    .unwrap();
    let Node::Group(root) = &doc.root else {
        panic!("root should be a group: {:?}", doc.root);
    };
    let Node::Group(color) = &root["color"] else {
        panic!("color should be a group");
    };
    assert_eq!(
        color["brand"],
        Node::Leaf(Token {
            value: Box::new(string("#ff0000")),
            description: Some("Brand red".to_string()),
        })
    );
    assert!(color["plain"].is_leaf());
    assert!(matches!(color["extra"], Node::Group(_)));
    assert!(matches!(color["described"], Node::Group(_)));
}

#[test]
fn keeps_insertion_order() {
    let doc: Document = r#"{"z": {"value": "1"}, "a": {"value": "2"}, "m": {"value": "3"}}"#
        .parse()
        .unwrap();
    let Node::Group(root) = &doc.root else {
        panic!("root should be a group");
    };
    assert_eq!(root.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_keep_first_position_and_last_value() {
    let doc: Document = r#"{"a": 1, "b": 2, "a": 3}"#.parse().unwrap();
    let Node::Group(root) = &doc.root else {
        panic!("root should be a group");
    };
    assert_eq!(root.keys().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(root["a"].to_string(), "3");
}

#[test]
fn displays_values() {
    let doc: Document = r#"{
        "s": "text", "i": 12, "f": 1.5, "b": true, "n": null,
        "l": [1, "x"], "g": {"k": false}
    }"#
    .parse()
    .unwrap();
    let Node::Group(root) = &doc.root else {
        panic!("root should be a group");
    };
    let shown: Vec<String> = root.values().map(|node| node.to_string()).collect();
    assert_eq!(
        shown,
        ["text", "12", "1.5", "true", "null", r#"[1,"x"]"#, r#"{"k":false}"#]
    );
}

#[test]
fn stringifies_non_string_description() {
    let doc: Document = r#"{"gap": {"value": 4, "description": 7}}"#.parse().unwrap();
    let Node::Group(root) = &doc.root else {
        panic!("root should be a group");
    };
    let Node::Leaf(token) = &root["gap"] else {
        panic!("gap should be a leaf");
    };
    assert_eq!(token.value.to_string(), "4");
    assert_eq!(token.description.as_deref(), Some("7"));
}

#[test]
fn reads_version() {
    let doc: Document = r#"{"version": "1.0"}"#.parse().unwrap();
    assert_eq!(doc.version(), "1.0");
    let doc: Document = r#"{"color": {}}"#.parse().unwrap();
    assert_eq!(doc.version(), "");
    let doc: Document = r#"{"version": 2}"#.parse().unwrap();
    assert_eq!(doc.version(), "2");
}

#[test]
fn rejects_non_object_root() {
    assert!("[1, 2]".parse::<Document>().is_err());
    assert!("\"tokens\"".parse::<Document>().is_err());
    assert!("{\"color\": ".parse::<Document>().is_err());
}

#[test]
fn keeps_number_spelling() {
    let doc: Document = r#"{"big": 100000000000000000000, "neg": -12, "f": 1.50}"#
        .parse()
        .unwrap();
    let Node::Group(root) = &doc.root else {
        panic!("root should be a group");
    };
    assert_eq!(root["big"].to_string(), "100000000000000000000");
    assert_eq!(root["neg"].to_string(), "-12");
    assert_eq!(root["f"].to_string(), "1.50");
}
