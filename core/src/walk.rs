//! Depth-first flattening of a token tree.
//!
//! Every call to [`Node::leaves`] starts a fresh walk; nothing is cached between walks.

use crate::Node;

/// One token found by the walk, with the keys leading to it from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry<'a> {
    pub path: Vec<&'a str>,
    pub value: String,
    pub description: Option<&'a str>,
}
impl<'a> LeafEntry<'a> {
    /// First path segment, empty for a token sitting at the root.
    pub fn section(&self) -> &'a str {
        self.path.first().copied().unwrap_or("")
    }
}

pub struct Leaves<'a> {
    stack: Vec<(Vec<&'a str>, &'a Node)>,
}
impl<'a> Leaves<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Leaves {
            stack: vec![(Vec::new(), root)],
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = LeafEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                Node::Leaf(token) => {
                    return Some(LeafEntry {
                        path,
                        value: token.value.to_string(),
                        description: token.description.as_deref(),
                    })
                }
                // Reversed so the stack pops children in document order.
                Node::Group(group) => {
                    for (key, child) in group.iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(key.as_str());
                        self.stack.push((child_path, child));
                    }
                }
                Node::List(_) | Node::Scalar(_) => {}
            }
        }
        None
    }
}

#[cfg(test)]
fn parse(json: &str) -> crate::Document {
    json.parse().unwrap()
}

#[test]
fn walks_in_document_order() {
    let doc = parse(
        r##"{
            "version": "1.0",
            "spacing": { "sm": { "value": 4 }, "lg": { "value": "16px" } },
            "color": {
                "brand": { "primary": { "value": "#ff0000", "description": "Brand" } },
                "list": [ { "value": "ignored" } ]
            }
        }"##,
    );
    let entries: Vec<_> = doc.leaves().collect();
    assert_eq!(
        entries,
        vec![
            LeafEntry {
                path: vec!["spacing", "sm"],
                value: "4".to_string(),
                description: None,
            },
            LeafEntry {
                path: vec!["spacing", "lg"],
                value: "16px".to_string(),
                description: None,
            },
            LeafEntry {
                path: vec!["color", "brand", "primary"],
                value: "#ff0000".to_string(),
                description: Some("Brand"),
            },
        ]
    );
}

#[test]
fn walk_is_restartable() {
    let doc = parse(r#"{"a": {"b": {"value": 1}}, "c": {"value": true}}"#);
    let first: Vec<_> = doc.leaves().collect();
    let second: Vec<_> = doc.leaves().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].value, "true");
}

#[test]
fn root_token_has_empty_path() {
    let doc = parse(r#"{"value": "solo"}"#);
    let entries: Vec<_> = doc.leaves().collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].path.is_empty());
    assert_eq!(entries[0].section(), "");
}
