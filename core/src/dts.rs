use itertools::Itertools;

use crate::{header, naming::ts_key, Document, Node, Scalar};

const DTS_TITLE: &str = "YAMI Design Tokens TypeScript 类型定义";
pub(crate) const LEAF_TYPE: &str = "TokenValue";

impl Node {
    /// TypeScript type mirroring this node's shape.
    ///
    /// Lists are typed from their first element only. Nested object literals
    /// are not re-indented.
    pub fn to_ts_type(&self) -> String {
        match self {
            Node::Leaf(_) => LEAF_TYPE.to_string(),
            Node::Group(group) => {
                let fields = group
                    .iter()
                    .map(|(key, value)| format!("  {}: {};", ts_key(key), value.to_ts_type()))
                    .join("\n");
                format!("{{\n{fields}\n}}")
            }
            Node::List(items) => match items.first() {
                Some(first) => format!("Array<{}>", first.to_ts_type()),
                None => "any[]".to_string(),
            },
            Node::Scalar(Scalar::Bool(_)) => "boolean".to_string(),
            Node::Scalar(Scalar::Number(_)) => "number".to_string(),
            Node::Scalar(Scalar::Null) => "null".to_string(),
            Node::Scalar(Scalar::String(_)) => "string".to_string(),
        }
    }
}

impl Document {
    /// Renders the `.d.ts` companion: the token record, the root shape and the
    /// `DesignTokens` names exported for it.
    pub fn to_dts(&self) -> String {
        let root_shape = self.root.to_ts_type();

        let mut lines = header(DTS_TITLE, &self.version());
        lines.extend([
            format!("export interface {LEAF_TYPE} {{"),
            "  value: string;".to_string(),
            "  description?: string;".to_string(),
            "}".to_string(),
            String::new(),
            format!("type TokensRoot = {root_shape};"),
            String::new(),
            // Interface form so consumers can write `interface X extends DesignTokens {}`.
            "export interface DesignTokens extends TokensRoot {}".to_string(),
            String::new(),
            "export type DesignTokensShape = TokensRoot;".to_string(),
            String::new(),
        ]);

        tracing::debug!(bytes = root_shape.len(), "rendered type declarations");
        lines.join("\n")
    }
}

#[cfg(test)]
fn shape(json: &str) -> String {
    json.parse::<Document>().unwrap().root.to_ts_type()
}

#[test]
fn renders_full_declaration_file() {
    let doc: Document = r##"{"color": {"brand": {"value": "#ff0000"}}, "version": "1.0"}"##
        .parse()
        .unwrap();
    assert_eq!(
        doc.to_dts(),
        "/**\n\
         \x20* YAMI Design Tokens TypeScript 类型定义\n\
         \x20* 版本: 1.0\n\
         \x20* 描述: 由 tokens.json 自动生成，请勿手工编辑\n\
         \x20*/\n\
         \n\
         export interface TokenValue {\n\
         \x20 value: string;\n\
         \x20 description?: string;\n\
         }\n\
         \n\
         type TokensRoot = {\n\
         \x20 color: {\n\
         \x20 brand: TokenValue;\n\
         };\n\
         \x20 version: string;\n\
         };\n\
         \n\
         export interface DesignTokens extends TokensRoot {}\n\
         \n\
         export type DesignTokensShape = TokensRoot;\n"
    );
}

#[test]
fn types_scalars_and_lists() {
    assert_eq!(
        shape(r#"{"b": true, "n": 3, "f": 0.5, "z": null, "s": "x", "e": [], "l": [1, "a"], "t": [{"value": "1"}]}"#),
        "{\n  b: boolean;\n  n: number;\n  f: number;\n  z: null;\n  s: string;\n  e: any[];\n  l: Array<number>;\n  t: Array<TokenValue>;\n}"
    );
}

#[test]
fn quotes_keys_that_are_not_identifiers() {
    assert_eq!(
        shape(r#"{"typography": {"font-size": {"value": "14px"}, "$base": {"value": "1rem"}}}"#),
        "{\n  typography: {\n  \"font-size\": TokenValue;\n  $base: TokenValue;\n};\n}"
    );
}

#[test]
fn empty_group_and_nested_empty_list() {
    assert_eq!(shape("{}"), "{\n\n}");
    assert_eq!(shape(r#"{"a": [[]]}"#), "{\n  a: Array<any[]>;\n}");
}

#[test]
fn root_token_renders_leaf_type() {
    assert_eq!(shape(r#"{"value": "x", "description": "y"}"#), "TokenValue");
}
