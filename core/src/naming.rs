//! Naming rules for generated identifiers: CSS custom properties and
//! TypeScript property keys.

use std::borrow::Cow;

use convert_case::{Boundary, Case, Converter};
use itertools::Itertools;

pub const CSS_PREFIX: &str = "--yami-";

/// `primaryColor` and `primary_color` both become `primary-color`. Existing
/// hyphens are kept and runs of capitals stay one word.
pub fn kebab(segment: &str) -> String {
    Converter::new()
        .to_case(Case::Kebab)
        .set_boundaries(&[Boundary::LowerUpper, Boundary::DigitUpper])
        .convert(segment.replace('_', "-"))
}

pub fn css_var_name(path: &[&str]) -> String {
    path.iter().map(|segment| kebab(segment)).join("-")
}

pub fn css_property(path: &[&str]) -> String {
    format!("{CSS_PREFIX}{}", css_var_name(path))
}

peg::parser! {
  grammar ts_key_parser() for str {
    rule head() = ['$' | '_' | 'a'..='z' | 'A'..='Z']
    rule tail() = ['$' | '_' | 'a'..='z' | 'A'..='Z' | '0'..='9']

    pub(crate) rule identifier() = head() tail()*
  }
}

pub fn is_identifier(key: &str) -> bool {
    ts_key_parser::identifier(key).is_ok()
}

/// Bare when `key` is a plain identifier, otherwise a double-quoted string literal.
pub fn ts_key(key: &str) -> Cow<'_, str> {
    if is_identifier(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(serde_json::Value::String(key.to_string()).to_string())
    }
}

#[test]
fn kebab_cases_segments() {
    assert_eq!(kebab("primaryColor"), "primary-color");
    assert_eq!(kebab("primary_color"), "primary-color");
    assert_eq!(kebab("font-size"), "font-size");
    assert_eq!(kebab("lineHeight2X"), "line-height2-x");
    assert_eq!(kebab("h1Title"), "h1-title");
    assert_eq!(kebab("XMLHttp"), "xmlhttp");
    assert_eq!(kebab("spacing2x"), "spacing2x");
    assert_eq!(kebab("a__b"), "a--b");
    assert_eq!(kebab("Brand"), "brand");
}

#[test]
fn joins_css_names() {
    assert_eq!(
        css_var_name(&["color", "brandPrimary", "dark_mode"]),
        "color-brand-primary-dark-mode"
    );
    assert_eq!(css_property(&["color", "brand"]), "--yami-color-brand");
}

#[test]
fn quotes_non_identifier_keys() {
    assert_eq!(ts_key("color"), "color");
    assert_eq!(ts_key("$schema"), "$schema");
    assert_eq!(ts_key("_private2"), "_private2");
    assert_eq!(ts_key("font-size"), "\"font-size\"");
    assert_eq!(ts_key("2xl"), "\"2xl\"");
    assert_eq!(ts_key(""), "\"\"");
    assert_eq!(ts_key("say \"hi\""), r#""say \"hi\"""#);
    assert_eq!(ts_key("a b"), "\"a b\"");
}

#[test]
fn splits_non_ascii_case_boundaries() {
    assert_eq!(kebab("aÉ"), "a-é");
    assert_eq!(kebab("couleurÉclair"), "couleur-éclair");
    assert_eq!(kebab("éclat"), "éclat");
}
