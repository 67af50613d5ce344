use itertools::Itertools;

use crate::{header, naming::css_property, Document};

const CSS_TITLE: &str = "YAMI Design Tokens CSS 变量";

impl Document {
    /// Renders every token as a custom property inside one `:root` block.
    ///
    /// Tokens are ordered by section and then by full path, so the output does not
    /// depend on the key order of the source. Values are copied through unchecked.
    pub fn to_css(&self) -> String {
        let entries = self
            .leaves()
            .filter(|entry| !entry.path.is_empty())
            .sorted_by(|a, b| {
                a.section()
                    .cmp(b.section())
                    .then_with(|| a.path.cmp(&b.path))
            })
            .collect_vec();

        let mut lines = header(CSS_TITLE, &self.version());
        lines.push(":root {".to_string());
        for (section, group) in &entries.iter().group_by(|entry| entry.section()) {
            lines.push(String::new());
            lines.push(format!("  /* {section} */"));
            lines.extend(
                group.map(|entry| format!("  {}: {};", css_property(&entry.path), entry.value)),
            );
        }
        lines.push("}".to_string());
        lines.push(String::new());

        tracing::debug!(properties = entries.len(), "rendered stylesheet");
        lines.join("\n")
    }
}

#[cfg(test)]
fn render(json: &str) -> String {
    json.parse::<Document>().unwrap().to_css()
}

#[test]
fn renders_full_stylesheet() {
    let css = render(r##"{"color": {"brand": {"value": "#ff0000"}}, "version": "1.0"}"##);
    assert_eq!(
        css,
        "/**\n\
         \x20* YAMI Design Tokens CSS 变量\n\
         \x20* 版本: 1.0\n\
         \x20* 描述: 由 tokens.json 自动生成，请勿手工编辑\n\
         \x20*/\n\
         \n\
         :root {\n\
         \n\
         \x20 /* color */\n\
         \x20 --yami-color-brand: #ff0000;\n\
         }\n"
    );
}

#[test]
fn sorts_sections_and_paths() {
    let css = render(
        r#"{
            "b": { "z": { "value": "1" }, "a": { "value": "2" } },
            "a": { "nested": { "y": { "value": "3" } }, "x": { "value": "4" } }
        }"#,
    );
    let body: Vec<&str> = css
        .lines()
        .skip_while(|line| *line != ":root {")
        .collect();
    assert_eq!(
        body,
        [
            ":root {",
            "",
            "  /* a */",
            "  --yami-a-nested-y: 3;",
            "  --yami-a-x: 4;",
            "",
            "  /* b */",
            "  --yami-b-a: 2;",
            "  --yami-b-z: 1;",
            "}",
        ]
    );
}

#[test]
fn kebab_cases_property_names() {
    let css = render(
        r#"{"color": {"primaryColor": {"value": "red"}, "secondary_color": {"value": "blue"}}}"#,
    );
    assert!(css.contains("  --yami-color-primary-color: red;\n"));
    assert!(css.contains("  --yami-color-secondary-color: blue;\n"));
}

#[test]
fn passes_values_through() {
    let css = render(
        r#"{"misc": {"weight": {"value": 700}, "ratio": {"value": 1.5}, "on": {"value": false}, "bad": {"value": "not;css"}}}"#,
    );
    assert!(css.contains("  --yami-misc-weight: 700;\n"));
    assert!(css.contains("  --yami-misc-ratio: 1.5;\n"));
    assert!(css.contains("  --yami-misc-on: false;\n"));
    assert!(css.contains("  --yami-misc-bad: not;css;\n"));
}

#[test]
fn skips_non_token_values() {
    let css = render(r#"{"version": "2.0", "name": "yami", "list": [{"value": "x"}]}"#);
    assert!(css.ends_with(":root {\n}\n"));
    assert!(css.contains(" * 版本: 2.0\n"));
}

#[test]
fn one_declaration_per_token() {
    let doc: Document = r#"{
        "space": {"sm": {"value": "4px"}, "md": {"value": "8px"}},
        "radius": {"round": {"value": "50%", "description": "Pill"}}
    }"#
    .parse()
    .unwrap();
    let css = doc.to_css();
    for entry in doc.leaves() {
        let declaration = format!("  {}: {};", css_property(&entry.path), entry.value);
        assert_eq!(css.matches(&format!("{declaration}\n")).count(), 1);
    }
    assert_eq!(css, doc.to_css());
}

#[test]
fn keeps_large_integers_exact() {
    let css = render(r#"{"v": {"e": {"value": 100000000000000000000}}}"#);
    assert!(css.contains("  --yami-v-e: 100000000000000000000;\n"));
}
