use std::fs;

use tempfile::tempdir;
use yami_design_tokens_core::{generate, Config, Error};

const TOKENS: &str = r##"{
  "$schema": "./tokens.schema.json",
  "version": "1.0.0",
  "spacing": {
    "lg": { "value": "16px" },
    "sm": { "value": "4px", "description": "Tight gaps" }
  },
  "color": {
    "brand": { "primaryColor": { "value": "#ff0000" } },
    "ui": { "font-size": { "value": "14px" } }
  }
}"##;

#[test]
fn writes_both_outputs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tokens.json"), TOKENS).unwrap();

    let config = Config::load(dir.path()).unwrap();
    let generated = generate(&config).unwrap();
    assert_eq!(generated.file_names(), ["tokens.css", "tokens.d.ts"]);

    let css = fs::read_to_string(dir.path().join("tokens.css")).unwrap();
    let body: Vec<&str> = css.lines().skip_while(|line| *line != ":root {").collect();
    assert_eq!(
        body,
        [
            ":root {",
            "",
            "  /* color */",
            "  --yami-color-brand-primary-color: #ff0000;",
            "  --yami-color-ui-font-size: 14px;",
            "",
            "  /* spacing */",
            "  --yami-spacing-lg: 16px;",
            "  --yami-spacing-sm: 4px;",
            "}",
        ]
    );
    assert!(css.contains(" * 版本: 1.0.0\n"));

    let dts = fs::read_to_string(dir.path().join("tokens.d.ts")).unwrap();
    assert!(dts.contains(
        "type TokensRoot = {\n  $schema: string;\n  version: string;\n  spacing: {\n  lg: TokenValue;\n  sm: TokenValue;\n};\n  color: {\n  brand: {\n  primaryColor: TokenValue;\n};\n  ui: {\n  \"font-size\": TokenValue;\n};\n};\n};\n"
    ));
    assert!(dts.ends_with("export type DesignTokensShape = TokensRoot;\n"));
}

#[test]
fn regenerating_is_byte_identical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tokens.json"), TOKENS).unwrap();
    let config = Config::load(dir.path()).unwrap();

    generate(&config).unwrap();
    let css = fs::read(&config.css_output).unwrap();
    let dts = fs::read(&config.types_output).unwrap();

    fs::write(&config.css_output, "stale").unwrap();
    generate(&config).unwrap();
    assert_eq!(fs::read(&config.css_output).unwrap(), css);
    assert_eq!(fs::read(&config.types_output).unwrap(), dts);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = Config::load(dir.path()).unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, Error::SourceUnreadable { .. }), "{err:?}");
    assert!(!config.css_output.exists());
    assert!(!config.types_output.exists());
}

#[test]
fn malformed_source_writes_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tokens.json"), "{\"color\": {").unwrap();
    let config = Config::load(dir.path()).unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, Error::SourceMalformed { .. }), "{err:?}");
    assert!(!config.css_output.exists());
    assert!(!config.types_output.exists());
}

#[test]
fn array_root_is_malformed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tokens.json"), "[]").unwrap();
    let config = Config::load(dir.path()).unwrap();

    assert!(matches!(
        generate(&config),
        Err(Error::SourceMalformed { .. })
    ));
}

#[test]
fn config_file_redirects_outputs() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("design.json"), TOKENS).unwrap();
    fs::write(
        dir.path().join("tokens.toml"),
        "source = \"design.json\"\ncss_output = \"dist/yami.css\"\ntypes_output = \"dist/yami.d.ts\"\n",
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    let generated = generate(&config).unwrap();
    assert_eq!(generated.file_names(), ["yami.css", "yami.d.ts"]);
    assert!(dir.path().join("dist/yami.css").exists());
    assert!(dir.path().join("dist/yami.d.ts").exists());
    assert!(!dir.path().join("tokens.css").exists());
}

#[test]
fn malformed_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tokens.toml"), "source = [").unwrap();
    assert!(matches!(
        Config::load(dir.path()),
        Err(Error::ConfigMalformed { .. })
    ));
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tokens.json"), TOKENS).unwrap();
    let config = Config {
        css_output: "missing-dir/tokens.css".into(),
        ..Config::default()
    }
    .relative_to(dir.path());

    assert!(matches!(
        generate(&config),
        Err(Error::WriteFailed { .. })
    ));
}
