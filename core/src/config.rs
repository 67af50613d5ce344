use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::Error;

/// Optional override file, looked up next to the token source.
pub const CONFIG_FILE: &str = "tokens.toml";

/// Where the generator reads and writes. Relative paths are resolved against the
/// directory passed to [`Config::load`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: PathBuf,
    pub css_output: PathBuf,
    pub types_output: PathBuf,
    /// `tracing_subscriber` filter directive, e.g. `info` or `yami_design_tokens_core=debug`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("tokens.json"),
            css_output: PathBuf::from("tokens.css"),
            types_output: PathBuf::from("tokens.d.ts"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `dir/tokens.toml` if there is one, falling back to the defaults.
    pub fn load(dir: &Path) -> Result<Config, Error> {
        let path = dir.join(CONFIG_FILE);
        let config = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| Error::ConfigMalformed {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Config::default(),
            Err(source) => return Err(Error::ConfigUnreadable { path, source }),
        };
        Ok(config.relative_to(dir))
    }

    pub fn relative_to(self, dir: &Path) -> Config {
        Config {
            source: dir.join(self.source),
            css_output: dir.join(self.css_output),
            types_output: dir.join(self.types_output),
            log_level: self.log_level,
        }
    }
}

#[test]
fn partial_config_keeps_defaults() {
    let config: Config = toml::from_str("css_output = \"dist/yami.css\"").unwrap();
    assert_eq!(config.css_output, PathBuf::from("dist/yami.css"));
    assert_eq!(config.source, PathBuf::from("tokens.json"));
    assert_eq!(config.types_output, PathBuf::from("tokens.d.ts"));
    assert_eq!(config.log_level, "info");
}

#[test]
fn rejects_unknown_keys() {
    assert!(toml::from_str::<Config>("sourcee = \"x.json\"").is_err());
}

#[test]
fn resolves_relative_paths_only() {
    let base = Path::new("/srv/design");
    let config = Config {
        source: PathBuf::from("/abs/tokens.json"),
        ..Config::default()
    }
    .relative_to(base);
    assert_eq!(config.source, PathBuf::from("/abs/tokens.json"));
    assert_eq!(config.css_output, base.join("tokens.css"));
}
