use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{Config, Document, Error};

/// Paths written by a successful [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub css: PathBuf,
    pub types: PathBuf,
}
impl Generated {
    /// Bare file names, in the order they were written.
    pub fn file_names(&self) -> Vec<String> {
        [&self.css, &self.types]
            .iter()
            .map(|path| match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => path.display().to_string(),
            })
            .collect()
    }
}

pub fn load_document(path: &Path) -> Result<Document, Error> {
    let bytes = fs::read(path).map_err(|source| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| Error::SourceMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the token source and overwrites both generated files.
///
/// Both outputs are rendered before anything is written, so a bad source leaves
/// the previous files untouched.
pub fn generate(config: &Config) -> Result<Generated, Error> {
    let document = load_document(&config.source)?;
    info!(
        source = %config.source.display(),
        version = %document.version(),
        tokens = document.leaves().count(),
        "loaded token document"
    );

    let css = document.to_css();
    let types = document.to_dts();
    write(&config.css_output, &css)?;
    write(&config.types_output, &types)?;

    Ok(Generated {
        css: config.css_output.clone(),
        types: config.types_output.clone(),
    })
}

fn write(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(())
}
