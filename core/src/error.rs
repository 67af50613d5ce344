use std::{io, path::PathBuf};

/// Every failure is fatal: nothing is retried and no partial output is cleaned up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read token source {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Token source {} is not a valid token document", .path.display())]
    SourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read config file {}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}", .path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
