use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookmarksError {
    #[error("Unable to determine user's home directory")]
    HomeDirectory,

    #[error("Error reading bookmarks file \"{}\"", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing bookmarks file \"{}\", has the schema changed?", path.display())]
    Schema {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Bookmarks file has no \"{root}\" root")]
    MissingRoot { root: String },

    #[error("Requested bookmarks not found: {}", path.join(" / "))]
    NotFound { path: Vec<String> },
}
