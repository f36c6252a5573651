use std::{fs, path::Path};

use anyhow::Result;
use log::debug;

use crate::{error::BookmarksError, types::BookmarkTree};

use super::Library;

/// Reads the `Bookmarks` JSON file written by Chrome and Chromium.
pub struct ChromiumLibrary;

impl Library for ChromiumLibrary {
    fn get_bookmarks(&self, path: &Path) -> Result<BookmarkTree> {
        let data = fs::read_to_string(path).map_err(|source| BookmarksError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let tree: BookmarkTree =
            serde_json::from_str(&data).map_err(|source| BookmarksError::Schema {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            "Loaded {} with roots: {:?}",
            path.display(),
            tree.roots.keys().collect::<Vec<_>>()
        );

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::{error::BookmarksError, library::Library};

    use super::ChromiumLibrary;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn it_should_load_bookmark_bar() {
        let file = write_file(
            r#"{"roots":{"bookmark_bar":{"type":"folder","name":"bar","children":[
                {"type":"url","name":"A","url":"http://a"}
            ]}}}"#,
        );

        let tree = ChromiumLibrary.get_bookmarks(file.path()).unwrap();
        let bar = tree.root("bookmark_bar").unwrap();

        assert_eq!(bar.name, "bar");
        assert_eq!(bar.children().len(), 1);
    }

    #[test]
    fn it_should_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = ChromiumLibrary
            .get_bookmarks(&dir.path().join("Bookmarks"))
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<BookmarksError>(),
            Some(BookmarksError::Read { .. })
        ));
    }

    #[test]
    fn it_should_report_invalid_json() {
        let file = write_file("{\"roots\": [");
        let error = ChromiumLibrary.get_bookmarks(file.path()).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<BookmarksError>(),
            Some(BookmarksError::Schema { .. })
        ));
    }

    #[test]
    fn it_should_report_document_without_roots() {
        let file = write_file(r#"{"version":1}"#);
        let error = ChromiumLibrary.get_bookmarks(file.path()).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<BookmarksError>(),
            Some(BookmarksError::Schema { .. })
        ));
    }
}
