use std::path::Path;

use anyhow::Result;

use crate::types::BookmarkTree;

pub mod chromium_library;

pub trait Library {
    fn get_bookmarks(&self, path: &Path) -> Result<BookmarkTree>;
}
