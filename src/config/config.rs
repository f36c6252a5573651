use home_dir::HomeDirExt;
use std::path::PathBuf;

use anyhow::Result;

use crate::{api::cli::CliProgram, error::BookmarksError};

const DEFAULT_BOOKMARKS_FILE: &str = "~/.config/google-chrome/Default/Bookmarks";

/// Everything a single dump needs, resolved up front.
#[derive(Debug)]
pub struct Config {
    pub bookmarks_file: PathBuf,
    pub root: String,
    pub folders: Vec<String>,
    pub descend: bool,
}

impl Config {
    pub fn new_from_cli(program: CliProgram) -> Result<Config> {
        let bookmarks_file = match program.filename {
            Some(filename) => resolve_path(&filename)?,
            None => resolve_path(DEFAULT_BOOKMARKS_FILE)?,
        };

        Ok(Config {
            bookmarks_file,
            root: program.root,
            folders: program.folders,
            descend: program.descend,
        })
    }
}

fn resolve_path(path: &str) -> Result<PathBuf> {
    expand_with(path, || PathBuf::from("~").expand_home().ok())
}

/// Expands `~` and a leading `~/` with the home directory from `home`.
/// `~user` forms are left as they are, and other paths never consult `home`.
fn expand_with<F>(path: &str, home: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(path)),
    };

    let home = home().ok_or(BookmarksError::HomeDirectory)?;

    Ok(home.join(rest))
}
