use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crate::{
    api::cli::Cli,
    config::config::Config,
    dumper::{dump, write_urls},
    error::BookmarksError,
    library::{chromium_library::ChromiumLibrary, Library},
    locator::locate,
};

mod api;
mod config;
mod dumper;
mod error;
mod library;
mod locator;
mod types;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli {};
    let config = Config::new_from_cli(cli.run())?;
    debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    ignore_broken_pipe(command_dump(&config, &ChromiumLibrary, &mut out))
}

fn command_dump<W: Write>(config: &Config, library: &dyn Library, out: &mut W) -> Result<()> {
    let tree = library.get_bookmarks(&config.bookmarks_file)?;

    let root = tree
        .root(&config.root)
        .ok_or_else(|| BookmarksError::MissingRoot {
            root: config.root.clone(),
        })?;

    let start = locate(root, config.folders.as_slice()).ok_or_else(|| BookmarksError::NotFound {
        path: config.folders.clone(),
    })?;
    debug!("Dumping from \"{}\" (descend: {})", start.name, config.descend);

    let written = write_urls(dump(start, config.descend), out)?;
    debug!("Dumped {} urls", written);

    Ok(())
}

/// A closed stdout (e.g. piping into `head`) is a normal way for a dump to end.
fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(err) if is_broken_pipe(&err) => Ok(()),
        result => result,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map(|err| err.kind() == io::ErrorKind::BrokenPipe)
        .unwrap_or(false)
}
