use clap::Parser;

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Dumps bookmarked urls, one per line. Without folders all bookmarks \
                  are dumped, otherwise dumping starts at the given folder path, \
                  e.g. `dump-bookmarks recipes italian`."
)]
pub struct CliProgram {
    #[arg(
        value_name = "FOLDER",
        help = "Folder names leading to the subtree to dump"
    )]
    pub folders: Vec<String>,

    #[arg(
        long,
        value_name = "BOOL",
        help = "Descend to subfolders",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub descend: bool,

    #[arg(
        long,
        value_name = "FILE_PATH",
        help = "Chrome bookmarks file to process (default: ~/.config/google-chrome/Default/Bookmarks)"
    )]
    pub filename: Option<String>,

    #[arg(
        long,
        value_name = "ROOT",
        help = "Bookmarks root to start from",
        default_value = "bookmark_bar"
    )]
    pub root: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::CliProgram;

    #[test]
    fn it_should_use_defaults() {
        let program = CliProgram::try_parse_from(["dump-bookmarks"]).unwrap();

        assert!(program.descend);
        assert!(program.folders.is_empty());
        assert_eq!(program.filename, None);
        assert_eq!(program.root, "bookmark_bar");
    }

    #[test]
    fn it_should_collect_folder_path_in_order() {
        let program = CliProgram::try_parse_from(["dump-bookmarks", "recipes", "italian"]).unwrap();

        assert_eq!(program.folders, vec!["recipes", "italian"]);
    }

    #[test]
    fn it_should_parse_descend_flag() {
        let off = CliProgram::try_parse_from(["dump-bookmarks", "--descend=false", "recipes"]).unwrap();
        let on = CliProgram::try_parse_from(["dump-bookmarks", "--descend", "recipes"]).unwrap();

        assert!(!off.descend);
        assert_eq!(off.folders, vec!["recipes"]);
        assert!(on.descend);
        assert_eq!(on.folders, vec!["recipes"]);
    }

    #[test]
    fn it_should_parse_filename() {
        let program =
            CliProgram::try_parse_from(["dump-bookmarks", "--filename", "/tmp/Bookmarks"]).unwrap();

        assert_eq!(program.filename.as_deref(), Some("/tmp/Bookmarks"));
    }

    #[test]
    fn it_should_reject_invalid_descend_value() {
        assert!(CliProgram::try_parse_from(["dump-bookmarks", "--descend=maybe"]).is_err());
    }
}
