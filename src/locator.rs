use crate::types::BookmarkNode;

/// Walks down from `root` following folder names in `path`.
///
/// At each level the first child whose name matches exactly is taken. There is
/// no backtracking, so a later sibling with the same name is never tried.
pub fn locate<'a, S: AsRef<str>>(root: &'a BookmarkNode, path: &[S]) -> Option<&'a BookmarkNode> {
    let Some((name, rest)) = path.split_first() else {
        return Some(root);
    };

    root.children()
        .iter()
        .find(|child| child.name == name.as_ref())
        .and_then(|child| locate(child, rest))
}
