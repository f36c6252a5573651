use std::{io::Write, slice::Iter};

use log::warn;

use crate::types::{BookmarkNode, NodeKind};

/// Lazily yields the URLs below a node in document order.
///
/// Folders (and any other non-url kind) are expanded in place when
/// `descend` is set and skipped otherwise.
pub struct Dump<'a> {
    stack: Vec<Iter<'a, BookmarkNode>>,
    descend: bool,
}

pub fn dump(node: &BookmarkNode, descend: bool) -> Dump<'_> {
    Dump {
        stack: vec![node.children().iter()],
        descend,
    }
}

impl<'a> Iterator for Dump<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(children) = self.stack.last_mut() {
            let Some(child) = children.next() else {
                self.stack.pop();
                continue;
            };

            match (&child.kind, &child.url) {
                (NodeKind::Url, Some(url)) => return Some(url.as_str()),
                (NodeKind::Url, None) => warn!("Bookmark \"{}\" has no url, skipping", child.name),
                _ if self.descend => self.stack.push(child.children().iter()),
                _ => {}
            }
        }

        None
    }
}

/// Writes every url as its own line, as soon as it is produced.
pub fn write_urls<'a, W: Write>(urls: impl Iterator<Item = &'a str>, out: &mut W) -> std::io::Result<usize> {
    let mut written = 0;

    for url in urls {
        writeln!(out, "{}", url)?;
        written += 1;
    }

    Ok(written)
}
