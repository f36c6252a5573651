use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Url,
    Folder,
    /// Separators, trash markers and anything newer exports may add.
    Other(String),
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "url" => NodeKind::Url,
            "folder" => NodeKind::Folder,
            _ => NodeKind::Other(value),
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

/// A bookmark or a folder of bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookmarkNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NodeKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    children: Vec<BookmarkNode>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookmarkNode {
    /// Children visible to traversal. Url nodes never expose any.
    pub fn children(&self) -> &[BookmarkNode] {
        match self.kind {
            NodeKind::Url => &[],
            _ => &self.children,
        }
    }
}

#[cfg(test)]
impl BookmarkNode {
    pub fn url(name: &str, url: &str) -> BookmarkNode {
        BookmarkNode {
            name: name.to_string(),
            kind: NodeKind::Url,
            url: Some(url.to_string()),
            children: vec![],
        }
    }

    pub fn folder(name: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode {
            name: name.to_string(),
            kind: NodeKind::Folder,
            url: None,
            children,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookmarkTree {
    pub roots: HashMap<String, BookmarkNode>,
}

impl BookmarkTree {
    pub fn root(&self, name: &str) -> Option<&BookmarkNode> {
        self.roots.get(name)
    }
}
