use serde::{Deserialize, Serialize};

/// A single node in the virtual file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FsNode {
    /// Directory holding an ordered list of child names.
    Directory { children: Vec<String> },
    /// Text file.
    File { content: String },
}

impl FsNode {
    pub fn empty_dir() -> Self {
        Self::Directory {
            children: Vec::new(),
        }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    pub fn kind(&self) -> FsEntryKind {
        match self {
            Self::Directory { .. } => FsEntryKind::Directory,
            Self::File { .. } => FsEntryKind::File,
        }
    }
}

/// Entry kind reported in directory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FsEntryKind {
    File,
    Directory,
}

/// Directory listing row handed to view-model consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsEntry {
    /// Base name of the entry.
    pub name: String,
    /// Full normalized path.
    pub path: String,
    /// File or directory kind.
    pub kind: FsEntryKind,
}
