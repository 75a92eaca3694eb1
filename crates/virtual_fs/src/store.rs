//! Path-addressed store state and its pure transition function.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::{FsEntry, FsNode};
use crate::path::{base_name, join, parent_of};

/// Snapshot of the whole virtual filesystem.
///
/// The root `/` is always present and is always a directory. All mutation goes
/// through [`reduce_vfs`]; the caller replaces its held snapshot with the
/// returned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsState {
    nodes: BTreeMap<String, FsNode>,
}

impl Default for VfsState {
    fn default() -> Self {
        Self::empty()
    }
}

impl VfsState {
    /// Returns a store containing only the root directory.
    pub fn empty() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), FsNode::empty_dir());
        Self { nodes }
    }

    /// Builds a store from raw entries. The root directory is inserted when
    /// missing.
    pub fn from_nodes(entries: impl IntoIterator<Item = (String, FsNode)>) -> Self {
        let mut state = Self::empty();
        state.nodes.extend(entries);
        state
    }

    pub fn node(&self, path: &str) -> Option<&FsNode> {
        self.nodes.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.nodes.get(path), Some(FsNode::Directory { .. }))
    }

    pub fn read_file(&self, path: &str) -> Option<&str> {
        match self.nodes.get(path) {
            Some(FsNode::File { content }) => Some(content),
            _ => None,
        }
    }

    /// Child names of a directory, in insertion order.
    pub fn children_of(&self, path: &str) -> Option<&[String]> {
        match self.nodes.get(path) {
            Some(FsNode::Directory { children }) => Some(children),
            _ => None,
        }
    }

    /// Listing rows for a directory. Child names without a backing node are
    /// skipped rather than surfaced as phantom rows.
    pub fn entries(&self, path: &str) -> Vec<FsEntry> {
        let Some(children) = self.children_of(path) else {
            return Vec::new();
        };
        children
            .iter()
            .filter_map(|name| {
                let child_path = join(path, name);
                let node = self.nodes.get(&child_path)?;
                Some(FsEntry {
                    name: name.clone(),
                    path: child_path,
                    kind: node.kind(),
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Paths present in the mapping but not reachable from the root via
    /// parent/children traversal.
    ///
    /// Deleting a directory strips only the subtree root, so its former
    /// descendants show up here. Used as a diagnostic, never consulted by the
    /// reducer.
    pub fn unreachable_paths(&self) -> Vec<String> {
        let mut reachable = vec!["/".to_string()];
        let mut queue = vec!["/".to_string()];
        while let Some(path) = queue.pop() {
            if let Some(children) = self.children_of(&path) {
                for name in children {
                    let child = join(&path, name);
                    if self.nodes.contains_key(&child) {
                        reachable.push(child.clone());
                        queue.push(child);
                    }
                }
            }
        }
        self.nodes
            .keys()
            .filter(|path| !reachable.contains(path))
            .cloned()
            .collect()
    }
}

/// Store operations. Each variant maps to one public operation of the file
/// store; all are total over any snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VfsAction {
    /// Create or overwrite a file node. The parent is not validated; writing
    /// under a missing parent produces a node reachable by key but absent
    /// from every listing.
    WriteFile { path: String, content: String },
    /// Insert an empty directory and register it with its parent. No-op when
    /// the parent is missing, the parent is a file, or the path already
    /// exists.
    MakeDir { path: String },
    /// Remove the mapping entry and strip the name from the parent listing.
    /// Non-recursive: descendants of a deleted directory remain in the
    /// mapping as orphans.
    Delete { path: String },
    /// Move the entry to a sibling key, replacing the old name in the parent
    /// listing at the same position. No-op when the target name is taken.
    Rename { old_path: String, new_name: String },
}

/// Conditions the reducer resolves by returning the unchanged snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("no such path: {0}")]
    NotFound(String),
    #[error("target already exists: {0}")]
    Collision(String),
    #[error("parent directory missing: {0}")]
    UnreachableParent(String),
    #[error("the root directory cannot be modified")]
    RootImmutable,
}

/// Applies a store operation and returns the next snapshot.
///
/// Total and silent: invalid requests return a snapshot equal to the input.
/// [`check_action`] reports the condition a caller is about to trip, for
/// surfaces that want advisory text.
pub fn reduce_vfs(state: &VfsState, action: &VfsAction) -> VfsState {
    let mut next = state.clone();
    match action {
        VfsAction::WriteFile { path, content } => {
            if path == "/" {
                return next;
            }
            // Node type is immutable for a path's lifetime; a directory can
            // only become a file via delete + recreate.
            if next.is_dir(path) {
                return next;
            }
            next.nodes.insert(path.clone(), FsNode::file(content.clone()));
        }
        VfsAction::MakeDir { path } => {
            if path == "/" || next.nodes.contains_key(path) {
                return next;
            }
            let Some(parent) = parent_of(path) else {
                return next;
            };
            let name = base_name(path).to_string();
            let Some(FsNode::Directory { children }) = next.nodes.get_mut(parent) else {
                return next;
            };
            if !children.contains(&name) {
                children.push(name);
            }
            next.nodes.insert(path.clone(), FsNode::empty_dir());
        }
        VfsAction::Delete { path } => {
            if path == "/" || next.nodes.remove(path).is_none() {
                return next;
            }
            let name = base_name(path);
            if let Some(parent) = parent_of(path) {
                if let Some(FsNode::Directory { children }) = next.nodes.get_mut(parent) {
                    children.retain(|child| child != name);
                }
            }
        }
        VfsAction::Rename { old_path, new_name } => {
            if old_path == "/" || new_name.is_empty() || new_name.contains('/') {
                return next;
            }
            let Some(parent) = parent_of(old_path) else {
                return next;
            };
            let new_path = join(parent, new_name);
            if next.nodes.contains_key(&new_path) {
                return next;
            }
            let Some(node) = next.nodes.remove(old_path) else {
                return next;
            };
            next.nodes.insert(new_path, node);
            let old_name = base_name(old_path);
            if let Some(FsNode::Directory { children }) = next.nodes.get_mut(parent) {
                if let Some(slot) = children.iter_mut().find(|child| *child == old_name) {
                    *slot = new_name.clone();
                }
            }
        }
    }
    next
}

/// Classifies the condition `action` would hit against the current snapshot.
///
/// Advisory only: the terminal uses this for its error lines. The reducer
/// itself never consults it and always absorbs the condition silently.
pub fn check_action(state: &VfsState, action: &VfsAction) -> Result<(), VfsError> {
    match action {
        VfsAction::WriteFile { path, .. } => {
            if path == "/" {
                return Err(VfsError::RootImmutable);
            }
            if state.is_dir(path) {
                return Err(VfsError::Collision(path.clone()));
            }
            match parent_of(path) {
                Some(parent) if state.is_dir(parent) => Ok(()),
                _ => Err(VfsError::UnreachableParent(path.clone())),
            }
        }
        VfsAction::MakeDir { path } => {
            if path == "/" {
                return Err(VfsError::RootImmutable);
            }
            if state.contains(path) {
                return Err(VfsError::Collision(path.clone()));
            }
            match parent_of(path) {
                Some(parent) if state.is_dir(parent) => Ok(()),
                _ => Err(VfsError::UnreachableParent(path.clone())),
            }
        }
        VfsAction::Delete { path } => {
            if path == "/" {
                return Err(VfsError::RootImmutable);
            }
            if state.contains(path) {
                Ok(())
            } else {
                Err(VfsError::NotFound(path.clone()))
            }
        }
        VfsAction::Rename { old_path, new_name } => {
            if old_path == "/" {
                return Err(VfsError::RootImmutable);
            }
            if !state.contains(old_path) {
                return Err(VfsError::NotFound(old_path.clone()));
            }
            let Some(parent) = parent_of(old_path) else {
                return Err(VfsError::RootImmutable);
            };
            let new_path = join(parent, new_name);
            if new_path != *old_path && state.contains(&new_path) {
                return Err(VfsError::Collision(new_path));
            }
            Ok(())
        }
    }
}
