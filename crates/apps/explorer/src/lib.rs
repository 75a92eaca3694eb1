//! Headless file-browser view-model over the virtual file store.
//!
//! The explorer renders the current directory's listing from a store snapshot
//! and emits [`VfsAction`]s for the shell to apply. Navigation history is
//! view-local state, not a store concern.

use serde::{Deserialize, Serialize};
use virtual_fs::path::join;
use virtual_fs::{FsEntry, VfsAction, VfsState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerView {
    pub cwd: String,
    history: Vec<String>,
    history_index: usize,
    /// Name of the entry currently being renamed inline, if any.
    pub renaming: Option<String>,
    pub rename_value: String,
}

impl ExplorerView {
    pub fn new(start: &str) -> Self {
        Self {
            cwd: start.to_string(),
            history: vec![start.to_string()],
            history_index: 0,
            renaming: None,
            rename_value: String::new(),
        }
    }

    /// Listing rows for the current directory.
    pub fn entries(&self, fs: &VfsState) -> Vec<FsEntry> {
        fs.entries(&self.cwd)
    }

    fn resolve(&self, target: &str) -> String {
        if target.starts_with('/') {
            target.to_string()
        } else {
            join(&self.cwd, target)
        }
    }

    /// Enters `target` (absolute path or child name) when it is an existing
    /// directory. Branching truncates any forward history.
    pub fn navigate(&mut self, fs: &VfsState, target: &str) {
        let resolved = self.resolve(target);
        if !fs.is_dir(&resolved) {
            return;
        }
        self.history.truncate(self.history_index + 1);
        self.history.push(resolved.clone());
        self.history_index = self.history.len() - 1;
        self.cwd = resolved;
        self.cancel_rename();
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            self.history_index -= 1;
            self.cwd = self.history[self.history_index].clone();
            self.cancel_rename();
        }
    }

    pub fn forward(&mut self) {
        if self.can_go_forward() {
            self.history_index += 1;
            self.cwd = self.history[self.history_index].clone();
            self.cancel_rename();
        }
    }

    pub fn begin_rename(&mut self, name: &str) {
        self.renaming = Some(name.to_string());
        self.rename_value = name.to_string();
    }

    pub fn set_rename_value(&mut self, value: &str) {
        self.rename_value = value.to_string();
    }

    pub fn cancel_rename(&mut self) {
        self.renaming = None;
        self.rename_value.clear();
    }

    /// Commits the inline rename. Returns the store action to apply, or
    /// `None` when the name is empty or unchanged.
    pub fn submit_rename(&mut self) -> Option<VfsAction> {
        let renaming = self.renaming.take()?;
        let new_name = std::mem::take(&mut self.rename_value);
        if new_name.is_empty() || new_name == renaming {
            return None;
        }
        Some(VfsAction::Rename {
            old_path: join(&self.cwd, &renaming),
            new_name,
        })
    }

    pub fn new_folder(&self, name: &str) -> VfsAction {
        VfsAction::MakeDir {
            path: join(&self.cwd, name),
        }
    }

    pub fn delete(&self, name: &str) -> VfsAction {
        VfsAction::Delete {
            path: join(&self.cwd, name),
        }
    }
}
