//! In-memory hierarchical file store for the desktop environment.
//!
//! The store maps absolute `/`-separated paths to file or directory nodes and
//! is mutated exclusively through [`reduce_vfs`], which returns a fresh
//! snapshot for every action. Consumers hold read-only references to the
//! current snapshot; the desktop shell owns the single live instance.

pub mod node;
pub mod path;
pub mod seed;
pub mod store;

pub use node::{FsEntry, FsEntryKind, FsNode};
pub use seed::seed_state;
pub use store::{check_action, reduce_vfs, VfsAction, VfsError, VfsState};
