//! Fixed seed tree loaded at session start.

use crate::node::FsNode;
use crate::store::VfsState;

/// Builds the initial session filesystem: root, `/bin`, `/etc`, and a
/// populated `/home/user`.
pub fn seed_state() -> VfsState {
    let dir = |children: &[&str]| FsNode::Directory {
        children: children.iter().map(|name| name.to_string()).collect(),
    };

    VfsState::from_nodes([
        ("/".to_string(), dir(&["home", "bin", "etc"])),
        ("/bin".to_string(), dir(&["sh", "ls", "cat", "neofetch"])),
        ("/bin/sh".to_string(), FsNode::file("#!prism")),
        ("/bin/ls".to_string(), FsNode::file("#!prism")),
        ("/bin/cat".to_string(), FsNode::file("#!prism")),
        ("/bin/neofetch".to_string(), FsNode::file("#!prism")),
        ("/etc".to_string(), dir(&["os-release"])),
        (
            "/etc/os-release".to_string(),
            FsNode::file("NAME=PrismOS\nVERSION=0.1\nID=prism"),
        ),
        ("/home".to_string(), dir(&["user"])),
        (
            "/home/user".to_string(),
            dir(&["documents", "projects", "notes.txt", "portfolio.js"]),
        ),
        (
            "/home/user/documents".to_string(),
            dir(&["resume.pdf", "budget.xlsx"]),
        ),
        (
            "/home/user/documents/resume.pdf".to_string(),
            FsNode::file("[binary placeholder]"),
        ),
        (
            "/home/user/documents/budget.xlsx".to_string(),
            FsNode::file("[binary placeholder]"),
        ),
        (
            "/home/user/projects".to_string(),
            dir(&["clinic-cms", "event-planner"]),
        ),
        ("/home/user/projects/clinic-cms".to_string(), dir(&[])),
        ("/home/user/projects/event-planner".to_string(), dir(&[])),
        (
            "/home/user/notes.txt".to_string(),
            FsNode::file(
                "Welcome to PrismOS! Right click on the desktop to create new folders.\n\nDrag windows to the edges to snap them!",
            ),
        ),
        (
            "/home/user/portfolio.js".to_string(),
            FsNode::file(
                "const portfolio = {\n  owner: 'DevUser',\n  skills: ['Rust', 'React', 'Postgres'],\n  status: 'Hired'\n};",
            ),
        ),
    ])
}
