//! Command-line view-model over the virtual file store.
//!
//! A fixed dispatch table interprets `ls`, `cd`, `mkdir`, `clear`, `help`,
//! and `neofetch` against a store snapshot plus a view-local working
//! directory, appending to a scrollback log. Store mutations are returned as
//! actions for the shell to apply; the interpreter never mutates the store
//! itself.

use serde::{Deserialize, Serialize};
use virtual_fs::path::{join, parent_of};
use virtual_fs::{check_action, VfsAction, VfsError, VfsState};

const BANNER: &str = "PrismOS kernel v0.1 initialized.";
const PROMPT_USER: &str = "user@prismos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Input,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
    /// Prompt cwd echoed alongside input lines.
    pub prompt_cwd: Option<String>,
}

impl TerminalLine {
    fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
            prompt_cwd: None,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
            prompt_cwd: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalView {
    pub cwd: String,
    pub scrollback: Vec<TerminalLine>,
}

impl TerminalView {
    pub fn new(start: &str) -> Self {
        Self {
            cwd: start.to_string(),
            scrollback: vec![TerminalLine::output(BANNER)],
        }
    }

    /// Prompt string rendered ahead of the input field.
    pub fn prompt(&self) -> String {
        format!("{PROMPT_USER}:{}$", self.cwd)
    }

    fn resolve(&self, arg: Option<&str>) -> String {
        match arg {
            None => self.cwd.clone(),
            Some(p) if p.starts_with('/') => p.to_string(),
            Some("..") => parent_of(&self.cwd).unwrap_or("/").to_string(),
            Some(p) => join(&self.cwd, p),
        }
    }

    /// Interprets one input line against the current snapshot.
    ///
    /// The echoed input and any output/error lines are appended to the
    /// scrollback; the returned action, if any, is the store mutation the
    /// caller should apply.
    pub fn run_line(&mut self, fs: &VfsState, input: &str) -> Option<VfsAction> {
        let trimmed = input.trim();
        let mut args = trimmed.split_whitespace();
        let cmd = args.next().unwrap_or("");
        let arg = args.next();

        if cmd == "clear" {
            self.scrollback.clear();
            return None;
        }

        self.scrollback.push(TerminalLine {
            kind: LineKind::Input,
            text: input.to_string(),
            prompt_cwd: Some(self.cwd.clone()),
        });

        match cmd {
            "" => None,
            "ls" => {
                let target = self.resolve(arg);
                match fs.children_of(&target) {
                    Some(children) => {
                        self.scrollback
                            .push(TerminalLine::output(children.join("  ")));
                    }
                    None => self.scrollback.push(TerminalLine::error("Dir not found")),
                }
                None
            }
            "cd" => {
                let target = self.resolve(arg);
                if fs.is_dir(&target) {
                    self.cwd = target;
                } else {
                    self.scrollback.push(TerminalLine::error(format!(
                        "cd: {}: No such directory",
                        arg.unwrap_or("")
                    )));
                }
                None
            }
            "mkdir" => {
                let Some(name) = arg else {
                    self.scrollback
                        .push(TerminalLine::error("usage: mkdir <dir>"));
                    return None;
                };
                let action = VfsAction::MakeDir {
                    path: self.resolve(Some(name)),
                };
                match check_action(fs, &action) {
                    Ok(()) => Some(action),
                    Err(VfsError::Collision(_)) => {
                        self.scrollback.push(TerminalLine::error(format!(
                            "mkdir: {name}: File exists"
                        )));
                        None
                    }
                    Err(_) => {
                        self.scrollback.push(TerminalLine::error(format!(
                            "mkdir: {name}: No such directory"
                        )));
                        None
                    }
                }
            }
            "help" => {
                self.scrollback.push(TerminalLine::output(
                    "Try: ls, cd, mkdir, neofetch, clear",
                ));
                None
            }
            "neofetch" => {
                self.scrollback.push(TerminalLine::output(neofetch_card()));
                None
            }
            other => {
                self.scrollback
                    .push(TerminalLine::error(format!("Command not found: {other}")));
                None
            }
        }
    }
}

fn neofetch_card() -> String {
    [
        "   .---.       OS: PrismOS",
        "  /     \\      Kernel: 0.1.0",
        "  |  O  |      Shell: p-shell",
        "  \\     /      CPU: Virtual Silicon",
        "   '---'       Host: portfolio.dev",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use virtual_fs::{reduce_vfs, seed_state};

    use super::*;

    fn last_line(view: &TerminalView) -> &TerminalLine {
        view.scrollback.last().expect("scrollback entry")
    }

    #[test]
    fn ls_prints_the_working_directory_listing() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        assert_eq!(view.run_line(&fs, "ls"), None);
        assert_eq!(
            last_line(&view).text,
            "documents  projects  notes.txt  portfolio.js"
        );
        assert_eq!(last_line(&view).kind, LineKind::Output);
    }

    #[test]
    fn cd_walks_directories_and_reports_missing_ones() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        view.run_line(&fs, "cd documents");
        assert_eq!(view.cwd, "/home/user/documents");

        view.run_line(&fs, "cd ..");
        assert_eq!(view.cwd, "/home/user");

        view.run_line(&fs, "cd /etc");
        assert_eq!(view.cwd, "/etc");

        view.run_line(&fs, "cd nowhere");
        assert_eq!(view.cwd, "/etc");
        assert_eq!(last_line(&view).text, "cd: nowhere: No such directory");
        assert_eq!(last_line(&view).kind, LineKind::Error);
    }

    #[test]
    fn mkdir_emits_a_store_action_for_the_shell_to_apply() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        let action = view.run_line(&fs, "mkdir scratch").expect("mkdir action");
        assert_eq!(
            action,
            VfsAction::MakeDir {
                path: "/home/user/scratch".to_string(),
            }
        );
        let next = reduce_vfs(&fs, &action);
        assert!(next.is_dir("/home/user/scratch"));
    }

    #[test]
    fn mkdir_reports_missing_parents_and_collisions() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        assert_eq!(view.run_line(&fs, "mkdir /ghost/child"), None);
        assert_eq!(
            last_line(&view).text,
            "mkdir: /ghost/child: No such directory"
        );

        assert_eq!(view.run_line(&fs, "mkdir documents"), None);
        assert_eq!(last_line(&view).text, "mkdir: documents: File exists");
    }

    #[test]
    fn clear_empties_the_scrollback_without_echoing() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        view.run_line(&fs, "ls");
        view.run_line(&fs, "clear");
        assert!(view.scrollback.is_empty());
    }

    #[test]
    fn unknown_commands_append_an_error_line() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        view.run_line(&fs, "frobnicate now");
        assert_eq!(last_line(&view).text, "Command not found: frobnicate");
        assert_eq!(last_line(&view).kind, LineKind::Error);

        let before = view.scrollback.len();
        view.run_line(&fs, "   ");
        // Blank input echoes the prompt line only.
        assert_eq!(view.scrollback.len(), before + 1);
        assert_eq!(last_line(&view).kind, LineKind::Input);
    }

    #[test]
    fn help_and_neofetch_are_canned_outputs() {
        let fs = seed_state();
        let mut view = TerminalView::new("/home/user");

        view.run_line(&fs, "help");
        assert_eq!(last_line(&view).text, "Try: ls, cd, mkdir, neofetch, clear");

        view.run_line(&fs, "neofetch");
        assert!(last_line(&view).text.contains("OS: PrismOS"));
    }
}
