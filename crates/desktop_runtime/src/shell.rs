//! Desktop shell composition: cosmetic session state plus gesture dispatch
//! into the window manager and the virtual file store.
//!
//! The shell owns the single live instance of every core state and replaces
//! store snapshots wholesale on each transition. Timers (clock, notification
//! expiry) live outside; callers feed `now_ms` in.

use serde::{Deserialize, Serialize};

use desktop_app_explorer::ExplorerView;
use desktop_app_terminal::TerminalView;
use virtual_fs::{reduce_vfs, seed_state, VfsAction, VfsState};

use crate::model::{AppId, DesktopState, InteractionState, Viewport};
use crate::reducer::{reduce_desktop, DesktopAction};

/// Auto-dismiss window for ephemeral notifications.
pub const NOTIFICATION_TTL_MS: u64 = 4000;
/// Home directory both view-models start in.
pub const HOME_DIR: &str = "/home/user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperPreset {
    pub name: &'static str,
    pub url: &'static str,
}

pub const WALLPAPERS: [WallpaperPreset; 5] = [
    WallpaperPreset {
        name: "Nebula",
        url: "/wallpapers/nebula.jpg",
    },
    WallpaperPreset {
        name: "Cyberpunk",
        url: "/wallpapers/cyberpunk.jpg",
    },
    WallpaperPreset {
        name: "Minimal",
        url: "/wallpapers/minimal.jpg",
    },
    WallpaperPreset {
        name: "Nature",
        url: "/wallpapers/nature.jpg",
    },
    WallpaperPreset {
        name: "Abstract",
        url: "/wallpapers/abstract.jpg",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub expires_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextMenuTarget {
    Desktop,
    Entry { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuState {
    pub x: i32,
    pub y: i32,
    pub target: ContextMenuTarget,
}

/// Cosmetic session state the core never inspects: lock flag, wallpaper,
/// brightness/volume sliders, notification toasts, and the context-menu
/// target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub locked: bool,
    pub wallpaper: String,
    pub brightness: u8,
    pub volume: u8,
    pub notifications: Vec<Notification>,
    pub context_menu: Option<ContextMenuState>,
    next_notification_id: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            locked: true,
            wallpaper: WALLPAPERS[0].url.to_string(),
            brightness: 100,
            volume: 75,
            notifications: Vec::new(),
            context_menu: None,
            next_notification_id: 1,
        }
    }
}

impl ShellState {
    /// Queues a toast that auto-dismisses [`NOTIFICATION_TTL_MS`] after
    /// `now_ms`. Returns the assigned id.
    pub fn push_notification(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        now_ms: u64,
    ) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            title: title.into(),
            message: message.into(),
            expires_at_ms: now_ms + NOTIFICATION_TTL_MS,
        });
        id
    }

    /// Drops every notification whose deadline has passed.
    pub fn expire_notifications(&mut self, now_ms: u64) {
        self.notifications.retain(|n| n.expires_at_ms > now_ms);
    }

    /// Advances to the next wallpaper preset, wrapping at the end of the
    /// table.
    pub fn cycle_wallpaper(&mut self) {
        let current = WALLPAPERS
            .iter()
            .position(|preset| preset.url == self.wallpaper)
            .unwrap_or(WALLPAPERS.len() - 1);
        self.wallpaper = WALLPAPERS[(current + 1) % WALLPAPERS.len()].url.to_string();
    }
}

/// The composed desktop session: window manager, file store, gesture state,
/// cosmetic shell state, and the two store-backed application view-models.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopShell {
    pub fs: VfsState,
    pub desktop: DesktopState,
    pub interaction: InteractionState,
    pub shell: ShellState,
    pub explorer: ExplorerView,
    pub terminal: TerminalView,
}

impl DesktopShell {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            fs: seed_state(),
            desktop: DesktopState::new(viewport),
            interaction: InteractionState::default(),
            shell: ShellState::default(),
            explorer: ExplorerView::new(HOME_DIR),
            terminal: TerminalView::new(HOME_DIR),
        }
    }

    /// Routes a window-manager action through the reducer.
    pub fn dispatch(&mut self, action: DesktopAction) {
        reduce_desktop(&mut self.desktop, &mut self.interaction, action);
    }

    fn apply_fs(&mut self, action: VfsAction) {
        self.fs = reduce_vfs(&self.fs, &action);
    }

    pub fn unlock(&mut self) {
        self.shell.locked = false;
    }

    pub fn lock(&mut self) {
        self.shell.locked = true;
    }

    /// Taskbar icon click: minimize when it is the focused visible window,
    /// otherwise focus (which also restores a minimized window).
    pub fn taskbar_click(&mut self, app_id: AppId) {
        let focused_visible = self
            .desktop
            .window(app_id)
            .map(|w| self.desktop.active == Some(app_id) && !w.minimized)
            .unwrap_or(false);
        if focused_visible {
            self.dispatch(DesktopAction::Close {
                app_id,
                minimize: true,
            });
        } else {
            self.dispatch(DesktopAction::Focus { app_id });
        }
    }

    pub fn open_context_menu(&mut self, x: i32, y: i32, target: ContextMenuTarget) {
        self.shell.context_menu = Some(ContextMenuState { x, y, target });
    }

    pub fn close_context_menu(&mut self) {
        self.shell.context_menu = None;
    }

    /// Desktop context-menu "New Folder".
    pub fn create_desktop_folder(&mut self) {
        self.apply_fs(VfsAction::MakeDir {
            path: format!("{HOME_DIR}/New Folder"),
        });
    }

    /// Context-menu delete on a listed entry.
    pub fn delete_entry(&mut self, path: &str) {
        self.apply_fs(VfsAction::Delete {
            path: path.to_string(),
        });
    }

    pub fn change_wallpaper(&mut self) {
        self.shell.cycle_wallpaper();
    }

    /// Desktop "refresh": closes every window and resets transient shell
    /// state. The file store, wallpaper, and lock flag survive.
    pub fn refresh(&mut self) {
        self.desktop.windows.clear();
        self.desktop.active = None;
        self.desktop.snap_preview = None;
        self.desktop.start_menu_open = false;
        self.interaction = InteractionState::default();
        self.shell.context_menu = None;
        self.shell.notifications.clear();
    }

    /// Advances timer-driven shell state to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        self.shell.expire_notifications(now_ms);
    }

    /// Submits one terminal input line and applies any resulting store
    /// action.
    pub fn run_terminal_line(&mut self, line: &str) {
        if let Some(action) = self.terminal.run_line(&self.fs, line) {
            self.apply_fs(action);
        }
    }

    pub fn explorer_navigate(&mut self, target: &str) {
        self.explorer.navigate(&self.fs, target);
    }

    pub fn explorer_back(&mut self) {
        self.explorer.back();
    }

    pub fn explorer_forward(&mut self) {
        self.explorer.forward();
    }

    pub fn explorer_new_folder(&mut self, name: &str) {
        let action = self.explorer.new_folder(name);
        self.apply_fs(action);
    }

    pub fn explorer_delete(&mut self, name: &str) {
        let action = self.explorer.delete(name);
        self.apply_fs(action);
    }

    pub fn explorer_submit_rename(&mut self) {
        if let Some(action) = self.explorer.submit_rename() {
            self.apply_fs(action);
        }
    }
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
