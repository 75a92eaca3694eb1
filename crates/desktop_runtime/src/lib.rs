//! Desktop session runtime: window management, the application registry,
//! and the shell that composes the window manager with the shared virtual
//! file store.
//!
//! Everything here is pure in-memory state transition. Rendering, input
//! capture, and timers are the embedder's problem; this crate only answers
//! "given this gesture, what is the next desktop state".

pub mod apps;
pub mod model;
pub mod reducer;
pub mod shell;
pub mod window_manager;

pub use apps::{app_descriptor, app_registry, desktop_icon_apps, launcher_apps, AppDescriptor};
pub use model::{
    AppId, DesktopState, DragSession, GeometryPatch, InteractionState, PointerPosition,
    ResizeSession, SnapIntent, SnapSide, Viewport, WindowRecord, WindowRect,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, TASKBAR_HEIGHT,
};
pub use reducer::{reduce_desktop, DesktopAction};
pub use shell::{
    ContextMenuState, ContextMenuTarget, DesktopShell, Notification, ShellState, WallpaperPreset,
    HOME_DIR, NOTIFICATION_TTL_MS, WALLPAPERS,
};
pub use window_manager::{
    cascade_rect, classify_pointer, half_viewport_rect, CASCADE_STEP, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, SNAP_COMMIT_THRESHOLD, SNAP_PREVIEW_THRESHOLD,
};
